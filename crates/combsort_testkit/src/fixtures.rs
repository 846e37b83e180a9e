//! Known sort scenarios.
//!
//! Each scenario pins the exact output and first-pass gap for an input, so
//! the engine, the HTTP layer and the CLI can be checked against one table.

/// One input with its expected outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortScenario {
    /// Short label used in assertion messages.
    pub name: &'static str,
    /// Input values.
    pub input: Vec<i32>,
    /// Direction.
    pub ascending: bool,
    /// Requested gap.
    pub gap: Option<usize>,
    /// Expected sorted output.
    pub expected: Vec<i32>,
    /// Expected first-pass gap.
    pub expected_gap: usize,
}

impl SortScenario {
    fn new(
        name: &'static str,
        input: Vec<i32>,
        ascending: bool,
        gap: Option<usize>,
        expected: Vec<i32>,
        expected_gap: usize,
    ) -> Self {
        Self {
            name,
            input,
            ascending,
            gap,
            expected,
            expected_gap,
        }
    }
}

/// The documented sample input.
pub fn sample_values() -> Vec<i32> {
    vec![5, 2, 8, 1, 9, 3]
}

/// Scenarios every implementation layer must agree on.
pub fn scenarios() -> Vec<SortScenario> {
    vec![
        SortScenario::new(
            "sample ascending",
            sample_values(),
            true,
            None,
            vec![1, 2, 3, 5, 8, 9],
            4,
        ),
        SortScenario::new(
            "sample descending",
            sample_values(),
            false,
            None,
            vec![9, 8, 5, 3, 2, 1],
            4,
        ),
        SortScenario::new("duplicates ascending", vec![3, 3, 3], true, None, vec![3, 3, 3], 2),
        SortScenario::new("duplicates descending", vec![3, 3, 3], false, None, vec![3, 3, 3], 2),
        SortScenario::new("single", vec![1], true, None, vec![1], 1),
        SortScenario::new("empty", vec![], true, None, vec![], 0),
        SortScenario::new(
            "ten reversed",
            (0..10).rev().collect(),
            true,
            None,
            (0..10).collect(),
            7,
        ),
        SortScenario::new(
            "custom gap",
            sample_values(),
            true,
            Some(2),
            vec![1, 2, 3, 5, 8, 9],
            2,
        ),
        SortScenario::new(
            "gap too large is ignored",
            sample_values(),
            false,
            Some(7),
            vec![9, 8, 5, 3, 2, 1],
            4,
        ),
        SortScenario::new(
            "negatives",
            vec![-5, 0, -10, 7, -1],
            true,
            None,
            vec![-10, -5, -1, 0, 7],
            3,
        ),
    ]
}
