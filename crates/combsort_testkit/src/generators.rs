//! Property-based test generators using proptest.
//!
//! Besides uniformly random arrays, the strategies produce the shapes that
//! stress comb sort: already sorted, reversed, few distinct values, and
//! small "turtles" sitting at the end of the array.

use proptest::prelude::*;
use std::ops::Range;

/// Strategy for arbitrary `i32` arrays with a length in `len`.
pub fn values_strategy(len: Range<usize>) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), len)
}

/// Strategy for arrays drawn from a handful of distinct values.
pub fn few_unique_strategy(len: Range<usize>) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-3i32..=3, len)
}

/// Strategy for arrays that are already ascending.
pub fn sorted_strategy(len: Range<usize>) -> impl Strategy<Value = Vec<i32>> {
    values_strategy(len).prop_map(|mut values| {
        values.sort_unstable();
        values
    })
}

/// Strategy for arrays that are strictly descending-ish (sorted, then reversed).
pub fn reversed_strategy(len: Range<usize>) -> impl Strategy<Value = Vec<i32>> {
    sorted_strategy(len).prop_map(|mut values| {
        values.reverse();
        values
    })
}

/// Strategy for ascending arrays with small values moved to the tail.
///
/// Small elements near the end ("turtles") are what bubble sort handles
/// worst and what the shrinking gap exists to move quickly.
pub fn turtles_strategy(len: Range<usize>) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(0i32..10_000, len).prop_map(|mut values| {
        values.sort_unstable();
        let tail = values.len() / 4;
        values.rotate_left(tail);
        values
    })
}

/// Strategy mixing all array shapes.
pub fn any_shape_strategy(len: Range<usize>) -> impl Strategy<Value = Vec<i32>> {
    prop_oneof![
        4 => values_strategy(len.clone()),
        2 => few_unique_strategy(len.clone()),
        1 => sorted_strategy(len.clone()),
        1 => reversed_strategy(len.clone()),
        1 => turtles_strategy(len),
    ]
}

/// Strategy for requested gaps, including out-of-range ones.
pub fn gap_strategy() -> impl Strategy<Value = Option<usize>> {
    prop_oneof![
        1 => Just(None),
        1 => Just(Some(0)),
        3 => (1usize..128).prop_map(Some),
        1 => Just(Some(usize::MAX)),
    ]
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Creates a configuration for thorough tests.
    #[must_use]
    pub fn thorough() -> Self {
        Self {
            cases: 1024,
            max_shrink_iters: 10000,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #![proptest_config(PropTestConfig::quick().to_proptest_config())]

        #[test]
        fn values_respect_length(values in values_strategy(3..9)) {
            prop_assert!((3..9).contains(&values.len()));
        }

        #[test]
        fn sorted_is_sorted(values in sorted_strategy(0..64)) {
            prop_assert!(values.windows(2).all(|w| w[0] <= w[1]));
        }

        #[test]
        fn reversed_is_descending(values in reversed_strategy(0..64)) {
            prop_assert!(values.windows(2).all(|w| w[0] >= w[1]));
        }

        #[test]
        fn few_unique_is_small(values in few_unique_strategy(0..64)) {
            prop_assert!(values.iter().all(|v| (-3..=3).contains(v)));
        }
    }
}
