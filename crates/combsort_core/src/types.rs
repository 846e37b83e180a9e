//! Request and result types for the engine.

use crate::order::SortOrder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A sort job: the values, a direction and an optional initial gap.
///
/// `gap` is only honoured when it lies in `1..=values.len()`; any other value
/// is ignored and the automatic gap is used instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortRequest<T = i32> {
    /// Values to sort.
    pub values: Vec<T>,
    /// Sort direction.
    pub order: SortOrder,
    /// Requested initial gap.
    pub gap: Option<usize>,
}

impl<T> SortRequest<T> {
    /// Creates an ascending request with an automatic gap.
    pub fn new(values: Vec<T>) -> Self {
        Self {
            values,
            order: SortOrder::Ascending,
            gap: None,
        }
    }

    /// Sets the direction.
    #[must_use]
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Sets the direction from an `ascending` flag.
    #[must_use]
    pub fn ascending(self, ascending: bool) -> Self {
        self.with_order(SortOrder::from_ascending(ascending))
    }

    /// Requests a specific initial gap.
    #[must_use]
    pub fn with_gap(mut self, gap: usize) -> Self {
        self.gap = Some(gap);
        self
    }

    /// Returns true if the requested gap will actually be used.
    pub fn has_usable_gap(&self) -> bool {
        self.gap
            .is_some_and(|gap| (1..=self.values.len()).contains(&gap))
    }
}

/// Outcome of one sort with metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortResult<T = i32> {
    /// The sorted copy of the input.
    pub sorted_values: Vec<T>,
    /// Gap of the first comparison pass.
    pub initial_gap: usize,
    /// Wall-clock time spent in the comb loop.
    pub execution_time_micros: u64,
    /// When the comb loop finished.
    pub completion_timestamp: DateTime<Utc>,
}

impl<T> SortResult<T> {
    /// Execution time in fractional milliseconds.
    pub fn execution_time_ms(&self) -> f64 {
        self.execution_time_micros as f64 / 1000.0
    }

    /// Number of sorted values.
    pub fn len(&self) -> usize {
        self.sorted_values.len()
    }

    /// Returns true if nothing was sorted.
    pub fn is_empty(&self) -> bool {
        self.sorted_values.is_empty()
    }
}
