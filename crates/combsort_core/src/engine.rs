//! The comb sort loop and its copying wrappers.

use crate::gap::{initial_gap, next_gap};
use crate::order::SortOrder;
use crate::types::{SortRequest, SortResult};
use chrono::Utc;
use std::time::Instant;

/// Sorts `buffer` in place, starting with a pass at `initial_gap`.
///
/// After every pass the gap shrinks by the factor 1.3. The loop ends only
/// after a pass at gap 1 performs no swap. A gap of 0 is treated as 1.
///
/// Each pass is sequential: a later comparison in the same pass may read an
/// element that an earlier comparison just moved.
pub fn sort_in_place<T: Ord>(buffer: &mut [T], order: SortOrder, initial_gap: usize) {
    let len = buffer.len();
    if len < 2 {
        return;
    }

    let mut gap = initial_gap.max(1);
    loop {
        let mut swapped = false;
        for i in 0..len.saturating_sub(gap) {
            if order.out_of_order(&buffer[i], &buffer[i + gap]) {
                buffer.swap(i, i + gap);
                swapped = true;
            }
        }

        if gap == 1 && !swapped {
            break;
        }
        gap = next_gap(gap);
    }
}

/// Returns a sorted copy of `values`.
///
/// `order` accepts a [`SortOrder`] or the wire-level `ascending` flag.
pub fn sort<T: Ord + Clone>(values: &[T], order: impl Into<SortOrder>) -> Vec<T> {
    let mut buffer = values.to_vec();
    if buffer.len() > 1 {
        let gap = next_gap(buffer.len());
        sort_in_place(&mut buffer, order.into(), gap);
    }
    buffer
}

/// Returns a sorted copy of `values` together with the gap and timing.
///
/// `custom_gap` replaces the automatic first-pass gap when it lies in
/// `1..=values.len()` and is ignored otherwise. Inputs of length 0 or 1 are
/// returned without running the loop, with `initial_gap` equal to their
/// length and a zero execution time.
pub fn sort_with_metadata<T: Ord + Clone>(
    values: &[T],
    order: impl Into<SortOrder>,
    custom_gap: Option<usize>,
) -> SortResult<T> {
    let len = values.len();
    let mut buffer = values.to_vec();

    if len <= 1 {
        return SortResult {
            sorted_values: buffer,
            initial_gap: len,
            execution_time_micros: 0,
            completion_timestamp: Utc::now(),
        };
    }

    let gap = initial_gap(len, custom_gap);
    let started = Instant::now();
    sort_in_place(&mut buffer, order.into(), gap);
    let elapsed = started.elapsed();
    let completion_timestamp = Utc::now();

    SortResult {
        sorted_values: buffer,
        initial_gap: gap,
        execution_time_micros: u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
        completion_timestamp,
    }
}

/// Sorts ascending and reverses the result for a descending order.
///
/// This is the older direction handling, kept as a documented alternate.
/// For integers it produces the same output as [`sort`]; it differs only in
/// which of several equal elements ends up where, which is unobservable for
/// plain values. The server always uses the predicate-based [`sort`] path.
pub fn sort_then_reverse<T: Ord + Clone>(values: &[T], order: impl Into<SortOrder>) -> Vec<T> {
    let order: SortOrder = order.into();
    let mut sorted = sort(values, SortOrder::Ascending);
    if !order.is_ascending() {
        sorted.reverse();
    }
    sorted
}

/// Handle to the engine.
///
/// Holds no state; it exists so that collaborators can own "the sorter"
/// as a value and hand it around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombSorter;

impl CombSorter {
    /// Creates the engine handle.
    pub const fn new() -> Self {
        Self
    }

    /// See [`sort`].
    pub fn sort<T: Ord + Clone>(&self, values: &[T], order: impl Into<SortOrder>) -> Vec<T> {
        sort(values, order)
    }

    /// See [`sort_with_metadata`].
    pub fn sort_with_metadata<T: Ord + Clone>(
        &self,
        values: &[T],
        order: impl Into<SortOrder>,
        custom_gap: Option<usize>,
    ) -> SortResult<T> {
        sort_with_metadata(values, order, custom_gap)
    }

    /// Runs a [`SortRequest`].
    pub fn run<T: Ord + Clone>(&self, request: &SortRequest<T>) -> SortResult<T> {
        sort_with_metadata(&request.values, request.order, request.gap)
    }
}
