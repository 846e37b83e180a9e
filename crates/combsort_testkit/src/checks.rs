//! Assertions about sort output.

use combsort_core::SortOrder;
use std::collections::HashMap;
use std::hash::Hash;

/// Returns true if `output` holds exactly the elements of `input`.
pub fn is_permutation<T: Eq + Hash>(input: &[T], output: &[T]) -> bool {
    if input.len() != output.len() {
        return false;
    }

    let mut counts: HashMap<&T, isize> = HashMap::new();
    for value in input {
        *counts.entry(value).or_default() += 1;
    }
    for value in output {
        *counts.entry(value).or_default() -= 1;
    }
    counts.values().all(|&count| count == 0)
}

/// Returns true if `values` is ordered for `ascending`.
pub fn is_ordered<T: Ord>(values: &[T], ascending: bool) -> bool {
    SortOrder::from_ascending(ascending).is_sorted(values)
}

/// Returns the reference result computed with the standard library sort.
pub fn reference_sort<T: Ord + Clone>(values: &[T], ascending: bool) -> Vec<T> {
    let mut sorted = values.to_vec();
    if ascending {
        sorted.sort_unstable();
    } else {
        sorted.sort_unstable_by(|a, b| b.cmp(a));
    }
    sorted
}
