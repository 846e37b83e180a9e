//! Property tests for the comb sort engine.

use combsort_core::{initial_gap, sort, sort_then_reverse, sort_with_metadata, SortOrder};
use combsort_testkit::prelude::*;

#[test]
fn known_scenarios() {
    for scenario in scenarios() {
        let result = sort_with_metadata(&scenario.input, scenario.ascending, scenario.gap);
        assert_eq!(result.sorted_values, scenario.expected, "{}", scenario.name);
        assert_eq!(result.initial_gap, scenario.expected_gap, "{}", scenario.name);
        assert_eq!(
            sort(&scenario.input, scenario.ascending),
            scenario.expected,
            "{}",
            scenario.name
        );
    }
}

#[test]
fn single_element_reports_no_time() {
    let result = sort_with_metadata(&[1], SortOrder::Ascending, None);
    assert_eq!(result.execution_time_micros, 0);
    assert_eq!(result.initial_gap, 1);
}

proptest! {
    #![proptest_config(PropTestConfig::default().to_proptest_config())]

    #[test]
    fn ascending_is_ordered_permutation(values in any_shape_strategy(0..200)) {
        let sorted = sort(&values, true);
        prop_assert!(is_permutation(&values, &sorted));
        prop_assert!(is_ordered(&sorted, true));
    }

    #[test]
    fn descending_is_ordered_permutation(values in any_shape_strategy(0..200)) {
        let sorted = sort(&values, false);
        prop_assert!(is_permutation(&values, &sorted));
        prop_assert!(is_ordered(&sorted, false));
    }

    #[test]
    fn matches_reference_sort(values in values_strategy(0..300), ascending in any::<bool>()) {
        prop_assert_eq!(sort(&values, ascending), reference_sort(&values, ascending));
    }

    #[test]
    fn idempotent(values in any_shape_strategy(0..200)) {
        let once = sort(&values, true);
        prop_assert_eq!(sort(&once, true), once);
    }

    #[test]
    fn any_gap_sorts(
        values in any_shape_strategy(0..200),
        gap in gap_strategy(),
        ascending in any::<bool>(),
    ) {
        let result = sort_with_metadata(&values, ascending, gap);
        prop_assert_eq!(result.sorted_values, sort(&values, ascending));
        prop_assert_eq!(result.initial_gap, initial_gap(values.len(), gap));
    }

    #[test]
    fn invalid_gap_same_as_auto(values in values_strategy(0..100), ascending in any::<bool>()) {
        let auto = sort_with_metadata(&values, ascending, None);
        let too_big = sort_with_metadata(&values, ascending, Some(values.len() + 1));
        let zero = sort_with_metadata(&values, ascending, Some(0));
        prop_assert_eq!(&too_big.sorted_values, &auto.sorted_values);
        prop_assert_eq!(&zero.sorted_values, &auto.sorted_values);
        prop_assert_eq!(too_big.initial_gap, auto.initial_gap);
    }

    #[test]
    fn input_left_untouched(values in values_strategy(0..100)) {
        let before = values.clone();
        let _ = sort_with_metadata(&values, false, Some(1));
        prop_assert_eq!(values, before);
    }

    #[test]
    fn reversal_variant_agrees(values in few_unique_strategy(0..100), ascending in any::<bool>()) {
        prop_assert_eq!(sort_then_reverse(&values, ascending), sort(&values, ascending));
    }
}
