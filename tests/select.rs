//! Quickselect has its own call shape, so its tests are written out
//! instead of instantiated from the shared battery.

use sort_classic::select::{select_kth, RankError};
use sort_test_tools::patterns;

#[test]
fn first_and_last_rank() {
    let items = [5, 3, 8, 1, 9];

    assert_eq!(select_kth(&items, 1), Ok(1));
    assert_eq!(select_kth(&items, 5), Ok(9));
}

#[test]
fn every_rank_matches_a_full_sort() {
    let items = [5, 3, 8, 1, 9];
    let mut reference = items.to_vec();
    reference.sort();

    for k in 1..=items.len() {
        assert_eq!(select_kth(&items, k), Ok(reference[k - 1]));
    }
}

#[test]
fn rejects_out_of_range_ranks() {
    assert_eq!(select_kth::<i32>(&[], 1), Err(RankError { k: 1, len: 0 }));
    assert_eq!(select_kth(&[1, 2, 3], 0), Err(RankError { k: 0, len: 3 }));
    assert_eq!(select_kth(&[1, 2, 3], 4), Err(RankError { k: 4, len: 3 }));
}

#[test]
fn error_message_names_the_range() {
    let err = select_kth(&[1, 2, 3], 7).unwrap_err();

    assert_eq!(err.to_string(), "rank 7 is outside the valid range 1..=3");
}

#[test]
fn input_is_left_untouched() {
    let items = vec![4, 2, 7, 2];
    let before = items.clone();

    select_kth(&items, 3).unwrap();

    assert_eq!(items, before);
}

#[test]
fn handles_duplicates_and_presorted_input() {
    assert_eq!(select_kth(&[0; 10], 10), Ok(0));

    // First-element pivots make presorted input the adversarial case.
    let ascending = patterns::ascending(200);
    assert_eq!(select_kth(&ascending, 1), Ok(0));
    assert_eq!(select_kth(&ascending, 200), Ok(199));

    let descending = patterns::descending(200);
    assert_eq!(select_kth(&descending, 100), Ok(99));
}

#[test]
fn random_inputs_cross_validate_against_reference_sort() {
    for len in [1, 2, 3, 10, 50, 500] {
        let items = patterns::random_uniform(len, 0..32);
        let mut reference = items.clone();
        reference.sort();

        for k in [1, len / 2 + 1, len] {
            assert_eq!(select_kth(&items, k), Ok(reference[k - 1]));
        }
    }
}

#[test]
fn works_for_non_copy_elements() {
    let items = vec!["pear".to_string(), "apple".to_string(), "quince".to_string()];

    assert_eq!(select_kth(&items, 2), Ok("pear".to_string()));
}
