//! Tests for ordering and index-driven selection.

use proptest::prelude::*;
use seqkit::ordering::{digit_value, DIGIT_NAMES};
use seqkit::{
    get_by_indices, longest_increasing_run, max_items, nested, propagate_by_index,
    sort_digit_names, Nested, SeqKitError, Value,
};

// =============================================================================
// Max Items
// =============================================================================

#[test]
fn test_max_items() {
    assert!(max_items::<i32>(&[], 5).is_empty());
    assert_eq!(max_items(&[1, 2], 1), vec![2]);
    assert_eq!(max_items(&[2, 3, 1], 2), vec![3, 2]);
    assert_eq!(max_items(&[10, 2, 7, 5, 3, -5], 3), vec![10, 7, 5]);
    assert_eq!(max_items(&[10, 10, 10, 10], 3), vec![10, 10, 10]);
}

#[test]
fn test_max_items_does_not_touch_input() {
    let seq = vec![3.5, 1.0, 2.25];
    assert_eq!(max_items(&seq, 2), vec![3.5, 2.25]);
    assert_eq!(seq, vec![3.5, 1.0, 2.25]);
}

// =============================================================================
// Longest Increasing Run
// =============================================================================

#[test]
fn test_longest_increasing_run() {
    assert_eq!(
        longest_increasing_run(&[10, 22, 9, 33, 21, 50, 41, 60, 80]),
        3
    );
    assert_eq!(longest_increasing_run(&[3, 10, 2, 1, 20]), 2);
    assert_eq!(longest_increasing_run(&[50, 3, 10, 7, 40, 80]), 3);
}

#[test]
fn test_longest_increasing_run_is_contiguous() {
    // Classical LIS of this sequence is 5 (1, 2, 3, 4, 5); the run is 2.
    assert_eq!(longest_increasing_run(&[1, 2, 0, 3, 0, 4, 0, 5]), 2);
}

#[test]
fn test_longest_increasing_run_whole_sequence() {
    assert_eq!(longest_increasing_run(&[1.0, 1.5, 2.0, 9.0]), 4);
}

// =============================================================================
// Digit Names
// =============================================================================

#[test]
fn test_sort_digit_names() {
    assert!(sort_digit_names::<&str>(&[]).unwrap().is_empty());
    assert_eq!(sort_digit_names(&["nine", "one"]).unwrap(), vec!["one", "nine"]);
    assert_eq!(
        sort_digit_names(&["one", "two", "three"]).unwrap(),
        vec!["one", "two", "three"]
    );
    assert_eq!(
        sort_digit_names(&["nine", "eight", "nine", "eight"]).unwrap(),
        vec!["eight", "eight", "nine", "nine"]
    );
    assert_eq!(
        sort_digit_names(&["one", "one", "one", "zero"]).unwrap(),
        vec!["zero", "one", "one", "one"]
    );
}

#[test]
fn test_sort_digit_names_unknown_word() {
    assert!(matches!(
        sort_digit_names(&["one", "ONE"]),
        Err(SeqKitError::InvalidParameter(_))
    ));
}

#[test]
fn test_digit_names_table() {
    for (i, name) in DIGIT_NAMES.iter().enumerate() {
        assert_eq!(digit_value(name), Some(i));
    }
}

// =============================================================================
// Propagate By Index
// =============================================================================

#[test]
fn test_propagate_by_index() {
    assert!(propagate_by_index::<i32>(&[]).is_empty());
    assert_eq!(propagate_by_index(&[1]), vec![1]);
    assert_eq!(propagate_by_index(&['a', 'b']), vec!['a', 'b', 'b']);
    assert_eq!(
        propagate_by_index(&[1, 2, 3, 4, 5]),
        vec![1, 2, 2, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 5]
    );
}

#[test]
fn test_propagate_by_index_with_null() {
    let seq = vec![
        Value::from("a"),
        Value::from("b"),
        Value::from("c"),
        Value::Null,
    ];
    let out = propagate_by_index(&seq);
    assert_eq!(out.len(), 10);
    assert_eq!(&out[6..], &[Value::Null, Value::Null, Value::Null, Value::Null]);
}

// =============================================================================
// Index Paths
// =============================================================================

#[test]
fn test_get_by_indices() {
    let seq = nested!([[1, 2], [3, 4], [5, 6]]);
    let list = seq.as_list().unwrap();
    assert_eq!(get_by_indices(list, &[0, 0]).unwrap(), &Nested::Item(1));

    let words = Nested::flat(["one", "two", "three"]);
    assert_eq!(
        get_by_indices(words.as_list().unwrap(), &[2]).unwrap(),
        &Nested::Item("three")
    );

    let deep = nested!([[[1, 2, 3]]]);
    assert_eq!(
        get_by_indices(deep.as_list().unwrap(), &[0, 0, 1]).unwrap(),
        &Nested::Item(2)
    );
}

#[test]
fn test_get_by_indices_partial_path() {
    let seq = nested!([[1, 2], [3, 4]]);
    assert_eq!(
        get_by_indices(seq.as_list().unwrap(), &[1]).unwrap(),
        &nested!([3, 4])
    );
}

// =============================================================================
// Property-Based Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_max_items_sorted_prefix(seq in prop::collection::vec(-100i32..100, 0..50), n in 0usize..60) {
        let top = max_items(&seq, n);
        prop_assert_eq!(top.len(), n.min(seq.len()));
        prop_assert!(top.windows(2).all(|w| w[0] >= w[1]));

        let mut sorted = seq.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        prop_assert_eq!(&top[..], &sorted[..top.len()]);
    }

    #[test]
    fn prop_longest_run_bounds(seq in prop::collection::vec(-50i32..50, 0..60)) {
        let run = longest_increasing_run(&seq);
        prop_assert!(run <= seq.len());
        prop_assert_eq!(run == 0, seq.is_empty());
    }

    #[test]
    fn prop_propagate_length(seq in prop::collection::vec(any::<u8>(), 0..40)) {
        let n = seq.len();
        prop_assert_eq!(propagate_by_index(&seq).len(), n * (n + 1) / 2);
    }

    #[test]
    fn prop_sort_digit_names_numeric(digits in prop::collection::vec(0usize..10, 0..30)) {
        let names: Vec<&str> = digits.iter().map(|&d| DIGIT_NAMES[d]).collect();
        let sorted = sort_digit_names(&names).unwrap();
        let values: Vec<usize> = sorted.iter().map(|n| digit_value(n).unwrap()).collect();
        prop_assert!(values.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(sorted.len(), names.len());
    }
}
