//! Unit tests for the Filter stage.
//!
//! Tests cover:
//! - Subsequence selection in original order
//! - Leading-skip behavior of begin()
//! - Repeatable traversal from independent begin() calls
//! - Cursor equality and predicate identity

use rstest::rstest;
use seqview::prelude::*;

fn is_even(value: &i32) -> bool {
    value % 2 == 0
}

// =============================================================================
// Selection
// =============================================================================

#[rstest]
fn filter_keeps_satisfying_elements_in_order() {
    let values = vec![1, 2, 3, 4, 5, 6];
    let even: Vec<i32> = filter(&values, is_even).items().collect();
    assert_eq!(even, vec![2, 4, 6]);
}

#[rstest]
fn filter_over_empty_source_is_empty() {
    let values: Vec<i32> = Vec::new();
    let filtered = filter(&values, is_even);
    assert!(filtered.begin() == filtered.end());
    assert_eq!(filtered.items().count(), 0);
}

#[rstest]
fn filter_rejecting_everything_is_empty() {
    let values = vec![1, 3, 5];
    let filtered = filter(&values, is_even);
    assert!(filtered.begin() == filtered.end());
}

#[rstest]
fn filter_keeping_everything_matches_the_source() {
    let values = vec![2, 4, 6];
    let filtered: Vec<i32> = filter(&values, is_even).items().collect();
    assert_eq!(filtered, values);
}

#[rstest]
fn begin_skips_leading_failures() {
    let values = vec![1, 3, 5, 8, 9, 10];
    let filtered = filter(&values, is_even);
    assert_eq!(filtered.begin().get(), 8);
}

#[rstest]
fn filter_strings_by_length() {
    let words = vec!["lazy", "sequence", "view", "pipeline"];
    let long: Vec<&str> = filter(&words, |word: &&str| word.len() > 4).items().collect();
    assert_eq!(long, vec!["sequence", "pipeline"]);
}

// =============================================================================
// Repeatable Traversal
// =============================================================================

#[rstest]
fn independent_begin_calls_yield_identical_sequences() {
    let values = vec![9, 2, 7, 4, 5, 6];
    let filtered = filter(&values, is_even);

    let first_pass: Vec<i32> = filtered.items().collect();
    let second_pass: Vec<i32> = filtered.items().collect();
    assert_eq!(first_pass, second_pass);
    assert_eq!(first_pass, vec![2, 4, 6]);
}

#[rstest]
fn filter_composes_over_map() {
    let values = vec![1, 2, 3, 4, 5];
    let composed: Vec<i32> = filter(map(&values, |value: i32| value * 3), |value: &i32| {
        value % 2 == 0
    })
    .items()
    .collect();
    assert_eq!(composed, vec![6, 12]);
}

// =============================================================================
// Cursor Equality
// =============================================================================

#[rstest]
fn cursors_at_the_same_position_compare_equal() {
    let values = vec![1, 2, 3, 4];
    let filtered = filter(&values, is_even);
    assert!(filtered.begin() == filtered.begin());

    let mut advanced = filtered.begin();
    advanced.advance();
    assert!(advanced != filtered.begin());
}

#[rstest]
fn cursors_from_distinct_predicate_instances_never_compare_equal() {
    let values = vec![2, 4];
    let first = filter(&values, is_even);
    let second = filter(&values, is_even);
    assert!(first.begin() != second.begin());
}
