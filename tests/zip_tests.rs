//! Unit tests for the ZipWith stage and the zip combinator.
//!
//! Tests cover:
//! - Combination through arbitrary binary functions
//! - The min-length rule and empty-operand handling
//! - The canonical terminal state regardless of which side is shorter
//! - Per-position memoization of the combination

use rstest::rstest;
use seqview::prelude::*;
use std::cell::Cell;

fn plus(first: i32, second: i32) -> i32 {
    first + second
}

// =============================================================================
// Combination
// =============================================================================

#[rstest]
fn zip_with_combines_pairwise() {
    let left = vec![1, 2, 3];
    let right = vec![10, 20, 30];
    let sums: Vec<i32> = zip_with(&left, &right, plus).items().collect();
    assert_eq!(sums, vec![11, 22, 33]);
}

#[rstest]
fn zip_with_concatenates_chars_from_strings() {
    let combined: Vec<String> = zip_with("abc", "xyz", |first: char, second: char| {
        format!("{first}{second}")
    })
    .items()
    .collect();
    assert_eq!(combined, vec!["ax", "by", "cz"]);
}

#[rstest]
fn zip_builds_pairs() {
    let numbers = vec![1, 2];
    let words = vec!["one", "two"];
    let pairs: Vec<(i32, &str)> = zip(&numbers, &words).items().collect();
    assert_eq!(pairs, vec![(1, "one"), (2, "two")]);
}

#[rstest]
fn zip_of_differently_typed_sources_pairs_their_elements() {
    let numbers = vec![7, 8];
    let pairs: Vec<(i32, char)> = zip(&numbers, "AB").items().collect();
    assert_eq!(pairs, vec![(7, 'A'), (8, 'B')]);
}

// =============================================================================
// Length Rules
// =============================================================================

#[rstest]
fn zip_stops_at_the_shorter_left_operand() {
    let left = vec![1, 2];
    let right = vec![10, 20, 30, 40];
    assert_eq!(zip(&left, &right).items().count(), 2);
}

#[rstest]
fn zip_stops_at_the_shorter_right_operand() {
    let left = vec![1, 2, 3, 4];
    let right = vec![10];
    assert_eq!(zip(&left, &right).items().count(), 1);
}

#[rstest]
fn zip_with_an_empty_left_operand_is_empty() {
    let left: Vec<i32> = Vec::new();
    let right = vec![1];
    let zipped = zip_with(&left, &right, plus);
    assert!(zipped.begin() == zipped.end());
    assert_eq!(zipped.items().count(), 0);
}

#[rstest]
fn zip_with_an_empty_right_operand_is_empty() {
    let left = vec![1];
    let right: Vec<i32> = Vec::new();
    let zipped = zip_with(&left, &right, plus);
    assert!(zipped.begin() == zipped.end());
}

#[rstest]
fn zip_of_two_empty_operands_is_empty() {
    let left: Vec<i32> = Vec::new();
    let right: Vec<i32> = Vec::new();
    assert_eq!(zip(&left, &right).items().count(), 0);
}

// =============================================================================
// Terminal State
// =============================================================================

#[rstest]
fn traversal_converges_to_end_when_the_left_side_is_shorter() {
    let left = vec![1];
    let right = vec![10, 20, 30];
    let zipped = zip_with(&left, &right, plus);

    let mut cursor = zipped.begin();
    cursor.advance();
    assert!(cursor == zipped.end());
}

#[rstest]
fn traversal_converges_to_end_when_the_right_side_is_shorter() {
    let left = vec![1, 2, 3];
    let right = vec![10];
    let zipped = zip_with(&left, &right, plus);

    let mut cursor = zipped.begin();
    cursor.advance();
    assert!(cursor == zipped.end());
}

#[rstest]
fn zip_against_an_infinite_counter_stops_at_the_finite_source() {
    let values = vec![5, 6, 7];
    let pairs: Vec<(u64, i32)> = zip(infinite_sequence_from(0u64), &values)
        .items()
        .collect();
    assert_eq!(pairs, vec![(0, 5), (1, 6), (2, 7)]);
}

// =============================================================================
// Memoization
// =============================================================================

#[rstest]
fn repeated_get_at_one_position_invokes_the_function_once() {
    let calls = Cell::new(0u32);
    let left = vec![1, 2];
    let right = vec![10, 20];
    let zipped = zip_with(&left, &right, |first: i32, second: i32| {
        calls.set(calls.get() + 1);
        first + second
    });

    let cursor = zipped.begin();
    assert_eq!(cursor.get(), 11);
    assert_eq!(cursor.get(), 11);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn cursors_from_distinct_callable_instances_never_compare_equal() {
    let left = vec![1];
    let right = vec![2];
    let first = zip_with(&left, &right, plus);
    let second = zip_with(&left, &right, plus);
    assert!(first.begin() != second.begin());
}
