//! Unit tests for the Map stage.
//!
//! Tests cover:
//! - Element-wise transformation over containers and other views
//! - Per-position memoization observed through call counters
//! - Cursor equality semantics, including callable identity

use rstest::rstest;
use seqview::prelude::*;
use std::cell::Cell;

fn double(value: i32) -> i32 {
    value * 2
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn map_transforms_every_element_in_order() {
    let values = vec![1, 2, 3, 4];
    let incremented: Vec<i32> = map(&values, |value: i32| value + 1).items().collect();
    assert_eq!(incremented, vec![2, 3, 4, 5]);
}

#[rstest]
fn map_over_empty_source_is_empty() {
    let values: Vec<i32> = Vec::new();
    let mapped = map(&values, |value: i32| value + 1);
    assert!(mapped.begin() == mapped.end());
    assert_eq!(mapped.items().count(), 0);
}

#[rstest]
fn map_changes_the_element_type() {
    let values = vec![1, 22, 333];
    let rendered: Vec<String> = map(&values, |value: i32| value.to_string())
        .items()
        .collect();
    assert_eq!(rendered, vec!["1", "22", "333"]);
}

#[rstest]
fn map_accepts_named_functions() {
    let values = vec![1, 2, 3];
    let doubled: Vec<i32> = map(&values, double).items().collect();
    assert_eq!(doubled, vec![2, 4, 6]);
}

#[rstest]
fn map_over_chars_uppercases() {
    let upper: Vec<char> = map("abc", |character: char| character.to_ascii_uppercase())
        .items()
        .collect();
    assert_eq!(upper, vec!['A', 'B', 'C']);
}

#[rstest]
fn map_composes_over_other_views() {
    let values = vec![1, 2, 3];
    let composed: Vec<i32> = map(map(&values, |value: i32| value + 1), |value: i32| {
        value * 10
    })
    .items()
    .collect();
    assert_eq!(composed, vec![20, 30, 40]);
}

// =============================================================================
// Laziness and Memoization
// =============================================================================

#[rstest]
fn construction_invokes_nothing() {
    let calls = Cell::new(0u32);
    let values = vec![1, 2, 3];
    let _mapped = map(&values, |value: i32| {
        calls.set(calls.get() + 1);
        value
    });
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn repeated_get_at_one_position_invokes_the_function_once() {
    let calls = Cell::new(0u32);
    let values = vec![10, 20];
    let mapped = map(&values, |value: i32| {
        calls.set(calls.get() + 1);
        value * 2
    });

    let cursor = mapped.begin();
    assert_eq!(cursor.get(), 20);
    assert_eq!(cursor.get(), 20);
    assert_eq!(cursor.get(), 20);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn advance_invalidates_the_memo() {
    let calls = Cell::new(0u32);
    let values = vec![10, 20];
    let mapped = map(&values, |value: i32| {
        calls.set(calls.get() + 1);
        value * 2
    });

    let mut cursor = mapped.begin();
    assert_eq!(cursor.get(), 20);
    cursor.advance();
    assert_eq!(cursor.get(), 40);
    assert_eq!(cursor.get(), 40);
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn full_traversal_invokes_the_function_once_per_element() {
    let calls = Cell::new(0u32);
    let values = vec![1, 2, 3, 4, 5];
    let collected: Vec<i32> = map(&values, |value: i32| {
        calls.set(calls.get() + 1);
        value
    })
    .items()
    .collect();
    assert_eq!(collected, values);
    assert_eq!(calls.get(), 5);
}

// =============================================================================
// Cursor Equality
// =============================================================================

#[rstest]
fn cursors_at_the_same_position_of_one_view_compare_equal() {
    let values = vec![1, 2, 3];
    let mapped = map(&values, double);
    assert!(mapped.begin() == mapped.begin());

    let mut advanced = mapped.begin();
    advanced.advance();
    assert!(advanced != mapped.begin());
}

#[rstest]
fn cursors_from_distinct_callable_instances_never_compare_equal() {
    let values = vec![1, 2, 3];
    let first = map(&values, double);
    let second = map(&values, double);
    // Behaviorally identical, but distinct callable instances.
    assert!(first.begin() != second.begin());
}

#[rstest]
fn memo_state_does_not_participate_in_equality() {
    let values = vec![1, 2, 3];
    let mapped = map(&values, double);
    let touched = mapped.begin();
    let untouched = mapped.begin();
    let _ = touched.get();
    assert!(touched == untouched);
}
