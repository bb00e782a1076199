//! # seqview
//!
//! A lazy, composable sequence-view library for Rust.
//!
//! ## Overview
//!
//! This library provides a small set of composable *views* that can be
//! chained into demand-driven pipelines over any underlying ordered
//! container, without materializing intermediate results:
//!
//! - **Map**: element-wise transformation with per-position memoization
//! - **Filter**: element-wise selection
//! - **ZipWith / zip**: paired combination, stopping at the shorter source
//! - **Range**: finite arithmetic progression
//! - **InfiniteSequence**: unbounded arithmetic progression
//! - **Take**: bounded-length prefix
//! - **enumerate**: zip with a zero-based position counter
//!
//! A view is an immutable, cheaply-copyable descriptor of a (possibly
//! infinite) ordered sequence. Constructing a view performs no iteration
//! and has no side effects; every transformation and predicate runs
//! exactly when a cursor demands the corresponding element.
//!
//! ## Pipe Composition
//!
//! Stages compose point-free through the `|` operator. The right-hand side
//! is a *deferred stage*: a stage constructor with everything except the
//! source already bound.
//!
//! ```rust
//! use seqview::prelude::*;
//!
//! let values = vec![1, 2, 3, 4, 5];
//! let result: Vec<i32> = (view(&values)
//!     | filter_with(|value: &i32| value % 2 == 0)
//!     | map_with(|value: i32| value + 42))
//!     .items()
//!     .collect();
//! assert_eq!(result, vec![44, 46]);
//! ```
//!
//! ## Direct Construction
//!
//! Every combinator also exists in direct form, accepting either a
//! borrowed container or another view as its source:
//!
//! ```rust
//! use seqview::prelude::*;
//!
//! let doubled: Vec<i32> = map(range(0, 5, 1), |value: i32| value * 2)
//!     .items()
//!     .collect();
//! assert_eq!(doubled, vec![0, 2, 4, 6, 8]);
//!
//! let first_three: Vec<i64> = take(infinite_sequence(10_i64, -1), 3)
//!     .items()
//!     .collect();
//! assert_eq!(first_three, vec![10, 9, 8]);
//! ```
//!
//! ## Lifetimes
//!
//! A view over a raw container borrows it; the borrow checker guarantees
//! the container outlives every pipeline derived from it, and that it is
//! not mutated while a pipeline is live. Views built from other views hold
//! them by value.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the full public surface of the library.
///
/// # Usage
///
/// ```rust
/// use seqview::prelude::*;
/// ```
pub mod prelude {
    pub use crate::pipe::{
        Enumerated, FilterWith, MapWith, PipeStage, TakeCount, enumerated, filter_with, map_with,
        take_n,
    };
    pub use crate::sequence::{Borrowed, Cursor, IntoSequence, Items, Ordered, Sequence, view};
    pub use crate::stage::{
        Filter, InfiniteSequence, Map, Range, RangeError, Step, Take, ZipWith, enumerate, filter,
        infinite_sequence, infinite_sequence_from, map, range, range_to, take, try_range, zip,
        zip_with,
    };
}

pub mod pipe;
pub mod sequence;
pub mod stage;
