//! Unbounded arithmetic progressions.

use crate::sequence::{Cursor, Sequence, impl_view_ops};
use crate::stage::Step;

/// A view over the unbounded arithmetic progression `from, from + step, …`.
///
/// `end()` is a distinguished sentinel — a flag orthogonal to the numeric
/// value — that advancing from `begin()` never reaches. The view is
/// therefore infinite unless composed with a bounding stage such as
/// [`take`](crate::stage::take) or consumed under an external break
/// condition; iterating it to exhaustion directly never terminates, and
/// avoiding that is the caller's responsibility.
///
/// Created by [`infinite_sequence`] or [`infinite_sequence_from`].
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let evens: Vec<u64> = take(infinite_sequence(0u64, 2), 4).items().collect();
/// assert_eq!(evens, vec![0, 2, 4, 6]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct InfiniteSequence<T> {
    from: T,
    step: T,
}

impl<T: Step> Sequence for InfiniteSequence<T> {
    type Item = T;
    type Distance = isize;
    type Cursor = InfiniteCursor<T>;

    fn begin(&self) -> Self::Cursor {
        InfiniteCursor {
            current: self.from,
            step: self.step,
            exhausted: false,
        }
    }

    fn end(&self) -> Self::Cursor {
        InfiniteCursor {
            current: self.from,
            step: self.step,
            exhausted: true,
        }
    }
}

/// Cursor over an [`InfiniteSequence`] view.
///
/// The `exhausted` flag marks the sentinel end state; advancing never
/// sets it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfiniteCursor<T> {
    current: T,
    step: T,
    exhausted: bool,
}

impl<T: Step> Cursor for InfiniteCursor<T> {
    type Item = T;

    fn get(&self) -> T {
        assert!(
            !self.exhausted,
            "cursor dereferenced at the sentinel end of an infinite sequence"
        );
        self.current
    }

    fn advance(&mut self) {
        self.current = self.current + self.step;
    }
}

/// Creates an [`InfiniteSequence`] view over `from, from + step, …`.
///
/// A zero step is permitted and yields a constant sequence; like any
/// infinite view it is only consumable under an external bound.
pub const fn infinite_sequence<T: Step>(from: T, step: T) -> InfiniteSequence<T> {
    InfiniteSequence { from, step }
}

/// Creates an [`InfiniteSequence`] view over `from, from + 1, …`.
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let counted: Vec<usize> = take(infinite_sequence_from(5usize), 3).items().collect();
/// assert_eq!(counted, vec![5, 6, 7]);
/// ```
pub fn infinite_sequence_from<T: Step>(from: T) -> InfiniteSequence<T> {
    infinite_sequence(from, T::one())
}

impl_view_ops!([T] => InfiniteSequence<T>);
