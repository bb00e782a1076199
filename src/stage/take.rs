//! Bounded-length prefixes.

use crate::sequence::{Cursor, IntoSequence, Sequence, impl_view_ops};

/// A view over at most `count` leading elements of its source.
///
/// Termination is canonical regardless of the cause: whether the
/// remaining count reaches zero or the source runs out first, the cursor
/// is forced to the source's end with a remaining count of zero, so
/// equality against `end()` holds either way. This is what lets `take`
/// bound sources shorter than `count` and infinite sources through the
/// same mechanism.
///
/// Created by [`take`] or the deferred [`take_n`](crate::pipe::take_n).
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let values = vec![1, 2, 3];
/// let prefix: Vec<i32> = take(&values, 2).items().collect();
/// assert_eq!(prefix, vec![1, 2]);
///
/// // shorter than requested: stops at source exhaustion
/// let all: Vec<i32> = take(&values, 10).items().collect();
/// assert_eq!(all, vec![1, 2, 3]);
/// ```
pub struct Take<S> {
    source: S,
    count: usize,
}

impl<S: Clone> Clone for Take<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            count: self.count,
        }
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;
    type Distance = S::Distance;
    type Cursor = TakeCursor<S::Cursor>;

    fn begin(&self) -> Self::Cursor {
        TakeCursor {
            cursor: self.source.begin(),
            remaining: self.count,
            end: self.source.end(),
        }
    }

    fn end(&self) -> Self::Cursor {
        // Three terminal shapes: a zero count terminates at begin()
        // immediately, an empty source terminates with the count intact,
        // and otherwise traversal converges to source-end with zero
        // remaining whichever bound was hit first.
        let cursor = if self.count == 0 {
            self.source.begin()
        } else {
            self.source.end()
        };
        let remaining = if self.count != 0 && self.source.begin() == self.source.end() {
            self.count
        } else {
            0
        };
        TakeCursor {
            cursor,
            remaining,
            end: self.source.end(),
        }
    }
}

/// Cursor over a [`Take`] view.
///
/// Holds the source cursor, the remaining count, and the source's end.
/// Equality compares the source position and the remaining count.
pub struct TakeCursor<C> {
    cursor: C,
    remaining: usize,
    end: C,
}

impl<C: Clone> Clone for TakeCursor<C> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
            remaining: self.remaining,
            end: self.end.clone(),
        }
    }
}

impl<C: PartialEq> PartialEq for TakeCursor<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cursor == other.cursor && self.remaining == other.remaining
    }
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;

    fn get(&self) -> Self::Item {
        self.cursor.get()
    }

    fn advance(&mut self) {
        self.cursor.advance();
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.cursor = self.end.clone();
        }
        if self.cursor == self.end {
            self.remaining = 0;
        }
    }
}

/// Creates a [`Take`] view over at most `count` leading elements of
/// `source`.
///
/// Yields `min(count, len(source))` elements for finite sources and
/// exactly `count` for infinite ones.
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let squares: Vec<i64> = take(map(infinite_sequence_from(1i64), |n: i64| n * n), 4)
///     .items()
///     .collect();
/// assert_eq!(squares, vec![1, 4, 9, 16]);
/// ```
pub fn take<S: IntoSequence>(source: S, count: usize) -> Take<S::Seq> {
    Take {
        source: source.into_sequence(),
        count,
    }
}

impl_view_ops!([S] => Take<S>);
