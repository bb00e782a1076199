//! Element-wise selection.

use std::rc::Rc;

use crate::sequence::{Cursor, IntoSequence, Sequence, impl_view_ops};

/// A view keeping only the elements of its source that satisfy a
/// predicate, in original order.
///
/// `begin()` skips past leading failing elements, and every advance skips
/// to the next satisfying position, so a traversal over a source of `k`
/// elements inspects each exactly once. Each `begin()` call re-scans from
/// the source's start; the selected subsequence is therefore identical
/// across independent traversals of the same view.
///
/// Created by [`filter`] or the deferred
/// [`filter_with`](crate::pipe::filter_with).
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let values = vec![1, 2, 3, 4, 5];
/// let even: Vec<i32> = filter(&values, |value: &i32| value % 2 == 0)
///     .items()
///     .collect();
/// assert_eq!(even, vec![2, 4]);
/// ```
pub struct Filter<S, P> {
    source: S,
    predicate: Rc<P>,
}

impl<S: Clone, P> Clone for Filter<S, P> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            predicate: Rc::clone(&self.predicate),
        }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Distance = S::Distance;
    type Cursor = FilterCursor<S::Cursor, P>;

    fn begin(&self) -> Self::Cursor {
        let end = self.source.end();
        let mut cursor = self.source.begin();
        while cursor != end && !(self.predicate)(&cursor.get()) {
            cursor.advance();
        }
        FilterCursor {
            predicate: Rc::clone(&self.predicate),
            cursor,
            end,
        }
    }

    fn end(&self) -> Self::Cursor {
        FilterCursor {
            predicate: Rc::clone(&self.predicate),
            cursor: self.source.end(),
            end: self.source.end(),
        }
    }
}

/// Cursor over a [`Filter`] view.
///
/// Holds the predicate, the current source cursor, and the source's end
/// (needed to stop the skip-loop). Equality compares the source position
/// and predicate identity.
pub struct FilterCursor<C, P> {
    predicate: Rc<P>,
    cursor: C,
    end: C,
}

impl<C: Clone, P> Clone for FilterCursor<C, P> {
    fn clone(&self) -> Self {
        Self {
            predicate: Rc::clone(&self.predicate),
            cursor: self.cursor.clone(),
            end: self.end.clone(),
        }
    }
}

impl<C: PartialEq, P> PartialEq for FilterCursor<C, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cursor == other.cursor && Rc::ptr_eq(&self.predicate, &other.predicate)
    }
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn get(&self) -> Self::Item {
        self.cursor.get()
    }

    fn advance(&mut self) {
        self.cursor.advance();
        while self.cursor != self.end && !(self.predicate)(&self.cursor.get()) {
            self.cursor.advance();
        }
    }
}

/// Creates a [`Filter`] view keeping the elements of `source` that
/// satisfy `predicate`.
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let words = vec!["lazy", "sequence", "view"];
/// let short: Vec<&str> = filter(&words, |word: &&str| word.len() <= 4)
///     .items()
///     .collect();
/// assert_eq!(short, vec!["lazy", "view"]);
/// ```
pub fn filter<S, P>(source: S, predicate: P) -> Filter<S::Seq, P>
where
    S: IntoSequence,
    P: Fn(&<S::Seq as Sequence>::Item) -> bool,
{
    Filter {
        source: source.into_sequence(),
        predicate: Rc::new(predicate),
    }
}

impl_view_ops!([S, P] => Filter<S, P>);
