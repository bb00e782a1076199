//! Paired combination of two sources, stopping at the shorter one.

use std::cell::RefCell;
use std::rc::Rc;

use crate::sequence::{Cursor, IntoSequence, Sequence, impl_view_ops};

/// A view combining two sources element-by-element through a binary
/// function.
///
/// The combined sequence is as long as the shorter operand. The cursor
/// reaches a single canonical terminal state no matter which side runs
/// out first: when either source cursor hits its end, both are forced to
/// their ends, so equality against `end()` is well-defined. Like
/// [`Map`](crate::stage::Map), the combination is memoized per position.
///
/// Created by [`zip_with`], [`zip`], or
/// [`enumerate`](crate::stage::enumerate).
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let left = vec![1, 2, 3];
/// let right = vec![10, 20];
/// let sums: Vec<i32> = zip_with(&left, &right, |a: i32, b: i32| a + b)
///     .items()
///     .collect();
/// assert_eq!(sums, vec![11, 22]);
/// ```
pub struct ZipWith<A, B, F> {
    first: A,
    second: B,
    function: Rc<F>,
}

impl<A: Clone, B: Clone, F> Clone for ZipWith<A, B, F> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            function: Rc::clone(&self.function),
        }
    }
}

impl<A, B, F, O> Sequence for ZipWith<A, B, F>
where
    A: Sequence,
    B: Sequence,
    O: Clone,
    F: Fn(A::Item, B::Item) -> O,
{
    type Item = O;
    type Distance = A::Distance;
    type Cursor = ZipCursor<A::Cursor, B::Cursor, F, O>;

    // An empty operand yields a begin() already equal to end(), without
    // requiring an increment.
    fn begin(&self) -> Self::Cursor {
        let first_end = self.first.end();
        let second_end = self.second.end();
        let first = self.first.begin();
        let second = self.second.begin();
        let (first, second) = if first == first_end || second == second_end {
            (first_end.clone(), second_end.clone())
        } else {
            (first, second)
        };
        ZipCursor {
            first,
            second,
            first_end,
            second_end,
            function: Rc::clone(&self.function),
            value: RefCell::new(None),
        }
    }

    fn end(&self) -> Self::Cursor {
        ZipCursor {
            first: self.first.end(),
            second: self.second.end(),
            first_end: self.first.end(),
            second_end: self.second.end(),
            function: Rc::clone(&self.function),
            value: RefCell::new(None),
        }
    }
}

/// Cursor over a [`ZipWith`] view.
///
/// Holds both source cursors, both source ends, the shared callable, and
/// the memo slot. Equality compares both positions and the callable
/// identity.
pub struct ZipCursor<CA, CB, F, O> {
    first: CA,
    second: CB,
    first_end: CA,
    second_end: CB,
    function: Rc<F>,
    value: RefCell<Option<O>>,
}

impl<CA: Clone, CB: Clone, F, O: Clone> Clone for ZipCursor<CA, CB, F, O> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            first_end: self.first_end.clone(),
            second_end: self.second_end.clone(),
            function: Rc::clone(&self.function),
            value: RefCell::new(self.value.borrow().clone()),
        }
    }
}

impl<CA: PartialEq, CB: PartialEq, F, O> PartialEq for ZipCursor<CA, CB, F, O> {
    fn eq(&self, other: &Self) -> bool {
        self.first == other.first
            && self.second == other.second
            && Rc::ptr_eq(&self.function, &other.function)
    }
}

impl<CA, CB, F, O> Cursor for ZipCursor<CA, CB, F, O>
where
    CA: Cursor,
    CB: Cursor,
    O: Clone,
    F: Fn(CA::Item, CB::Item) -> O,
{
    type Item = O;

    fn get(&self) -> O {
        if let Some(value) = self.value.borrow().as_ref() {
            return value.clone();
        }
        let computed = (self.function)(self.first.get(), self.second.get());
        *self.value.borrow_mut() = Some(computed.clone());
        computed
    }

    fn advance(&mut self) {
        self.first.advance();
        self.second.advance();
        if self.first == self.first_end || self.second == self.second_end {
            self.first = self.first_end.clone();
            self.second = self.second_end.clone();
        }
        self.value.borrow_mut().take();
    }
}

/// Creates a [`ZipWith`] view combining `first` and `second` through
/// `function`, stopping at the shorter source.
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let numbers = vec![1, 2, 3];
/// let letters = "xyz";
/// let tagged: Vec<String> = zip_with(&numbers, letters, |n: i32, c: char| format!("{n}{c}"))
///     .items()
///     .collect();
/// assert_eq!(tagged, vec!["1x", "2y", "3z"]);
/// ```
pub fn zip_with<A, B, F, O>(first: A, second: B, function: F) -> ZipWith<A::Seq, B::Seq, F>
where
    A: IntoSequence,
    B: IntoSequence,
    O: Clone,
    F: Fn(<A::Seq as Sequence>::Item, <B::Seq as Sequence>::Item) -> O,
{
    ZipWith {
        first: first.into_sequence(),
        second: second.into_sequence(),
        function: Rc::new(function),
    }
}

/// The pair-constructing function type used by [`zip`] and
/// [`enumerate`](crate::stage::enumerate).
///
/// A plain function pointer keeps the resulting view type nameable.
pub type Pairing<X, Y> = fn(X, Y) -> (X, Y);

fn pair<X, Y>(first: X, second: Y) -> (X, Y) {
    (first, second)
}

/// Creates a view of pairs `(a, b)` drawn from `first` and `second`,
/// stopping at the shorter source.
///
/// Equivalent to [`zip_with`] with pair construction.
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let left = vec![1, 2, 3];
/// let right = vec!["one", "two"];
/// let pairs: Vec<(i32, &str)> = zip(&left, &right).items().collect();
/// assert_eq!(pairs, vec![(1, "one"), (2, "two")]);
/// ```
pub fn zip<A, B>(
    first: A,
    second: B,
) -> ZipWith<A::Seq, B::Seq, Pairing<<A::Seq as Sequence>::Item, <B::Seq as Sequence>::Item>>
where
    A: IntoSequence,
    B: IntoSequence,
    <A::Seq as Sequence>::Item: Clone,
    <B::Seq as Sequence>::Item: Clone,
{
    zip_with(
        first,
        second,
        pair as Pairing<<A::Seq as Sequence>::Item, <B::Seq as Sequence>::Item>,
    )
}

impl_view_ops!([A, B, F] => ZipWith<A, B, F>);
