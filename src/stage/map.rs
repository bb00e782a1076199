//! Element-wise transformation with per-position memoization.

use std::cell::RefCell;
use std::rc::Rc;

use crate::sequence::{Cursor, IntoSequence, Sequence, impl_view_ops};

/// A view applying a transformation to every element of its source.
///
/// The transformation runs at most once per position: the first
/// [`get`](Cursor::get) at a position computes and caches the result,
/// repeated `get`s return the cached value, and advancing invalidates the
/// cache. This makes expensive or effectful transformations safe to
/// dereference repeatedly.
///
/// Created by [`map`] or the deferred [`map_with`](crate::pipe::map_with).
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let values = vec![1, 2, 3];
/// let incremented: Vec<i32> = map(&values, |value: i32| value + 1).items().collect();
/// assert_eq!(incremented, vec![2, 3, 4]);
/// ```
pub struct Map<S, F> {
    source: S,
    function: Rc<F>,
}

impl<S: Clone, F> Clone for Map<S, F> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            function: Rc::clone(&self.function),
        }
    }
}

impl<S, F, O> Sequence for Map<S, F>
where
    S: Sequence,
    O: Clone,
    F: Fn(S::Item) -> O,
{
    type Item = O;
    type Distance = S::Distance;
    type Cursor = MapCursor<S::Cursor, F, O>;

    fn begin(&self) -> Self::Cursor {
        MapCursor {
            source: self.source.begin(),
            function: Rc::clone(&self.function),
            value: RefCell::new(None),
        }
    }

    fn end(&self) -> Self::Cursor {
        MapCursor {
            source: self.source.end(),
            function: Rc::clone(&self.function),
            value: RefCell::new(None),
        }
    }
}

/// Cursor over a [`Map`] view.
///
/// Holds the source cursor, a shared handle to the transformation, and
/// the memo slot for the most recently computed value. Equality compares
/// the source position and the callable identity (by address); the memo
/// never participates.
pub struct MapCursor<C, F, O> {
    source: C,
    function: Rc<F>,
    value: RefCell<Option<O>>,
}

impl<C: Clone, F, O: Clone> Clone for MapCursor<C, F, O> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            function: Rc::clone(&self.function),
            value: RefCell::new(self.value.borrow().clone()),
        }
    }
}

impl<C: PartialEq, F, O> PartialEq for MapCursor<C, F, O> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && Rc::ptr_eq(&self.function, &other.function)
    }
}

impl<C, F, O> Cursor for MapCursor<C, F, O>
where
    C: Cursor,
    O: Clone,
    F: Fn(C::Item) -> O,
{
    type Item = O;

    fn get(&self) -> O {
        if let Some(value) = self.value.borrow().as_ref() {
            return value.clone();
        }
        let computed = (self.function)(self.source.get());
        *self.value.borrow_mut() = Some(computed.clone());
        computed
    }

    fn advance(&mut self) {
        self.source.advance();
        self.value.borrow_mut().take();
    }
}

/// Creates a [`Map`] view applying `function` to every element of
/// `source`.
///
/// The element type of the result is the transformation's return type.
/// `source` may be a borrowed container or any other view.
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let words = vec!["lazy", "view"];
/// let lengths: Vec<usize> = map(&words, |word: &str| word.len()).items().collect();
/// assert_eq!(lengths, vec![4, 4]);
/// ```
pub fn map<S, F, O>(source: S, function: F) -> Map<S::Seq, F>
where
    S: IntoSequence,
    O: Clone,
    F: Fn(<S::Seq as Sequence>::Item) -> O,
{
    Map {
        source: source.into_sequence(),
        function: Rc::new(function),
    }
}

impl_view_ops!([S, F] => Map<S, F>);
