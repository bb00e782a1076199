//! The core view contract: [`Sequence`], [`Cursor`], and the bridges that
//! connect them to ordinary Rust iteration.
//!
//! A [`Sequence`] is a lazy, cheaply-copyable descriptor of an ordered
//! (possibly infinite) sequence. It exposes three associated types — the
//! element type, the cursor type, and a distance type — plus `begin`/`end`
//! cursor constructors. Nothing is computed when a sequence is built;
//! all work is deferred to cursor use.
//!
//! A [`Cursor`] is a forward-only position over a sequence. Two cursors
//! compare equal iff their underlying positions (and, for transforming
//! stages, their bound callable identities) are equal; produced values
//! never participate in equality.
//!
//! [`Items`] adapts a begin/end cursor pair to [`std::iter::Iterator`] so
//! views work with `for` loops and the whole iterator ecosystem.

mod ordered;

pub use ordered::{Borrowed, BorrowedCursor, Ordered, view};

/// A forward cursor over a [`Sequence`].
///
/// Cursors are copyable position markers. Equality compares positions and
/// callable identity only — never produced values — so two cursors built
/// from distinct callable instances are never equal, even at the same
/// position.
///
/// # Terminal cursors
///
/// Calling [`get`](Cursor::get) on a terminal (end) cursor panics, and
/// advancing past the end is unspecified; well-formed traversal compares
/// against the sequence's `end()` before each dereference, exactly as
/// [`Items`] does.
pub trait Cursor: Clone + PartialEq {
    /// The element type produced at each position.
    type Item;

    /// Returns the element at the current position.
    ///
    /// Stages with expensive transformations ([`Map`](crate::stage::Map),
    /// [`ZipWith`](crate::stage::ZipWith)) compute the element at most
    /// once per position; repeated calls without an intervening
    /// [`advance`](Cursor::advance) return the memoized value.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at its terminal position.
    fn get(&self) -> Self::Item;

    /// Moves the cursor to the next position, invalidating any memoized
    /// value held for the current one.
    fn advance(&mut self);
}

/// A lazy view over an ordered sequence.
///
/// Implementors are immutable descriptors: constructing one performs no
/// iteration and has no side effects. Views are required to be cheap to
/// copy (a handful of words; bound callables are shared, each cursor owns
/// its own memo slot and counters), so independent clones may be traversed
/// independently.
///
/// The three associated types — [`Item`](Sequence::Item),
/// [`Cursor`](Sequence::Cursor), and [`Distance`](Sequence::Distance) —
/// propagate structurally through arbitrary stage chains, which is what
/// lets any view be fed into any combinator.
pub trait Sequence: Clone {
    /// The element type of the sequence.
    type Item;

    /// The signed distance type between positions.
    type Distance;

    /// The cursor type produced by [`begin`](Sequence::begin) and
    /// [`end`](Sequence::end).
    type Cursor: Cursor<Item = Self::Item>;

    /// Returns a cursor at the first element, or a cursor equal to
    /// [`end`](Sequence::end) if the sequence is empty.
    fn begin(&self) -> Self::Cursor;

    /// Returns the terminal cursor.
    ///
    /// For finite views this position is reachable by repeated
    /// [`advance`](Cursor::advance) from `begin()`; for
    /// [`InfiniteSequence`](crate::stage::InfiniteSequence) it is a
    /// distinguished sentinel that advancing never produces.
    fn end(&self) -> Self::Cursor;

    /// Returns a [`std::iter::Iterator`] over the sequence's elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqview::prelude::*;
    ///
    /// let values = vec![3, 1, 4];
    /// let collected: Vec<i32> = view(&values).items().collect();
    /// assert_eq!(collected, vec![3, 1, 4]);
    /// ```
    fn items(&self) -> Items<Self::Cursor> {
        Items {
            cursor: self.begin(),
            end: self.end(),
        }
    }
}

/// Conversion of a source into a [`Sequence`].
///
/// This is the uniform adaptation layer in front of every stage
/// constructor: types that already satisfy the view contract convert to
/// themselves (identity), while a reference to an [`Ordered`] container
/// converts to a non-owning [`Borrowed`] view over it. It is what lets
/// `map(&values, …)` and `map(range(0, 5, 1), …)` read the same.
pub trait IntoSequence {
    /// The resulting view type.
    type Seq: Sequence;

    /// Performs the conversion. Never iterates.
    fn into_sequence(self) -> Self::Seq;
}

impl<'a, C: Ordered + ?Sized> IntoSequence for &'a C {
    type Seq = Borrowed<'a, C>;

    fn into_sequence(self) -> Self::Seq {
        Borrowed::new(self)
    }
}

/// Iterator over a [`Sequence`]'s elements, driving a cursor from begin
/// to end.
///
/// Obtained from [`Sequence::items`] or from a view's `IntoIterator`
/// implementation.
#[derive(Clone)]
pub struct Items<C: Cursor> {
    cursor: C,
    end: C,
}

impl<C: Cursor> Iterator for Items<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.end {
            return None;
        }
        let item = self.cursor.get();
        self.cursor.advance();
        Some(item)
    }
}

/// Wires a concrete view type into the rest of the library: identity
/// [`IntoSequence`], `IntoIterator` for the view and for references to
/// it, and the `|` pipe operator accepting any deferred stage.
///
/// A blanket implementation is impossible here — `BitOr` and
/// `IntoIterator` are foreign traits, so coherence requires one
/// implementation per local view type.
macro_rules! impl_view_ops {
    ([$($generics:tt)*] => $view:ty) => {
        impl<$($generics)*> $crate::sequence::IntoSequence for $view
        where
            $view: $crate::sequence::Sequence,
        {
            type Seq = $view;

            fn into_sequence(self) -> Self::Seq {
                self
            }
        }

        impl<$($generics)*> ::std::iter::IntoIterator for $view
        where
            $view: $crate::sequence::Sequence,
        {
            type Item = <$view as $crate::sequence::Sequence>::Item;
            type IntoIter =
                $crate::sequence::Items<<$view as $crate::sequence::Sequence>::Cursor>;

            fn into_iter(self) -> Self::IntoIter {
                $crate::sequence::Sequence::items(&self)
            }
        }

        impl<'view, $($generics)*> ::std::iter::IntoIterator for &'view $view
        where
            $view: $crate::sequence::Sequence,
        {
            type Item = <$view as $crate::sequence::Sequence>::Item;
            type IntoIter =
                $crate::sequence::Items<<$view as $crate::sequence::Sequence>::Cursor>;

            fn into_iter(self) -> Self::IntoIter {
                $crate::sequence::Sequence::items(self)
            }
        }

        impl<$($generics)*, D> ::std::ops::BitOr<D> for $view
        where
            $view: $crate::sequence::Sequence,
            D: $crate::pipe::PipeStage<$view>,
        {
            type Output = D::Output;

            fn bitor(self, stage: D) -> Self::Output {
                $crate::pipe::PipeStage::apply(stage, self)
            }
        }
    };
}

pub(crate) use impl_view_ops;

impl_view_ops!(['a, C: Ordered + ?Sized] => Borrowed<'a, C>);
