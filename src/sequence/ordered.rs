//! Adaptation of ordinary containers into views.
//!
//! [`Ordered`] is the positional-access contract a raw container must
//! satisfy to participate in a pipeline; [`Borrowed`] is the non-owning
//! view over such a container. Containers are always held by reference —
//! the borrow checker ties every derived pipeline to the container's
//! lifetime, so the dangling-view hazard of reference-based designs is a
//! compile error here rather than a runtime one.
//!
//! Implementations are provided for slices, arrays, `Vec`, `VecDeque`,
//! `LinkedList`, `str`, and `String`. Elements are produced by value
//! (cloned out), which keeps the pipeline read-only over the container.

use std::collections::{LinkedList, VecDeque};
use std::ptr;

use super::{Cursor, Sequence};

/// Positional access to an ordered container.
///
/// A position is an opaque, copyable marker; the container knows how to
/// produce its first and one-past-last positions, how to step a position
/// forward, and how to read the element at a position. Forward traversal
/// is the only requirement — no random access, no mutation.
pub trait Ordered {
    /// The element type produced by the container.
    type Item;

    /// The position marker type.
    type Position: Clone + PartialEq;

    /// The position of the first element.
    fn start(&self) -> Self::Position;

    /// The one-past-last position.
    fn finish(&self) -> Self::Position;

    /// Steps a position forward by one element.
    fn step_position(&self, position: &mut Self::Position);

    /// Reads the element at a position.
    ///
    /// # Panics
    ///
    /// Panics if `position` is the one-past-last position.
    fn item_at(&self, position: &Self::Position) -> Self::Item;
}

impl<T: Clone> Ordered for [T] {
    type Item = T;
    type Position = usize;

    fn start(&self) -> usize {
        0
    }

    fn finish(&self) -> usize {
        self.len()
    }

    fn step_position(&self, position: &mut usize) {
        *position += 1;
    }

    fn item_at(&self, position: &usize) -> T {
        self[*position].clone()
    }
}

impl<T: Clone, const N: usize> Ordered for [T; N] {
    type Item = T;
    type Position = usize;

    fn start(&self) -> usize {
        0
    }

    fn finish(&self) -> usize {
        N
    }

    fn step_position(&self, position: &mut usize) {
        *position += 1;
    }

    fn item_at(&self, position: &usize) -> T {
        self[*position].clone()
    }
}

impl<T: Clone> Ordered for Vec<T> {
    type Item = T;
    type Position = usize;

    fn start(&self) -> usize {
        0
    }

    fn finish(&self) -> usize {
        self.len()
    }

    fn step_position(&self, position: &mut usize) {
        *position += 1;
    }

    fn item_at(&self, position: &usize) -> T {
        self[*position].clone()
    }
}

impl<T: Clone> Ordered for VecDeque<T> {
    type Item = T;
    type Position = usize;

    fn start(&self) -> usize {
        0
    }

    fn finish(&self) -> usize {
        self.len()
    }

    fn step_position(&self, position: &mut usize) {
        *position += 1;
    }

    fn item_at(&self, position: &usize) -> T {
        self[*position].clone()
    }
}

impl<T: Clone> Ordered for LinkedList<T> {
    type Item = T;
    type Position = usize;

    fn start(&self) -> usize {
        0
    }

    fn finish(&self) -> usize {
        self.len()
    }

    fn step_position(&self, position: &mut usize) {
        *position += 1;
    }

    // Linked lists have no positional indexing; each read walks from the
    // head. Forward traversal of the whole list is therefore quadratic,
    // which the single-pass contract tolerates.
    fn item_at(&self, position: &usize) -> T {
        self.iter()
            .nth(*position)
            .cloned()
            .expect("cursor dereferenced past the end of the list")
    }
}

impl Ordered for str {
    type Item = char;
    // Byte offset, always on a char boundary.
    type Position = usize;

    fn start(&self) -> usize {
        0
    }

    fn finish(&self) -> usize {
        self.len()
    }

    fn step_position(&self, position: &mut usize) {
        let character = self[*position..]
            .chars()
            .next()
            .expect("cursor advanced past the end of the string");
        *position += character.len_utf8();
    }

    fn item_at(&self, position: &usize) -> char {
        self[*position..]
            .chars()
            .next()
            .expect("cursor dereferenced at the end of the string")
    }
}

impl Ordered for String {
    type Item = char;
    type Position = usize;

    fn start(&self) -> usize {
        Ordered::start(self.as_str())
    }

    fn finish(&self) -> usize {
        Ordered::finish(self.as_str())
    }

    fn step_position(&self, position: &mut usize) {
        Ordered::step_position(self.as_str(), position);
    }

    fn item_at(&self, position: &usize) -> char {
        Ordered::item_at(self.as_str(), position)
    }
}

/// A non-owning view over an [`Ordered`] container.
///
/// The referenced container must outlive every pipeline derived from this
/// view; the borrow checker enforces it, along with the rule that the
/// container may not be mutated while a pipeline referencing it is live.
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let values = vec![1, 2, 3];
/// let borrowed = view(&values);
/// let collected: Vec<i32> = borrowed.items().collect();
/// assert_eq!(collected, vec![1, 2, 3]);
/// ```
pub struct Borrowed<'a, C: Ordered + ?Sized> {
    container: &'a C,
}

impl<'a, C: Ordered + ?Sized> Borrowed<'a, C> {
    /// Wraps a container reference into a view.
    pub const fn new(container: &'a C) -> Self {
        Self { container }
    }
}

impl<C: Ordered + ?Sized> Clone for Borrowed<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Ordered + ?Sized> Copy for Borrowed<'_, C> {}

impl<'a, C: Ordered + ?Sized> Sequence for Borrowed<'a, C> {
    type Item = C::Item;
    type Distance = isize;
    type Cursor = BorrowedCursor<'a, C>;

    fn begin(&self) -> Self::Cursor {
        BorrowedCursor {
            container: self.container,
            position: self.container.start(),
        }
    }

    fn end(&self) -> Self::Cursor {
        BorrowedCursor {
            container: self.container,
            position: self.container.finish(),
        }
    }
}

/// Cursor over a [`Borrowed`] container view.
pub struct BorrowedCursor<'a, C: Ordered + ?Sized> {
    container: &'a C,
    position: C::Position,
}

impl<C: Ordered + ?Sized> Clone for BorrowedCursor<'_, C> {
    fn clone(&self) -> Self {
        Self {
            container: self.container,
            position: self.position.clone(),
        }
    }
}

impl<C: Ordered + ?Sized> PartialEq for BorrowedCursor<'_, C> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.container, other.container) && self.position == other.position
    }
}

impl<C: Ordered + ?Sized> Cursor for BorrowedCursor<'_, C> {
    type Item = C::Item;

    fn get(&self) -> Self::Item {
        self.container.item_at(&self.position)
    }

    fn advance(&mut self) {
        self.container.step_position(&mut self.position);
    }
}

/// Wraps a borrowed container into a [`Borrowed`] view.
///
/// This is the explicit head-of-pipe entry point: stage constructors
/// adapt their sources implicitly through
/// [`IntoSequence`](super::IntoSequence), but the `|` operator needs a
/// view on its left-hand side, so a raw container enters a pipe chain
/// through `view`.
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let values = vec![1, 2, 3, 4];
/// let collected: Vec<i32> = (view(&values) | take_n(2)).items().collect();
/// assert_eq!(collected, vec![1, 2]);
/// ```
pub const fn view<C: Ordered + ?Sized>(container: &C) -> Borrowed<'_, C> {
    Borrowed::new(container)
}
