//! Point-free pipeline composition through the `|` operator.
//!
//! A *deferred stage* is a small value holding a stage constructor's
//! non-source arguments. Applying it to a source — which the pipe
//! operator does — produces the fully constructed stage view, so
//!
//! ```text
//! view(&a) | map_with(f) | filter_with(p) | take_n(n)
//! ```
//!
//! is exactly `take(filter(map(&a, f), p), n)`: left-to-right
//! application, each stage receiving the previous stage's view as its
//! source. No stage has a side effect at construction time; only
//! terminal iteration triggers evaluation.
//!
//! The operator itself is implemented on every concrete view type (the
//! coherence rules rule out a blanket implementation over arbitrary
//! left-hand sides), so a raw container enters a chain through
//! [`view`](crate::sequence::view).

use crate::sequence::{IntoSequence, Sequence};
use crate::stage::{Enumerate, Filter, Map, Take, enumerate, filter, map, take};

/// A deferred stage: a stage constructor with everything except the
/// source pre-bound, applicable to any source on the left of `|`.
pub trait PipeStage<S> {
    /// The view the stage constructs.
    type Output: Sequence;

    /// Applies the stage to `source`, constructing its view. Never
    /// iterates.
    fn apply(self, source: S) -> Self::Output;
}

/// Deferred [`map`] stage created by [`map_with`].
pub struct MapWith<F> {
    function: F,
}

/// Creates a deferred [`map`] stage for pipe composition.
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let values = vec![1, 2, 3];
/// let doubled: Vec<i32> = (view(&values) | map_with(|value: i32| value * 2))
///     .items()
///     .collect();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub const fn map_with<F>(function: F) -> MapWith<F> {
    MapWith { function }
}

impl<S, F, O> PipeStage<S> for MapWith<F>
where
    S: IntoSequence,
    O: Clone,
    F: Fn(<S::Seq as Sequence>::Item) -> O,
{
    type Output = Map<S::Seq, F>;

    fn apply(self, source: S) -> Self::Output {
        map(source, self.function)
    }
}

/// Deferred [`filter`] stage created by [`filter_with`].
pub struct FilterWith<P> {
    predicate: P,
}

/// Creates a deferred [`filter`] stage for pipe composition.
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let odd: Vec<i32> = (range(0, 6, 1) | filter_with(|value: &i32| value % 2 == 1))
///     .items()
///     .collect();
/// assert_eq!(odd, vec![1, 3, 5]);
/// ```
pub const fn filter_with<P>(predicate: P) -> FilterWith<P> {
    FilterWith { predicate }
}

impl<S, P> PipeStage<S> for FilterWith<P>
where
    S: IntoSequence,
    P: Fn(&<S::Seq as Sequence>::Item) -> bool,
{
    type Output = Filter<S::Seq, P>;

    fn apply(self, source: S) -> Self::Output {
        filter(source, self.predicate)
    }
}

/// Deferred [`take`] stage created by [`take_n`].
#[derive(Debug, Clone, Copy)]
pub struct TakeCount {
    count: usize,
}

/// Creates a deferred [`take`] stage for pipe composition.
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let bounded: Vec<i32> = (infinite_sequence(7, 1) | take_n(3)).items().collect();
/// assert_eq!(bounded, vec![7, 8, 9]);
/// ```
pub const fn take_n(count: usize) -> TakeCount {
    TakeCount { count }
}

impl<S: IntoSequence> PipeStage<S> for TakeCount {
    type Output = Take<S::Seq>;

    fn apply(self, source: S) -> Self::Output {
        take(source, self.count)
    }
}

/// Deferred [`enumerate`] stage created by [`enumerated`].
#[derive(Debug, Clone, Copy)]
pub struct Enumerated;

/// Creates a deferred [`enumerate`] stage for pipe composition.
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let indexed: Vec<(usize, char)> = (view("AB") | enumerated()).items().collect();
/// assert_eq!(indexed, vec![(0, 'A'), (1, 'B')]);
/// ```
pub const fn enumerated() -> Enumerated {
    Enumerated
}

impl<S> PipeStage<S> for Enumerated
where
    S: IntoSequence,
    <S::Seq as Sequence>::Item: Clone,
{
    type Output = Enumerate<S::Seq>;

    fn apply(self, source: S) -> Self::Output {
        enumerate(source)
    }
}
