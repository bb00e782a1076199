//! Pairing elements with a zero-based position counter.

use crate::sequence::{IntoSequence, Sequence};
use crate::stage::{InfiniteSequence, Pairing, ZipWith, infinite_sequence_from, zip};

/// The view type produced by [`enumerate`]: a zip of an infinite counter
/// with the source.
pub type Enumerate<S> = ZipWith<InfiniteSequence<usize>, S, Pairing<usize, <S as Sequence>::Item>>;

/// Creates a view pairing each element of `source` with its zero-based
/// position.
///
/// Defined as `zip(infinite_sequence_from(0), source)`: it inherits zip's
/// stop-at-the-shorter rule, so it always stops at the source's length
/// despite the unbounded counter.
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let indexed: Vec<(usize, char)> = enumerate("ABCD").items().collect();
/// assert_eq!(indexed, vec![(0, 'A'), (1, 'B'), (2, 'C'), (3, 'D')]);
/// ```
pub fn enumerate<S>(source: S) -> Enumerate<S::Seq>
where
    S: IntoSequence,
    <S::Seq as Sequence>::Item: Clone,
{
    zip(infinite_sequence_from(0usize), source)
}
