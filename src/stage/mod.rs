//! The stage combinators: views produced by wrapping one or two source
//! views plus, where applicable, a transformation or predicate.
//!
//! Each stage's cursor lazily computes the next or derived element on
//! demand; constructing a stage never iterates. Stages are themselves
//! [`Sequence`](crate::sequence::Sequence)s, so they nest arbitrarily.

mod enumerate;
mod filter;
mod infinite;
mod map;
mod range;
mod take;
mod zip_with;

pub use enumerate::{Enumerate, enumerate};
pub use filter::{Filter, FilterCursor, filter};
pub use infinite::{InfiniteCursor, InfiniteSequence, infinite_sequence, infinite_sequence_from};
pub use map::{Map, MapCursor, map};
pub use range::{Range, RangeCursor, RangeError, Step, range, range_to, try_range};
pub use take::{Take, TakeCursor, take};
pub use zip_with::{Pairing, ZipCursor, ZipWith, zip, zip_with};

// Views stay cheap to copy; the ones without callables are plain `Copy`
// data, and shared callables (`Rc`) pin every view to a single thread.
static_assertions::assert_impl_all!(Range<i64>: Copy, Send, Sync);
static_assertions::assert_impl_all!(InfiniteSequence<u32>: Copy, Send, Sync);
static_assertions::assert_not_impl_any!(Map<Range<i64>, fn(i64) -> i64>: Send, Sync);
static_assertions::assert_not_impl_any!(Filter<Range<i64>, fn(&i64) -> bool>: Send, Sync);
