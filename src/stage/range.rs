//! Finite arithmetic progressions.

use std::fmt;
use std::ops::Add;

use crate::sequence::{Cursor, Sequence, impl_view_ops};

/// An integer type usable as a [`Range`] or
/// [`InfiniteSequence`](crate::stage::InfiniteSequence) element.
///
/// Implemented for all primitive integer types.
pub trait Step: Copy + PartialOrd + Add<Output = Self> {
    /// The additive identity.
    fn zero() -> Self;

    /// The unit step.
    fn one() -> Self;

    /// Adds `addend`, returning `None` instead of wrapping on overflow.
    fn checked_add(self, addend: Self) -> Option<Self>;
}

macro_rules! impl_step_for_integers {
    ($($integer:ty),* $(,)?) => {
        $(
            paste::paste! {
                #[doc = "`Step` over `" $integer "`."]
                impl Step for $integer {
                    fn zero() -> Self {
                        0
                    }

                    fn one() -> Self {
                        1
                    }

                    fn checked_add(self, addend: Self) -> Option<Self> {
                        <$integer>::checked_add(self, addend)
                    }
                }
            }
        )*
    };
}

impl_step_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Error returned when a [`Range`] is requested with a step of zero.
///
/// A zero step would never advance, turning traversal into a silent
/// infinite loop; construction fails fast instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RangeError {
    /// The requested step was zero.
    ZeroStep,
}

impl fmt::Display for RangeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroStep => write!(formatter, "range step must be non-zero"),
        }
    }
}

impl std::error::Error for RangeError {}

/// A view over the finite arithmetic progression `from, from + step, …`,
/// stopping at or before `to` without overshooting it.
///
/// `to` itself is never produced. If the step's sign disagrees with the
/// direction from `from` to `to`, the range is empty.
///
/// Created by [`range`], [`range_to`], or [`try_range`].
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let ascending: Vec<i32> = range(1, 10, 3).items().collect();
/// assert_eq!(ascending, vec![1, 4, 7]);
///
/// let descending: Vec<i32> = range(10, 0, -3).items().collect();
/// assert_eq!(descending, vec![10, 7, 4, 1]);
///
/// let mismatched: Vec<i32> = range(0, 4, -2).items().collect();
/// assert!(mismatched.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range<T> {
    from: T,
    to: T,
    step: T,
}

impl<T: Step> Sequence for Range<T> {
    type Item = T;
    type Distance = isize;
    type Cursor = RangeCursor<T>;

    fn begin(&self) -> Self::Cursor {
        let mismatched = (self.step < T::zero() && self.from < self.to)
            || (self.step > T::zero() && self.from > self.to);
        RangeCursor {
            current: if mismatched { self.to } else { self.from },
            to: self.to,
            step: self.step,
        }
    }

    fn end(&self) -> Self::Cursor {
        RangeCursor {
            current: self.to,
            to: self.to,
            step: self.step,
        }
    }
}

/// Cursor over a [`Range`] view.
///
/// The terminal position holds exactly `to`; advancing clamps to it
/// instead of overshooting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeCursor<T> {
    current: T,
    to: T,
    step: T,
}

impl<T: Step> Cursor for RangeCursor<T> {
    type Item = T;

    fn get(&self) -> T {
        assert!(
            self.current != self.to,
            "cursor dereferenced at the end of the range"
        );
        self.current
    }

    // Checked addition keeps every corner in bounds: a next value past
    // `to`, or one that does not exist in `T` at all, clamps to the
    // terminal position instead of wrapping.
    fn advance(&mut self) {
        let ascending = self.step > T::zero();
        self.current = match self.current.checked_add(self.step) {
            Some(next) if (ascending && next < self.to) || (!ascending && next > self.to) => next,
            _ => self.to,
        };
    }
}

/// Creates a [`Range`] view, validating the step.
///
/// # Errors
///
/// Returns [`RangeError::ZeroStep`] if `step` is zero.
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// assert!(try_range(0, 10, 2).is_ok());
/// assert_eq!(try_range(0, 10, 0), Err(RangeError::ZeroStep));
/// ```
pub fn try_range<T: Step>(from: T, to: T, step: T) -> Result<Range<T>, RangeError> {
    if step == T::zero() {
        return Err(RangeError::ZeroStep);
    }
    Ok(Range { from, to, step })
}

/// Creates a [`Range`] view over `from, from + step, …`, stopping before
/// `to`.
///
/// # Panics
///
/// Panics if `step` is zero; use [`try_range`] to handle that case
/// without panicking.
pub fn range<T: Step>(from: T, to: T, step: T) -> Range<T> {
    match try_range(from, to, step) {
        Ok(constructed) => constructed,
        Err(error) => panic!("{error}"),
    }
}

/// Creates a [`Range`] view over `0, 1, …, to - 1`.
///
/// # Examples
///
/// ```rust
/// use seqview::prelude::*;
///
/// let values: Vec<u8> = range_to(4u8).items().collect();
/// assert_eq!(values, vec![0, 1, 2, 3]);
/// ```
pub fn range_to<T: Step>(to: T) -> Range<T> {
    range(T::zero(), to, T::one())
}

impl_view_ops!([T] => Range<T>);
