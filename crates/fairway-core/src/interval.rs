// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Interval Model
//!
//! An interval bounded below and above by a [`Limit`]: a value paired with an
//! open/closed flag. Unlike a half-open `[start, end)` range, both ends carry
//! their own inclusion semantics, so `[3,5)` and `[3,5]` are distinct
//! intervals that behave differently when another interval touches them at 5.
//!
//! ## Highlights
//!
//! - Construction never enforces the structural invariant; [`Interval::validate`]
//!   checks it explicitly, and the merge engine validates every input. A
//!   checked [`Interval::try_new`] is available where early rejection is
//!   preferred.
//! - [`Interval::union`] implements the pairwise coalescing rule shared with
//!   the merge engine, exact at equal-value boundaries for all four openness
//!   combinations.
//! - `Display` renders the canonical bracket notation (`[2,5)`), which is
//!   also the grammar accepted by the `FromStr` impl in [`crate::parse`].

use crate::num::IntervalNumeric;
use std::cmp::Ordering;

/// One end of an interval: a bound value plus an openness flag.
///
/// An open limit excludes its value from the interval; a closed limit
/// includes it. The pair is immutable after construction.
///
/// # Examples
///
/// ```rust
/// # use fairway_core::interval::Limit;
///
/// let closed = Limit::closed(5);
/// let open = Limit::open(5);
/// assert_eq!(closed.value(), open.value());
/// assert!(closed.is_closed());
/// assert!(open.is_open());
/// ```
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Limit<T>
where
    T: IntervalNumeric,
{
    value: T,
    open: bool,
}

impl<T> Limit<T>
where
    T: IntervalNumeric,
{
    /// Creates a new limit from a bound value and an openness flag.
    #[inline]
    pub const fn new(value: T, open: bool) -> Self {
        Self { value, open }
    }

    /// Creates a closed (inclusive) limit.
    #[inline]
    pub const fn closed(value: T) -> Self {
        Self { value, open: false }
    }

    /// Creates an open (exclusive) limit.
    #[inline]
    pub const fn open(value: T) -> Self {
        Self { value, open: true }
    }

    /// Returns the bound value.
    #[inline]
    pub const fn value(&self) -> T {
        self.value
    }

    /// Returns `true` if the limit excludes its value.
    #[inline]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Returns `true` if the limit includes its value.
    #[inline]
    pub const fn is_closed(&self) -> bool {
        !self.open
    }
}

/// A contiguous range of a numeric type, bounded by two [`Limit`]s.
///
/// The structural invariant (`min.value() <= max.value()`, and a degenerate
/// single point only with both limits closed) is deliberately not enforced
/// by construction. [`Interval::validate`] checks it, and the
/// merge engine validates every input before doing any work, so an invalid
/// interval is reported against the caller's original data rather than
/// panicking inside a constructor.
///
/// # Examples
///
/// ```rust
/// # use fairway_core::interval::Interval;
///
/// let window = Interval::closed_open(8, 12);
/// assert!(window.contains(8));
/// assert!(!window.contains(12));
/// assert_eq!(window.to_string(), "[8,12)");
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Interval<T>
where
    T: IntervalNumeric,
{
    min: Limit<T>,
    max: Limit<T>,
}

/// The error type for structurally invalid intervals.
///
/// Every variant carries the offending interval, so callers can match on the
/// kind and still recover the exact input; the `Display` rendering embeds the
/// interval in canonical bracket notation for reproducible diagnostics.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum InvalidIntervalError<T>
where
    T: IntervalNumeric,
{
    /// The max bound value lies below the min bound value.
    ReversedBounds(Interval<T>),
    /// Both bound values are equal but at least one limit is open. Such an
    /// interval denotes the empty set, which is rejected as a modeling error
    /// rather than silently merged away.
    OpenPoint(Interval<T>),
    /// The bound values admit no ordering at all (a NaN bound on a
    /// floating-point instantiation).
    UnorderedBounds(Interval<T>),
}

impl<T> InvalidIntervalError<T>
where
    T: IntervalNumeric,
{
    /// Returns the offending interval.
    #[inline]
    pub const fn interval(&self) -> &Interval<T> {
        match self {
            Self::ReversedBounds(interval)
            | Self::OpenPoint(interval)
            | Self::UnorderedBounds(interval) => interval,
        }
    }
}

impl<T> std::fmt::Display for InvalidIntervalError<T>
where
    T: IntervalNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReversedBounds(interval) => {
                write!(f, "Invalid interval {}: max bound lies below min bound", interval)
            }
            Self::OpenPoint(interval) => {
                write!(
                    f,
                    "Invalid interval {}: a single-point interval must be closed on both sides",
                    interval
                )
            }
            Self::UnorderedBounds(interval) => {
                write!(f, "Invalid interval {}: bound values admit no ordering", interval)
            }
        }
    }
}

impl<T> std::error::Error for InvalidIntervalError<T> where T: IntervalNumeric {}

impl<T> Interval<T>
where
    T: IntervalNumeric,
{
    /// Creates a new interval from two limits.
    ///
    /// No invariant is checked here; see [`Interval::validate`] and
    /// [`Interval::try_new`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fairway_core::interval::{Interval, Limit};
    ///
    /// let iv = Interval::new(Limit::closed(3), Limit::open(5));
    /// assert_eq!(iv, Interval::closed_open(3, 5));
    /// ```
    #[inline]
    pub const fn new(min: Limit<T>, max: Limit<T>) -> Self {
        Self { min, max }
    }

    /// Creates a new interval if it is structurally valid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fairway_core::interval::{Interval, Limit};
    ///
    /// assert!(Interval::try_new(Limit::closed(3), Limit::closed(5)).is_ok());
    /// assert!(Interval::try_new(Limit::closed(5), Limit::closed(3)).is_err());
    /// ```
    #[inline]
    pub fn try_new(min: Limit<T>, max: Limit<T>) -> Result<Self, InvalidIntervalError<T>> {
        let interval = Self { min, max };
        interval.validate()?;
        Ok(interval)
    }

    /// Creates the interval `[min,max]` with both bounds closed.
    #[inline]
    pub const fn closed(min: T, max: T) -> Self {
        Self::new(Limit::closed(min), Limit::closed(max))
    }

    /// Creates the interval `(min,max)` with both bounds open.
    #[inline]
    pub const fn open(min: T, max: T) -> Self {
        Self::new(Limit::open(min), Limit::open(max))
    }

    /// Creates the interval `[min,max)`.
    #[inline]
    pub const fn closed_open(min: T, max: T) -> Self {
        Self::new(Limit::closed(min), Limit::open(max))
    }

    /// Creates the interval `(min,max]`.
    #[inline]
    pub const fn open_closed(min: T, max: T) -> Self {
        Self::new(Limit::open(min), Limit::closed(max))
    }

    /// Returns the lower limit.
    #[inline]
    pub const fn min(&self) -> Limit<T> {
        self.min
    }

    /// Returns the upper limit.
    #[inline]
    pub const fn max(&self) -> Limit<T> {
        self.max
    }

    /// Checks that the interval is structurally valid.
    ///
    /// An interval is invalid when its max bound value lies below its min
    /// bound value, when the two values are equal but either limit is open
    /// (an empty range), or when the two values cannot be ordered at all
    /// (NaN). A single point is representable only as closed/closed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fairway_core::interval::Interval;
    ///
    /// assert!(Interval::closed(3, 5).validate().is_ok());
    /// assert!(Interval::closed(-2, -2).validate().is_ok());
    /// assert!(Interval::closed(20, 10).validate().is_err());
    /// assert!(Interval::closed_open(-2, -2).validate().is_err());
    /// ```
    #[inline]
    pub fn validate(&self) -> Result<(), InvalidIntervalError<T>> {
        match self.min.value().partial_cmp(&self.max.value()) {
            None => Err(InvalidIntervalError::UnorderedBounds(*self)),
            Some(Ordering::Greater) => Err(InvalidIntervalError::ReversedBounds(*self)),
            Some(Ordering::Equal) if self.min.is_open() || self.max.is_open() => {
                Err(InvalidIntervalError::OpenPoint(*self))
            }
            Some(_) => Ok(()),
        }
    }

    /// Returns `true` if `value` lies inside the interval, honoring the
    /// openness of both limits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fairway_core::interval::Interval;
    ///
    /// let iv = Interval::open_closed(3, 5);
    /// assert!(!iv.contains(3));
    /// assert!(iv.contains(4));
    /// assert!(iv.contains(5));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        let above_min = if self.min.is_open() {
            value > self.min.value()
        } else {
            value >= self.min.value()
        };
        let below_max = if self.max.is_open() {
            value < self.max.value()
        } else {
            value <= self.max.value()
        };
        above_min && below_max
    }

    /// The ordering the merge engine sorts by: ascending min bound value,
    /// and at equal values the open limit before the closed one.
    ///
    /// The tie-break lets the sweep absorb a degenerate point into an
    /// open-bounded neighbor that starts at the same value: with `(5,9]`
    /// scheduled before `[5,5]`, the point falls inside the accumulator,
    /// whereas the reverse order would stop at the excluded touching bound.
    ///
    /// Min bound values that admit no ordering (NaN) are treated as equal,
    /// leaving only the openness tie-break; validation rejects such
    /// intervals before the engine ever sorts them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fairway_core::interval::Interval;
    /// # use std::cmp::Ordering;
    ///
    /// let open = Interval::open_closed(5, 10);
    /// let closed = Interval::closed(5, 8);
    /// assert_eq!(open.lower_bound_order(&closed), Ordering::Less);
    /// assert_eq!(closed.lower_bound_order(&open), Ordering::Greater);
    /// ```
    pub fn lower_bound_order(&self, other: &Self) -> Ordering {
        match self.min.value().partial_cmp(&other.min.value()) {
            Some(Ordering::Equal) | None => match (self.min.is_open(), other.min.is_open()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => Ordering::Equal,
            },
            Some(ordering) => ordering,
        }
    }

    /// Attempts to unite two intervals into one covering both.
    ///
    /// Returns `None` when the intervals leave a gap: either the bound
    /// values are strictly apart, or they touch at a single value that at
    /// least one of the touching limits excludes. Touching counts as
    /// contiguous only when both sides include the shared value.
    ///
    /// At equal bound values the united limit is open only when *both*
    /// contributing limits are open, so a value included by either input
    /// stays included in the union. The operation is symmetric.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fairway_core::interval::Interval;
    ///
    /// let a = Interval::closed(3, 5);
    /// assert_eq!(a.union(Interval::closed(5, 10)), Some(Interval::closed(3, 10)));
    ///
    /// // The shared point 5 is excluded by the right interval: a real gap.
    /// assert_eq!(a.union(Interval::open_closed(5, 10)), None);
    ///
    /// // [3,5) stops short of 5, [5,10] starts at it, but 5 itself is
    /// // excluded on the left side.
    /// assert_eq!(Interval::closed_open(3, 5).union(Interval::closed(5, 10)), None);
    /// ```
    pub fn union(&self, other: Self) -> Option<Self> {
        let (lo, hi) = match self.lower_bound_order(&other) {
            Ordering::Greater => (other, *self),
            _ => (*self, other),
        };

        match lo.max.value().partial_cmp(&hi.min.value()) {
            Some(Ordering::Less) | None => return None,
            Some(Ordering::Equal) if lo.max.is_open() || hi.min.is_open() => return None,
            Some(_) => {}
        }

        let min = if lo.min.value() == hi.min.value() {
            Limit::new(lo.min.value(), lo.min.is_open() && hi.min.is_open())
        } else {
            lo.min
        };
        let max = match lo.max.value().partial_cmp(&hi.max.value()) {
            Some(Ordering::Greater) => lo.max,
            Some(Ordering::Equal) => {
                Limit::new(lo.max.value(), lo.max.is_open() && hi.max.is_open())
            }
            _ => hi.max,
        };

        Some(Self { min, max })
    }
}

impl<T> std::fmt::Display for Interval<T>
where
    T: IntervalNumeric,
{
    /// Renders the canonical bracket notation: `[` / `(` for the min limit,
    /// `]` / `)` for the max limit, the two values separated by a bare comma.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let min_delimiter = if self.min.is_open() { '(' } else { '[' };
        let max_delimiter = if self.max.is_open() { ')' } else { ']' };
        write!(
            f,
            "{}{},{}{}",
            min_delimiter,
            self.min.value(),
            self.max.value(),
            max_delimiter
        )
    }
}

impl<T> std::fmt::Debug for Interval<T>
where
    T: IntervalNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interval")
            .field("min", &self.min)
            .field("max", &self.max)
            .finish()
    }
}
