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

//! # Intervals
//!
//! [`Interval<T, S>`] is an immutable range between two values of an ordered domain `T`,
//! measured in distances of type `S` (which defaults to `T`). Each bound is independently
//! included or excluded, and the start may lie after the end, in which case the interval is
//! *reversed*: it covers the same values as its forward counterpart but runs the other way.
//!
//! Internally the bounds are always kept in canonical order (`low <= high`). The oriented
//! view (`start`/`end`) is derived from the canonical one and the `reversed` flag, which
//! makes [`Interval::reverse`] an O(1) operation.
//!
//! Every operation returns a new interval; nothing is ever mutated in place.

use crate::{
    config::ScaleConfig,
    domain::{IntervalDomain, IntervalSize},
    err::IntervalError,
    iter::StepIter,
};
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Bound, Range, RangeBounds, RangeInclusive},
};
use tracing::{debug, instrument};

/// Determines in which part(s) the split point ends up when splitting an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitOption {
    /// The split point is included in the part before it.
    Left,
    /// The split point is included in the part after it.
    Right,
    /// The split point is included in both parts.
    Both,
    /// The split point is included in neither part.
    Neither,
}

impl SplitOption {
    #[inline]
    fn includes_left(self) -> bool {
        matches!(self, SplitOption::Left | SplitOption::Both)
    }

    #[inline]
    fn includes_right(self) -> bool {
        matches!(self, SplitOption::Right | SplitOption::Both)
    }
}

/// An immutable interval from a start value to an end value, where either bound may be
/// included or excluded.
///
/// # Invariants
///
/// - `low <= high` at all times; `reversed` tells whether `start` is `high`.
/// - A single-point interval (`low == high`) either includes both bounds or neither.
///
/// # Examples
///
/// ```
/// use interval_core::interval::Interval;
///
/// let iv = Interval::new(0, true, 10, false).unwrap(); // [0, 10)
/// assert!(iv.contains(0));
/// assert!(iv.contains(9));
/// assert!(!iv.contains(10));
/// assert_eq!(iv.size(), 10);
///
/// let reversed = Interval::new(10, false, 0, true).unwrap(); // (10, 0]
/// assert!(reversed.is_reversed());
/// assert_eq!(reversed.start(), 10);
/// assert_eq!(reversed.low(), 0);
/// assert_eq!(reversed.reverse(), iv);
/// ```
pub struct Interval<T, S = T> {
    low: T,
    high: T,
    low_included: bool,
    high_included: bool,
    reversed: bool,
    _size: PhantomData<fn() -> S>,
}

/// An interval over `i32` values.
pub type IntInterval = Interval<i32>;

impl<T, S> Interval<T, S>
where
    T: IntervalDomain<S>,
    S: IntervalSize,
{
    /// Creates a new interval from `start` to `end`.
    ///
    /// When `start > end` the interval is reversed; the inclusion flags stay paired with the
    /// bound they were passed with.
    ///
    /// # Errors
    ///
    /// - [`IntervalError::DegeneratePoint`] when `start == end` but only one of the two
    ///   bounds is included, e.g. `(0, 0]`.
    /// - [`IntervalError::IncomparableBounds`] when the bounds cannot be ordered (`NaN`).
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_core::{err::IntervalError, interval::Interval};
    ///
    /// assert!(Interval::new(0, true, 10, true).is_ok());
    /// assert!(Interval::new(5, true, 5, true).is_ok());
    /// assert_eq!(
    ///     Interval::new(5, true, 5, false).unwrap_err(),
    ///     IntervalError::DegeneratePoint
    /// );
    /// assert_eq!(
    ///     Interval::new(f64::NAN, true, 1.0, true).unwrap_err(),
    ///     IntervalError::IncomparableBounds
    /// );
    /// ```
    pub fn new(
        start: T,
        start_included: bool,
        end: T,
        end_included: bool,
    ) -> Result<Self, IntervalError> {
        let Some(ordering) = start.partial_cmp(&end) else {
            debug!(?start, ?end, "rejected interval with incomparable bounds");
            return Err(IntervalError::IncomparableBounds);
        };

        if ordering == Ordering::Equal && start_included != end_included {
            debug!(
                point = ?start,
                start_included,
                end_included,
                "rejected half-open single-point interval"
            );
            return Err(IntervalError::DegeneratePoint);
        }

        Ok(match ordering {
            Ordering::Greater => Self::from_canonical(end, end_included, start, start_included, true),
            _ => Self::from_canonical(start, start_included, end, end_included, false),
        })
    }

    /// Creates the closed interval `[start, end]`.
    ///
    /// # Errors
    ///
    /// [`IntervalError::IncomparableBounds`] when the bounds cannot be ordered.
    #[inline]
    pub fn closed(start: T, end: T) -> Result<Self, IntervalError> {
        Self::new(start, true, end, true)
    }

    /// Creates the open interval `(start, end)`.
    ///
    /// # Errors
    ///
    /// [`IntervalError::IncomparableBounds`] when the bounds cannot be ordered.
    #[inline]
    pub fn open(start: T, end: T) -> Result<Self, IntervalError> {
        Self::new(start, false, end, false)
    }

    /// Builds an interval from bounds that are already in canonical order.
    #[inline]
    fn from_canonical(
        low: T,
        low_included: bool,
        high: T,
        high_included: bool,
        reversed: bool,
    ) -> Self {
        debug_assert!(low <= high, "canonical interval requires low <= high");
        debug_assert!(
            low != high || low_included == high_included,
            "single-point interval must include both bounds or neither"
        );
        Self {
            low,
            high,
            low_included,
            high_included,
            reversed,
            _size: PhantomData,
        }
    }

    /// The start of the interval, as it was passed on construction.
    #[inline]
    pub fn start(&self) -> T {
        if self.reversed { self.high } else { self.low }
    }

    /// The end of the interval, as it was passed on construction.
    #[inline]
    pub fn end(&self) -> T {
        if self.reversed { self.low } else { self.high }
    }

    /// Whether the value at [`start`](Self::start) is part of the interval.
    #[inline]
    pub fn is_start_included(&self) -> bool {
        if self.reversed {
            self.high_included
        } else {
            self.low_included
        }
    }

    /// Whether the value at [`end`](Self::end) is part of the interval.
    #[inline]
    pub fn is_end_included(&self) -> bool {
        if self.reversed {
            self.low_included
        } else {
            self.high_included
        }
    }

    /// `true` when the start of the interval lies after its end.
    #[inline]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// The smallest bound, regardless of orientation.
    #[inline]
    pub fn low(&self) -> T {
        self.low
    }

    /// The largest bound, regardless of orientation.
    #[inline]
    pub fn high(&self) -> T {
        self.high
    }

    /// Whether the value at [`low`](Self::low) is part of the interval.
    #[inline]
    pub fn is_low_included(&self) -> bool {
        self.low_included
    }

    /// Whether the value at [`high`](Self::high) is part of the interval.
    #[inline]
    pub fn is_high_included(&self) -> bool {
        self.high_included
    }

    /// Returns `true` when the interval does not contain any value, i.e. it is a single
    /// point whose bounds are both excluded.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_core::interval::Interval;
    ///
    /// assert!(Interval::open(3, 3).unwrap().is_empty());
    /// assert!(!Interval::closed(3, 3).unwrap().is_empty());
    /// assert!(!Interval::open(3, 4).unwrap().is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.low == self.high && !self.low_included
    }

    /// The distance between the two bounds. Never negative.
    ///
    /// # Panics
    ///
    /// When the distance is not representable in `S`, e.g. `[-100, 100]` over `i8`, the
    /// subtraction overflows (a panic in debug builds). The same holds for every
    /// operation derived from the size: [`center`](Self::center),
    /// [`value_at`](Self::value_at), [`percentage_for`](Self::percentage_for),
    /// [`map`](Self::map) and [`scale`](Self::scale).
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_core::interval::Interval;
    ///
    /// assert_eq!(Interval::closed(2, 7).unwrap().size(), 5);
    /// assert_eq!(Interval::closed(7, 2).unwrap().size(), 5);
    /// ```
    #[inline]
    pub fn size(&self) -> S {
        self.high.distance(self.low)
    }

    /// The value in the center of the interval, rounded to the nearest value for
    /// integral domains.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_core::interval::Interval;
    ///
    /// assert_eq!(Interval::closed(0, 10).unwrap().center(), 5);
    /// assert_eq!(Interval::closed(0.0, 5.0).unwrap().center(), 2.5);
    /// ```
    #[inline]
    pub fn center(&self) -> T {
        self.value_at(0.5)
    }

    /// Returns the same interval in forward (non-reversed) orientation.
    #[inline]
    fn forward(&self) -> Self {
        if self.reversed { self.reverse() } else { *self }
    }

    /// Returns `true` when `value` lies within the interval.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_core::interval::Interval;
    ///
    /// let iv = Interval::new(0, false, 10, true).unwrap(); // (0, 10]
    /// assert!(!iv.contains(0));
    /// assert!(iv.contains(1));
    /// assert!(iv.contains(10));
    /// assert!(!iv.contains(11));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        let above_low = value > self.low || (value == self.low && self.low_included);
        let below_high = value < self.high || (value == self.high && self.high_included);
        above_low && below_high
    }

    /// Returns `true` when this interval and `other` share at least one value.
    ///
    /// Intervals that touch at a single bound only intersect when both of them include it.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_core::interval::Interval;
    ///
    /// let a = Interval::closed(0, 5).unwrap();
    /// assert!(a.intersects(&Interval::closed(5, 10).unwrap()));
    /// assert!(!a.intersects(&Interval::new(5, false, 10, true).unwrap()));
    /// assert!(a.intersects(&Interval::closed(10, 3).unwrap()));
    /// assert!(!a.intersects(&Interval::closed(6, 10).unwrap()));
    /// ```
    pub fn intersects(&self, other: &Self) -> bool {
        let other = other.forward();

        let lies_right_of = other.low > self.high
            || (other.low == self.high && !(other.low_included && self.high_included));
        let lies_left_of = other.high < self.low
            || (other.high == self.low && !(other.high_included && self.low_included));

        !(lies_right_of || lies_left_of)
    }

    /// Returns the values this interval shares with `other`, or `None` when they do not
    /// intersect. The result keeps the orientation of `self`.
    ///
    /// On a shared bound the result only includes it when both intervals do.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_core::interval::Interval;
    ///
    /// let a = Interval::closed(0, 10).unwrap();
    /// let b = Interval::new(5, false, 15, true).unwrap();
    /// assert_eq!(a.intersection(&b), Some(Interval::new(5, false, 10, true).unwrap()));
    /// assert_eq!(a.intersection(&Interval::closed(11, 15).unwrap()), None);
    /// ```
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }
        let other = other.forward();

        let (low, low_included) = match self.low.partial_cmp(&other.low) {
            Some(Ordering::Greater) => (self.low, self.low_included),
            Some(Ordering::Equal) => (self.low, self.low_included && other.low_included),
            _ => (other.low, other.low_included),
        };
        let (high, high_included) = match self.high.partial_cmp(&other.high) {
            Some(Ordering::Less) => (self.high, self.high_included),
            Some(Ordering::Equal) => (self.high, self.high_included && other.high_included),
            _ => (other.high, other.high_included),
        };

        Some(Self::from_canonical(
            low,
            low_included,
            high,
            high_included,
            self.reversed,
        ))
    }

    /// Limits `range` to this interval. Parts of `range` lying outside of `self` are cut
    /// off; `None` is returned when nothing remains. The result keeps the orientation
    /// of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_core::interval::Interval;
    ///
    /// let bounds = Interval::closed(0, 10).unwrap();
    /// let clamped = bounds.clamp(&Interval::new(-5, true, 5, false).unwrap()).unwrap();
    /// assert_eq!(clamped, Interval::new(0, true, 5, false).unwrap());
    /// assert!(bounds.clamp(&Interval::closed(20, 30).unwrap()).is_none());
    /// ```
    pub fn clamp(&self, range: &Self) -> Option<Self> {
        let intersection = self.intersection(range)?.forward();
        let range = range.forward();

        let (low, low_included) = if self.low <= range.low {
            (range.low, intersection.low_included)
        } else {
            (self.low, self.low_included)
        };
        let (high, high_included) = if self.high >= range.high {
            (range.high, intersection.high_included)
        } else {
            (self.high, self.high_included)
        };

        Some(Self::from_canonical(
            low,
            low_included,
            high,
            high_included,
            self.reversed,
        ))
    }

    /// Limits a single value to this interval, snapping values outside of it to the
    /// nearest bound.
    ///
    /// Whether the bound is included is not taken into account: clamping a value beyond an
    /// excluded bound still returns that bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_core::interval::Interval;
    ///
    /// let iv = Interval::open(0, 10).unwrap();
    /// assert_eq!(iv.clamp_value(-3), 0);
    /// assert_eq!(iv.clamp_value(4), 4);
    /// assert_eq!(iv.clamp_value(42), 10);
    /// ```
    #[inline]
    pub fn clamp_value(&self, value: T) -> T {
        if value < self.low {
            self.low
        } else if value > self.high {
            self.high
        } else {
            value
        }
    }

    /// Removes all values of `other` from this interval.
    ///
    /// # Returns
    ///
    /// A `Vec` containing:
    /// * 0 intervals: `other` covers `self` entirely.
    /// * 1 interval: `other` clips one side of `self`, or does not intersect it at all.
    /// * 2 intervals: `other` lies strictly within `self`, punching a hole into it.
    ///
    /// When `self` is reversed every remaining part is reversed as well, and the parts are
    /// ordered from start to end.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_core::interval::Interval;
    ///
    /// let a = Interval::closed(0, 10).unwrap();
    /// let parts = a.subtract(&Interval::closed(4, 6).unwrap());
    /// assert_eq!(
    ///     parts,
    ///     vec![
    ///         Interval::new(0, true, 4, false).unwrap(),
    ///         Interval::new(6, false, 10, true).unwrap(),
    ///     ]
    /// );
    /// assert!(a.subtract(&a).is_empty());
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn subtract(&self, other: &Self) -> Vec<Self> {
        let other = other.forward();

        if other.is_empty() || !self.intersects(&other) {
            return vec![*self];
        }

        let mut parts = Vec::with_capacity(2);

        if self.contains(other.low) {
            let remains_in_front = other.low > self.low
                || (other.low == self.low && self.low_included && !other.low_included);
            if remains_in_front {
                parts.push(Self::from_canonical(
                    self.low,
                    self.low_included,
                    other.low,
                    !other.low_included,
                    self.reversed,
                ));
            }
        }

        if self.contains(other.high) {
            let remains_at_back = other.high < self.high
                || (other.high == self.high && self.high_included && !other.high_included);
            if remains_at_back {
                parts.push(Self::from_canonical(
                    other.high,
                    !other.high_included,
                    self.high,
                    self.high_included,
                    self.reversed,
                ));
            }
        }

        if self.reversed {
            parts.reverse();
        }
        parts
    }

    /// Splits the interval at `at` into the part from [`start`](Self::start) to `at` and
    /// the part from `at` to [`end`](Self::end).
    ///
    /// `option` decides in which part(s) `at` itself ends up; `at` is only ever included
    /// when it belongs to this interval. A part which would consist of nothing but an
    /// excluded split point is `None`.
    ///
    /// # Errors
    ///
    /// [`IntervalError::SplitOutOfRange`] when `at` does not lie within `[low, high]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_core::interval::{Interval, SplitOption};
    ///
    /// let iv = Interval::closed(0, 10).unwrap();
    /// let (before, after) = iv.split(4, SplitOption::Left).unwrap();
    /// assert_eq!(before, Some(Interval::closed(0, 4).unwrap()));
    /// assert_eq!(after, Some(Interval::new(4, false, 10, true).unwrap()));
    ///
    /// let (before, after) = iv.split(0, SplitOption::Right).unwrap();
    /// assert_eq!(before, None);
    /// assert_eq!(after, Some(iv));
    ///
    /// assert!(iv.split(11, SplitOption::Both).is_err());
    /// ```
    #[instrument(level = "trace", skip_all)]
    #[allow(clippy::type_complexity)]
    pub fn split(
        &self,
        at: T,
        option: SplitOption,
    ) -> Result<(Option<Self>, Option<Self>), IntervalError> {
        if !(at >= self.low && at <= self.high) {
            debug!(?at, low = ?self.low, high = ?self.high, "split point outside of interval");
            return Err(IntervalError::SplitOutOfRange);
        }

        let at_included = self.contains(at);
        let include_left = option.includes_left() && at_included;
        let include_right = option.includes_right() && at_included;

        let start = self.start();
        let before = if at != start || include_left {
            Some(Self::new(start, self.is_start_included(), at, include_left)?)
        } else {
            None
        };

        let end = self.end();
        let after = if at != end || include_right {
            Some(Self::new(at, include_right, end, self.is_end_included())?)
        } else {
            None
        };

        Ok((before, after))
    }

    /// Returns the value at `percentage` of the way from [`low`](Self::low) to
    /// [`high`](Self::high). Percentages outside `[0, 1]` extrapolate beyond the interval.
    ///
    /// Integral domains round to the nearest value, with ties going to the even value.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_core::interval::Interval;
    ///
    /// let iv = Interval::closed(0, 100).unwrap();
    /// assert_eq!(iv.value_at(0.25), 25);
    /// assert_eq!(iv.value_at(1.5), 150);
    /// assert_eq!(iv.value_at(-0.1), -10);
    /// ```
    pub fn value_at(&self, percentage: f64) -> T {
        let mut scalar = percentage * self.size().to_f64();
        if T::INTEGRAL {
            scalar = scalar.round_ties_even();
        }
        self.low.add_size(S::from_f64(scalar))
    }

    /// Returns how far `position` lies within (`0.0..=1.0`) or outside of the interval,
    /// measured from [`start`](Self::start). Positions before the start yield negative
    /// percentages.
    ///
    /// For a zero-size interval the result is `1.0` when `position` lies in it and `-1.0`
    /// otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_core::interval::Interval;
    ///
    /// let iv = Interval::closed(0, 10).unwrap();
    /// assert_eq!(iv.percentage_for(5), 0.5);
    /// assert_eq!(iv.percentage_for(-5), -0.5);
    /// assert_eq!(iv.reverse().percentage_for(2), 0.8);
    ///
    /// let point = Interval::closed(5, 5).unwrap();
    /// assert_eq!(point.percentage_for(5), 1.0);
    /// assert_eq!(point.percentage_for(6), -1.0);
    /// ```
    pub fn percentage_for(&self, position: T) -> f64 {
        let size = self.size().to_f64();
        if size == 0.0 {
            return if self.contains(position) { 1.0 } else { -1.0 };
        }

        let start = self.start();
        let offset = if position >= start {
            position.distance(start)
        } else {
            start.distance(position)
        };
        let percentage = offset.to_f64() / size;

        let lies_before_start = if self.reversed {
            position > start
        } else {
            position < start
        };
        if lies_before_start {
            -percentage
        } else {
            percentage
        }
    }

    /// Maps `value` linearly from this interval onto `range`, which may be of another domain.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_core::interval::Interval;
    ///
    /// let celsius = Interval::closed(0.0, 100.0).unwrap();
    /// let fahrenheit = Interval::closed(32.0, 212.0).unwrap();
    /// assert_eq!(celsius.map(50.0, &fahrenheit), 122.0);
    ///
    /// let percent = Interval::closed(0, 100).unwrap();
    /// assert_eq!(percent.map(25, &Interval::closed(0.0, 1.0).unwrap()), 0.25);
    /// ```
    #[inline]
    pub fn map<U, US>(&self, value: T, range: &Interval<U, US>) -> U
    where
        U: IntervalDomain<US>,
        US: IntervalSize,
    {
        range.value_at(self.percentage_for(value))
    }

    /// Returns the interval expanded up to and including `value`. When `value` already
    /// lies within the bounds the interval is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_core::interval::Interval;
    ///
    /// let iv = Interval::open(0, 10).unwrap();
    /// assert_eq!(iv.expand_to(15), Interval::new(0, false, 15, true).unwrap());
    /// assert_eq!(iv.expand_to(5), iv);
    /// ```
    #[inline]
    pub fn expand_to(&self, value: T) -> Self {
        self.expand_to_with(value, true)
    }

    /// Returns the interval expanded up to `value`, including `value` when `include` is set.
    ///
    /// A bound reached by `value` keeps being included if it already was.
    pub fn expand_to_with(&self, value: T, include: bool) -> Self {
        let (mut low, mut low_included) = (self.low, self.low_included);
        let (mut high, mut high_included) = (self.high, self.high_included);

        if value <= self.low {
            low = value;
            low_included |= include;
        }
        if value >= self.high {
            high = value;
            high_included |= include;
        }

        Self::from_canonical(low, low_included, high, high_included, self.reversed)
    }

    /// Returns the interval moved by `amount`. Inclusion and orientation are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_core::interval::Interval;
    ///
    /// let iv = Interval::new(0, true, 10, false).unwrap();
    /// assert_eq!(iv.translate(5), Interval::new(5, true, 15, false).unwrap());
    /// assert_eq!(iv.reverse().translate(-5), Interval::new(5, false, -5, true).unwrap());
    /// ```
    #[inline]
    pub fn translate(&self, amount: S) -> Self {
        Self::from_canonical(
            self.low.add_size(amount),
            self.low_included,
            self.high.add_size(amount),
            self.high_included,
            self.reversed,
        )
    }

    /// Returns the interval scaled by `factor` around its center.
    ///
    /// # Errors
    ///
    /// [`IntervalError::DegeneratePoint`] when scaling collapses a half-open interval
    /// onto a single point.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_core::interval::Interval;
    ///
    /// let iv = Interval::closed(0, 20).unwrap();
    /// assert_eq!(iv.scale(0.5).unwrap(), Interval::closed(5, 15).unwrap());
    /// assert_eq!(iv.scale(2.0).unwrap(), Interval::closed(-10, 30).unwrap());
    /// ```
    #[inline]
    pub fn scale(&self, factor: f64) -> Result<Self, IntervalError> {
        self.scale_with(factor, &ScaleConfig::default())
    }

    /// Returns the interval scaled by `factor` around `config.around` (a percentage of the
    /// interval). When the interval grows and `config.limit` is set, bounds crossing the
    /// limit snap to it.
    ///
    /// # Errors
    ///
    /// [`IntervalError::DegeneratePoint`] when scaling collapses a half-open interval
    /// onto a single point.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_core::{config::ScaleConfig, interval::Interval};
    ///
    /// let iv = Interval::closed(0, 10).unwrap();
    /// let config = ScaleConfig {
    ///     limit: Some(Interval::closed(-2, 12).unwrap()),
    ///     ..ScaleConfig::default()
    /// };
    /// assert_eq!(iv.scale_with(2.0, &config).unwrap(), Interval::closed(-2, 12).unwrap());
    ///
    /// let anchored_left = ScaleConfig { around: 0.0, limit: None };
    /// assert_eq!(iv.scale_with(2.0, &anchored_left).unwrap(), Interval::closed(0, 20).unwrap());
    /// ```
    pub fn scale_with(&self, factor: f64, config: &ScaleConfig<T, S>) -> Result<Self, IntervalError> {
        let size = self.size();
        let scaled_size = S::from_f64(size.to_f64() * factor);
        let size_delta = size.difference(scaled_size);

        let low_delta = S::from_f64(size_delta.to_f64() * config.around);
        let high_delta = size_delta.difference(low_delta);

        let growing = factor > 1.0;
        let limit = config.limit.map(|limit| limit.forward());

        let low = match limit {
            Some(limit) if growing && low_delta < limit.low.distance(self.low) => limit.low,
            _ => self.low.add_size(low_delta),
        };
        let high = match limit {
            Some(limit) if growing && self.high.distance(limit.high) > high_delta => limit.high,
            _ => self.high.sub_size(high_delta),
        };

        let scaled = Self::new(low, self.low_included, high, self.high_included)?;
        Ok(if self.reversed {
            scaled.reverse()
        } else {
            scaled
        })
    }

    /// Returns the interval with start and end swapped.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_core::interval::Interval;
    ///
    /// let iv = Interval::new(0, true, 10, false).unwrap();
    /// let reversed = iv.reverse();
    /// assert_eq!(reversed.start(), 10);
    /// assert!(!reversed.is_start_included());
    /// assert_eq!(reversed.reverse(), iv);
    /// ```
    #[inline]
    pub fn reverse(&self) -> Self {
        Self {
            reversed: !self.reversed,
            ..*self
        }
    }

    /// Returns an iterator over the values from [`start`](Self::start) towards
    /// [`end`](Self::end) in steps of `step`.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_core::interval::Interval;
    ///
    /// let iv = Interval::new(0, false, 10, true).unwrap();
    /// let values: Vec<_> = iv.values(3).collect();
    /// assert_eq!(values, vec![3, 6, 9]);
    /// ```
    #[inline]
    pub fn values(&self, step: S) -> StepIter<T, S> {
        StepIter::new(*self, step, None)
    }

    /// Like [`values`](Self::values), but aligned to multiples of `step` away from `anchor`.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_core::interval::Interval;
    ///
    /// let iv = Interval::closed(2, 20).unwrap();
    /// let values: Vec<_> = iv.values_anchored(5, 0).collect();
    /// assert_eq!(values, vec![5, 10, 15, 20]);
    /// ```
    #[inline]
    pub fn values_anchored(&self, step: S, anchor: T) -> StepIter<T, S> {
        StepIter::new(*self, step, Some(anchor))
    }

    /// Calls `action` for every value produced by [`values`](Self::values).
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_core::interval::Interval;
    ///
    /// let mut sum = 0;
    /// Interval::closed(1, 4).unwrap().every_step_of(1, |v| sum += v);
    /// assert_eq!(sum, 10);
    /// ```
    #[inline]
    pub fn every_step_of<F>(&self, step: S, action: F)
    where
        F: FnMut(T),
    {
        self.values(step).for_each(action);
    }
}

impl<T: Copy, S> Clone for Interval<T, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy, S> Copy for Interval<T, S> {}

impl<T: PartialEq, S> PartialEq for Interval<T, S> {
    /// Two intervals are equal when they have the same bounds, the same inclusion and the
    /// same orientation.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.low == other.low
            && self.high == other.high
            && self.low_included == other.low_included
            && self.high_included == other.high_included
            && self.reversed == other.reversed
    }
}

impl<T: Eq, S> Eq for Interval<T, S> {}

impl<T: Hash, S> Hash for Interval<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.low.hash(state);
        self.high.hash(state);
        self.low_included.hash(state);
        self.high_included.hash(state);
        self.reversed.hash(state);
    }
}

impl<T: fmt::Debug, S> fmt::Debug for Interval<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start, start_included, end, end_included) = if self.reversed {
            (&self.high, self.high_included, &self.low, self.low_included)
        } else {
            (&self.low, self.low_included, &self.high, self.high_included)
        };
        f.debug_struct("Interval")
            .field("start", start)
            .field("start_included", &start_included)
            .field("end", end)
            .field("end_included", &end_included)
            .field("reversed", &self.reversed)
            .finish()
    }
}

impl<T, S> RangeBounds<T> for Interval<T, S> {
    fn start_bound(&self) -> Bound<&T> {
        if self.low_included {
            Bound::Included(&self.low)
        } else {
            Bound::Excluded(&self.low)
        }
    }

    fn end_bound(&self) -> Bound<&T> {
        if self.high_included {
            Bound::Included(&self.high)
        } else {
            Bound::Excluded(&self.high)
        }
    }
}

impl<T, S> TryFrom<Range<T>> for Interval<T, S>
where
    T: IntervalDomain<S>,
    S: IntervalSize,
{
    type Error = IntervalError;

    /// Converts `start..end` into `[start, end)`.
    #[inline]
    fn try_from(range: Range<T>) -> Result<Self, Self::Error> {
        Self::new(range.start, true, range.end, false)
    }
}

impl<T, S> TryFrom<RangeInclusive<T>> for Interval<T, S>
where
    T: IntervalDomain<S>,
    S: IntervalSize,
{
    type Error = IntervalError;

    /// Converts `start..=end` into `[start, end]`.
    #[inline]
    fn try_from(range: RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (start, end) = range.into_inner();
        Self::new(start, true, end, true)
    }
}
