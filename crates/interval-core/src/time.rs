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

//! # Time Domain
//!
//! Strongly typed time values for intervals whose distance type differs from
//! their value type:
//!
//! - `TimePoint<T>`: a specific point in time.
//! - `TimeDelta<T>`: a duration, i.e. the difference between two time points.
//! - `TimeInterval<T>`: an [`Interval`] of time points measured in time deltas.
//!
//! Adding two `TimePoint`s is a compile error; arithmetic that overflows the
//! underlying integer panics with a descriptive message.

use crate::{
    domain::{IntervalDomain, IntervalSize},
    interval::Interval,
};
use num_traits::{AsPrimitive, PrimInt, Signed, Zero};
use std::{
    fmt::{Debug, Display},
    ops::{Add, Neg, Sub},
};

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimePoint<T: PrimInt>(T);

impl<T: PrimInt> Default for TimePoint<T> {
    #[inline]
    fn default() -> Self {
        TimePoint(T::zero())
    }
}

impl<T: PrimInt + Display> Display for TimePoint<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimePoint({})", self.value())
    }
}

impl<T: PrimInt> From<T> for TimePoint<T> {
    #[inline]
    fn from(v: T) -> Self {
        TimePoint(v)
    }
}

/// An interval of time points, measured in time deltas.
pub type TimeInterval<T> = Interval<TimePoint<T>, TimeDelta<T>>;

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeDelta<T: PrimInt + Signed>(T);

impl<T: PrimInt + Signed> TimeDelta<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    #[inline]
    pub fn zero() -> Self {
        Self(T::zero())
    }

    #[inline]
    pub const fn value(self) -> T {
        self.0
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0.is_negative()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn checked_add(self, rhs: TimeDelta<T>) -> Option<Self> {
        self.0.checked_add(&rhs.0).map(TimeDelta)
    }

    #[inline]
    pub fn checked_sub(self, rhs: TimeDelta<T>) -> Option<Self> {
        self.0.checked_sub(&rhs.0).map(TimeDelta)
    }
}

impl<T: PrimInt> TimePoint<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        TimePoint(value)
    }

    #[inline]
    pub const fn value(self) -> T {
        self.0
    }
}

impl<T> TimePoint<T>
where
    T: PrimInt + Signed + AsPrimitive<f64> + Debug,
    f64: AsPrimitive<T>,
{
    #[inline]
    pub fn checked_add(self, delta: TimeDelta<T>) -> Option<Self> {
        self.0.checked_add(&delta.0).map(TimePoint)
    }

    #[inline]
    pub fn checked_sub(self, delta: TimeDelta<T>) -> Option<Self> {
        self.0.checked_sub(&delta.0).map(TimePoint)
    }

    /// Returns the half-open interval `[self, self + len)`.
    ///
    /// Returns `None` when `len` is not positive or the end overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_core::time::{TimeDelta, TimePoint};
    ///
    /// let span = TimePoint::new(10i64).span_of(TimeDelta::new(5)).unwrap();
    /// assert_eq!(span.start(), TimePoint::new(10));
    /// assert_eq!(span.end(), TimePoint::new(15));
    /// assert!(span.is_start_included());
    /// assert!(!span.is_end_included());
    ///
    /// assert!(TimePoint::new(10i64).span_of(TimeDelta::new(0)).is_none());
    /// ```
    #[inline]
    pub fn span_of(self, len: TimeDelta<T>) -> Option<TimeInterval<T>> {
        if len.is_negative() || len.is_zero() {
            return None;
        }
        let end = self.checked_add(len)?;
        Interval::new(self, true, end, false).ok()
    }
}

impl<T: PrimInt + Display + Signed> Display for TimeDelta<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimeDelta({})", self.0)
    }
}

impl<T: PrimInt + Signed> From<T> for TimeDelta<T> {
    #[inline]
    fn from(v: T) -> Self {
        TimeDelta(v)
    }
}

impl<T: PrimInt + Signed> Add<TimeDelta<T>> for TimePoint<T> {
    type Output = TimePoint<T>;

    #[inline]
    fn add(self, rhs: TimeDelta<T>) -> Self::Output {
        TimePoint(
            self.0
                .checked_add(&rhs.0)
                .expect("overflow in TimePoint + TimeDelta"),
        )
    }
}

impl<T: PrimInt + Signed> Sub<TimeDelta<T>> for TimePoint<T> {
    type Output = TimePoint<T>;

    #[inline]
    fn sub(self, rhs: TimeDelta<T>) -> Self::Output {
        TimePoint(
            self.0
                .checked_sub(&rhs.0)
                .expect("underflow in TimePoint - TimeDelta"),
        )
    }
}

impl<T: PrimInt + Signed> Sub<TimePoint<T>> for TimePoint<T> {
    type Output = TimeDelta<T>;

    #[inline]
    fn sub(self, rhs: TimePoint<T>) -> Self::Output {
        TimeDelta::new(
            self.0
                .checked_sub(&rhs.0)
                .expect("underflow in TimePoint - TimePoint"),
        )
    }
}

impl<T: PrimInt + Signed> Add for TimeDelta<T> {
    type Output = TimeDelta<T>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        TimeDelta::new(
            self.0
                .checked_add(&rhs.0)
                .expect("overflow in TimeDelta + TimeDelta"),
        )
    }
}

impl<T: PrimInt + Signed> Sub for TimeDelta<T> {
    type Output = TimeDelta<T>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        TimeDelta(
            self.0
                .checked_sub(&rhs.0)
                .expect("underflow in TimeDelta - TimeDelta"),
        )
    }
}

impl<T: PrimInt + Signed> Neg for TimeDelta<T> {
    type Output = TimeDelta<T>;

    #[inline]
    fn neg(self) -> Self::Output {
        TimeDelta::new(
            T::zero()
                .checked_sub(&self.0)
                .expect("underflow in -TimeDelta"),
        )
    }
}

impl<T: PrimInt + Signed> Zero for TimeDelta<T> {
    #[inline]
    fn zero() -> Self {
        TimeDelta(T::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<T> IntervalSize for TimeDelta<T>
where
    T: PrimInt + Signed + AsPrimitive<f64> + Debug,
    f64: AsPrimitive<T>,
{
    #[inline]
    fn to_f64(self) -> f64 {
        self.0.as_()
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        TimeDelta(value.as_())
    }

    #[inline]
    fn difference(self, rhs: Self) -> Self {
        self - rhs
    }
}

impl<T> IntervalDomain<TimeDelta<T>> for TimePoint<T>
where
    T: PrimInt + Signed + AsPrimitive<f64> + Debug,
    f64: AsPrimitive<T>,
{
    const INTEGRAL: bool = true;

    #[inline]
    fn add_size(self, size: TimeDelta<T>) -> Self {
        self + size
    }

    #[inline]
    fn sub_size(self, size: TimeDelta<T>) -> Self {
        self - size
    }

    #[inline]
    fn distance(self, origin: Self) -> TimeDelta<T> {
        self - origin
    }

    #[inline]
    fn checked_add_size(self, size: TimeDelta<T>) -> Option<Self> {
        self.checked_add(size)
    }

    fn offset_modulo(self, origin: Self, modulus: TimeDelta<T>) -> TimeDelta<T> {
        let m = modulus.value();
        let offset = rem_euclid(self.0, m) - rem_euclid(origin.0, m);
        TimeDelta(rem_euclid(offset, m))
    }
}

/// Euclidean remainder in `[0, |modulus|)` which neither overflows on `MIN % -1` nor
/// on `modulus == MIN`. A zero modulus yields zero.
fn rem_euclid<T: PrimInt + Signed>(value: T, modulus: T) -> T {
    if modulus.is_zero() || modulus == T::one() || modulus == -T::one() {
        return T::zero();
    }
    let r = value % modulus;
    if r >= T::zero() {
        r
    } else if modulus < T::zero() {
        r - modulus
    } else {
        r + modulus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::SplitOption;

    fn tp(v: i64) -> TimePoint<i64> {
        TimePoint::new(v)
    }

    fn td(v: i64) -> TimeDelta<i64> {
        TimeDelta::new(v)
    }

    #[test]
    fn test_time_point_creation() {
        let p = TimePoint::new(42);
        assert_eq!(p.value(), 42);
        let q: TimePoint<i32> = 7.into();
        assert_eq!(q.value(), 7);
    }

    #[test]
    fn test_time_point_display() {
        assert_eq!(format!("{}", tp(42)), "TimePoint(42)");
        assert_eq!(format!("{}", td(-3)), "TimeDelta(-3)");
    }

    #[test]
    fn test_time_arithmetic() {
        assert_eq!(tp(10) + td(5), tp(15));
        assert_eq!(tp(10) - td(5), tp(5));
        assert_eq!(tp(10) - tp(15), td(-5));
        assert_eq!(td(3) + td(4), td(7));
        assert_eq!(td(3) - td(4), td(-1));
        assert_eq!(-td(3), td(-3));
        assert_eq!(td(-3).abs(), td(3));
    }

    #[test]
    #[should_panic(expected = "overflow in TimePoint + TimeDelta")]
    fn test_time_point_overflow_panics() {
        let _ = TimePoint::new(i64::MAX) + td(1);
    }

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(tp(1).checked_add(td(1)), Some(tp(2)));
        assert_eq!(TimePoint::new(i64::MAX).checked_add(td(1)), None);
        assert_eq!(TimePoint::new(i64::MIN).checked_sub(td(1)), None);
        assert_eq!(td(i64::MAX).checked_add(td(1)), None);
        assert_eq!(td(5).checked_sub(td(1)), Some(td(4)));
    }

    #[test]
    fn test_time_delta_scalar_conversion() {
        assert_eq!(td(12).to_f64(), 12.0);
        assert_eq!(TimeDelta::<i64>::from_f64(12.7), td(12));
        assert_eq!(td(12).difference(td(2)), td(10));
    }

    #[test]
    fn test_span_of() {
        let span = tp(10).span_of(td(5)).unwrap();
        assert_eq!(span.start(), tp(10));
        assert_eq!(span.end(), tp(15));
        assert_eq!(span.size(), td(5));
        assert!(span.contains(tp(14)));
        assert!(!span.contains(tp(15)));
        assert!(tp(10).span_of(td(-1)).is_none());
        assert!(TimePoint::new(i64::MAX).span_of(td(1)).is_none());
    }

    #[test]
    fn test_time_interval_value_at_and_percentage() {
        let day = TimeInterval::closed(tp(0), tp(24)).unwrap();
        assert_eq!(day.center(), tp(12));
        assert_eq!(day.value_at(0.25), tp(6));
        assert_eq!(day.percentage_for(tp(18)), 0.75);
    }

    #[test]
    fn test_time_interval_translate_and_split() {
        let shift = TimeInterval::closed(tp(8), tp(16)).unwrap();
        let later = shift.translate(td(2));
        assert_eq!(later.start(), tp(10));
        assert_eq!(later.end(), tp(18));

        let (before, after) = shift.split(tp(12), SplitOption::Right).unwrap();
        let before = before.unwrap();
        let after = after.unwrap();
        assert!(!before.contains(tp(12)));
        assert!(after.contains(tp(12)));
    }

    #[test]
    fn test_time_point_checked_add_size() {
        assert_eq!(tp(1).checked_add_size(td(2)), Some(tp(3)));
        assert_eq!(TimePoint::new(i64::MAX).checked_add_size(td(1)), None);
    }

    #[test]
    fn test_time_point_offset_modulo() {
        assert_eq!(tp(9).offset_modulo(tp(0), td(4)), td(1));
        assert_eq!(tp(0).offset_modulo(tp(9), td(4)), td(3));
        assert_eq!(tp(10).offset_modulo(tp(0), td(-4)), td(2));
        assert_eq!(tp(5).offset_modulo(tp(1), td(0)), td(0));
        assert_eq!(
            TimePoint::new(i64::MAX).offset_modulo(TimePoint::new(i64::MIN), td(i64::MIN)),
            td(i64::MAX)
        );
    }

    #[test]
    fn test_time_interval_stepping_with_far_anchor() {
        let shift = TimeInterval::closed(tp(9), tp(17)).unwrap();
        let hours: Vec<_> = shift
            .values_anchored(td(4), TimePoint::new(i64::MIN))
            .map(TimePoint::value)
            .collect();
        assert_eq!(hours, vec![12, 16]);
    }

    #[test]
    fn test_time_interval_stepping() {
        let shift = TimeInterval::closed(tp(9), tp(17)).unwrap();
        let hours: Vec<_> = shift
            .values_anchored(td(4), tp(0))
            .map(TimePoint::value)
            .collect();
        assert_eq!(hours, vec![12, 16]);
    }
}
