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

//! # Domain Contract
//!
//! An [`Interval`](crate::interval::Interval) only needs a handful of operations from the
//! values it spans. They are split over two traits:
//!
//! - [`IntervalSize`]: the *distance* type, i.e. what you get when subtracting two values.
//!   It has to convert to and from `f64` so that percentages can be applied to it.
//! - [`IntervalDomain`]: the *value* type. It is totally ordered (for all values that
//!   are ever used as bounds) and can be moved by a distance.
//!
//! For plain numbers the distance type is the number itself. Newtypes such as
//! [`TimePoint`](crate::time::TimePoint) use a dedicated distance type instead.

use std::fmt::Debug;

/// A distance between two values of an [`IntervalDomain`].
///
/// # Examples
///
/// ```
/// use interval_core::domain::IntervalSize;
///
/// assert_eq!(7i32.to_f64(), 7.0);
/// assert_eq!(<i32 as IntervalSize>::from_f64(7.9), 7);
/// assert_eq!(10i32.difference(4), 6);
/// ```
pub trait IntervalSize: Copy + PartialOrd + Debug {
    /// Converts the distance into a floating point scalar.
    fn to_f64(self) -> f64;

    /// Converts a floating point scalar back into a distance.
    ///
    /// Integral distances truncate towards zero. Callers that want
    /// nearest-neighbour rounding round the scalar first.
    fn from_f64(value: f64) -> Self;

    /// Returns `self - rhs`.
    fn difference(self, rhs: Self) -> Self;
}

/// A value type over which intervals can be formed, with `S` as its distance type.
///
/// # Examples
///
/// ```
/// use interval_core::domain::IntervalDomain;
///
/// assert_eq!(10i64.add_size(5), 15);
/// assert_eq!(10i64.sub_size(5), 5);
/// assert_eq!(10i64.distance(4), 6);
/// assert!(<i64 as IntervalDomain>::INTEGRAL);
/// assert!(!<f64 as IntervalDomain>::INTEGRAL);
/// ```
pub trait IntervalDomain<S = Self>: Copy + PartialOrd + Debug
where
    S: IntervalSize,
{
    /// `true` when the domain only holds whole values, in which case computed
    /// positions are rounded to the nearest representable value.
    const INTEGRAL: bool;

    /// Returns `self + size`.
    fn add_size(self, size: S) -> Self;

    /// Returns `self - size`.
    fn sub_size(self, size: S) -> Self;

    /// Returns `self - origin`.
    fn distance(self, origin: Self) -> S;

    /// Returns `self + size`, or `None` when the result is not representable.
    fn checked_add_size(self, size: S) -> Option<Self>;

    /// Returns `self - origin` reduced modulo `|modulus|`, i.e. a value in
    /// `[0, |modulus|)`. Never overflows, even when `self - origin` would.
    /// A zero modulus yields zero.
    fn offset_modulo(self, origin: Self, modulus: S) -> S;
}

macro_rules! impl_numeric_domain {
    (@impl $t:ty, $integral:expr, $checked_add:expr, $offset_modulo:expr) => {
        impl IntervalSize for $t {
            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline(always)]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline(always)]
            fn difference(self, rhs: Self) -> Self {
                self - rhs
            }
        }

        impl IntervalDomain for $t {
            const INTEGRAL: bool = $integral;

            #[inline(always)]
            fn add_size(self, size: $t) -> Self {
                self + size
            }

            #[inline(always)]
            fn sub_size(self, size: $t) -> Self {
                self - size
            }

            #[inline(always)]
            fn distance(self, origin: Self) -> $t {
                self - origin
            }

            #[inline(always)]
            fn checked_add_size(self, size: $t) -> Option<Self> {
                ($checked_add)(self, size)
            }

            #[inline(always)]
            fn offset_modulo(self, origin: Self, modulus: $t) -> $t {
                ($offset_modulo)(self, origin, modulus)
            }
        }
    };
    (integral; $($t:ty),* $(,)?) => {
        $(
            impl_numeric_domain!(
                @impl $t,
                true,
                <$t>::checked_add,
                |value: $t, origin: $t, modulus: $t| -> $t {
                    // (a - b) mod m == ((a mod m) - (b mod m)) mod m, and the
                    // inner difference always fits.
                    match (value.checked_rem_euclid(modulus), origin.checked_rem_euclid(modulus)) {
                        (Some(a), Some(b)) => (a - b).checked_rem_euclid(modulus).unwrap_or(0),
                        _ => 0,
                    }
                }
            );
        )*
    };
    (float; $($t:ty),* $(,)?) => {
        $(
            impl_numeric_domain!(
                @impl $t,
                false,
                |value: $t, size: $t| Some(value + size),
                |value: $t, origin: $t, modulus: $t| -> $t {
                    if modulus == 0.0 {
                        0.0
                    } else {
                        (value - origin).rem_euclid(modulus)
                    }
                }
            );
        )*
    };
}

impl_numeric_domain!(integral; i8, i16, i32, i64, i128, isize);
impl_numeric_domain!(float; f32, f64);
