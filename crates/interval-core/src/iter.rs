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

//! Stepped enumeration of the values inside an [`Interval`].

use crate::{
    domain::{IntervalDomain, IntervalSize},
    interval::Interval,
};
use std::iter::FusedIterator;
use tracing::trace;

/// An iterator over the values of an interval, starting at its start and moving by a
/// fixed step for as long as the values stay inside the interval.
///
/// Created by [`Interval::values`] and [`Interval::values_anchored`]. The iterator owns a
/// copy of the interval; cloning it yields an independent enumeration from the same
/// position.
///
/// A step of zero produces the first value only. A step pointing away from the end
/// produces at most the first value as well, since the next one would leave the interval.
///
/// # Examples
///
/// ```
/// use interval_core::interval::Interval;
///
/// let interval = Interval::new(1, true, 5, false).unwrap();
/// let mut iter = interval.values(1);
/// assert_eq!(iter.next(), Some(1));
/// assert_eq!(iter.next(), Some(2));
/// assert_eq!(iter.next(), Some(3));
/// assert_eq!(iter.next(), Some(4));
/// assert_eq!(iter.next(), None); // excluded end reached
///
/// let reversed = Interval::closed(10, 0).unwrap();
/// let values: Vec<_> = reversed.values(-4).collect();
/// assert_eq!(values, vec![10, 6, 2]);
/// ```
#[derive(Debug)]
pub struct StepIter<T, S = T> {
    interval: Interval<T, S>,
    step: S,
    next: Option<T>,
}

impl<T, S> StepIter<T, S>
where
    T: IntervalDomain<S>,
    S: IntervalSize,
{
    /// Creates the iterator, aligning the first value to multiples of `step` away from
    /// `anchor` when one is given.
    pub(crate) fn new(interval: Interval<T, S>, step: S, anchor: Option<T>) -> Self {
        let start = interval.start();
        let mut start_included = interval.is_start_included();
        let mut aligned = Some(start);

        if let Some(anchor) = anchor {
            let offset = start.offset_modulo(anchor, step).to_f64();
            let shift = anchor_shift(offset, step.to_f64());
            if shift != 0.0 {
                aligned = start.checked_add_size(S::from_f64(shift));
                start_included = true;
            }
        }

        // Values past the end of the domain cannot lie in the interval either.
        let first = aligned.and_then(|value| {
            if start_included {
                Some(value)
            } else {
                value.checked_add_size(step)
            }
        });
        let next = first.filter(|&value| interval.contains(value));
        trace!(?first, ?step, empty = next.is_none(), "starting stepped enumeration");

        Self {
            interval,
            step,
            next,
        }
    }

    /// The interval being enumerated.
    #[inline]
    pub fn interval(&self) -> &Interval<T, S> {
        &self.interval
    }

    /// The distance between two consecutive values.
    #[inline]
    pub fn step(&self) -> S {
        self.step
    }
}

/// Returns the shift in the direction of `step` which moves a value lying `offset` past
/// the anchor onto the next multiple of `step`. Always smaller than `|step|`.
fn anchor_shift(offset: f64, step: f64) -> f64 {
    if step > 0.0 {
        (-offset).rem_euclid(step)
    } else if step < 0.0 {
        -offset.rem_euclid(-step)
    } else {
        0.0
    }
}

impl<T: Copy, S: Copy> Clone for StepIter<T, S> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            interval: self.interval,
            step: self.step,
            next: self.next,
        }
    }
}

impl<T, S> Iterator for StepIter<T, S>
where
    T: IntervalDomain<S>,
    S: IntervalSize,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if self.step.to_f64() != 0.0 {
            self.next = current
                .checked_add_size(self.step)
                .filter(|&following| following != current && self.interval.contains(following));
        }
        Some(current)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(_) => (1, None),
            None => (0, Some(0)),
        }
    }
}

impl<T, S> FusedIterator for StepIter<T, S>
where
    T: IntervalDomain<S>,
    S: IntervalSize,
{
}
