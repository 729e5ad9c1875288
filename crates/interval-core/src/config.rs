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

use crate::interval::Interval;

/// Settings for [`Interval::scale_with`].
#[derive(Debug, PartialEq)]
pub struct ScaleConfig<T, S = T> {
    /// Where the interval is scaled around, as a percentage of it: `0.0` keeps the low
    /// bound in place, `1.0` the high bound.
    pub around: f64,
    /// Bounds which a growing interval will not be scaled beyond.
    pub limit: Option<Interval<T, S>>,
}

impl<T, S> Default for ScaleConfig<T, S> {
    fn default() -> Self {
        Self {
            around: 0.5,
            limit: None,
        }
    }
}

impl<T: Copy, S> Clone for ScaleConfig<T, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy, S> Copy for ScaleConfig<T, S> {}
