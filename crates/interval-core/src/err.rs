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

use thiserror::Error;

/// Errors raised by interval construction and by operations whose
/// arguments violate a precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum IntervalError {
    /// A single-point interval that includes exactly one of its two bounds,
    /// e.g. `(0, 0]`. Such a point would be both inside and outside the interval.
    #[error("invalid interval: a single point must include both bounds or neither")]
    DegeneratePoint,
    /// The bounds have no defined order relative to each other (e.g. a `NaN` bound).
    #[error("invalid interval: bounds are not comparable")]
    IncomparableBounds,
    /// The point at which to split does not lie within `[low, high]`.
    #[error("split point does not lie within the interval range")]
    SplitOutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            IntervalError::DegeneratePoint.to_string(),
            "invalid interval: a single point must include both bounds or neither"
        );
        assert_eq!(
            IntervalError::SplitOutOfRange.to_string(),
            "split point does not lie within the interval range"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: E) {}
        assert_error(IntervalError::IncomparableBounds);
    }
}
