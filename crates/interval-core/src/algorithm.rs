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

//! Helpers for working with intervals of indices into sorted sequences.

use crate::interval::Interval;
use std::cmp::Ordering;

/// Returns the interval `[0, len - 1]` spanning all indices of `items`, or `None` when
/// `items` is empty.
///
/// # Examples
///
/// ```
/// use interval_core::{algorithm::index_interval, interval::Interval};
///
/// assert_eq!(index_interval(&[3, 1, 4]), Some(Interval::closed(0, 2).unwrap()));
/// assert_eq!(index_interval::<u8>(&[]), None);
/// ```
pub fn index_interval<T>(items: &[T]) -> Option<Interval<isize>> {
    let len = isize::try_from(items.len()).ok()?;
    if len == 0 {
        return None;
    }
    Interval::closed(0, len - 1).ok()
}

/// The result of a [`binary_search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchOutcome<V> {
    /// The needle was found at `index`.
    Found { index: isize, value: V },
    /// The needle lies within the searched values but is not one of them. `smaller` and
    /// `bigger` are its direct neighbours.
    Between { smaller: V, bigger: V },
    /// The needle lies before the first or after the last searched value.
    OutOfRange,
}

impl<V> SearchOutcome<V> {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }

    #[inline]
    pub fn is_in_range(&self) -> bool {
        !matches!(self, SearchOutcome::OutOfRange)
    }
}

/// Searches the indices within `range` for `needle`, reading the value at an index
/// through `lookup`.
///
/// # Invariants
///
/// - The values returned by `lookup` must be sorted in ascending order over `range`.
///
/// Values which cannot be compared with `needle` are treated as bigger than it.
///
/// # Examples
///
/// ```
/// use interval_core::algorithm::{binary_search, index_interval, SearchOutcome};
///
/// let numbers = [-10, -8, 0, 10, 500];
/// let range = index_interval(&numbers).unwrap();
///
/// assert_eq!(
///     binary_search(&10, &range, |i| numbers[i as usize]),
///     SearchOutcome::Found { index: 3, value: 10 }
/// );
/// assert_eq!(
///     binary_search(&5, &range, |i| numbers[i as usize]),
///     SearchOutcome::Between { smaller: 0, bigger: 10 }
/// );
/// assert_eq!(
///     binary_search(&501, &range, |i| numbers[i as usize]),
///     SearchOutcome::OutOfRange
/// );
/// ```
pub fn binary_search<V, F>(needle: &V, range: &Interval<isize>, mut lookup: F) -> SearchOutcome<V>
where
    V: PartialOrd,
    F: FnMut(isize) -> V,
{
    let first = range.low() + isize::from(!range.is_low_included());
    let last = range.high() - isize::from(!range.is_high_included());

    let mut lo = first;
    let mut hi = last;
    while lo <= hi {
        let mid = lo + ((hi - lo) >> 1);
        let value = lookup(mid);
        match value.partial_cmp(needle) {
            Some(Ordering::Equal) => return SearchOutcome::Found { index: mid, value },
            Some(Ordering::Less) => lo = mid + 1,
            _ => hi = mid - 1,
        }
    }

    // `hi` now indexes the last value smaller than the needle, `lo` the first bigger one.
    if hi < first || lo > last {
        return SearchOutcome::OutOfRange;
    }
    SearchOutcome::Between {
        smaller: lookup(hi),
        bigger: lookup(lo),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NUMBERS: [i32; 5] = [-10, -8, 0, 10, 500];

    fn search(needle: i32) -> SearchOutcome<i32> {
        let range = index_interval(&NUMBERS).unwrap();
        binary_search(&needle, &range, |i| NUMBERS[i as usize])
    }

    #[test]
    fn test_index_interval_spans_all_indices() {
        let range = index_interval(&NUMBERS).unwrap();
        assert_eq!(range.start(), 0);
        assert_eq!(range.end(), 4);
        assert!(range.is_start_included() && range.is_end_included());
    }

    #[test]
    fn test_index_interval_single_element() {
        assert_eq!(index_interval(&['x']), Some(Interval::closed(0, 0).unwrap()));
    }

    #[test]
    fn test_index_interval_empty_is_none() {
        let empty: [i32; 0] = [];
        assert!(index_interval(&empty).is_none());
    }

    #[test]
    fn test_binary_search_found() {
        assert_eq!(search(0), SearchOutcome::Found { index: 2, value: 0 });
        assert!(search(0).is_found());
    }

    #[test]
    fn test_binary_search_found_on_borders() {
        assert_eq!(search(500), SearchOutcome::Found { index: 4, value: 500 });
        assert_eq!(search(-10), SearchOutcome::Found { index: 0, value: -10 });
    }

    #[test]
    fn test_binary_search_between() {
        let outcome = search(-9);
        assert_eq!(outcome, SearchOutcome::Between { smaller: -10, bigger: -8 });
        assert!(!outcome.is_found());
        assert!(outcome.is_in_range());
        assert_eq!(search(499), SearchOutcome::Between { smaller: 10, bigger: 500 });
    }

    #[test]
    fn test_binary_search_out_of_range() {
        assert_eq!(search(-20), SearchOutcome::OutOfRange);
        assert_eq!(search(600), SearchOutcome::OutOfRange);
        assert!(!search(600).is_in_range());
    }

    #[test]
    fn test_binary_search_respects_excluded_bounds() {
        let range = Interval::new(0, false, 4, false).unwrap();
        let outcome = binary_search(&-10, &range, |i| NUMBERS[i as usize]);
        assert_eq!(outcome, SearchOutcome::OutOfRange);
        let outcome = binary_search(&-8, &range, |i| NUMBERS[i as usize]);
        assert_eq!(outcome, SearchOutcome::Found { index: 1, value: -8 });
    }

    #[test]
    fn test_binary_search_empty_range() {
        let range = Interval::open(2, 2).unwrap();
        let outcome = binary_search(&0, &range, |i| NUMBERS[i as usize]);
        assert_eq!(outcome, SearchOutcome::OutOfRange);
    }

    #[test]
    fn test_binary_search_reversed_range_searches_same_indices() {
        let range = Interval::closed(4, 0).unwrap();
        let outcome = binary_search(&10, &range, |i| NUMBERS[i as usize]);
        assert_eq!(outcome, SearchOutcome::Found { index: 3, value: 10 });
    }
}
