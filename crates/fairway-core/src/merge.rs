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

//! # Merge Engine
//!
//! Coalescing of interval collections into the minimal sorted equivalent set.
//! The engine validates every input, sorts an owned copy by lower bound, and
//! sweeps once left to right, uniting neighbors through
//! [`Interval::union`] until a real gap forces a new run.
//!
//! ## Motivation
//!
//! The sweep itself is ordinary; the exactness lives in the boundary
//! semantics. Whether two intervals touching at a value coalesce depends on
//! which of the touching limits include that value, and the engine must agree
//! with the validator and the parser on every such edge. Keeping the pairwise
//! rule on [`Interval`] and reusing its lower-bound ordering for the sort
//! means there is exactly one place where those decisions are made.

use crate::interval::{Interval, InvalidIntervalError};
use crate::num::IntervalNumeric;
use std::cmp::Ordering;

/// Merges a collection of intervals into the minimal, sorted,
/// non-overlapping set covering the same values.
///
/// Every input interval is validated first, in input order; the first
/// structurally invalid interval aborts the call with its error before any
/// merging work happens. The input slice itself is never reordered; the
/// engine sorts an owned copy.
///
/// The result is ascending by lower bound and pairwise unmergeable. An empty
/// input yields an empty output.
///
/// # Errors
///
/// Returns the [`InvalidIntervalError`] of the first invalid input interval.
///
/// # Examples
///
/// ```rust
/// # use fairway_core::interval::Interval;
/// # use fairway_core::merge::merge;
///
/// let merged = merge(&[
///     Interval::closed(25, 30),
///     Interval::closed(2, 19),
///     Interval::closed(14, 23),
///     Interval::closed(4, 8),
/// ])
/// .unwrap();
/// assert_eq!(merged, vec![Interval::closed(2, 23), Interval::closed(25, 30)]);
/// ```
pub fn merge<T>(intervals: &[Interval<T>]) -> Result<Vec<Interval<T>>, InvalidIntervalError<T>>
where
    T: IntervalNumeric,
{
    for interval in intervals {
        interval.validate()?;
    }

    let mut sorted = intervals.to_vec();
    sorted.sort_by(|a, b| a.lower_bound_order(b));

    let mut result = Vec::with_capacity(sorted.len());
    let mut remaining = sorted.into_iter();
    let Some(mut current) = remaining.next() else {
        return Ok(result);
    };
    for next in remaining {
        match current.union(next) {
            Some(united) => current = united,
            None => {
                result.push(current);
                current = next;
            }
        }
    }
    result.push(current);

    debug_assert!(
        is_coalesced(&result),
        "merge produced a result that is not sorted and pairwise unmergeable"
    );
    Ok(result)
}

/// Returns `true` if the intervals are ascending by lower bound and no two
/// neighbors could be united.
///
/// This is exactly the shape [`merge`] guarantees for its output, so
/// `is_coalesced(&merge(x)?)` always holds.
///
/// # Examples
///
/// ```rust
/// # use fairway_core::interval::Interval;
/// # use fairway_core::merge::is_coalesced;
///
/// let split = [Interval::closed_open(3, 5), Interval::closed(5, 10)];
/// assert!(is_coalesced(&split));
///
/// let touching = [Interval::closed(3, 5), Interval::closed(5, 10)];
/// assert!(!is_coalesced(&touching));
/// ```
#[inline]
pub fn is_coalesced<T>(intervals: &[Interval<T>]) -> bool
where
    T: IntervalNumeric,
{
    intervals.windows(2).all(|pair| {
        pair[0].lower_bound_order(&pair[1]) != Ordering::Greater && pair[0].union(pair[1]).is_none()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Limit;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    /// The original acceptance matrix, run for every supported scalar type;
    /// values stay within i8 range so one helper covers them all.
    fn run_merge_cases<T>(min_value: T, max_value: T)
    where
        T: IntervalNumeric + From<i8>,
    {
        let closed = |min: i8, max: i8| Interval::closed(T::from(min), T::from(max));
        let closed_open = |min: i8, max: i8| Interval::closed_open(T::from(min), T::from(max));
        let open_closed = |min: i8, max: i8| Interval::open_closed(T::from(min), T::from(max));

        // A single element passes through untouched.
        assert_eq!(merge(&[closed(10, 20)]), Ok(vec![closed(10, 20)]));

        // Touching at 5, but 5 is excluded on the left side.
        assert_eq!(
            merge(&[closed_open(3, 5), closed(5, 10)]),
            Ok(vec![closed_open(3, 5), closed(5, 10)])
        );

        // Touching at 5, but 5 is excluded on the right side.
        assert_eq!(
            merge(&[closed(3, 5), open_closed(5, 10)]),
            Ok(vec![closed(3, 5), open_closed(5, 10)])
        );

        // Touching at 5 with 5 included on both sides.
        assert_eq!(
            merge(&[closed(3, 5), closed(5, 10)]),
            Ok(vec![closed(3, 10)])
        );
        assert_eq!(
            merge(&[closed(5, 10), closed(3, 5)]),
            Ok(vec![closed(3, 10)])
        );

        // Full span across the type's extremes.
        assert_eq!(
            merge(&[
                Interval::closed(min_value, T::zero()),
                Interval::closed(T::zero(), max_value),
            ]),
            Ok(vec![Interval::closed(min_value, max_value)])
        );

        // The unsorted multi-way example.
        assert_eq!(
            merge(&[closed(25, 30), closed(2, 19), closed(14, 23), closed(4, 8)]),
            Ok(vec![closed(2, 23), closed(25, 30)])
        );

        // Negative values.
        assert_eq!(
            merge(&[closed(-20, -10), closed(-10, -5)]),
            Ok(vec![closed(-20, -5)])
        );

        // A degenerate point is absorbed by its adjoining interval.
        assert_eq!(
            merge(&[closed(6, 6), closed(6, 7)]),
            Ok(vec![closed(6, 7)])
        );

        // Reversed bounds abort the whole call.
        assert_eq!(
            merge(&[closed(20, 10)]),
            Err(InvalidIntervalError::ReversedBounds(closed(20, 10)))
        );
    }

    #[test]
    fn test_merges_across_numeric_types() {
        run_merge_cases(i8::MIN, i8::MAX);
        run_merge_cases(i16::MIN, i16::MAX);
        run_merge_cases(i32::MIN, i32::MAX);
        run_merge_cases(i64::MIN, i64::MAX);
        run_merge_cases(f32::MIN, f32::MAX);
        run_merge_cases(f64::MIN, f64::MAX);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(merge::<i64>(&[]), Ok(vec![]));
    }

    #[test]
    fn test_first_error_follows_input_order() {
        // The invalid interval is reported in input order, not sorted order.
        let first_invalid = Interval::open(7, 7);
        let second_invalid = Interval::closed(20, 10);
        assert_eq!(
            merge(&[Interval::closed(0, 1), first_invalid, second_invalid]),
            Err(InvalidIntervalError::OpenPoint(first_invalid))
        );
        assert_eq!(
            merge(&[second_invalid, first_invalid]),
            Err(InvalidIntervalError::ReversedBounds(second_invalid))
        );
    }

    #[test]
    fn test_validation_happens_before_any_merging() {
        // A perfectly mergeable prefix does not produce partial output when a
        // later element is invalid.
        let result = merge(&[
            Interval::closed(1, 5),
            Interval::closed(4, 9),
            Interval::closed_open(3, 3),
        ]);
        assert_eq!(
            result,
            Err(InvalidIntervalError::OpenPoint(Interval::closed_open(3, 3)))
        );
    }

    #[test]
    fn test_degenerate_point_absorbed_by_open_neighbor() {
        // The open-before-closed tie-break schedules (5,9] ahead of [5,5],
        // so the point lands inside the accumulator instead of stopping at
        // its excluded lower bound.
        assert_eq!(
            merge(&[Interval::closed(5, 5), Interval::open_closed(5, 9)]),
            Ok(vec![Interval::closed(5, 9)])
        );
        assert_eq!(
            merge(&[Interval::open_closed(5, 9), Interval::closed(5, 5)]),
            Ok(vec![Interval::closed(5, 9)])
        );
    }

    #[test]
    fn test_equal_min_values_keep_covered_endpoint() {
        assert_eq!(
            merge(&[Interval::open_closed(5, 10), Interval::closed(5, 8)]),
            Ok(vec![Interval::closed(5, 10)])
        );
    }

    #[test]
    fn test_chain_of_touching_intervals_collapses() {
        assert_eq!(
            merge(&[
                Interval::closed(0, 2),
                Interval::closed(2, 4),
                Interval::closed(4, 6),
                Interval::closed(6, 8),
            ]),
            Ok(vec![Interval::closed(0, 8)])
        );
    }

    #[test]
    fn test_mixed_openness_runs() {
        // [0,3] and (2,5) overlap into [0,5); [5,6] touches it at the
        // excluded 5 and stays separate; (7,9] and [8,12) overlap into
        // (7,12).
        assert_eq!(
            merge(&[
                Interval::closed(0, 3),
                Interval::open(2, 5),
                Interval::closed(5, 6),
                Interval::open_closed(7, 9),
                Interval::closed_open(8, 12),
            ]),
            Ok(vec![
                Interval::closed_open(0, 5),
                Interval::closed(5, 6),
                Interval::open(7, 12)
            ])
        );
    }

    #[test]
    fn test_is_coalesced() {
        assert!(is_coalesced::<i64>(&[]));
        assert!(is_coalesced(&[Interval::closed(1, 2)]));
        assert!(is_coalesced(&[Interval::closed(1, 2), Interval::closed(4, 5)]));
        assert!(is_coalesced(&[
            Interval::closed_open(3, 5),
            Interval::closed(5, 10)
        ]));

        // Touching with both sides closed can still be united.
        assert!(!is_coalesced(&[Interval::closed(3, 5), Interval::closed(5, 10)]));
        // Overlap.
        assert!(!is_coalesced(&[Interval::closed(3, 6), Interval::closed(5, 10)]));
        // Out of order.
        assert!(!is_coalesced(&[Interval::closed(4, 5), Interval::closed(1, 2)]));
    }

    /// Generates structurally valid intervals over a small integer domain,
    /// degenerate points included.
    fn random_intervals(rng: &mut ChaCha8Rng, count: usize) -> Vec<Interval<i32>> {
        (0..count)
            .map(|_| {
                let min = rng.gen_range(-50..=50);
                let max = rng.gen_range(min..=50);
                if min == max {
                    Interval::closed(min, max)
                } else {
                    Interval::new(
                        Limit::new(min, rng.gen_bool(0.5)),
                        Limit::new(max, rng.gen_bool(0.5)),
                    )
                }
            })
            .collect()
    }

    #[test]
    fn test_merge_is_idempotent() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x0001);
        for _ in 0..100 {
            let intervals = random_intervals(&mut rng, 20);
            let merged = merge(&intervals).unwrap();
            assert_eq!(merge(&merged), Ok(merged.clone()));
        }
    }

    #[test]
    fn test_merge_output_is_coalesced() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x0002);
        for _ in 0..100 {
            let intervals = random_intervals(&mut rng, 20);
            let merged = merge(&intervals).unwrap();
            assert!(is_coalesced(&merged), "not coalesced: {merged:?}");
        }
    }

    #[test]
    fn test_merge_is_permutation_invariant() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x0003);
        for _ in 0..20 {
            let intervals = random_intervals(&mut rng, 10);
            let expected = merge(&intervals).unwrap();
            let mut shuffled = intervals;
            for _ in 0..10 {
                shuffled.shuffle(&mut rng);
                assert_eq!(merge(&shuffled), Ok(expected.clone()));
            }
        }
    }

    #[test]
    fn test_merge_conserves_covered_values() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x0004);
        for _ in 0..100 {
            let intervals = random_intervals(&mut rng, 15);
            let merged = merge(&intervals).unwrap();
            for point in -60..=60 {
                let in_input = intervals.iter().any(|iv| iv.contains(point));
                let covering = merged.iter().filter(|iv| iv.contains(point)).count();
                assert_eq!(
                    covering,
                    usize::from(in_input),
                    "point {point} covered by {covering} outputs, in_input = {in_input}"
                );
            }
        }
    }
}
