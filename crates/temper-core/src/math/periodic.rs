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

//! # Periodic Distance
//!
//! Shortest displacement between two points on a circle of circumference
//! `period`. Pitch is the motivating case: with `period = 1200` cents two
//! notes an octave apart are the same pitch class, so 1150¢ and 50¢ are only
//! 100¢ apart.
//!
//! All modulo operations here are mathematical (the result takes the sign of
//! the period), never the truncating `%` remainder.
//!
//! ```rust
//! use temper_core::math::periodic::{circular_difference, circular_distance};
//!
//! assert_eq!(circular_difference(1150, 50, 1200), -100);
//! assert_eq!(circular_distance(50, 1150, 1200), 100);
//! ```

use num_traits::Signed;

/// The size of one octave in cents.
pub const OCTAVE_CENTS: f64 = 1200.0;

#[inline(always)]
fn periodic_mod<T>(value: T, period: T) -> T
where
    T: Signed + Copy + PartialOrd,
{
    let zero = T::zero();
    // `MIN % -1` overflows for integers; `x % -1` equals `x % 1` otherwise.
    let r = if period == -T::one() {
        value % T::one()
    } else {
        value % period
    };
    if r != zero && ((r < zero) != (period < zero)) {
        r + period
    } else {
        r
    }
}

/// Returns the signed shortest displacement from `b` to `a` modulo `period`.
///
/// Computes `((a - b + period / 2) mod period) - period / 2`. For a positive
/// even period the result lies in `[-period / 2, period / 2)`.
///
/// Both operands are reduced modulo `period` first, so integer inputs never
/// overflow, whatever their magnitude.
///
/// # Panics
///
/// Panics if `period` is zero.
///
/// # Examples
///
/// ```rust
/// # use temper_core::math::periodic::circular_difference;
/// assert_eq!(circular_difference(50.0, 1150.0, 1200.0), 100.0);
/// assert_eq!(circular_difference(3, 10, 12), 5);
/// ```
pub fn circular_difference<T>(a: T, b: T, period: T) -> T
where
    T: Signed + Copy + PartialOrd,
{
    assert!(
        period != T::zero(),
        "called `circular_difference` with a zero period"
    );
    let half = period / (T::one() + T::one());
    let d = periodic_mod(
        periodic_mod(a, period) - periodic_mod(b, period),
        period,
    );
    // `d + half` would leave the range of `period`, so shift `d` directly.
    let wraps = if period > T::zero() {
        d >= period - half
    } else {
        d <= period - half
    };
    if wraps { d - period } else { d }
}

/// Returns the unsigned shortest distance between `a` and `b` modulo
/// `period`, symmetric in its arguments and within `[0, |period| / 2]`.
///
/// # Panics
///
/// Panics if `period` is zero.
///
/// # Examples
///
/// ```rust
/// # use temper_core::math::periodic::circular_distance;
/// assert_eq!(circular_distance(0.0, 700.0, 1200.0), 500.0);
/// assert_eq!(circular_distance(700.0, 0.0, 1200.0), 500.0);
/// ```
pub fn circular_distance<T>(a: T, b: T, period: T) -> T
where
    T: Signed + Copy + PartialOrd,
{
    circular_difference(a, b, period).abs()
}

/// Distance between two pitches in cents with octave equivalence.
///
/// # Examples
///
/// ```rust
/// # use temper_core::math::periodic::cents_distance;
/// assert_eq!(cents_distance(2390.0, 10.0), 20.0);
/// ```
#[inline]
pub fn cents_distance(a: f64, b: f64) -> f64 {
    circular_distance(a, b, OCTAVE_CENTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circular_difference_wraps_across_boundary() {
        assert_eq!(circular_difference(1150, 50, 1200), -100);
        assert_eq!(circular_difference(50, 1150, 1200), 100);
        assert_eq!(circular_difference(-1150, 50, 1200), 0);
    }

    #[test]
    fn test_circular_difference_within_half_period() {
        assert_eq!(circular_difference(700, 0, 1200), -500);
        assert_eq!(circular_difference(500, 0, 1200), 500);
        assert_eq!(circular_difference(600, 0, 1200), -600);
    }

    #[test]
    fn test_circular_difference_many_periods_apart() {
        assert_eq!(circular_difference(12_010.0, -5.0, 1200.0), 15.0);
        assert_eq!(circular_difference(-3601, 0, 1200), -1);
    }

    #[test]
    fn test_circular_distance_symmetry_and_range() {
        for (a, b) in [(0, 600), (1150, 50), (-900, 4000), (17, 17)] {
            let d = circular_distance(a, b, 1200);
            assert_eq!(d, circular_distance(b, a, 1200));
            assert!((0..=600).contains(&d));
        }
    }

    #[test]
    fn test_negative_period_uses_sign_of_period() {
        assert_eq!(circular_difference(1150, 50, -1200), -100);
        assert_eq!(circular_distance(1150, 50, -1200), 100);
    }

    #[test]
    fn test_cents_distance_default_octave() {
        assert_eq!(cents_distance(1199.0, 1.0), 2.0);
        assert_eq!(cents_distance(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_circular_difference_extreme_integers() {
        assert_eq!(circular_difference(i64::MAX, 0, 1200), -593);
        assert_eq!(circular_difference(i64::MIN + 10, 100, 1200), 502);
        assert_eq!(circular_difference(i64::MAX, i64::MIN, 1200), 15);
        assert_eq!(circular_distance(0, i64::MAX, 1200), 593);
        assert_eq!(circular_difference(i64::MAX, 1, i64::MAX), -1);
        assert_eq!(circular_difference(i64::MIN, 3, -1), 0);
        assert_eq!(circular_difference(i8::MIN, i8::MAX, 100), 45);
    }

    #[test]
    #[should_panic(expected = "zero period")]
    fn test_zero_period_panics() {
        circular_difference(1, 2, 0);
    }
}
