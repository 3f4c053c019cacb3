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

//! # Integer Number Theory
//!
//! Floor division, mathematical modulo, gcd/lcm and the extended and iterated
//! Euclidean algorithms, generic over [`IntegerLike`] integers.
//!
//! Every function is total over its documented domain and reports overflow
//! as [`MathError::Overflow`] rather than wrapping. The extended algorithm is
//! iterative and driven by floor division, so negative inputs are handled
//! without special cases; the resulting gcd is normalized to be non-negative.
//!
//! ```rust
//! use temper_core::euclid::extended_euclid;
//!
//! let r = extended_euclid(240i64, 46).unwrap();
//! assert_eq!(r.gcd, 2);
//! assert_eq!(240 * r.coef_a + 46 * r.coef_b, 2);
//! ```

use crate::error::{MathError, Result};
use crate::num::IntegerLike;
use crate::num::ops::{CheckedAbsVal, CheckedMulVal, CheckedNegVal, CheckedSubVal, OrOverflow};

/// Returns `⌊a / b⌋`, rounding toward negative infinity.
///
/// # Errors
///
/// - [`MathError::DivisionByZero`] if `b == 0`.
/// - [`MathError::Overflow`] for `T::MIN / -1`.
///
/// # Examples
///
/// ```rust
/// # use temper_core::euclid::floor_div;
/// assert_eq!(floor_div(7i32, 2), Ok(3));
/// assert_eq!(floor_div(-7i32, 2), Ok(-4));
/// assert_eq!(floor_div(7i32, -2), Ok(-4));
/// assert_eq!(floor_div(-7i32, -2), Ok(3));
/// ```
pub fn floor_div<T>(a: T, b: T) -> Result<T>
where
    T: IntegerLike,
{
    if b.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let q = a.checked_div(&b).or_overflow("floor_div")?;
    // `checked_div` already rejected MIN / -1, so the remainder is safe.
    let r = a % b;
    if !r.is_zero() && (r.is_negative() != b.is_negative()) {
        q.checked_sub_val(T::one()).or_overflow("floor_div")
    } else {
        Ok(q)
    }
}

/// Returns `a mod b` with the sign of `b` (mathematical modulo).
///
/// # Errors
///
/// Returns [`MathError::DivisionByZero`] if `b == 0`.
///
/// # Examples
///
/// ```rust
/// # use temper_core::euclid::modulo;
/// assert_eq!(modulo(-1i32, 12), Ok(11));
/// assert_eq!(modulo(13i32, 12), Ok(1));
/// assert_eq!(modulo(1i32, -12), Ok(-11));
/// ```
pub fn modulo<T>(a: T, b: T) -> Result<T>
where
    T: IntegerLike,
{
    if b.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    if b == -T::one() {
        return Ok(T::zero());
    }
    let r = a % b;
    if !r.is_zero() && (r.is_negative() != b.is_negative()) {
        Ok(r + b)
    } else {
        Ok(r)
    }
}

/// Returns the non-negative greatest common divisor of `a` and `b`.
///
/// `gcd(0, 0)` is `0`.
///
/// # Errors
///
/// Returns [`MathError::Overflow`] if the gcd is `|T::MIN|`.
///
/// # Examples
///
/// ```rust
/// # use temper_core::euclid::gcd;
/// assert_eq!(gcd(-12i64, 18), Ok(6));
/// assert_eq!(gcd(0i64, -5), Ok(5));
/// ```
pub fn gcd<T>(a: T, b: T) -> Result<T>
where
    T: IntegerLike,
{
    let (mut x, mut y) = (a, b);
    while !y.is_zero() {
        let r = modulo(x, y)?;
        x = y;
        y = r;
    }
    x.checked_abs_val().or_overflow("gcd")
}

/// Returns the non-negative least common multiple of `a` and `b`.
///
/// `lcm(x, 0)` is `0`.
///
/// # Errors
///
/// Returns [`MathError::Overflow`] if the lcm is not representable.
///
/// # Examples
///
/// ```rust
/// # use temper_core::euclid::lcm;
/// assert_eq!(lcm(4i32, -6), Ok(12));
/// assert_eq!(lcm(4i32, 0), Ok(0));
/// ```
pub fn lcm<T>(a: T, b: T) -> Result<T>
where
    T: IntegerLike,
{
    if a.is_zero() || b.is_zero() {
        return Ok(T::zero());
    }
    let g = gcd(a, b)?;
    (a / g)
        .checked_mul_val(b)
        .and_then(CheckedAbsVal::checked_abs_val)
        .or_overflow("lcm")
}

/// The outcome of the extended Euclidean algorithm on `(a, b)`.
///
/// Satisfies `a * coef_a + b * coef_b == gcd`, `gcd >= 0`,
/// `quotient_a == a / gcd` and `quotient_b == |b / gcd|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EuclidResult<T> {
    /// Bézout coefficient of `a`.
    pub coef_a: T,
    /// Bézout coefficient of `b`.
    pub coef_b: T,
    /// The non-negative gcd of `a` and `b`.
    pub gcd: T,
    /// `a / gcd`.
    pub quotient_a: T,
    /// `|b / gcd|`.
    pub quotient_b: T,
}

/// Computes Bézout coefficients and the gcd of `a` and `b`.
///
/// The loop keeps `(r, s, t)` triples with `a * s + b * t == r`, stepping
/// with `q = ⌊r_old / r⌋` until the remainder is zero. The last nonzero
/// remainder is the gcd up to sign; a negative one is flipped together with
/// both coefficients.
///
/// # Errors
///
/// - [`MathError::DegenerateInput`] if `a == 0` and `b == 0`.
/// - [`MathError::Overflow`] if a coefficient or the gcd is not representable
///   (only reachable near `T::MIN`).
///
/// # Examples
///
/// ```rust
/// # use temper_core::euclid::extended_euclid;
/// let r = extended_euclid(-9i32, 6).unwrap();
/// assert_eq!(r.gcd, 3);
/// assert_eq!(-9 * r.coef_a + 6 * r.coef_b, 3);
/// assert_eq!((r.quotient_a, r.quotient_b), (-3, 2));
/// ```
pub fn extended_euclid<T>(a: T, b: T) -> Result<EuclidResult<T>>
where
    T: IntegerLike,
{
    if a.is_zero() && b.is_zero() {
        return Err(MathError::DegenerateInput {
            operation: "extended_euclid",
        });
    }

    let (mut old_r, mut r) = (a, b);
    let (mut old_s, mut s) = (T::one(), T::zero());
    let (mut old_t, mut t) = (T::zero(), T::one());

    while !r.is_zero() {
        let q = floor_div(old_r, r)?;
        let next_r = modulo(old_r, r)?;
        let next_s = step(old_s, q, s)?;
        let next_t = step(old_t, q, t)?;
        (old_r, r) = (r, next_r);
        (old_s, s) = (s, next_s);
        (old_t, t) = (t, next_t);
    }

    if old_r.is_negative() {
        old_r = old_r.checked_neg_val().or_overflow("extended_euclid")?;
        old_s = old_s.checked_neg_val().or_overflow("extended_euclid")?;
        old_t = old_t.checked_neg_val().or_overflow("extended_euclid")?;
    }

    Ok(EuclidResult {
        coef_a: old_s,
        coef_b: old_t,
        gcd: old_r,
        quotient_a: a / old_r,
        quotient_b: (b / old_r)
            .checked_abs_val()
            .or_overflow("extended_euclid")?,
    })
}

#[inline(always)]
fn step<T>(old: T, q: T, cur: T) -> Result<T>
where
    T: IntegerLike,
{
    q.checked_mul_val(cur)
        .and_then(|qc| old.checked_sub_val(qc))
        .or_overflow("extended_euclid")
}

/// Computes one Bézout coefficient per element of `seq` such that
/// `Σ seq[i] * coef[i] == gcd(seq)`.
///
/// Folds [`extended_euclid`] left to right over the running gcd. At each step
/// every coefficient accumulated so far is multiplied by the pairwise
/// `coef_a`, and the new element receives the pairwise `coef_b`. The first
/// coefficient starts at `1`, or `-1` when the first element is negative so
/// that the running gcd stays non-negative. Leading zeros are carried with a
/// coefficient of `1` until the first nonzero element arrives.
///
/// An empty sequence yields an empty coefficient vector.
///
/// # Errors
///
/// - [`MathError::DegenerateInput`] if every element is zero.
/// - [`MathError::Overflow`] if a rescaled coefficient is not representable.
///
/// # Examples
///
/// ```rust
/// # use temper_core::euclid::iterated_euclid;
/// let seq = [6i64, 10, 15];
/// let coefs = iterated_euclid(&seq).unwrap();
/// let sum: i64 = seq.iter().zip(&coefs).map(|(a, c)| a * c).sum();
/// assert_eq!(sum, 1);
/// ```
pub fn iterated_euclid<T>(seq: &[T]) -> Result<Vec<T>>
where
    T: IntegerLike,
{
    let Some((&first, rest)) = seq.split_first() else {
        return Ok(Vec::new());
    };

    let mut coefs = Vec::with_capacity(seq.len());
    let mut running = first.checked_abs_val().or_overflow("iterated_euclid")?;
    coefs.push(if first.is_negative() {
        -T::one()
    } else {
        T::one()
    });

    for &x in rest {
        let (coef_a, coef_b, g) = if running.is_zero() && x.is_zero() {
            (T::one(), T::zero(), T::zero())
        } else {
            let r = extended_euclid(running, x)?;
            (r.coef_a, r.coef_b, r.gcd)
        };
        for c in coefs.iter_mut() {
            *c = c.checked_mul_val(coef_a).or_overflow("iterated_euclid")?;
        }
        coefs.push(coef_b);
        running = g;
    }

    if running.is_zero() {
        return Err(MathError::DegenerateInput {
            operation: "iterated_euclid",
        });
    }
    Ok(coefs)
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    fn assert_bezout(a: IntegerType, b: IntegerType) {
        let r = extended_euclid(a, b).unwrap();
        assert_eq!(a * r.coef_a + b * r.coef_b, r.gcd, "identity for ({a}, {b})");
        assert!(r.gcd >= 0);
        assert_eq!(a % r.gcd, 0);
        assert_eq!(b % r.gcd, 0);
        assert_eq!(r.quotient_a, a / r.gcd);
        assert_eq!(r.quotient_b, (b / r.gcd).abs());
    }

    #[test]
    fn test_floor_div_rounds_toward_negative_infinity() {
        assert_eq!(floor_div::<IntegerType>(9, 3), Ok(3));
        assert_eq!(floor_div::<IntegerType>(-9, 3), Ok(-3));
        assert_eq!(floor_div::<IntegerType>(-1, 3), Ok(-1));
        assert_eq!(floor_div::<IntegerType>(1, -3), Ok(-1));
        assert_eq!(floor_div::<IntegerType>(0, -3), Ok(0));
    }

    #[test]
    fn test_floor_div_errors() {
        assert_eq!(floor_div::<IntegerType>(1, 0), Err(MathError::DivisionByZero));
        assert_eq!(
            floor_div(IntegerType::MIN, -1),
            Err(MathError::overflow("floor_div"))
        );
        assert_eq!(floor_div(IntegerType::MIN, 1), Ok(IntegerType::MIN));
    }

    #[test]
    fn test_modulo_sign_follows_divisor() {
        assert_eq!(modulo::<IntegerType>(-7, 3), Ok(2));
        assert_eq!(modulo::<IntegerType>(7, -3), Ok(-2));
        assert_eq!(modulo::<IntegerType>(-7, -3), Ok(-1));
        assert_eq!(modulo(IntegerType::MIN, -1), Ok(0));
        assert_eq!(modulo::<IntegerType>(5, 0), Err(MathError::DivisionByZero));
    }

    #[test]
    fn test_gcd_and_lcm() {
        assert_eq!(gcd::<IntegerType>(0, 0), Ok(0));
        assert_eq!(gcd::<IntegerType>(-48, -18), Ok(6));
        assert_eq!(gcd(IntegerType::MIN, 6), Ok(2));
        assert_eq!(gcd(IntegerType::MIN, 0), Err(MathError::overflow("gcd")));
        assert_eq!(lcm::<IntegerType>(21, 6), Ok(42));
        assert_eq!(lcm(IntegerType::MAX, 2), Err(MathError::overflow("lcm")));
    }

    #[test]
    fn test_extended_euclid_classic_example() {
        let r = extended_euclid::<IntegerType>(240, 46).unwrap();
        assert_eq!(r.gcd, 2);
        assert_eq!(240 * r.coef_a + 46 * r.coef_b, 2);
        assert_eq!(r.quotient_a, 120);
        assert_eq!(r.quotient_b, 23);
    }

    #[test]
    fn test_extended_euclid_sign_combinations() {
        for (a, b) in [(240, 46), (-240, 46), (240, -46), (-240, -46), (46, 240)] {
            assert_bezout(a, b);
        }
    }

    #[test]
    fn test_extended_euclid_with_zero_operand() {
        let r = extended_euclid::<IntegerType>(0, -5).unwrap();
        assert_eq!(r.gcd, 5);
        assert_eq!(-5 * r.coef_b, 5);
        assert_eq!(r.quotient_a, 0);
        assert_eq!(r.quotient_b, 1);

        let r = extended_euclid::<IntegerType>(-7, 0).unwrap();
        assert_eq!(r.gcd, 7);
        assert_eq!(r.coef_a, -1);
        assert_eq!(r.quotient_a, -1);
    }

    #[test]
    fn test_extended_euclid_degenerate() {
        assert_eq!(
            extended_euclid::<IntegerType>(0, 0),
            Err(MathError::DegenerateInput {
                operation: "extended_euclid"
            })
        );
    }

    #[test]
    fn test_extended_euclid_extreme_values() {
        assert_bezout(IntegerType::MAX, IntegerType::MAX - 1);
        assert_bezout(IntegerType::MIN + 1, 3);
        assert_eq!(
            extended_euclid(IntegerType::MIN, 0),
            Err(MathError::overflow("extended_euclid"))
        );
    }

    #[test]
    fn test_extended_euclid_small_type() {
        let r = extended_euclid(100i8, 75).unwrap();
        assert_eq!(r.gcd, 25);
        assert_eq!(100i16 * r.coef_a as i16 + 75 * r.coef_b as i16, 25);
    }

    #[test]
    fn test_iterated_euclid_empty_and_single() {
        assert_eq!(iterated_euclid::<IntegerType>(&[]), Ok(vec![]));
        assert_eq!(iterated_euclid::<IntegerType>(&[12]), Ok(vec![1]));
        assert_eq!(iterated_euclid::<IntegerType>(&[-12]), Ok(vec![-1]));
    }

    #[test]
    fn test_iterated_euclid_identity() {
        let seq: [IntegerType; 4] = [12, 18, -30, 7];
        let coefs = iterated_euclid(&seq).unwrap();
        assert_eq!(coefs.len(), seq.len());
        let sum: IntegerType = seq.iter().zip(&coefs).map(|(a, c)| a * c).sum();
        assert_eq!(sum, 1);
    }

    #[test]
    fn test_iterated_euclid_leading_zeros() {
        let seq: [IntegerType; 4] = [0, 0, 8, 12];
        let coefs = iterated_euclid(&seq).unwrap();
        let sum: IntegerType = seq.iter().zip(&coefs).map(|(a, c)| a * c).sum();
        assert_eq!(sum, 4);
    }

    #[test]
    fn test_iterated_euclid_all_zero_is_degenerate() {
        assert_eq!(
            iterated_euclid::<IntegerType>(&[0, 0, 0]),
            Err(MathError::DegenerateInput {
                operation: "iterated_euclid"
            })
        );
    }
}
