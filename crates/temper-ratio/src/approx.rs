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

//! # Continued-Fraction Approximation
//!
//! Lazy continued-fraction expansion of floats and fractions, the sequence of
//! convergents it induces, and a bounded best-approximation search.
//!
//! ## Search
//!
//! For every partial quotient `a_k` the search considers the semiconvergent
//! `(p_{k-2} + j·p_{k-1}) / (q_{k-2} + j·q_{k-1})` with the largest
//! `1 <= j <= a_k` that keeps `|p| <= max_numerator` and
//! `q <= max_denominator`. `j == a_k` is the convergent itself. Once the
//! bounds cut a level short, every later candidate would exceed them, so the
//! scan stops. The closest candidate wins; ties go to the smaller
//! denominator. Negative targets are approximated through their absolute
//! value.

use crate::fraction::{Fraction, floor_divmod};
use std::cmp::Ordering;
use temper_core::{
    error::{MathError, Result},
    num::{
        IntegerLike,
        ops::{CheckedAddVal, CheckedMulVal},
    },
};
use tracing::{debug, trace};

/// Default number of partial quotients examined.
pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Expansion<T> {
    Real(f64),
    Exact { numerator: T, denominator: T },
    Done,
}

/// Lazy iterator over the partial quotients `a0, a1, …` of a number.
///
/// Exact expansions end when the remainder vanishes. Real expansions also end
/// after `max_depth` terms or when a term no longer fits in `T`.
///
/// # Examples
///
/// ```rust
/// use temper_ratio::{approx::ContinuedFraction, fraction::Fraction};
///
/// let f: Fraction = Fraction::new(415, 93).unwrap();
/// let terms: Vec<i64> = ContinuedFraction::from_fraction(&f, 64).collect();
/// assert_eq!(terms, vec![4, 2, 6, 7]);
/// ```
#[derive(Debug, Clone)]
pub struct ContinuedFraction<T = i64>
where
    T: IntegerLike,
{
    state: Expansion<T>,
    remaining: usize,
}

impl<T> ContinuedFraction<T>
where
    T: IntegerLike,
{
    /// Expands a finite float.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidInput`] if `value` is NaN or infinite.
    pub fn from_f64(value: f64, max_depth: usize) -> Result<Self> {
        if !value.is_finite() {
            return Err(MathError::invalid(format!(
                "cannot expand non-finite value {value}"
            )));
        }
        Ok(Self {
            state: Expansion::Real(value),
            remaining: max_depth,
        })
    }

    /// Expands a fraction exactly.
    pub fn from_fraction(value: &Fraction<T>, max_depth: usize) -> Self {
        let (numerator, denominator) = value.into_parts();
        Self {
            state: Expansion::Exact {
                numerator,
                denominator,
            },
            remaining: max_depth,
        }
    }

    /// Turns the remaining terms into their convergents.
    #[inline]
    pub fn convergents(self) -> Convergents<T> {
        Convergents::new(self)
    }
}

impl<T> Iterator for ContinuedFraction<T>
where
    T: IntegerLike,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let (term, state) = match self.state {
            Expansion::Done => return None,
            Expansion::Real(x) => {
                let floor = x.floor();
                let Some(term) = T::from_f64(floor) else {
                    self.state = Expansion::Done;
                    return None;
                };
                let rest = x - floor;
                let state = if rest == 0.0 {
                    Expansion::Done
                } else {
                    Expansion::Real(rest.recip())
                };
                (term, state)
            }
            Expansion::Exact {
                numerator,
                denominator,
            } => {
                let (q, r) = floor_divmod(numerator, denominator);
                let state = if r.is_zero() {
                    Expansion::Done
                } else {
                    Expansion::Exact {
                        numerator: denominator,
                        denominator: r,
                    }
                };
                (q, state)
            }
        };
        self.state = state;
        self.remaining -= 1;
        Some(term)
    }
}

/// Expands `value` into at most `max_depth` partial quotients.
///
/// # Errors
///
/// Returns [`MathError::InvalidInput`] if `value` is NaN or infinite.
pub fn continued_fraction<T>(value: f64, max_depth: usize) -> Result<ContinuedFraction<T>>
where
    T: IntegerLike,
{
    ContinuedFraction::from_f64(value, max_depth)
}

/// `p_{k+1} = a·p_k + p_{k-1}`.
#[inline]
fn recurrence<T>(previous: T, current: T, a: T) -> Option<T>
where
    T: IntegerLike,
{
    current
        .checked_mul_val(a)
        .and_then(|v| v.checked_add_val(previous))
}

/// Lazy iterator over the convergents `p_k / q_k` of a continued fraction.
///
/// Convergents alternate around the target and each one is strictly closer
/// than the one before. The iterator ends with the expansion or as soon as
/// the next convergent overflows `T`. Clone it to restart from the current
/// position.
///
/// # Examples
///
/// ```rust
/// use temper_ratio::{approx::convergents, fraction::Fraction};
///
/// let pi: Vec<Fraction> = convergents(std::f64::consts::PI, 4).unwrap().collect();
/// assert_eq!(pi.last(), Some(&Fraction::new(355, 113).unwrap()));
/// ```
#[derive(Debug, Clone)]
pub struct Convergents<T = i64>
where
    T: IntegerLike,
{
    terms: ContinuedFraction<T>,
    /// `(p_{k-2}, p_{k-1})`
    p: (T, T),
    /// `(q_{k-2}, q_{k-1})`
    q: (T, T),
    exhausted: bool,
}

impl<T> Convergents<T>
where
    T: IntegerLike,
{
    /// Starts the recurrence at `p_{-2}/q_{-2} = 0/1`, `p_{-1}/q_{-1} = 1/0`.
    pub fn new(terms: ContinuedFraction<T>) -> Self {
        Self {
            terms,
            p: (T::zero(), T::one()),
            q: (T::one(), T::zero()),
            exhausted: false,
        }
    }
}

impl<T> Iterator for Convergents<T>
where
    T: IntegerLike,
{
    type Item = Fraction<T>;

    fn next(&mut self) -> Option<Fraction<T>> {
        if self.exhausted {
            return None;
        }
        let Some(a) = self.terms.next() else {
            self.exhausted = true;
            return None;
        };
        let p = recurrence(self.p.0, self.p.1, a);
        let q = recurrence(self.q.0, self.q.1, a);
        match p.zip(q) {
            Some((p, q)) => {
                self.p = (self.p.1, p);
                self.q = (self.q.1, q);
                // Consecutive convergents have determinant ±1, so `p/q` is reduced.
                Some(Fraction::new_unchecked(p, q))
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }
}

/// Returns the convergents of `value`, from at most `max_depth` terms.
///
/// # Errors
///
/// Returns [`MathError::InvalidInput`] if `value` is NaN or infinite.
pub fn convergents<T>(value: f64, max_depth: usize) -> Result<Convergents<T>>
where
    T: IntegerLike,
{
    Ok(ContinuedFraction::from_f64(value, max_depth)?.convergents())
}

impl<T> Fraction<T>
where
    T: IntegerLike,
{
    /// Exact continued-fraction expansion of `self`.
    #[inline]
    pub fn continued_fraction(&self, max_depth: usize) -> ContinuedFraction<T> {
        ContinuedFraction::from_fraction(self, max_depth)
    }

    /// Convergents of `self`; the last one is `self` unless cut off by
    /// `max_depth`.
    #[inline]
    pub fn convergents(&self, max_depth: usize) -> Convergents<T> {
        self.continued_fraction(max_depth).convergents()
    }
}

/// Size limits for [`best_approximation_with`] and
/// [`best_rational_approximation`].
///
/// # Examples
///
/// ```rust
/// use temper_ratio::approx::ApproximationBounds;
///
/// let bounds = ApproximationBounds::<i64>::default()
///     .with_max_denominator(12)
///     .with_max_depth(16);
/// assert_eq!(bounds.max_numerator(), i64::MAX);
/// assert_eq!(bounds.max_denominator(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApproximationBounds<T = i64>
where
    T: IntegerLike,
{
    max_numerator: T,
    max_denominator: T,
    max_depth: usize,
}

impl<T> Default for ApproximationBounds<T>
where
    T: IntegerLike,
{
    fn default() -> Self {
        Self {
            max_numerator: T::max_value(),
            max_denominator: T::max_value(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl<T> ApproximationBounds<T>
where
    T: IntegerLike,
{
    /// Bounds on `|numerator|` and denominator with the default depth.
    pub fn new(max_numerator: T, max_denominator: T) -> Self {
        Self {
            max_numerator,
            max_denominator,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    #[inline]
    pub fn with_max_numerator(mut self, max_numerator: T) -> Self {
        self.max_numerator = max_numerator;
        self
    }

    #[inline]
    pub fn with_max_denominator(mut self, max_denominator: T) -> Self {
        self.max_denominator = max_denominator;
        self
    }

    #[inline]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[inline]
    pub fn max_numerator(&self) -> T {
        self.max_numerator
    }

    #[inline]
    pub fn max_denominator(&self) -> T {
        self.max_denominator
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[inline]
    fn admits(&self, p: T, q: T) -> bool {
        q >= T::one() && q <= self.max_denominator && p <= self.max_numerator
    }
}

/// A non-negative approximation target.
#[derive(Debug, Clone, Copy)]
enum Target<T>
where
    T: IntegerLike,
{
    Real(f64),
    Exact(Fraction<T>),
}

impl<T> Target<T>
where
    T: IntegerLike,
{
    fn terms(&self, max_depth: usize) -> Result<ContinuedFraction<T>> {
        match self {
            Target::Real(x) => ContinuedFraction::from_f64(*x, max_depth),
            Target::Exact(f) => Ok(ContinuedFraction::from_fraction(f, max_depth)),
        }
    }

    fn to_f64(&self) -> f64 {
        match self {
            Target::Real(x) => *x,
            Target::Exact(f) => f.to_f64(),
        }
    }

    fn exact_distance(&self, candidate: &Fraction<T>) -> Option<Fraction<T>> {
        match self {
            Target::Real(_) => None,
            Target::Exact(f) => candidate.checked_sub(*f).and_then(Fraction::abs).ok(),
        }
    }

    /// Returns `true` if `candidate` beats `incumbent`.
    fn is_closer(&self, candidate: &Fraction<T>, incumbent: &Fraction<T>) -> bool {
        let by_distance = self
            .exact_distance(candidate)
            .zip(self.exact_distance(incumbent))
            .map(|(a, b)| a.cmp(&b))
            .unwrap_or_else(|| {
                let x = self.to_f64();
                let a = (candidate.to_f64() - x).abs();
                let b = (incumbent.to_f64() - x).abs();
                a.total_cmp(&b)
            });
        by_distance.then(candidate.denominator().cmp(&incumbent.denominator())) == Ordering::Less
    }
}

/// Largest `j` with `x0 + j·x1 <= bound`, capped at `a`.
#[inline]
fn max_steps<T>(x0: T, x1: T, bound: T, a: T) -> T
where
    T: IntegerLike,
{
    if x0 > bound {
        T::zero()
    } else if x1.is_zero() {
        a
    } else {
        ((bound - x0) / x1).min(a)
    }
}

fn search<T>(target: Target<T>, bounds: &ApproximationBounds<T>) -> Result<Fraction<T>>
where
    T: IntegerLike,
{
    let mut best = bounds
        .admits(T::zero(), T::one())
        .then(Fraction::<T>::zero);
    let (mut p0, mut p1) = (T::zero(), T::one());
    let (mut q0, mut q1) = (T::one(), T::zero());

    for a in target.terms(bounds.max_depth)? {
        let j = max_steps(p0, p1, bounds.max_numerator, a).min(max_steps(
            q0,
            q1,
            bounds.max_denominator,
            a,
        ));

        if j > T::zero() {
            if let Some((p, q)) = recurrence(p0, p1, j).zip(recurrence(q0, q1, j)) {
                if bounds.admits(p, q) {
                    let candidate = Fraction::new(p, q)?;
                    trace!(%candidate, "approximation candidate");
                    if best.is_none_or(|b| target.is_closer(&candidate, &b)) {
                        best = Some(candidate);
                    }
                }
            }
        }

        if j < a {
            break;
        }
        match recurrence(p0, p1, a).zip(recurrence(q0, q1, a)) {
            Some((p, q)) => {
                (p0, p1) = (p1, p);
                (q0, q1) = (q1, q);
            }
            None => break,
        }
    }

    let best = best.ok_or(MathError::NoApproximationFound)?;
    debug!(value = target.to_f64(), %best, "selected best approximation");
    Ok(best)
}

/// Best approximation of `value` with `|numerator| <= max_numerator` and
/// `denominator <= max_denominator`.
///
/// # Errors
///
/// - [`MathError::InvalidInput`] if `value` is NaN or infinite.
/// - [`MathError::NoApproximationFound`] if no fraction satisfies the
///   bounds, or `|value|` does not fit in `T`.
///
/// # Examples
///
/// ```rust
/// use temper_ratio::{approx::best_approximation, fraction::Fraction};
///
/// let fifth = best_approximation(3f64.log2(), i64::MAX, 12).unwrap();
/// assert_eq!(fifth, Fraction::new(19, 12).unwrap());
/// ```
pub fn best_approximation<T>(
    value: f64,
    max_numerator: T,
    max_denominator: T,
) -> Result<Fraction<T>>
where
    T: IntegerLike,
{
    let bounds = ApproximationBounds::new(max_numerator, max_denominator);
    best_approximation_with(value, &bounds)
}

/// Best approximation of `value` within `bounds`.
///
/// # Errors
///
/// See [`best_approximation`].
pub fn best_approximation_with<T>(
    value: f64,
    bounds: &ApproximationBounds<T>,
) -> Result<Fraction<T>>
where
    T: IntegerLike,
{
    if !value.is_finite() {
        return Err(MathError::invalid(format!(
            "cannot approximate non-finite value {value}"
        )));
    }
    let magnitude = value.abs();
    if T::from_f64(magnitude.floor()).is_none() {
        return Err(MathError::NoApproximationFound);
    }
    let best = search(Target::Real(magnitude), bounds)?;
    if value.is_sign_negative() {
        best.checked_neg()
    } else {
        Ok(best)
    }
}

/// Best approximation of an exact fraction within `bounds`.
///
/// Distances are compared exactly where the arithmetic fits in `T`.
///
/// # Errors
///
/// - [`MathError::NoApproximationFound`] if no fraction satisfies the bounds.
/// - [`MathError::Overflow`] if the numerator of `value` is `T::MIN`.
///
/// # Examples
///
/// ```rust
/// use temper_ratio::approx::{best_rational_approximation, ApproximationBounds};
/// use temper_ratio::fraction::Fraction;
///
/// let comma: Fraction = Fraction::new(81, 80).unwrap();
/// let bounds = ApproximationBounds::new(100, 10);
/// assert_eq!(best_rational_approximation(&comma, &bounds).unwrap(), Fraction::one());
/// ```
pub fn best_rational_approximation<T>(
    value: &Fraction<T>,
    bounds: &ApproximationBounds<T>,
) -> Result<Fraction<T>>
where
    T: IntegerLike,
{
    let best = search(Target::Exact(value.abs()?), bounds)?;
    if value.is_negative() {
        best.checked_neg()
    } else {
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    fn fr(n: IntegerType, d: IntegerType) -> Fraction<IntegerType> {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn test_continued_fraction_of_fraction() {
        let terms: Vec<IntegerType> = fr(415, 93).continued_fraction(64).collect();
        assert_eq!(terms, vec![4, 2, 6, 7]);
        let terms: Vec<IntegerType> = fr(-7, 3).continued_fraction(64).collect();
        assert_eq!(terms, vec![-3, 1, 2]);
        let terms: Vec<IntegerType> = fr(5, 1).continued_fraction(64).collect();
        assert_eq!(terms, vec![5]);
    }

    #[test]
    fn test_continued_fraction_of_float() {
        let terms: Vec<IntegerType> = continued_fraction(1.5, 64).unwrap().collect();
        assert_eq!(terms, vec![1, 2]);
        let terms: Vec<IntegerType> = continued_fraction(2f64.sqrt(), 5).unwrap().collect();
        assert_eq!(terms, vec![1, 2, 2, 2, 2]);
        let terms: Vec<IntegerType> = continued_fraction(-0.75, 64).unwrap().collect();
        assert_eq!(terms, vec![-1, 4]);
    }

    #[test]
    fn test_continued_fraction_rejects_non_finite() {
        for x in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                ContinuedFraction::<IntegerType>::from_f64(x, 8),
                Err(MathError::InvalidInput { .. })
            ));
        }
    }

    #[test]
    fn test_continued_fraction_stops_on_unrepresentable_term() {
        let terms: Vec<i8> = continued_fraction(1000.5, 64).unwrap().collect();
        assert!(terms.is_empty());
        let terms: Vec<i8> = continued_fraction(1.0 + 1.0 / 300.0, 64).unwrap().collect();
        assert_eq!(terms, vec![1]);
    }

    #[test]
    fn test_convergents_of_pi() {
        let found: Vec<Fraction<IntegerType>> =
            convergents(std::f64::consts::PI, 5).unwrap().collect();
        assert_eq!(
            found,
            vec![fr(3, 1), fr(22, 7), fr(333, 106), fr(355, 113), fr(103_993, 33_102)]
        );
    }

    #[test]
    fn test_convergents_alternate_and_improve() {
        let target = 2f64.sqrt();
        let found: Vec<Fraction<IntegerType>> = convergents(target, 10).unwrap().collect();
        assert_eq!(&found[..4], &[fr(1, 1), fr(3, 2), fr(7, 5), fr(17, 12)]);
        for pair in found.windows(2) {
            let (a, b) = (pair[0].to_f64() - target, pair[1].to_f64() - target);
            assert!(a.signum() != b.signum());
            assert!(b.abs() < a.abs());
        }
    }

    #[test]
    fn test_convergents_end_at_exact_value() {
        let found: Vec<_> = fr(415, 93).convergents(64).collect();
        assert_eq!(found.len(), 4);
        assert_eq!(found.last(), Some(&fr(415, 93)));
        let truncated: Vec<_> = fr(415, 93).convergents(2).collect();
        assert_eq!(truncated, vec![fr(4, 1), fr(9, 2)]);
    }

    #[test]
    fn test_convergents_stop_on_overflow() {
        let golden = (1.0 + 5f64.sqrt()) / 2.0;
        let found: Vec<Fraction<i8>> = convergents(golden, 64).unwrap().collect();
        assert_eq!(found.len(), 10);
        assert_eq!(found.last().map(|f| f.into_parts()), Some((89, 55)));
    }

    #[test]
    fn test_convergents_restart_by_clone() {
        let mut iter = convergents::<IntegerType>(std::f64::consts::E, 8).unwrap();
        iter.next();
        let snapshot = iter.clone();
        assert_eq!(iter.collect::<Vec<_>>(), snapshot.collect::<Vec<_>>());
    }

    #[test]
    fn test_best_approximation_of_fifth() {
        let fifth = best_approximation(1.584_962_5, IntegerType::MAX, 12).unwrap();
        assert_eq!(fifth, fr(19, 12));
        let negative = best_approximation(-1.584_962_5, IntegerType::MAX, 12).unwrap();
        assert_eq!(negative, fr(-19, 12));
    }

    #[test]
    fn test_best_approximation_uses_semiconvergents() {
        let pi = best_approximation(std::f64::consts::PI, IntegerType::MAX, 100).unwrap();
        assert_eq!(pi, fr(311, 99));
        let pi = Fraction::<IntegerType>::from_f64(std::f64::consts::PI, 1000).unwrap();
        assert_eq!(pi, fr(355, 113));
    }

    #[test]
    fn test_best_approximation_respects_numerator_bound() {
        let bounds = ApproximationBounds::new(10, IntegerType::MAX);
        assert_eq!(best_rational_approximation(&fr(37, 10), &bounds), Ok(fr(7, 2)));
        assert_eq!(best_approximation(2.5, 1, 1), Ok(fr(1, 1)));
        assert_eq!(best_approximation(2.5, 0, 5), Ok(Fraction::zero()));
    }

    #[test]
    fn test_best_approximation_ties_prefer_smaller_denominator() {
        assert_eq!(best_approximation(0.25, 10, 2), Ok(Fraction::zero()));
    }

    #[test]
    fn test_best_rational_approximation_is_exact_within_bounds() {
        for f in [fr(415, 93), fr(-22, 7), fr(1, 1), fr(0, 1), fr(81, 80)] {
            let n = f.numerator().abs().max(f.denominator());
            let bounds = ApproximationBounds::new(n, n);
            assert_eq!(best_rational_approximation(&f, &bounds), Ok(f));
        }
    }

    #[test]
    fn test_best_approximation_errors() {
        assert_eq!(
            best_approximation(0.5, IntegerType::MAX, 0),
            Err(MathError::NoApproximationFound)
        );
        assert_eq!(best_approximation(0.5, -1, 10), Err(MathError::NoApproximationFound));
        assert!(matches!(
            best_approximation(f64::NAN, IntegerType::MAX, 10),
            Err(MathError::InvalidInput { .. })
        ));
        assert_eq!(best_approximation::<i8>(1e6, 100, 100), Err(MathError::NoApproximationFound));
    }

    #[test]
    fn test_bounds_defaults_and_builders() {
        let bounds = ApproximationBounds::<IntegerType>::default();
        assert_eq!(bounds.max_numerator(), IntegerType::MAX);
        assert_eq!(bounds.max_denominator(), IntegerType::MAX);
        assert_eq!(bounds.max_depth(), DEFAULT_MAX_DEPTH);
        let bounds = bounds.with_max_numerator(5).with_max_denominator(7).with_max_depth(3);
        assert_eq!(bounds, ApproximationBounds::new(5, 7).with_max_depth(3));
    }

    #[test]
    fn test_max_depth_limits_search() {
        let bounds = ApproximationBounds::default().with_max_depth(2);
        assert_eq!(best_approximation_with(std::f64::consts::PI, &bounds), Ok(fr(22, 7)));
    }
}
