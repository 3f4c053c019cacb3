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

//! # Fractions
//!
//! `Fraction<T>` is an exact rational number over a signed primitive integer
//! `T` (default `i64`). Every constructor and operation normalizes:
//!
//! * numerator and denominator are coprime,
//! * the denominator is strictly positive, so the sign lives in the numerator,
//! * zero is always `0/1`.
//!
//! Because the representation is canonical, the derived `Eq` and `Hash` are
//! value equality. Ordering is exact and never overflows: it compares integer
//! parts and recurses on reciprocal remainders instead of cross-multiplying.
//!
//! Arithmetic is checked. The `checked_*` methods, `pow` and `inverse` return
//! [`MathError::DivisionByZero`] or [`MathError::Overflow`]; the operator
//! impls (`+`, `-`, `*`, `/`, unary `-`) panic on the same conditions, like
//! primitive integers do on overflow in debug builds.
//!
//! ```rust
//! use temper_ratio::fraction::Fraction;
//!
//! let a: Fraction = Fraction::new(6, 8).unwrap();
//! assert_eq!((a.numerator(), a.denominator()), (3, 4));
//!
//! let b: Fraction = "1/4".parse().unwrap();
//! assert_eq!(a + b, Fraction::one());
//! assert!(b < a);
//! ```

use crate::approx;
use std::{
    cmp::Ordering,
    ops::{Add, Div, Mul, Neg, Sub},
    str::FromStr,
};
use temper_core::{
    error::{MathError, Result},
    euclid::gcd,
    math::periodic::OCTAVE_CENTS,
    num::{
        IntegerLike,
        ops::{
            CheckedAbsVal, CheckedAddVal, CheckedMulVal, CheckedNegVal, CheckedPowVal,
            CheckedSubVal, OrOverflow,
        },
    },
};

/// An exact rational number in lowest terms with a positive denominator.
///
/// # Invariants
///
/// `gcd(|numerator|, denominator) == 1` and `denominator > 0`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction<T = i64>
where
    T: IntegerLike,
{
    numerator: T,
    denominator: T,
}

/// Splits `a / b` into `(⌊a / b⌋, a mod b)` for `b > 0`.
#[inline]
pub(crate) fn floor_divmod<T>(a: T, b: T) -> (T, T)
where
    T: IntegerLike,
{
    debug_assert!(b > T::zero(), "called `floor_divmod` with a non-positive divisor");
    let (q, r) = (a / b, a % b);
    if r.is_negative() {
        (q - T::one(), r + b)
    } else {
        (q, r)
    }
}

impl<T> Fraction<T>
where
    T: IntegerLike,
{
    /// Creates a normalized fraction `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// - [`MathError::DivisionByZero`] if `denominator == 0`.
    /// - [`MathError::Overflow`] if moving the sign to the numerator requires
    ///   negating `T::MIN`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use temper_ratio::fraction::Fraction;
    /// let f: Fraction = Fraction::new(3, -6).unwrap();
    /// assert_eq!((f.numerator(), f.denominator()), (-1, 2));
    /// assert!(Fraction::<i64>::new(1, 0).is_err());
    /// ```
    pub fn new(numerator: T, denominator: T) -> Result<Self> {
        if denominator.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        if numerator.is_zero() {
            return Ok(Self::zero());
        }
        if numerator == denominator {
            return Ok(Self::one());
        }

        let g = gcd(numerator, denominator)?;
        let (n, d) = (numerator / g, denominator / g);
        if d.is_negative() {
            let n = n.checked_neg_val().or_overflow("Fraction::new")?;
            let d = d.checked_neg_val().or_overflow("Fraction::new")?;
            Ok(Self::new_unchecked(n, d))
        } else {
            Ok(Self::new_unchecked(n, d))
        }
    }

    /// Creates a fraction from parts that are already normalized.
    ///
    /// Debug builds assert the invariants.
    #[inline]
    pub(crate) fn new_unchecked(numerator: T, denominator: T) -> Self {
        debug_assert!(
            denominator > T::zero(),
            "Invalid fraction: denominator must be positive"
        );
        debug_assert!(
            gcd(numerator, denominator).is_ok_and(|g| g.is_one()),
            "Invalid fraction: numerator and denominator must be coprime"
        );
        Self {
            numerator,
            denominator,
        }
    }

    /// Creates the fraction `n / 1`.
    #[inline]
    pub fn from_integer(n: T) -> Self {
        Self::new_unchecked(n, T::one())
    }

    /// Returns the best approximation of `value` with a denominator of at
    /// most `max_denominator`.
    ///
    /// # Errors
    ///
    /// - [`MathError::InvalidInput`] if `value` is not finite.
    /// - [`MathError::NoApproximationFound`] if `max_denominator < 1` or the
    ///   value is out of range for `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use temper_ratio::fraction::Fraction;
    /// let pi = Fraction::<i64>::from_f64(std::f64::consts::PI, 1000).unwrap();
    /// assert_eq!(pi, Fraction::new(355, 113).unwrap());
    /// ```
    pub fn from_f64(value: f64, max_denominator: T) -> Result<Self> {
        approx::best_approximation(value, T::max_value(), max_denominator)
    }

    /// The value `0/1`.
    #[inline]
    pub fn zero() -> Self {
        Self::new_unchecked(T::zero(), T::one())
    }

    /// The value `1/1`.
    #[inline]
    pub fn one() -> Self {
        Self::new_unchecked(T::one(), T::one())
    }

    /// Returns the numerator, which carries the sign.
    #[inline]
    pub fn numerator(&self) -> T {
        self.numerator
    }

    /// Returns the denominator, which is always positive.
    #[inline]
    pub fn denominator(&self) -> T {
        self.denominator
    }

    /// Returns `(numerator, denominator)`.
    #[inline]
    pub fn into_parts(self) -> (T, T) {
        (self.numerator, self.denominator)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Returns `true` for `1/1`, the unison interval.
    #[inline]
    pub fn is_unity(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.numerator.is_positive()
    }

    /// Returns `⌊self⌋`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use temper_ratio::fraction::Fraction;
    /// assert_eq!(Fraction::<i64>::new(-7, 2).unwrap().floor(), -4);
    /// ```
    #[inline]
    pub fn floor(&self) -> T {
        floor_divmod(self.numerator, self.denominator).0
    }

    fn combine(
        self,
        rhs: Self,
        op: fn(T, T) -> Option<T>,
        operation: &'static str,
    ) -> Result<Self> {
        let g = gcd(self.denominator, rhs.denominator)?;
        let lhs_scale = rhs.denominator / g;
        let rhs_scale = self.denominator / g;
        let numerator = self
            .numerator
            .checked_mul_val(lhs_scale)
            .zip(rhs.numerator.checked_mul_val(rhs_scale))
            .and_then(|(a, b)| op(a, b))
            .or_overflow(operation)?;
        let denominator = self
            .denominator
            .checked_mul_val(lhs_scale)
            .or_overflow(operation)?;
        Self::new(numerator, denominator)
    }

    /// Returns `self + rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Overflow`] if the sum is not representable.
    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        self.combine(rhs, T::checked_add_val, "Fraction::add")
    }

    /// Returns `self - rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Overflow`] if the difference is not representable.
    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        self.combine(rhs, T::checked_sub_val, "Fraction::sub")
    }

    /// Returns `self * rhs`, cancelling common factors before multiplying.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Overflow`] if the product is not representable.
    pub fn checked_mul(self, rhs: Self) -> Result<Self> {
        let g1 = gcd(self.numerator, rhs.denominator)?;
        let g2 = gcd(rhs.numerator, self.denominator)?;
        let numerator = (self.numerator / g1)
            .checked_mul_val(rhs.numerator / g2)
            .or_overflow("Fraction::mul")?;
        let denominator = (self.denominator / g2)
            .checked_mul_val(rhs.denominator / g1)
            .or_overflow("Fraction::mul")?;
        Self::new(numerator, denominator)
    }

    /// Returns `self / rhs`.
    ///
    /// # Errors
    ///
    /// - [`MathError::DivisionByZero`] if `rhs` is zero.
    /// - [`MathError::Overflow`] if the quotient is not representable.
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        self.checked_mul(rhs.inverse()?)
    }

    /// Returns `-self`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Overflow`] if the numerator is `T::MIN`.
    pub fn checked_neg(self) -> Result<Self> {
        let numerator = self
            .numerator
            .checked_neg_val()
            .or_overflow("Fraction::neg")?;
        Ok(Self::new_unchecked(numerator, self.denominator))
    }

    /// Returns `|self|`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Overflow`] if the numerator is `T::MIN`.
    pub fn abs(self) -> Result<Self> {
        let numerator = self
            .numerator
            .checked_abs_val()
            .or_overflow("Fraction::abs")?;
        Ok(Self::new_unchecked(numerator, self.denominator))
    }

    /// Returns `1 / self`.
    ///
    /// # Errors
    ///
    /// - [`MathError::DivisionByZero`] if `self` is zero.
    /// - [`MathError::Overflow`] if the numerator is `T::MIN`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use temper_ratio::fraction::Fraction;
    /// let f: Fraction = Fraction::new(-2, 3).unwrap();
    /// assert_eq!(f.inverse().unwrap(), Fraction::new(-3, 2).unwrap());
    /// ```
    pub fn inverse(self) -> Result<Self> {
        if self.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Self::new(self.denominator, self.numerator)
    }

    /// Raises `self` to an integer power; negative exponents invert first.
    ///
    /// # Errors
    ///
    /// - [`MathError::DivisionByZero`] for zero raised to a negative power.
    /// - [`MathError::Overflow`] if the power is not representable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use temper_ratio::fraction::Fraction;
    /// let f: Fraction = Fraction::new(3, 2).unwrap();
    /// assert_eq!(f.pow(-2).unwrap(), Fraction::new(4, 9).unwrap());
    /// assert_eq!(f.pow(0).unwrap(), Fraction::one());
    /// ```
    pub fn pow(self, exp: i32) -> Result<Self> {
        let base = if exp < 0 { self.inverse()? } else { self };
        let e = exp.unsigned_abs();
        let numerator = base
            .numerator
            .checked_pow_val(e)
            .or_overflow("Fraction::pow")?;
        let denominator = base
            .denominator
            .checked_pow_val(e)
            .or_overflow("Fraction::pow")?;
        Ok(Self::new_unchecked(numerator, denominator))
    }

    /// Returns the mediant `(a + c) / (b + d)` of `a/b` and `c/d`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Overflow`] if a sum is not representable.
    pub fn mediant(self, rhs: Self) -> Result<Self> {
        let numerator = self
            .numerator
            .checked_add_val(rhs.numerator)
            .or_overflow("Fraction::mediant")?;
        let denominator = self
            .denominator
            .checked_add_val(rhs.denominator)
            .or_overflow("Fraction::mediant")?;
        Self::new(numerator, denominator)
    }

    /// Returns the nearest `f64` to `numerator / denominator`.
    #[inline]
    pub fn to_f64(&self) -> f64 {
        let n = self.numerator.to_f64().unwrap_or(f64::NAN);
        let d = self.denominator.to_f64().unwrap_or(f64::NAN);
        n / d
    }

    /// Returns the size of the interval in cents, `1200 * log2(self)`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidInput`] if `self <= 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use temper_ratio::fraction::Fraction;
    /// let octave: Fraction = Fraction::from_integer(2);
    /// assert_eq!(octave.cents().unwrap(), 1200.0);
    /// ```
    pub fn cents(&self) -> Result<f64> {
        if !self.is_positive() {
            return Err(MathError::invalid(format!(
                "cents of non-positive value {self}"
            )));
        }
        let n = self.numerator.to_f64().unwrap_or(f64::NAN);
        let d = self.denominator.to_f64().unwrap_or(f64::NAN);
        Ok(OCTAVE_CENTS * (n.log2() - d.log2()))
    }
}

impl<T> Default for Fraction<T>
where
    T: IntegerLike,
{
    fn default() -> Self {
        Self::zero()
    }
}

impl<T> From<T> for Fraction<T>
where
    T: IntegerLike,
{
    fn from(n: T) -> Self {
        Self::from_integer(n)
    }
}

impl<T> Ord for Fraction<T>
where
    T: IntegerLike,
{
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }

        let (mut a, mut b) = (self.numerator, self.denominator);
        let (mut c, mut d) = (other.numerator, other.denominator);
        let mut reversed = false;
        loop {
            let (qa, ra) = floor_divmod(a, b);
            let (qc, rc) = floor_divmod(c, d);
            let ord = match qa.cmp(&qc) {
                Ordering::Equal => match (ra.is_zero(), rc.is_zero()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    (false, false) => {
                        // ra/b < rc/d  <=>  b/ra > d/rc
                        (a, b, c, d) = (b, ra, d, rc);
                        reversed = !reversed;
                        continue;
                    }
                },
                ord => ord,
            };
            return if reversed { ord.reverse() } else { ord };
        }
    }
}

impl<T> PartialOrd for Fraction<T>
where
    T: IntegerLike,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> std::fmt::Display for Fraction<T>
where
    T: IntegerLike,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl<T> std::fmt::Debug for Fraction<T>
where
    T: IntegerLike,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fraction({}/{})", self.numerator, self.denominator)
    }
}

/// Parses integers (`"7"`), ratios (`"3/2"`), decimals (`"1.25"`, `"-.5"`),
/// scientific notation (`"1.5e2"`), percentages (`"50%"`) and ratios of
/// decimals (`"1.5/2"`). Surrounding whitespace is ignored.
///
/// # Examples
///
/// ```rust
/// # use temper_ratio::fraction::Fraction;
/// let half: Fraction = Fraction::new(1, 2).unwrap();
/// assert_eq!("0.5".parse::<Fraction>().unwrap(), half);
/// assert_eq!("50%".parse::<Fraction>().unwrap(), half);
/// assert_eq!(" 2 / 4 ".parse::<Fraction>().unwrap(), half);
/// assert!("two".parse::<Fraction>().is_err());
/// ```
impl<T> FromStr for Fraction<T>
where
    T: IntegerLike,
{
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        match text.strip_suffix('%') {
            Some(percent) => {
                let hundred = T::from_u8(100).or_overflow("Fraction::from_str")?;
                parse_ratio::<T>(percent)?.checked_div(Self::from_integer(hundred))
            }
            None => parse_ratio(text),
        }
    }
}

fn parse_ratio<T>(text: &str) -> Result<Fraction<T>>
where
    T: IntegerLike,
{
    match text.split_once('/') {
        Some((n, d)) => parse_decimal::<T>(n)?.checked_div(parse_decimal(d)?),
        None => parse_decimal(text),
    }
}

fn parse_decimal<T>(text: &str) -> Result<Fraction<T>>
where
    T: IntegerLike,
{
    let text = text.trim();
    let malformed = || MathError::invalid(format!("cannot parse '{text}' as a number"));

    let (mantissa, exponent) = match text.split_once(['e', 'E']) {
        Some((m, e)) => (m, e.parse::<i32>().map_err(|_| malformed())?),
        None => (text, 0),
    };
    let (negative, digits) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa.strip_prefix('+').unwrap_or(mantissa)),
    };
    let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));
    if (whole.is_empty() && frac.is_empty())
        || !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit())
    {
        return Err(malformed());
    }

    // Digits are validated, so a parse failure can only be overflow.
    let n: T = format!("{whole}{frac}")
        .parse()
        .map_err(|_| MathError::overflow("Fraction::from_str"))?;
    let ten = T::from_u8(10).or_overflow("Fraction::from_str")?;
    let scale = u32::try_from(frac.len())
        .ok()
        .and_then(|len| ten.checked_pow_val(len))
        .or_overflow("Fraction::from_str")?;

    let mut value = Fraction::new(n, scale)?;
    if exponent != 0 {
        value = value.checked_mul(Fraction::from_integer(ten).pow(exponent)?)?;
    }
    if negative {
        value = value.checked_neg()?;
    }
    Ok(value)
}

macro_rules! impl_panicking_op {
    ($trait_name:ident, $method:ident, $checked:ident, $verb:literal) => {
        /// # Panics
        ///
        /// Panics on overflow or division by zero; use the `checked_*`
        /// method to handle these as errors.
        impl<T> $trait_name for Fraction<T>
        where
            T: IntegerLike,
        {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                self.$checked(rhs)
                    .unwrap_or_else(|e| panic!("fraction {} failed: {e}", $verb))
            }
        }
    };
}

impl_panicking_op!(Add, add, checked_add, "addition");
impl_panicking_op!(Sub, sub, checked_sub, "subtraction");
impl_panicking_op!(Mul, mul, checked_mul, "multiplication");
impl_panicking_op!(Div, div, checked_div, "division");

/// # Panics
///
/// Panics if the numerator is `T::MIN`.
impl<T> Neg for Fraction<T>
where
    T: IntegerLike,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.checked_neg()
            .unwrap_or_else(|e| panic!("fraction negation failed: {e}"))
    }
}
