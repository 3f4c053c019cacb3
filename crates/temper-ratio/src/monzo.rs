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

//! # Monzos
//!
//! A [`Monzo`] is the prime-exponent vector of a positive rational number:
//! `81/80 = 2^-4 · 3^4 · 5^-1` is the monzo `[-4, 4, -1>`. Index `i` is the
//! exponent of `basis.nth_prime(i)` for a [`PrimeBasis`].
//!
//! Multiplying rationals adds monzos, dividing subtracts them and raising to
//! an integer power scales them, which turns interval arithmetic into integer
//! vector arithmetic. Trailing zero exponents are never stored, so two monzos
//! that differ only by zero-padding are equal.

use crate::{fraction::Fraction, primes::PrimeBasis};
use smallvec::SmallVec;
use std::fmt;
use temper_core::{
    error::{MathError, Result},
    num::{
        IntegerLike,
        ops::{CheckedMulVal, CheckedPowVal, OrOverflow},
    },
};

type Exponents = SmallVec<i32, 8>;

/// Signed prime exponents over a [`PrimeBasis`], without trailing zeros.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Monzo {
    exponents: Exponents,
}

#[inline]
fn trim(exponents: &mut Exponents) {
    while exponents.last() == Some(&0) {
        exponents.pop();
    }
}

impl Monzo {
    /// Creates a monzo from exponents in basis order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use temper_ratio::monzo::Monzo;
    ///
    /// let m = Monzo::new([-1, 1, 0, 0]);
    /// assert_eq!(m.len(), 2);
    /// assert_eq!(m, Monzo::new([-1, 1]));
    /// ```
    pub fn new<I>(exponents: I) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        let mut exponents: Exponents = exponents.into_iter().collect();
        trim(&mut exponents);
        Self { exponents }
    }

    /// The monzo of `1/1`.
    #[inline]
    pub fn unison() -> Self {
        Self::default()
    }

    /// The stored exponents, without trailing zeros.
    #[inline]
    pub fn exponents(&self) -> &[i32] {
        &self.exponents
    }

    /// Number of stored exponents: one past the last non-zero exponent.
    #[inline]
    pub fn len(&self) -> usize {
        self.exponents.len()
    }

    /// Same as [`Monzo::is_unison`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exponents.is_empty()
    }

    #[inline]
    pub fn is_unison(&self) -> bool {
        self.exponents.is_empty()
    }

    /// Returns the exponent of the `i`-th prime; `0` beyond the stored length.
    #[inline]
    pub fn get(&self, i: usize) -> i32 {
        self.exponents.get(i).copied().unwrap_or(0)
    }

    /// Returns the exponents zero-padded to at least `len` entries.
    pub fn to_padded(&self, len: usize) -> Vec<i32> {
        let mut padded = self.exponents.to_vec();
        if padded.len() < len {
            padded.resize(len, 0);
        }
        padded
    }

    fn zip_with(
        &self,
        other: &Self,
        op: fn(i32, i32) -> Option<i32>,
        operation: &'static str,
    ) -> Result<Self> {
        let len = self.len().max(other.len());
        let exponents = (0..len)
            .map(|i| op(self.get(i), other.get(i)))
            .collect::<Option<Exponents>>()
            .or_overflow(operation)?;
        Ok(Self::new(exponents))
    }

    /// Exponent-wise sum: the monzo of the product of both rationals.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Overflow`] if an exponent overflows `i32`.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, i32::checked_add, "Monzo::add")
    }

    /// Exponent-wise difference: the monzo of the quotient of both rationals.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Overflow`] if an exponent overflows `i32`.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, i32::checked_sub, "Monzo::sub")
    }

    /// Multiplies every exponent by `n`: the monzo of the `n`-th power.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Overflow`] if an exponent overflows `i32`.
    pub fn checked_scale(&self, n: i32) -> Result<Self> {
        let exponents = self
            .exponents
            .iter()
            .map(|&e| e.checked_mul(n))
            .collect::<Option<Exponents>>()
            .or_overflow("Monzo::scale")?;
        Ok(Self::new(exponents))
    }

    /// Builds the rational `∏ p_i^e_i`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Overflow`] if a prime, a prime power, or the
    /// numerator or denominator product does not fit in `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use temper_ratio::{fraction::Fraction, monzo::Monzo, primes::PrimeBasis};
    ///
    /// let basis = PrimeBasis::new();
    /// let syntonic_comma = Monzo::new([-4, 4, -1]);
    /// assert_eq!(
    ///     syntonic_comma.to_fraction::<i64>(&basis).unwrap(),
    ///     Fraction::new(81, 80).unwrap()
    /// );
    /// ```
    pub fn to_fraction<T>(&self, basis: &PrimeBasis) -> Result<Fraction<T>>
    where
        T: IntegerLike,
    {
        let mut numerator = T::one();
        let mut denominator = T::one();
        for (i, &e) in self.exponents.iter().enumerate() {
            if e == 0 {
                continue;
            }
            let p = T::from_u64(basis.nth_prime(i)).or_overflow("Monzo::to_fraction")?;
            let power = p
                .checked_pow_val(e.unsigned_abs())
                .or_overflow("Monzo::to_fraction")?;
            let side = if e > 0 {
                &mut numerator
            } else {
                &mut denominator
            };
            *side = side
                .checked_mul_val(power)
                .or_overflow("Monzo::to_fraction")?;
        }
        Fraction::new(numerator, denominator)
    }
}

impl fmt::Display for Monzo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, e) in self.exponents.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{e}")?;
        }
        f.write_str(">")
    }
}

impl From<Vec<i32>> for Monzo {
    fn from(exponents: Vec<i32>) -> Self {
        Self::new(exponents)
    }
}

impl FromIterator<i32> for Monzo {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T> Fraction<T>
where
    T: IntegerLike,
{
    /// Factors `self` over the first `basis_limit` primes and returns the
    /// monzo together with the part that did not factor.
    ///
    /// The residual is `1/1` exactly when `self` is `basis_limit`-limit.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidInput`] if `self <= 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use temper_ratio::{fraction::Fraction, monzo::Monzo, primes::PrimeBasis};
    ///
    /// let basis = PrimeBasis::new();
    /// let f: Fraction = Fraction::new(21, 8).unwrap();
    /// let (monzo, residual) = f.to_monzo_with_residual(&basis, 2).unwrap();
    /// assert_eq!(monzo, Monzo::new([-3, 1]));
    /// assert_eq!(residual, Fraction::from_integer(7));
    /// ```
    pub fn to_monzo_with_residual(
        &self,
        basis: &PrimeBasis,
        basis_limit: usize,
    ) -> Result<(Monzo, Self)> {
        if !self.is_positive() {
            return Err(MathError::invalid(format!(
                "cannot factor non-positive value {self}"
            )));
        }

        let (mut num, mut den) = self.into_parts();
        let mut exponents = Exponents::new();
        for p in basis.iter().take(basis_limit) {
            // Primes beyond `T` cannot divide either part.
            let Some(p) = T::from_u64(p) else {
                break;
            };
            if p > num && p > den {
                break;
            }
            let mut e = 0;
            while (num % p).is_zero() {
                num = num / p;
                e += 1;
            }
            while (den % p).is_zero() {
                den = den / p;
                e -= 1;
            }
            exponents.push(e);
        }

        let mut monzo = Monzo { exponents };
        trim(&mut monzo.exponents);
        Ok((monzo, Self::new(num, den)?))
    }

    /// Returns the monzo of `self` over the first `basis_limit` primes.
    ///
    /// # Errors
    ///
    /// - [`MathError::InvalidInput`] if `self <= 0`.
    /// - [`MathError::UnrepresentableValue`] if a prime factor lies outside
    ///   the first `basis_limit` primes.
    pub fn to_monzo(&self, basis: &PrimeBasis, basis_limit: usize) -> Result<Monzo> {
        let (monzo, residual) = self.to_monzo_with_residual(basis, basis_limit)?;
        if residual.is_unity() {
            Ok(monzo)
        } else {
            Err(MathError::UnrepresentableValue {
                basis_limit,
                residual: residual.to_string(),
            })
        }
    }

    /// Builds a fraction from its monzo; see [`Monzo::to_fraction`].
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Overflow`] if the value does not fit in `T`.
    pub fn from_monzo(monzo: &Monzo, basis: &PrimeBasis) -> Result<Self> {
        monzo.to_fraction(basis)
    }

    /// Returns the largest prime dividing the numerator or the denominator,
    /// or `1` for `±1`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidInput`] if `self` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use temper_ratio::{fraction::Fraction, primes::PrimeBasis};
    /// let basis = PrimeBasis::new();
    /// let septimal: Fraction = Fraction::new(-7, 6).unwrap();
    /// assert_eq!(septimal.prime_limit(&basis).unwrap(), 7);
    /// ```
    pub fn prime_limit(&self, basis: &PrimeBasis) -> Result<u64> {
        if self.is_zero() {
            return Err(MathError::invalid("zero has no prime limit"));
        }
        let largest_factor = |x: T| -> Result<u64> {
            let magnitude = x
                .to_i128()
                .map(i128::unsigned_abs)
                .and_then(|m| u64::try_from(m).ok())
                .ok_or_else(|| MathError::invalid("value is too large to factor"))?;
            Ok(basis
                .prime_factors(magnitude)?
                .last_key_value()
                .map_or(1, |(&p, _)| p))
        };
        let (num, den) = self.into_parts();
        Ok(largest_factor(num)?.max(largest_factor(den)?))
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
    fn test_new_trims_trailing_zeros() {
        let m = Monzo::new([1, 0, -2, 0, 0]);
        assert_eq!(m.exponents(), &[1, 0, -2]);
        assert_eq!(Monzo::new([0, 0]), Monzo::unison());
        assert!(Monzo::from(vec![0]).is_unison());
    }

    #[test]
    fn test_get_and_padding() {
        let m: Monzo = [3, -1].into_iter().collect();
        assert_eq!(m.get(1), -1);
        assert_eq!(m.get(7), 0);
        assert_eq!(m.to_padded(4), vec![3, -1, 0, 0]);
        assert_eq!(m.to_padded(1), vec![3, -1]);
    }

    #[test]
    fn test_vector_operations() {
        let fifth = Monzo::new([-1, 1]);
        let fourth = Monzo::new([2, -1]);
        assert_eq!(fifth.checked_add(&fourth), Ok(Monzo::new([1])));
        assert_eq!(fifth.checked_sub(&fourth), Ok(Monzo::new([-3, 2])));
        assert_eq!(fifth.checked_sub(&fifth), Ok(Monzo::unison()));
        assert_eq!(fifth.checked_scale(4), Ok(Monzo::new([-4, 4])));
        assert_eq!(fifth.checked_scale(0), Ok(Monzo::unison()));
        let third = Monzo::new([-2, 0, 1]);
        assert_eq!(fifth.checked_add(&third), Ok(Monzo::new([-3, 1, 1])));
    }

    #[test]
    fn test_vector_operation_overflow() {
        let big = Monzo::new([i32::MAX]);
        assert_eq!(big.checked_add(&Monzo::new([1])), Err(MathError::overflow("Monzo::add")));
        assert_eq!(
            Monzo::new([i32::MIN]).checked_sub(&Monzo::new([1])),
            Err(MathError::overflow("Monzo::sub"))
        );
        assert_eq!(big.checked_scale(2), Err(MathError::overflow("Monzo::scale")));
    }

    #[test]
    fn test_display() {
        assert_eq!(Monzo::new([-4, 4, -1]).to_string(), "[-4, 4, -1>");
        assert_eq!(Monzo::unison().to_string(), "[>");
    }

    #[test]
    fn test_to_fraction() {
        let basis = PrimeBasis::new();
        assert_eq!(Monzo::new([-1, 1]).to_fraction::<IntegerType>(&basis), Ok(fr(3, 2)));
        assert_eq!(Monzo::new([0, 0, 1, -1]).to_fraction::<IntegerType>(&basis), Ok(fr(5, 7)));
        assert_eq!(Monzo::unison().to_fraction::<IntegerType>(&basis), Ok(Fraction::one()));
        assert_eq!(
            Monzo::new([63]).to_fraction::<IntegerType>(&basis),
            Err(MathError::overflow("Monzo::to_fraction"))
        );
        assert_eq!(
            Monzo::new([0, 0, 0, 0, 1]).to_fraction::<i8>(&basis),
            Ok(Fraction::from_integer(11))
        );
        assert_eq!(
            Monzo::new((0..32).map(|i| i32::from(i == 31)))
                .to_fraction::<i8>(&basis),
            Err(MathError::overflow("Monzo::to_fraction"))
        );
    }

    #[test]
    fn test_to_monzo() {
        let basis = PrimeBasis::new();
        assert_eq!(fr(81, 80).to_monzo(&basis, 3), Ok(Monzo::new([-4, 4, -1])));
        assert_eq!(fr(1, 1).to_monzo(&basis, 0), Ok(Monzo::unison()));
        assert_eq!(fr(1024, 1).to_monzo(&basis, 1), Ok(Monzo::new([10])));
        assert_eq!(
            fr(7, 4).to_monzo(&basis, 3),
            Err(MathError::UnrepresentableValue {
                basis_limit: 3,
                residual: "7".to_string()
            })
        );
        assert_eq!(fr(7, 4).to_monzo(&basis, 4), Ok(Monzo::new([-2, 0, 0, 1])));
    }

    #[test]
    fn test_to_monzo_rejects_prime_outside_basis() {
        let basis = PrimeBasis::new();
        assert_eq!(
            fr(7, 1).to_monzo(&basis, 2),
            Err(MathError::UnrepresentableValue {
                basis_limit: 2,
                residual: "7".to_string()
            })
        );
        assert_eq!(
            fr(3, 14).to_monzo(&basis, 2),
            Err(MathError::UnrepresentableValue {
                basis_limit: 2,
                residual: "1/7".to_string()
            })
        );
    }

    #[test]
    fn test_to_monzo_rejects_non_positive() {
        let basis = PrimeBasis::new();
        assert!(matches!(fr(-3, 2).to_monzo(&basis, 5), Err(MathError::InvalidInput { .. })));
        assert!(matches!(
            Fraction::<IntegerType>::zero().to_monzo(&basis, 5),
            Err(MathError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_to_monzo_with_residual() {
        let basis = PrimeBasis::new();
        let (m, residual) = fr(143, 12).to_monzo_with_residual(&basis, 3).unwrap();
        assert_eq!(m, Monzo::new([-2, -1]));
        assert_eq!(residual, fr(143, 1));
    }

    #[test]
    fn test_monzo_round_trip() {
        let basis = PrimeBasis::new();
        for f in [fr(81, 80), fr(15, 16), fr(1, 1), fr(2187, 2048), fr(11, 13)] {
            let m = f.to_monzo(&basis, 6).unwrap();
            assert_eq!(Fraction::from_monzo(&m, &basis), Ok(f));
        }
    }

    #[test]
    fn test_prime_limit() {
        let basis = PrimeBasis::new();
        assert_eq!(fr(81, 80).prime_limit(&basis), Ok(5));
        assert_eq!(fr(-1, 1).prime_limit(&basis), Ok(1));
        assert_eq!(fr(1, 1).prime_limit(&basis), Ok(1));
        assert_eq!(fr(22, 21).prime_limit(&basis), Ok(11));
        assert_eq!(Fraction::from_integer(IntegerType::MIN).prime_limit(&basis), Ok(2));
        assert!(matches!(
            Fraction::<IntegerType>::zero().prime_limit(&basis),
            Err(MathError::InvalidInput { .. })
        ));
    }
}
