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

//! # By-Value Checked Arithmetic
//!
//! Checked operations on signed primitive integers exposed as by-value
//! traits, so generic code can write `a.checked_mul_val(b)` instead of the
//! by-reference `num_traits::CheckedMul`. Every method returns `None` on
//! overflow, which callers turn into [`MathError::Overflow`] via
//! [`OrOverflow`].
//!
//! Only signed types are covered: rationals carry their sign in the
//! numerator, and Bézout coefficients are signed by nature.
//!
//! [`MathError::Overflow`]: crate::error::MathError::Overflow

use crate::error::{MathError, Result};
use core::ops::{Add, Mul, Neg, Sub};

/// Checked addition by value.
///
/// # Examples
///
/// ```rust
/// # use temper_core::num::ops::CheckedAddVal;
/// assert_eq!(100i8.checked_add_val(27), Some(127));
/// assert_eq!(100i8.checked_add_val(28), None);
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Returns `None` if the sum overflows.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

/// Checked subtraction by value.
///
/// # Examples
///
/// ```rust
/// # use temper_core::num::ops::CheckedSubVal;
/// assert_eq!((-100i8).checked_sub_val(28), Some(-128));
/// assert_eq!((-100i8).checked_sub_val(29), None);
/// ```
pub trait CheckedSubVal: Sized + Sub<Self, Output = Self> {
    /// Returns `None` if the difference overflows.
    fn checked_sub_val(self, v: Self) -> Option<Self>;
}

/// Checked multiplication by value.
///
/// # Examples
///
/// ```rust
/// # use temper_core::num::ops::CheckedMulVal;
/// assert_eq!(16i8.checked_mul_val(-8), Some(-128));
/// assert_eq!(16i8.checked_mul_val(8), None);
/// ```
pub trait CheckedMulVal: Sized + Mul<Self, Output = Self> {
    /// Returns `None` if the product overflows.
    fn checked_mul_val(self, v: Self) -> Option<Self>;
}

/// Checked negation by value.
///
/// # Examples
///
/// ```rust
/// # use temper_core::num::ops::CheckedNegVal;
/// assert_eq!(i8::MIN.checked_neg_val(), None);
/// assert_eq!(5i8.checked_neg_val(), Some(-5));
/// ```
pub trait CheckedNegVal: Sized + Neg<Output = Self> {
    /// Returns `None` for `MIN`, whose negation is not representable.
    fn checked_neg_val(self) -> Option<Self>;
}

/// Checked absolute value by value.
///
/// # Examples
///
/// ```rust
/// # use temper_core::num::ops::CheckedAbsVal;
/// assert_eq!((-7i32).checked_abs_val(), Some(7));
/// assert_eq!(i32::MIN.checked_abs_val(), None);
/// ```
pub trait CheckedAbsVal: Sized {
    /// Returns `None` for `MIN`.
    fn checked_abs_val(self) -> Option<Self>;
}

/// Checked exponentiation by a non-negative power.
///
/// # Examples
///
/// ```rust
/// # use temper_core::num::ops::CheckedPowVal;
/// assert_eq!(3i64.checked_pow_val(4), Some(81));
/// assert_eq!(2i8.checked_pow_val(7), None);
/// ```
pub trait CheckedPowVal: Sized {
    /// Returns `None` if `self^exp` overflows.
    fn checked_pow_val(self, exp: u32) -> Option<Self>;
}

macro_rules! impl_checked_val {
    ($($t:ty),* $(,)?) => {
        $(
            impl CheckedAddVal for $t {
                #[inline(always)]
                fn checked_add_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_add(self, v)
                }
            }

            impl CheckedSubVal for $t {
                #[inline(always)]
                fn checked_sub_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_sub(self, v)
                }
            }

            impl CheckedMulVal for $t {
                #[inline(always)]
                fn checked_mul_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_mul(self, v)
                }
            }

            impl CheckedNegVal for $t {
                #[inline(always)]
                fn checked_neg_val(self) -> Option<$t> {
                    <$t>::checked_neg(self)
                }
            }

            impl CheckedAbsVal for $t {
                #[inline(always)]
                fn checked_abs_val(self) -> Option<$t> {
                    <$t>::checked_abs(self)
                }
            }

            impl CheckedPowVal for $t {
                #[inline(always)]
                fn checked_pow_val(self, exp: u32) -> Option<$t> {
                    <$t>::checked_pow(self, exp)
                }
            }
        )*
    };
}

impl_checked_val!(i8, i16, i32, i64, i128, isize);

/// Converts a checked result into a [`Result`], naming the failing operation.
///
/// # Examples
///
/// ```rust
/// # use temper_core::num::ops::{CheckedMulVal, OrOverflow};
/// # use temper_core::error::MathError;
/// let ok = 6i32.checked_mul_val(7).or_overflow("mul");
/// assert_eq!(ok, Ok(42));
///
/// let err = i32::MAX.checked_mul_val(2).or_overflow("mul");
/// assert_eq!(err, Err(MathError::Overflow { operation: "mul" }));
/// ```
pub trait OrOverflow<T> {
    /// Maps `None` to [`MathError::Overflow`] tagged with `operation`.
    fn or_overflow(self, operation: &'static str) -> Result<T>;
}

impl<T> OrOverflow<T> for Option<T> {
    #[inline(always)]
    fn or_overflow(self, operation: &'static str) -> Result<T> {
        self.ok_or(MathError::Overflow { operation })
    }
}
