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

//! # Numeric Foundations
//!
//! Trait bounds for the integer types that back exact rationals and the
//! Euclidean algorithms, plus by-value checked arithmetic.
//!
//! ## Submodules
//!
//! - `ops`: Checked add/sub/mul/neg/abs/pow traits taken by value and the
//!   `OrOverflow` adapter that turns `Option<T>` into a typed overflow error.
//!
//! ## Highlights
//!
//! `IntegerLike` collects everything generic code in this workspace needs
//! from an integer into a single alias. It is implemented automatically for
//! `i8`, `i16`, `i32`, `i64`, `i128` and `isize`.

pub mod ops;

use num_traits::{FromPrimitive, PrimInt, Signed};
use std::hash::Hash;

/// A trait alias for signed primitive integers usable as numerators,
/// denominators and Bézout coefficients.
///
/// All arithmetic on these types inside `temper` goes through the checked
/// by-value traits from [`ops`], so overflow is reported instead of wrapping.
pub trait IntegerLike:
    PrimInt
    + Signed
    + FromPrimitive
    + std::fmt::Debug
    + std::fmt::Display
    + std::str::FromStr
    + ops::CheckedAddVal
    + ops::CheckedSubVal
    + ops::CheckedMulVal
    + ops::CheckedNegVal
    + ops::CheckedAbsVal
    + ops::CheckedPowVal
    + Send
    + Sync
    + Hash
{
}

impl<T> IntegerLike for T where
    T: PrimInt
        + Signed
        + FromPrimitive
        + std::fmt::Debug
        + std::fmt::Display
        + std::str::FromStr
        + ops::CheckedAddVal
        + ops::CheckedSubVal
        + ops::CheckedMulVal
        + ops::CheckedNegVal
        + ops::CheckedAbsVal
        + ops::CheckedPowVal
        + Send
        + Sync
        + Hash
{
}
