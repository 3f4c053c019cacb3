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

//! Dot products and norms over float slices.
//!
//! Slices of unequal length are treated as zero-padded, which for a dot
//! product means only the common prefix contributes.

use num_traits::Float;

/// The norm used by [`norm`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NormKind<T> {
    /// `sqrt(Σ xᵢ²)`
    Euclidean,
    /// `Σ |xᵢ|`
    Taxicab,
    /// `max |xᵢ|`
    Maximum,
    /// `(Σ |xᵢ|^p)^(1/p)`
    P(T),
}

impl<T> Default for NormKind<T> {
    fn default() -> Self {
        Self::Euclidean
    }
}

/// Returns `Σ a[i] * b[i]` over the common prefix of `a` and `b`.
///
/// # Examples
///
/// ```rust
/// # use temper_core::utils::vector::dot;
/// assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0]), 14.0);
/// ```
#[inline]
pub fn dot<T>(a: &[T], b: &[T]) -> T
where
    T: Float,
{
    a.iter()
        .zip(b)
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y)
}

/// Returns the norm of `values` of the requested kind. The norm of an empty
/// slice is zero.
///
/// # Examples
///
/// ```rust
/// # use temper_core::utils::vector::{norm, NormKind};
/// assert_eq!(norm(&[3.0, -4.0], NormKind::Euclidean), 5.0);
/// assert_eq!(norm(&[3.0, -4.0], NormKind::Taxicab), 7.0);
/// assert_eq!(norm(&[3.0, -4.0], NormKind::Maximum), 4.0);
/// ```
pub fn norm<T>(values: &[T], kind: NormKind<T>) -> T
where
    T: Float,
{
    match kind {
        NormKind::Euclidean => dot(values, values).sqrt(),
        NormKind::Taxicab => values.iter().fold(T::zero(), |acc, &x| acc + x.abs()),
        NormKind::Maximum => values.iter().fold(T::zero(), |acc, &x| acc.max(x.abs())),
        NormKind::P(p) => values
            .iter()
            .fold(T::zero(), |acc, &x| acc + x.abs().powf(p))
            .powf(p.recip()),
    }
}
