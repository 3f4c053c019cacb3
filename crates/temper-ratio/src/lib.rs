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

//! # Temper Ratio
//!
//! **Exact rational arithmetic for interval math.**
//!
//! This crate provides the rational core of `temper`: a normalized fraction
//! type, a shared prime cache, prime-exponent vectors ("monzos"), and
//! continued-fraction approximation. It builds on the checked integer
//! arithmetic and Euclidean algorithms from `temper_core`.
//!
//! ## Architecture
//!
//! * **`fraction`**: `Fraction<T>`, always in lowest terms with a positive
//!   denominator. Checked arithmetic, exact ordering, parsing and cents.
//! * **`primes`**: `PrimeBasis`, an append-only, lazily grown prime cache
//!   that is safe to share between threads, plus trial-division factoring.
//! * **`monzo`**: `Monzo`, the exponent vector of a fraction over the prime
//!   basis, with conversions in both directions that fail loudly on
//!   non-smooth values or overflow.
//! * **`approx`**: Lazy continued-fraction terms and convergents, and the
//!   bounded best-approximation search over convergents and semiconvergents.
//! * **`set`**: `FractionSet`, a container of unique fractions keyed by their
//!   canonical `(numerator, denominator)` pair.
//!
//! ## Example
//!
//! ```rust
//! use temper_ratio::{fraction::Fraction, monzo::Monzo, primes::PrimeBasis};
//!
//! let basis = PrimeBasis::new();
//! let fifth: Fraction = "3/2".parse().unwrap();
//!
//! let monzo = fifth.to_monzo(&basis, 2).unwrap();
//! assert_eq!(monzo, Monzo::new([-1, 1]));
//! assert_eq!(monzo.to_fraction::<i64>(&basis).unwrap(), fifth);
//! ```

pub mod approx;
pub mod fraction;
pub mod monzo;
pub mod primes;
pub mod set;
