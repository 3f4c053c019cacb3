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

//! # Temper Core
//!
//! Numeric foundations for the `temper` workspace: overflow-checked integer
//! arithmetic, the Euclidean family of algorithms, and periodic (octave-wrapped)
//! distances. Everything here works on native machine integers and floats and
//! reports overflow instead of wrapping.
//!
//! ## Modules
//!
//! - `error`: The shared `MathError` enum and `Result` alias.
//! - `num`: The `IntegerLike` trait alias for signed primitive integers and
//!   by-value checked arithmetic traits (`CheckedAddVal`, `CheckedMulVal`,
//!   `CheckedPowVal`, ...).
//! - `euclid`: Floor division, mathematical modulo, gcd/lcm, and the
//!   extended and iterated Euclidean algorithms producing Bézout coefficients.
//! - `math`: Circular difference and distance modulo a period.
//! - `utils`: Binomial coefficients, generic combinations, dot products and
//!   vector norms.
//!
//! The exact rational type, prime factorization and continued fractions live
//! in `temper-ratio`, which builds on this crate.

pub mod error;
pub mod euclid;
pub mod math;
pub mod num;
pub mod utils;
