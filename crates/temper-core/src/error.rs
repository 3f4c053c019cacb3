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

//! # Error Types
//!
//! A single error enum shared by every crate in the workspace. All failures
//! are deterministic consequences of the inputs, so nothing here is retried
//! or recovered internally: the error is handed straight back to the caller.

use thiserror::Error;

/// The result type used throughout `temper`.
pub type Result<T> = std::result::Result<T, MathError>;

/// Errors produced by exact arithmetic, factorization and approximation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// A divisor or denominator resolved to zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An argument was outside the domain of the operation
    /// (non-finite floats, factoring non-positive integers, malformed text).
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A value has prime factors outside the requested monzo basis.
    #[error("value is not representable in a basis of {basis_limit} primes (residual {residual})")]
    UnrepresentableValue { basis_limit: usize, residual: String },

    /// An intermediate or final result does not fit the integer type.
    #[error("integer overflow in {operation}")]
    Overflow { operation: &'static str },

    /// No candidate fraction satisfies the approximation bounds.
    #[error("no rational approximation satisfies the given bounds")]
    NoApproximationFound,

    /// Both Euclidean operands were zero, so the gcd and its
    /// Bézout coefficients are undefined.
    #[error("degenerate input to {operation}: all operands are zero")]
    DegenerateInput { operation: &'static str },
}

impl MathError {
    /// Shorthand for [`MathError::InvalidInput`].
    #[inline]
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Shorthand for [`MathError::Overflow`].
    #[inline]
    pub const fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(MathError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            MathError::overflow("floor_div").to_string(),
            "integer overflow in floor_div"
        );
        assert_eq!(
            MathError::invalid("NaN").to_string(),
            "invalid input: NaN"
        );
        let err = MathError::UnrepresentableValue {
            basis_limit: 2,
            residual: "7".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "value is not representable in a basis of 2 primes (residual 7)"
        );
    }

    #[test]
    fn test_errors_compare_structurally() {
        assert_eq!(MathError::overflow("pow"), MathError::overflow("pow"));
        assert_ne!(MathError::overflow("pow"), MathError::overflow("mul"));
    }
}
