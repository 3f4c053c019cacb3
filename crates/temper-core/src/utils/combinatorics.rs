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

//! Binomial coefficients and combination enumeration.
//!
//! Combinations are generated in lexicographic order of element positions.
//! Two equal elements at different positions are different choices, so
//! `k_combinations(&[1, 1], 1)` yields `[[1], [1]]`.

use crate::error::{MathError, Result};

/// Returns `n choose k`, or `0` when `k > n`.
///
/// # Errors
///
/// Returns [`MathError::Overflow`] if the coefficient exceeds `u64::MAX`.
///
/// # Examples
///
/// ```rust
/// # use temper_core::utils::combinatorics::binomial;
/// assert_eq!(binomial(5, 2), Ok(10));
/// assert_eq!(binomial(2, 5), Ok(0));
/// assert!(binomial(100, 50).is_err());
/// ```
pub fn binomial(n: u64, k: u64) -> Result<u64> {
    if k > n {
        return Ok(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // C(n, i) * (n - i) is divisible by (i + 1).
        acc = acc * u128::from(n - i) / u128::from(i + 1);
        if acc > u128::from(u64::MAX) {
            return Err(MathError::overflow("binomial"));
        }
    }
    Ok(acc as u64)
}

/// Returns every `k`-element combination of `items`, preserving order.
///
/// `k == 0` and `k > items.len()` yield no combinations; `k == items.len()`
/// yields exactly one, the whole slice.
///
/// # Examples
///
/// ```rust
/// # use temper_core::utils::combinatorics::k_combinations;
/// let combos = k_combinations(&['a', 'b', 'c'], 2);
/// assert_eq!(combos, vec![vec!['a', 'b'], vec!['a', 'c'], vec!['b', 'c']]);
/// ```
pub fn k_combinations<E>(items: &[E], k: usize) -> Vec<Vec<E>>
where
    E: Clone,
{
    let n = items.len();
    if k == 0 || k > n {
        return Vec::new();
    }
    if k == n {
        return vec![items.to_vec()];
    }

    let mut out = Vec::new();
    let mut idx: Vec<usize> = (0..k).collect();
    loop {
        out.push(idx.iter().map(|&i| items[i].clone()).collect());

        // Rightmost position that can still advance.
        let Some(pos) = (0..k).rev().find(|&p| idx[p] != p + n - k) else {
            return out;
        };
        idx[pos] += 1;
        for p in pos + 1..k {
            idx[p] = idx[p - 1] + 1;
        }
    }
}

/// Returns all non-empty combinations of `items`, ordered by size and then
/// lexicographically by position.
///
/// # Examples
///
/// ```rust
/// # use temper_core::utils::combinatorics::subsets;
/// let all = subsets(&[1, 2, 3]);
/// assert_eq!(all.len(), 7);
/// assert_eq!(all[0], vec![1]);
/// assert_eq!(all[6], vec![1, 2, 3]);
/// ```
pub fn subsets<E>(items: &[E]) -> Vec<Vec<E>>
where
    E: Clone,
{
    (1..=items.len())
        .flat_map(|k| k_combinations(items, k))
        .collect()
}
