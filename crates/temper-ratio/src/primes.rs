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

//! # Prime Basis
//!
//! A thread-safe, lazily extended cache of the ascending primes
//! `2, 3, 5, 7, …`. The basis is the coordinate system of a [`Monzo`]:
//! exponent `i` belongs to `nth_prime(i)`.
//!
//! The cache only ever grows. Lookups take a shared read lock; a miss upgrades
//! to the write lock, re-checks the length and extends by trial division
//! against the primes already cached, growing by at least half of the current
//! size so that repeated misses are amortized. Pass the basis by reference,
//! or share it across threads through [`PrimeBasis::shared`].
//!
//! Trial division (`is_prime`, `prime_factors`) only grows the cache up to
//! [`TRIAL_DIVISION_CACHE_LIMIT`] primes. Past that it tests `6k ± 1`
//! candidates without storing them, so factoring a large `u64` does not
//! leave hundreds of millions of primes behind.
//!
//! [`Monzo`]: crate::monzo::Monzo

use num_traits::PrimInt;
use parking_lot::RwLock;
use std::{collections::BTreeMap, sync::Arc};
use temper_core::error::{MathError, Result};
use tracing::debug;

const SEED_PRIMES: [u64; 10] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];

/// Number of primes trial division may add to the cache (the last is 821641).
pub const TRIAL_DIVISION_CACHE_LIMIT: usize = 1 << 16;

/// An ordered, growable cache of primes.
///
/// # Examples
///
/// ```rust
/// use temper_ratio::primes::PrimeBasis;
///
/// let basis = PrimeBasis::new();
/// assert_eq!(basis.nth_prime(0), 2);
/// assert_eq!(basis.nth_prime(99), 541);
/// assert!(basis.len() >= 100);
/// ```
#[derive(Debug)]
pub struct PrimeBasis {
    primes: RwLock<Vec<u64>>,
}

impl Default for PrimeBasis {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns `true` if no cached prime up to `√candidate` divides it.
///
/// The cache must contain every prime below `√candidate`.
#[inline]
fn is_coprime_to_cached(primes: &[u64], candidate: u64) -> bool {
    primes
        .iter()
        .take_while(|&&p| p <= candidate / p)
        .all(|&p| candidate % p != 0)
}

impl PrimeBasis {
    /// Creates a basis seeded with the primes up to 29.
    pub fn new() -> Self {
        Self {
            primes: RwLock::new(SEED_PRIMES.to_vec()),
        }
    }

    /// Creates a basis that already holds at least `count` primes.
    pub fn with_capacity(count: usize) -> Self {
        let basis = Self::new();
        if count > basis.len() {
            basis.grow_to(count);
        }
        basis
    }

    /// Creates a basis wrapped in an [`Arc`] for sharing between threads.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Number of primes currently cached.
    #[inline]
    pub fn len(&self) -> usize {
        self.primes.read().len()
    }

    /// Always `false`: the basis is seeded on construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primes.read().is_empty()
    }

    /// Extends the cache to hold at least `count > 0` primes and returns the
    /// prime at index `count - 1`.
    fn grow_to(&self, count: usize) -> u64 {
        debug_assert!(count > 0, "called `grow_to` with a zero count");

        let mut primes = self.primes.write();
        // Another writer may have grown the cache while we waited.
        if primes.len() < count {
            let old_len = primes.len();
            let target = count.max((old_len + old_len / 2).min(TRIAL_DIVISION_CACHE_LIMIT));
            primes.reserve(target - old_len);

            let mut candidate = primes.last().map_or(2, |&p| p + 2);
            while primes.len() < target {
                if is_coprime_to_cached(&primes, candidate) {
                    primes.push(candidate);
                }
                candidate += 2;
            }

            debug!(
                old_len,
                new_len = primes.len(),
                largest = candidate - 2,
                "extended prime basis"
            );
        }
        primes[count - 1]
    }

    /// Returns the `k`-th prime, 0-based: `nth_prime(0) == 2`.
    ///
    /// Extends the cache if `k` is beyond it.
    pub fn nth_prime(&self, k: usize) -> u64 {
        if let Some(&p) = self.primes.read().get(k) {
            return p;
        }
        self.grow_to(k + 1)
    }

    /// Returns the first `count` primes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use temper_ratio::primes::PrimeBasis;
    /// assert_eq!(PrimeBasis::new().primes(5), vec![2, 3, 5, 7, 11]);
    /// ```
    pub fn primes(&self, count: usize) -> Vec<u64> {
        if count == 0 {
            return Vec::new();
        }
        if self.len() < count {
            self.grow_to(count);
        }
        self.primes.read()[..count].to_vec()
    }

    /// Returns every prime `p <= bound` in ascending order.
    pub fn primes_up_to(&self, bound: u64) -> Vec<u64> {
        loop {
            let primes = self.primes.read();
            if primes.last().is_some_and(|&p| p > bound) {
                return primes.iter().copied().take_while(|&p| p <= bound).collect();
            }
            let len = primes.len();
            drop(primes);
            self.grow_to(len + 1);
        }
    }

    /// Returns `true` if `n` is prime, by trial division.
    pub fn is_prime(&self, n: u64) -> bool {
        n >= 2
            && self
                .trial_divisors()
                .take_while(|&d| d <= n / d)
                .all(|d| n % d != 0)
    }

    /// Cached primes up to [`TRIAL_DIVISION_CACHE_LIMIT`], then uncached
    /// `6k ± 1` candidates.
    #[inline]
    fn trial_divisors(&self) -> TrialDivisors<'_> {
        TrialDivisors {
            basis: self,
            index: 0,
            candidate: 0,
        }
    }

    /// Returns an unbounded iterator over the primes of this basis.
    #[inline]
    pub fn iter(&self) -> PrimeIter<'_> {
        PrimeIter {
            basis: self,
            index: 0,
        }
    }

    /// Factors a positive integer into `prime -> multiplicity`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidInput`] if `n <= 0` or `n` does not fit
    /// in a `u64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use temper_ratio::primes::PrimeBasis;
    /// let factors = PrimeBasis::new().prime_factors(360).unwrap();
    /// assert_eq!(factors.into_iter().collect::<Vec<_>>(), vec![(2, 3), (3, 2), (5, 1)]);
    /// ```
    pub fn prime_factors<I>(&self, n: I) -> Result<BTreeMap<u64, u32>>
    where
        I: PrimInt,
    {
        if n <= I::zero() {
            return Err(MathError::invalid(
                "prime factorization requires a positive integer",
            ));
        }
        let mut rest = n
            .to_u64()
            .ok_or_else(|| MathError::invalid("value is too large to factor"))?;

        let mut factors = BTreeMap::new();
        for p in self.trial_divisors() {
            if p > rest / p {
                break;
            }
            while rest % p == 0 {
                *factors.entry(p).or_insert(0) += 1;
                rest /= p;
            }
        }
        if rest > 1 {
            *factors.entry(rest).or_insert(0) += 1;
        }
        Ok(factors)
    }
}

/// Trial divisors for factoring: every prime below the cache limit, then
/// every number coprime to 6. Composite divisors never divide a remainder
/// whose smaller prime factors were already removed.
#[derive(Debug, Clone)]
struct TrialDivisors<'a> {
    basis: &'a PrimeBasis,
    index: usize,
    candidate: u64,
}

impl Iterator for TrialDivisors<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.index < TRIAL_DIVISION_CACHE_LIMIT {
            let p = self.basis.nth_prime(self.index);
            self.index += 1;
            if self.index == TRIAL_DIVISION_CACHE_LIMIT {
                // `p > 3`, so `p + 2` or `p + 4` is the next `6k ± 1`.
                self.candidate = if (p + 2) % 3 == 0 { p + 4 } else { p + 2 };
            }
            return Some(p);
        }
        let d = self.candidate;
        let step = if d % 6 == 5 { 2 } else { 4 };
        self.candidate = d.checked_add(step)?;
        Some(d)
    }
}

/// Iterator over the primes of a [`PrimeBasis`], extending it on demand.
#[derive(Debug, Clone)]
pub struct PrimeIter<'a> {
    basis: &'a PrimeBasis,
    index: usize,
}

impl Iterator for PrimeIter<'_> {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        let p = self.basis.nth_prime(self.index);
        self.index += 1;
        Some(p)
    }
}

impl<'a> IntoIterator for &'a PrimeBasis {
    type Item = u64;
    type IntoIter = PrimeIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
