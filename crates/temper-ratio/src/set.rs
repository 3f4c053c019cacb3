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

//! # Fraction Set
//!
//! An insertion-ordered collection of distinct fractions. Because every
//! [`Fraction`] is stored in canonical form, membership is decided by hashing
//! its `(numerator, denominator)` pair, so `2/4` and `1/2` collide as they
//! should.

use crate::fraction::Fraction;
use rustc_hash::FxHashSet;
use temper_core::num::IntegerLike;

/// Distinct fractions in the order they were first inserted.
///
/// # Examples
///
/// ```rust
/// use temper_ratio::{fraction::Fraction, set::FractionSet};
///
/// let mut set = FractionSet::new();
/// assert!(set.insert(Fraction::<i64>::new(3, 2).unwrap()));
/// assert!(!set.insert(Fraction::new(6, 4).unwrap()));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct FractionSet<T = i64>
where
    T: IntegerLike,
{
    index: FxHashSet<(T, T)>,
    items: Vec<Fraction<T>>,
}

impl<T> Default for FractionSet<T>
where
    T: IntegerLike,
{
    fn default() -> Self {
        Self {
            index: FxHashSet::default(),
            items: Vec::new(),
        }
    }
}

impl<T> FractionSet<T>
where
    T: IntegerLike,
{
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut index = FxHashSet::default();
        index.reserve(capacity);
        Self {
            index,
            items: Vec::with_capacity(capacity),
        }
    }

    /// Adds `value`; returns `true` if it was not present.
    pub fn insert(&mut self, value: Fraction<T>) -> bool {
        let newly_added = self.index.insert(value.into_parts());
        if newly_added {
            self.items.push(value);
        }
        newly_added
    }

    #[inline]
    pub fn contains(&self, value: &Fraction<T>) -> bool {
        self.index.contains(&value.into_parts())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Fraction<T>> {
        self.items.iter()
    }

    /// The elements as a slice, in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[Fraction<T>] {
        &self.items
    }

    /// Consumes the set and returns its elements in ascending order.
    pub fn into_sorted_vec(self) -> Vec<Fraction<T>> {
        let mut items = self.items;
        items.sort_unstable();
        items
    }
}

impl<T> FromIterator<Fraction<T>> for FractionSet<T>
where
    T: IntegerLike,
{
    fn from_iter<I: IntoIterator<Item = Fraction<T>>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<Fraction<T>> for FractionSet<T>
where
    T: IntegerLike,
{
    fn extend<I: IntoIterator<Item = Fraction<T>>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a FractionSet<T>
where
    T: IntegerLike,
{
    type Item = &'a Fraction<T>;
    type IntoIter = std::slice::Iter<'a, Fraction<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for FractionSet<T>
where
    T: IntegerLike,
{
    type Item = Fraction<T>;
    type IntoIter = std::vec::IntoIter<Fraction<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
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
    fn test_insert_deduplicates_equal_values() {
        let mut set = FractionSet::new();
        assert!(set.is_empty());
        assert!(set.insert(fr(1, 2)));
        assert!(!set.insert(fr(2, 4)));
        assert!(!set.insert(fr(-3, -6)));
        assert!(set.insert(fr(-1, 2)));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&fr(5, 10)));
        assert!(!set.contains(&fr(1, 3)));
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let set: FractionSet<IntegerType> =
            [fr(5, 4), fr(1, 1), fr(3, 2), fr(10, 8), fr(6, 5)].into_iter().collect();
        let order: Vec<_> = set.iter().copied().collect();
        assert_eq!(order, vec![fr(5, 4), fr(1, 1), fr(3, 2), fr(6, 5)]);
        assert_eq!(set.as_slice(), order.as_slice());
        assert_eq!((&set).into_iter().count(), 4);
    }

    #[test]
    fn test_into_sorted_vec() {
        let mut set = FractionSet::with_capacity(4);
        set.extend([fr(3, 2), fr(-1, 2), fr(4, 3), fr(1, 1), fr(-2, 4)]);
        assert_eq!(
            set.into_sorted_vec(),
            vec![fr(-1, 2), fr(1, 1), fr(4, 3), fr(3, 2)]
        );
    }

    #[test]
    fn test_owned_into_iter() {
        let set: FractionSet<IntegerType> = [fr(2, 1), fr(4, 2)].into_iter().collect();
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![fr(2, 1)]);
    }
}
