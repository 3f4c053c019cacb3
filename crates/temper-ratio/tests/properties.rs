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

//! Property tests for fractions, monzos and continued-fraction approximation.

use proptest::prelude::*;
use temper_core::euclid::gcd;
use temper_ratio::{
    approx::{ApproximationBounds, best_rational_approximation},
    fraction::Fraction,
    monzo::Monzo,
    primes::PrimeBasis,
};

fn fraction() -> impl Strategy<Value = Fraction<i64>> {
    (-1_000_000i64..1_000_000, 1i64..1_000_000).prop_map(|(n, d)| Fraction::new(n, d).unwrap())
}

proptest! {
    #[test]
    fn prop_new_is_normalized_and_idempotent(
        n in -1_000_000i64..1_000_000,
        d in -1_000_000i64..1_000_000,
    ) {
        prop_assume!(d != 0);
        let f = Fraction::new(n, d).unwrap();
        prop_assert!(f.denominator() > 0);
        prop_assert_eq!(gcd(f.numerator(), f.denominator()).unwrap(), 1);
        prop_assert_eq!(Fraction::new(f.numerator(), f.denominator()).unwrap(), f);
        let lhs = i128::from(f.numerator()) * i128::from(d);
        prop_assert_eq!(lhs, i128::from(n) * i128::from(f.denominator()));
    }

    #[test]
    fn prop_ordering_matches_cross_multiplication(a in fraction(), b in fraction()) {
        let lhs = i128::from(a.numerator()) * i128::from(b.denominator());
        let rhs = i128::from(b.numerator()) * i128::from(a.denominator());
        prop_assert_eq!(a.cmp(&b), lhs.cmp(&rhs));
    }

    #[test]
    fn prop_add_then_sub_is_identity(a in fraction(), b in fraction()) {
        let sum = a.checked_add(b).unwrap();
        prop_assert_eq!(sum.checked_sub(b).unwrap(), a);
    }

    #[test]
    fn prop_display_parses_back(f in fraction()) {
        prop_assert_eq!(f.to_string().parse::<Fraction>().unwrap(), f);
    }

    #[test]
    fn prop_monzo_round_trip(exponents in prop::collection::vec(-3i32..=3, 0..5)) {
        let basis = PrimeBasis::new();
        let monzo = Monzo::new(exponents);
        let f: Fraction = monzo.to_fraction(&basis).unwrap();
        prop_assert_eq!(f.to_monzo(&basis, 5).unwrap(), monzo.clone());
        prop_assert!(f.prime_limit(&basis).unwrap() <= 11);
    }

    #[test]
    fn prop_monzo_add_is_fraction_mul(
        a in prop::collection::vec(-4i32..=4, 0..4),
        b in prop::collection::vec(-4i32..=4, 0..4),
    ) {
        let basis = PrimeBasis::new();
        let (a, b) = (Monzo::new(a), Monzo::new(b));
        let product = a
            .to_fraction::<i64>(&basis)
            .unwrap()
            .checked_mul(b.to_fraction(&basis).unwrap())
            .unwrap();
        prop_assert_eq!(a.checked_add(&b).unwrap().to_fraction::<i64>(&basis).unwrap(), product);
    }

    #[test]
    fn prop_convergents_improve(f in fraction()) {
        let distance = |c: &Fraction| c.checked_sub(f).and_then(Fraction::abs).unwrap();
        let found: Vec<Fraction> = f.convergents(64).collect();
        prop_assert_eq!(found.last().copied(), Some(f));
        for pair in found.windows(2) {
            prop_assert!(pair[0].denominator() <= pair[1].denominator());
            prop_assert!(distance(&pair[1]) < distance(&pair[0]));
        }
    }

    #[test]
    fn prop_best_approximation_is_exact_within_own_size(f in fraction()) {
        let n = f.numerator().abs().max(f.denominator());
        let bounds = ApproximationBounds::new(n, n);
        prop_assert_eq!(best_rational_approximation(&f, &bounds).unwrap(), f);
    }

    #[test]
    fn prop_best_approximation_stays_within_bounds(
        f in fraction(),
        max_den in 1i64..50,
        max_num in 0i64..200,
    ) {
        let bounds = ApproximationBounds::new(max_num, max_den);
        let best = best_rational_approximation(&f, &bounds).unwrap();
        prop_assert!(best.numerator().abs() <= max_num);
        prop_assert!(best.denominator() <= max_den);
    }
}
