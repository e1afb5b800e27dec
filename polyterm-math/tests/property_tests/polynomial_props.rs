//! Property-based tests for polynomial operations
//!
//! This module tests:
//! - Ordering, uniqueness and non-zero invariants after insertion
//! - Arithmetic laws (commutativity, identity, distributivity)
//! - Evaluation against a direct sum of terms

use polyterm_math::{Coeff, Exp, Polynomial, Term};
use proptest::prelude::*;

/// Strategy for generating small coefficients, zero included
fn coeff_strategy() -> impl Strategy<Value = Coeff> {
    -10i64..10i64
}

/// Strategy for generating exponents, negatives included
fn exp_strategy() -> impl Strategy<Value = Exp> {
    -4i32..8i32
}

/// Strategy for a raw list of (coefficient, exponent) insertions
fn terms_strategy() -> impl Strategy<Value = Vec<(Coeff, Exp)>> {
    prop::collection::vec((coeff_strategy(), exp_strategy()), 0..12)
}

/// Strategy for a polynomial built by repeated insertion
fn poly_strategy() -> impl Strategy<Value = Polynomial> {
    terms_strategy().prop_map(|terms| terms.into_iter().collect())
}

/// Evaluation points that keep negative powers away from zero
fn point_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![-2.0f64..-0.25, 0.25f64..2.0]
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

#[cfg(test)]
mod insertion_properties {
    use super::*;

    proptest! {
        /// Any sequence of insertions keeps the terms sorted, unique and non-zero
        #[test]
        fn insert_preserves_invariants(terms in terms_strategy()) {
            let mut p = Polynomial::new();
            for (c, e) in terms {
                p.insert_term(c, e);
                prop_assert!(p.check_invariants());
            }
        }

        /// Inserting a zero coefficient never changes the polynomial
        #[test]
        fn insert_zero_is_noop(p in poly_strategy(), e in exp_strategy()) {
            let mut q = p.clone();
            q.insert_term(0, e);
            prop_assert_eq!(q, p);
        }

        /// Inserting c then -c at the same exponent leaves no term there
        #[test]
        fn insert_then_cancel(p in poly_strategy(), c in 1i64..10i64, e in exp_strategy()) {
            let mut q = p.clone();
            let before = q.coeff(e);
            q.insert_term(c, e);
            q.insert_term(-c, e);
            prop_assert_eq!(q.coeff(e), before);

            let mut r = Polynomial::new();
            r.insert_term(c, e);
            r.insert_term(-c, e);
            prop_assert!(r.is_zero());
        }

        /// The coefficient at each exponent is the sum of everything inserted there
        #[test]
        fn insert_accumulates_coefficients(terms in terms_strategy()) {
            let p: Polynomial = terms.iter().copied().collect();
            for e in -4i32..8i32 {
                let expected: Coeff = terms.iter().filter(|(_, x)| *x == e).map(|(c, _)| c).sum();
                prop_assert_eq!(p.coeff(e), expected);
            }
        }
    }
}

#[cfg(test)]
mod arithmetic_properties {
    use super::*;

    proptest! {
        /// Test that polynomial addition is commutative
        #[test]
        fn poly_add_commutative(p in poly_strategy(), q in poly_strategy()) {
            prop_assert_eq!(&p + &q, &q + &p);
        }

        /// Test that adding zero doesn't change the polynomial
        #[test]
        fn poly_add_zero_identity(p in poly_strategy()) {
            prop_assert_eq!(&p + &Polynomial::new(), p);
        }

        /// Test that subtracting a polynomial from itself gives zero
        #[test]
        fn poly_sub_self_is_zero(p in poly_strategy()) {
            let d = &p - &p;
            prop_assert!(d.is_zero());
            prop_assert_eq!(d.display(), "0");
        }

        /// Test that subtraction undoes addition
        #[test]
        fn poly_sub_inverts_add(p in poly_strategy(), q in poly_strategy()) {
            prop_assert_eq!(&(&p + &q) - &q, p);
        }

        /// Test that polynomial multiplication is commutative
        #[test]
        fn poly_mul_commutative(p in poly_strategy(), q in poly_strategy()) {
            prop_assert_eq!(&p * &q, &q * &p);
        }

        /// Test that multiplication distributes over addition
        #[test]
        fn poly_mul_distributes(
            a in poly_strategy(),
            b in poly_strategy(),
            c in poly_strategy(),
            x in point_strategy()
        ) {
            let lhs = &a * &(&b + &c);
            let rhs = &(&a * &b) + &(&a * &c);
            prop_assert_eq!(&lhs, &rhs);

            let lv = lhs.evaluate(x).unwrap();
            let rv = rhs.evaluate(x).unwrap();
            prop_assert!(approx_eq(lv, rv), "{} != {}", lv, rv);
        }

        /// Results of every operation satisfy the storage invariants
        #[test]
        fn poly_results_keep_invariants(p in poly_strategy(), q in poly_strategy()) {
            prop_assert!((&p + &q).check_invariants());
            prop_assert!((&p - &q).check_invariants());
            prop_assert!((&p * &q).check_invariants());
        }
    }
}

#[cfg(test)]
mod evaluation_properties {
    use super::*;

    proptest! {
        /// Evaluation equals the direct sum of the stored terms
        #[test]
        fn poly_eval_matches_term_sum(p in poly_strategy(), x in point_strategy()) {
            let expected: f64 = p
                .terms()
                .iter()
                .map(|t: &Term| t.coeff as f64 * x.powi(t.exp))
                .sum();
            let value = p.evaluate(x).unwrap();
            prop_assert!(approx_eq(value, expected));
        }

        /// Evaluation is additive
        #[test]
        fn poly_eval_additive(p in poly_strategy(), q in poly_strategy(), x in point_strategy()) {
            let sum = (&p + &q).evaluate(x).unwrap();
            let parts = p.evaluate(x).unwrap() + q.evaluate(x).unwrap();
            prop_assert!(approx_eq(sum, parts));
        }

        /// Evaluating at zero fails exactly when a negative exponent is present
        #[test]
        fn poly_eval_at_zero(p in poly_strategy()) {
            let has_negative = p.terms().iter().any(|t| t.exp < 0);
            prop_assert_eq!(p.evaluate(0.0).is_err(), has_negative);
        }
    }
}

#[test]
fn worked_example_from_insertions() {
    let p: Polynomial = [(2, 3), (-1, 1), (5, 0)].into_iter().collect();
    assert_eq!(p.evaluate(2.0), Ok(19.0));
    assert_eq!(p.display(), "2x^3-1x^1 + 5x^0");
}
