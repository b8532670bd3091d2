//! Property-based tests for monomial and polynomial arithmetic.

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use proptest::prelude::*;

    use crate::monomial::Monomial;
    use crate::ordering::{Lex, MonomialOrdering};
    use crate::polynomial::Polynomial;
    use crate::term::Term;

    const VARS: [&str; 3] = ["x", "y", "z"];

    // Strategy for monomials in x, y, z with exponents 0-3
    fn small_monomial() -> impl Strategy<Value = Monomial> {
        proptest::collection::vec(0u32..4, 3)
            .prop_map(|exps| Monomial::new(VARS.iter().copied().zip(exps)))
    }

    // Integer-valued coefficients keep the arithmetic exact in f64
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-20i32..20i32).prop_map(f64::from)
    }

    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec((small_coeff(), small_monomial()), 0..=5)
            .prop_map(Polynomial::new)
    }

    fn lex() -> Lex {
        Lex::new(VARS)
    }

    proptest! {
        // Monomial laws

        #[test]
        fn monomial_mul_commutative(a in small_monomial(), b in small_monomial()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn monomial_mul_associative(a in small_monomial(), b in small_monomial(), c in small_monomial()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn monomial_div_undoes_mul(a in small_monomial(), b in small_monomial()) {
            let product = a.mul(&b);
            prop_assert_eq!(product.div(&b), Some(a.clone()));
            prop_assert!(b.divides(&product));
        }

        #[test]
        fn monomial_lcm_laws(a in small_monomial(), b in small_monomial()) {
            let l = a.lcm(&b);
            prop_assert_eq!(&l, &b.lcm(&a));
            prop_assert_eq!(a.lcm(&a), a.clone());
            prop_assert_eq!(Monomial::one().lcm(&a), a.clone());
            prop_assert!(a.divides(&l));
            prop_assert!(b.divides(&l));
        }

        #[test]
        fn monomial_degree_additive(a in small_monomial(), b in small_monomial()) {
            prop_assert_eq!(a.mul(&b).degree(), a.degree() + b.degree());
        }

        // Lex is a total order compatible with multiplication

        #[test]
        fn lex_antisymmetric(a in small_monomial(), b in small_monomial()) {
            let order = lex();
            prop_assert_eq!(order.compare(&a, &b), order.compare(&b, &a).reverse());
            prop_assert_eq!(order.compare(&a, &b) == Ordering::Equal, a == b);
        }

        #[test]
        fn lex_transitive(a in small_monomial(), b in small_monomial(), c in small_monomial()) {
            let order = lex();
            if order.compare(&a, &b) != Ordering::Less && order.compare(&b, &c) != Ordering::Less {
                prop_assert_ne!(order.compare(&a, &c), Ordering::Less);
            }
        }

        #[test]
        fn lex_multiplicative(a in small_monomial(), b in small_monomial(), c in small_monomial()) {
            let order = lex();
            prop_assert_eq!(order.compare(&a, &b), order.compare(&a.mul(&c), &b.mul(&c)));
        }

        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.sub(&a).is_zero());
            prop_assert!(a.add(&a.neg()).is_zero());
        }

        #[test]
        fn poly_add_identity(a in small_poly()) {
            prop_assert_eq!(a.add(&Polynomial::zero()), a.clone());
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
        }

        #[test]
        fn poly_terms_are_canonical(a in small_poly()) {
            // Strictly descending storage order and no zero coefficients
            for pair in a.terms().windows(2) {
                prop_assert!(pair[0].monomial() > pair[1].monomial());
            }
            prop_assert!(a.terms().iter().all(|t| !t.is_zero()));
        }

        #[test]
        fn poly_leading_term_is_maximal(a in small_poly()) {
            let order = lex();
            let lt = a.leading_term(&order);
            for t in a.terms() {
                prop_assert_ne!(order.compare(t.monomial(), lt.monomial()), Ordering::Greater);
            }
            if a.is_zero() {
                prop_assert_eq!(lt, Term::zero());
            }
        }
    }
}
