//! Property-based tests for division and Gröbner basis computation.

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use proptest::prelude::*;
    use proptest::test_runner::{RngAlgorithm, TestRng, TestRunner};

    use buchberger_poly::{is_near_zero, Lex, Monomial, MonomialOrdering, Polynomial};

    use crate::config::BuchbergerConfig;
    use crate::engine::groebner_basis_with_config;
    use crate::operations::{make_monic, normal_form, reduce, s_polynomial};
    use crate::pairs::PairQueue;
    use crate::verify::is_groebner_basis;

    const VARS: [&str; 3] = ["x", "y", "z"];

    fn small_monomial() -> impl Strategy<Value = Monomial> {
        proptest::collection::vec(0u32..4, 3)
            .prop_map(|exps| Monomial::new(VARS.iter().copied().zip(exps)))
    }

    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(((-20i32..20i32).prop_map(f64::from), small_monomial()), 0..=5)
            .prop_map(Polynomial::new)
    }

    // Binomials in x and y with power-of-two coefficients. Division by such
    // leading coefficients is exact, which keeps whole runs free of drift.
    fn binomial() -> impl Strategy<Value = Polynomial> {
        let coeff = prop::sample::select(vec![-2.0, -1.0, 1.0, 2.0]);
        let mono = (0u32..3, 0u32..3).prop_map(|(a, b)| Monomial::new([("x", a), ("y", b)]));
        proptest::collection::vec((coeff, mono), 1..=2).prop_map(Polynomial::new)
    }

    fn binomial_system() -> impl Strategy<Value = Vec<Polynomial>> {
        proptest::collection::vec(binomial(), 1..=3)
    }

    // Monomial in x, y, z of total degree at most 4.
    fn bounded_monomial() -> impl Strategy<Value = Monomial> {
        (0u32..=4)
            .prop_flat_map(|a| (Just(a), 0..=4 - a))
            .prop_flat_map(|(a, b)| (Just(a), Just(b), 0..=4 - a - b))
            .prop_map(|(a, b, c)| Monomial::new([("x", a), ("y", b), ("z", c)]))
    }

    // Up to three terms with real coefficients in [-10, 10).
    fn real_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec((-10.0f64..10.0, bounded_monomial()), 1..=3)
            .prop_map(Polynomial::new)
    }

    fn lex() -> Lex {
        Lex::new(VARS)
    }

    fn capped() -> BuchbergerConfig {
        BuchbergerConfig::new()
            .with_max_pairs(500)
            .with_max_reduction_rounds(50)
    }

    proptest! {
        // Division

        #[test]
        fn reduce_by_empty_basis_is_identity(p in small_poly()) {
            let empty: [Polynomial; 0] = [];
            prop_assert_eq!(reduce(&p, &empty, &lex()), p);
        }

        #[test]
        fn reduce_by_self_is_zero(g in small_poly()) {
            prop_assume!(!g.is_zero());
            prop_assert!(reduce(&g, [&g], &lex()).is_zero());
        }

        #[test]
        fn normal_form_is_fully_reduced(p in small_poly(), g in small_poly()) {
            let order = lex();
            prop_assume!(!g.is_zero());
            let lm = g.leading_monomial(&order);

            let nf = normal_form(&p, [&g], &order);
            for t in nf.terms() {
                prop_assert!(!lm.divides(t.monomial()));
            }
        }

        #[test]
        fn s_polynomial_drops_below_lcm(f in small_poly(), g in small_poly()) {
            let order = lex();
            prop_assume!(!f.is_zero() && !g.is_zero());

            let s = s_polynomial(&f, &g, &order);
            prop_assume!(!s.is_zero());

            let lcm = f.leading_monomial(&order).lcm(&g.leading_monomial(&order));
            prop_assert_eq!(order.compare(&s.leading_monomial(&order), &lcm), Ordering::Less);
        }

        #[test]
        fn make_monic_idempotent(p in small_poly()) {
            let order = lex();
            let once = make_monic(&p, &order);
            prop_assert_eq!(make_monic(&once, &order), once.clone());
            if !p.is_zero() {
                prop_assert!(is_near_zero(once.leading_coefficient(&order) - 1.0));
            }
        }

        #[test]
        fn all_pairs_enumerates_each_pair_once(n in 0usize..12) {
            let mut queue = PairQueue::all_pairs(n);
            prop_assert_eq!(queue.len(), n * n.saturating_sub(1) / 2);

            let mut seen = Vec::new();
            while let Some(pair) = queue.pop() {
                prop_assert!(pair.i < pair.j && pair.j < n);
                seen.push(pair);
            }
            let total = seen.len();
            seen.sort_by_key(|p| (p.i, p.j));
            seen.dedup();
            prop_assert_eq!(seen.len(), total);
        }

        // Gröbner bases

        #[test]
        fn basis_generates_input(input in binomial_system()) {
            let order = Lex::new(["x", "y"]);
            let Ok(basis) = groebner_basis_with_config(input.clone(), &order, &capped()) else {
                return Err(TestCaseError::reject("cap reached"));
            };

            for f in &input {
                prop_assert!(reduce(f, &basis, &order).is_zero(), "{} not in ideal of {:?}", f, basis);
            }
        }

        #[test]
        fn basis_passes_oracle(input in binomial_system()) {
            let order = Lex::new(["x", "y"]);
            let Ok(basis) = groebner_basis_with_config(input, &order, &capped()) else {
                return Err(TestCaseError::reject("cap reached"));
            };

            prop_assert!(is_groebner_basis(&basis, &order));
        }

        #[test]
        fn basis_is_monic_and_reduced(input in binomial_system()) {
            let order = Lex::new(["x", "y"]);
            let Ok(basis) = groebner_basis_with_config(input, &order, &capped()) else {
                return Err(TestCaseError::reject("cap reached"));
            };

            for (k, p) in basis.iter().enumerate() {
                prop_assert!(!p.is_zero());
                prop_assert!(is_near_zero(p.leading_coefficient(&order) - 1.0));

                let lm = p.leading_monomial(&order);
                for (l, q) in basis.iter().enumerate() {
                    if k != l {
                        prop_assert!(!q.leading_monomial(&order).divides(&lm));
                        prop_assert!(q.terms().iter().all(|t| !lm.divides(t.monomial())));
                    }
                }
            }
        }

        #[test]
        fn full_reduction_agrees_on_leading_monomials(input in binomial_system()) {
            let order = Lex::new(["x", "y"]);
            let weak_config = capped().with_full_reduction(false);
            let (Ok(weak), Ok(full)) = (
                groebner_basis_with_config(input.clone(), &order, &weak_config),
                groebner_basis_with_config(input, &order, &capped()),
            ) else {
                return Err(TestCaseError::reject("cap reached"));
            };

            let weak_lms: Vec<Monomial> = weak.iter().map(|p| p.leading_monomial(&order)).collect();
            let full_lms: Vec<Monomial> = full.iter().map(|p| p.leading_monomial(&order)).collect();
            prop_assert_eq!(weak_lms, full_lms);
        }
    }

    // Systems of three real polynomials in x > y > z, drawn from a fixed
    // seed so every run sees the same inputs. Caps bound the work: a capped
    // run still has to return, and a finished one must verify.
    #[test]
    fn random_real_systems_terminate_and_verify() {
        let config = ProptestConfig {
            cases: 32,
            ..ProptestConfig::default()
        };
        let mut runner =
            TestRunner::new_with_rng(config, TestRng::deterministic_rng(RngAlgorithm::ChaCha));
        let order = lex();
        let caps = BuchbergerConfig::new()
            .with_max_pairs(60)
            .with_max_reduction_rounds(50);

        let system = proptest::collection::vec(real_poly(), 3);
        let result = runner.run(&system, |input| {
            let Ok(basis) = groebner_basis_with_config(input.clone(), &order, &caps) else {
                return Ok(());
            };

            prop_assert!(is_groebner_basis(&basis, &order), "not a Groebner basis: {:?}", basis);
            for f in &input {
                prop_assert!(reduce(f, &basis, &order).is_zero(), "{} not in ideal of {:?}", f, basis);
            }
            for p in &basis {
                prop_assert!(is_near_zero(p.leading_coefficient(&order) - 1.0));
            }
            Ok(())
        });

        if let Err(err) = result {
            panic!("{err}");
        }
    }
}
