//! Property-based tests for the generation strategies.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::config::RangedBounds;
    use crate::fixed::{generate_fixed, generate_from_multiplicities};
    use crate::outcome::{Generated, RangedOutcome};
    use crate::ranged::generate_ranged;
    use genpo_rings::Ring;

    fn roots_vanish(g: &Generated) -> bool {
        g.roots.iter().all(|r| g.polynomial.eval(r).is_zero())
    }

    fn leading_matches(g: &Generated) -> bool {
        g.polynomial.leading_coeff() == &g.leading_coefficient
    }

    proptest! {
        #[test]
        fn fixed_has_requested_shape(seed in any::<u64>(), roots in 1i64..=5, extra in 0i64..=3) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let degree = roots + extra;
            let g = generate_fixed(&mut rng, degree, Some(roots)).unwrap();

            prop_assert_eq!(g.degree() as i64, degree);
            prop_assert_eq!(g.roots.len() as i64, degree);
            prop_assert_eq!(g.root_multiplicities().len() as i64, roots);
            prop_assert!(roots_vanish(&g));
            prop_assert!(leading_matches(&g));
        }

        #[test]
        fn multiplicities_are_honored(
            seed in any::<u64>(),
            multiplicities in proptest::collection::vec(1i64..=3, 1..=4),
            quadratics in 0i64..=2,
        ) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let rooted: i64 = multiplicities.iter().sum();
            let grade = rooted + 2 * quadratics;
            let g = generate_from_multiplicities(&mut rng, Some(multiplicities.as_slice()), Some(grade)).unwrap();

            prop_assert_eq!(g.degree() as i64, grade);
            prop_assert_eq!(g.quadratics.len() as i64, quadratics);

            let mut expected: Vec<usize> = multiplicities.iter().map(|&m| m as usize).collect();
            expected.sort_unstable();
            let mut actual: Vec<usize> = g.root_multiplicities().into_iter().map(|(_, m)| m).collect();
            actual.sort_unstable();
            prop_assert_eq!(actual, expected);
            prop_assert!(roots_vanish(&g));
        }

        #[test]
        fn ranged_stays_within_bounds(
            seed in any::<u64>(),
            min_grade in 1i64..=6,
            grade_extra in 0i64..=4,
            max_roots in 0i64..=4,
        ) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let max_grade = min_grade + grade_extra;
            let bounds = RangedBounds::new()
                .with_grade(min_grade, max_grade)
                .with_roots(0, max_roots.min(max_grade));

            match generate_ranged(&mut rng, &bounds) {
                Ok(RangedOutcome::Polynomial(g)) => {
                    let degree = g.degree() as i64;
                    prop_assert!(degree <= max_grade);
                    prop_assert!(degree + 1 >= min_grade);
                    prop_assert_eq!(g.degree(), g.roots.len() + 2 * g.quadratics.len());
                    prop_assert!(g.root_multiplicities().len() as i64 <= max_roots);
                    prop_assert!(roots_vanish(&g));
                    prop_assert!(leading_matches(&g));
                }
                Ok(RangedOutcome::NoPolynomial) => prop_assert_eq!(min_grade, 1),
                Err(e) => prop_assert!(false, "unexpected error: {e}"),
            }
        }

        #[test]
        fn same_seed_same_polynomial(seed in any::<u64>()) {
            let bounds = RangedBounds::new().with_grade(2, 6).with_roots(1, 3);
            let a = generate_ranged(&mut ChaCha8Rng::seed_from_u64(seed), &bounds).unwrap();
            let b = generate_ranged(&mut ChaCha8Rng::seed_from_u64(seed), &bounds).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
