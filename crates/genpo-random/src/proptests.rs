//! Property-based tests for the random generators.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::bounds::{GradeBounds, Interval};
    use crate::quadratic::random_no_root_quadratic;
    use crate::roots::{
        expand_roots_by_multiplicity, random_distinct_roots, random_multiplicities, random_span,
    };
    use genpo_rings::Q;

    proptest! {
        #[test]
        fn distinct_roots_are_distinct(seed in any::<u64>(), n in 0i64..=20) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let roots = random_distinct_roots(&mut rng, n).unwrap();
            prop_assert_eq!(roots.len(), usize::try_from(n).unwrap());

            let mut sorted = roots.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), roots.len());
        }

        #[test]
        fn distinct_roots_reject_negative(seed in any::<u64>(), n in -50i64..0) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            prop_assert!(random_distinct_roots(&mut rng, n).is_err());
        }

        #[test]
        fn multiplicities_respect_bounds(
            seed in any::<u64>(),
            roots in 1i64..=5,
            mult_min in 1i64..=3,
            mult_extra in 0i64..=3,
            grade_min in 1i64..=12,
            grade_extra in 0i64..=6,
        ) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let interval = Interval::new(mult_min, mult_min + mult_extra).unwrap();
            let grade = GradeBounds::between(grade_min, grade_min + grade_extra);

            let reachable = roots * interval.min <= grade_min + grade_extra
                && roots * interval.max >= grade_min;

            match random_multiplicities(&mut rng, roots, grade, Some(interval)) {
                Ok(m) => {
                    prop_assert!(reachable);
                    prop_assert_eq!(m.len(), usize::try_from(roots).unwrap());
                    prop_assert!(m.iter().all(|&v| interval.contains(v)));
                    prop_assert!(grade.contains(m.iter().sum()));
                }
                Err(_) => prop_assert!(!reachable),
            }
        }

        #[test]
        fn expanded_roots_match_multiplicities(
            seed in any::<u64>(),
            multiplicities in proptest::collection::vec(1i64..=4, 1..=6),
        ) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let roots = expand_roots_by_multiplicity(&mut rng, &multiplicities).unwrap();
            prop_assert_eq!(roots.len() as i64, multiplicities.iter().sum::<i64>());

            let mut offset = 0;
            for m in &multiplicities {
                let m = usize::try_from(*m).unwrap();
                let group = &roots[offset..offset + m];
                prop_assert!(group.iter().all(|r| *r == group[0]));
                offset += m;
            }
        }

        #[test]
        fn span_draws_from_values(
            seed in any::<u64>(),
            values in proptest::collection::vec(-5i64..=5, 1..=5),
            extra in 0usize..=8,
        ) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let target = values.len() + extra;
            let spanned = random_span(&mut rng, values.clone(), target).unwrap();

            prop_assert_eq!(spanned.len(), target);
            prop_assert_eq!(&spanned[..values.len()], values.as_slice());
            prop_assert!(spanned.iter().all(|v| values.contains(v)));
        }

        #[test]
        fn quadratic_has_negative_discriminant(seed in any::<u64>()) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let p = random_no_root_quadratic(&mut rng);
            let coeffs = p.coeffs();

            prop_assert_eq!(coeffs.len(), 3);
            prop_assert_eq!(coeffs[2].clone(), Q::from_integer(1));
            let disc = coeffs[1].clone() * coeffs[1].clone() - Q::from_integer(4) * coeffs[0].clone();
            prop_assert!(disc.is_negative());
        }
    }
}
