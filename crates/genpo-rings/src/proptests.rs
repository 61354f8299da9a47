//! Property-based tests for the coefficient rings.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::rationals::Q;
    use crate::traits::Ring;

    // Strategy for small rationals with denominators 1..=12
    fn small_q() -> impl Strategy<Value = Q> {
        (-50i64..50i64, 1i64..=12i64).prop_map(|(n, d)| Q::new(n, d))
    }

    proptest! {
        #[test]
        fn q_add_commutative(a in small_q(), b in small_q()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn q_mul_associative(a in small_q(), b in small_q(), c in small_q()) {
            prop_assert_eq!(
                (a.clone() * b.clone()) * c.clone(),
                a * (b * c)
            );
        }

        #[test]
        fn q_distributive(a in small_q(), b in small_q(), c in small_q()) {
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn q_identities(a in small_q()) {
            prop_assert_eq!(a.clone() + <Q as Ring>::zero(), a.clone());
            prop_assert_eq!(a.clone() * <Q as Ring>::one(), a.clone());
            prop_assert!(<Q as Ring>::is_zero(&(a.clone() - a)));
        }

        #[test]
        fn q_ref_ops_match_owned(a in small_q(), b in small_q()) {
            prop_assert_eq!(&a + &b, a.clone() + b.clone());
            prop_assert_eq!(&a - &b, a.clone() - b.clone());
            prop_assert_eq!(&a * &b, a * b);
        }

        #[test]
        fn q_display_roundtrips_integers(n in -1000i64..1000i64) {
            prop_assert_eq!(Q::from_integer(n).to_string(), n.to_string());
        }

        #[test]
        fn i64_mul_by_scalar(a in -100i64..100i64, n in -20i64..20i64) {
            prop_assert_eq!(a.mul_by_scalar(n), a * n);
        }
    }
}
