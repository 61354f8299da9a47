//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::arith::{add, evaluate, evaluate_with_derivative, multiply};
    use crate::dense::DensePoly;
    use crate::roots::from_roots;
    use genpo_rings::Q;

    // Strategy for generating small integer coefficients
    fn small_coeff() -> impl Strategy<Value = i64> {
        -20i64..20i64
    }

    // Strategy for generating small coefficient arrays (degree 0-4)
    fn small_poly() -> impl Strategy<Value = Vec<i64>> {
        proptest::collection::vec(small_coeff(), 1..=5)
    }

    // Arrays whose highest coefficient is non-zero
    fn nonzero_poly() -> impl Strategy<Value = Vec<i64>> {
        small_poly().prop_filter("leading coefficient must be non-zero", |p| {
            p.last().is_some_and(|c| *c != 0)
        })
    }

    // Rational roots with small denominators
    fn small_root() -> impl Strategy<Value = Q> {
        (-9i64..=9i64, 1i64..=4i64).prop_map(|(n, d)| Q::new(n, d))
    }

    proptest! {
        #[test]
        fn add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(add(&[&a, &b]).unwrap(), add(&[&b, &a]).unwrap());
        }

        #[test]
        fn add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            let left = add(&[add(&[&a, &b]).unwrap(), c.clone()]).unwrap();
            let right = add(&[a.clone(), add(&[&b, &c]).unwrap()]).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn add_zero_is_identity(a in small_poly()) {
            prop_assert_eq!(add(&[a.clone(), vec![0]]).unwrap(), a);
        }

        #[test]
        fn add_length_is_max(polys in proptest::collection::vec(small_poly(), 1..=4)) {
            let longest = polys.iter().map(Vec::len).max().unwrap();
            prop_assert_eq!(add(&polys).unwrap().len(), longest);
        }

        #[test]
        fn mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
            // deg(a * b) = deg(a) + deg(b)
            let product = multiply(&[&a, &b]).unwrap();
            prop_assert_eq!(product.len() - 1, (a.len() - 1) + (b.len() - 1));
            prop_assert_ne!(*product.last().unwrap(), 0);
        }

        #[test]
        fn mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            let left = multiply(&[multiply(&[&a, &b]).unwrap(), c.clone()]).unwrap();
            let right = multiply(&[a.clone(), multiply(&[&b, &c]).unwrap()]).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn mul_one_is_identity(a in small_poly()) {
            prop_assert_eq!(multiply(&[a.clone(), vec![1]]).unwrap(), a);
        }

        #[test]
        fn eval_mul(a in small_poly(), b in small_poly(), x in -5i64..5i64) {
            // (a * b)(x) = a(x) * b(x)
            let product = multiply(&[&a, &b]).unwrap();
            prop_assert_eq!(
                evaluate(&product, &x).unwrap(),
                evaluate(&a, &x).unwrap() * evaluate(&b, &x).unwrap()
            );
        }

        #[test]
        fn derivative_matches_formal(a in small_poly(), x in -5i64..5i64) {
            let coeffs: Vec<Q> = a.iter().copied().map(Q::from_integer).collect();
            let poly = DensePoly::new(coeffs.clone()).unwrap();
            let x = Q::from_integer(x);

            let (v, dv) = evaluate_with_derivative(&coeffs, &x).unwrap();
            prop_assert_eq!(v, poly.eval(&x));
            prop_assert_eq!(dv, poly.derivative().eval(&x));
        }

        #[test]
        fn from_roots_is_monic(roots in proptest::collection::vec(small_root(), 0..=6)) {
            let coeffs = from_roots(&roots);
            prop_assert_eq!(coeffs.len(), roots.len() + 1);
            prop_assert_eq!(coeffs.last().unwrap().clone(), Q::from_integer(1));
        }

        #[test]
        fn from_roots_vanishes_at_roots(roots in proptest::collection::vec(small_root(), 1..=6)) {
            let coeffs = from_roots(&roots);
            for r in &roots {
                prop_assert_eq!(evaluate(&coeffs, r).unwrap(), Q::from_integer(0));
            }
        }

        #[test]
        fn from_roots_matches_product_of_linear_factors(
            roots in proptest::collection::vec(-6i64..=6i64, 1..=5)
        ) {
            let factors: Vec<Vec<i64>> = roots.iter().map(|r| vec![-r, 1]).collect();
            prop_assert_eq!(from_roots(&roots), multiply(&factors).unwrap());
        }
    }
}
