//! Property-based tests for polynomial arithmetic.
//!
//! Coefficients are small integers stored in `f64`, so every product and
//! sum below is exact and equality assertions are safe.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::sparse::SparsePoly;

    // Strategy for generating small integer-valued coefficients
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-50i32..50i32).prop_map(f64::from)
    }

    // Strategy for generating small polynomials (degree 0-5)
    fn small_poly() -> impl Strategy<Value = SparsePoly> {
        proptest::collection::vec((small_coeff(), 0u32..6u32), 0..5).prop_map(SparsePoly::new)
    }

    // Strategy for generating non-zero polynomials
    fn nonzero_poly() -> impl Strategy<Value = SparsePoly> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    // Strategy for monic degree-3 divisors. A leading coefficient of 1
    // keeps every quotient coefficient an exact integer, so the
    // reconstruction check below holds with float arithmetic.
    fn monic_poly() -> impl Strategy<Value = SparsePoly> {
        proptest::collection::vec((small_coeff(), 0u32..3u32), 0..3).prop_map(|mut terms| {
            terms.push((1.0, 3));
            SparsePoly::new(terms)
        })
    }

    proptest! {
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
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_add_identity(a in small_poly()) {
            let zero = SparsePoly::zero();
            prop_assert_eq!(a.add(&zero), a.clone());
            prop_assert_eq!(zero.add(&a), a);
        }

        #[test]
        fn poly_mul_identity(a in small_poly()) {
            let one = SparsePoly::one();
            prop_assert_eq!(a.mul(&one), a.clone());
            prop_assert_eq!(one.mul(&a), a);
        }

        #[test]
        fn poly_sub_self_is_zero(a in small_poly()) {
            prop_assert!(a.sub(&a).is_zero());
        }

        #[test]
        fn poly_neg_is_additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
        }

        // Degree arithmetic

        #[test]
        fn poly_mul_degree_adds(a in nonzero_poly(), b in nonzero_poly()) {
            prop_assert_eq!(a.mul(&b).degree(), a.degree() + b.degree());
        }

        // Euclidean division

        #[test]
        fn poly_div_rem_reconstructs(a in small_poly(), c in small_poly(), b in monic_poly()) {
            // dividend of degree up to 8 built from exact products
            let dividend = a.mul(&c).add(&a);
            let (q, r) = dividend.div_rem(&b).unwrap();
            prop_assert!(r.degree() < b.degree());
            prop_assert_eq!(q.mul(&b).add(&r), dividend);
        }

        // Differentiation

        #[test]
        fn poly_difference_is_linear(a in small_poly(), b in small_poly()) {
            let left = a.add(&b).differenced(1);
            let right = a.differenced(1).add(&b.differenced(1));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_difference_drops_degree(a in nonzero_poly()) {
            prop_assert!(a.differenced(1).degree() < a.degree());
        }
    }
}
