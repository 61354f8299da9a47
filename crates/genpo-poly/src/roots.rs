//! Polynomials from their roots.

use genpo_rings::Ring;

/// Builds the monic polynomial ∏ (x − rᵢ) from a root multiset.
///
/// A root of multiplicity m appears m times in `roots`. The result has
/// `roots.len() + 1` coefficients and a leading coefficient of one; no
/// roots gives the constant `[1]`.
///
/// Each root multiplies the accumulator by a linear factor in a single
/// backward sweep, so the whole product costs O(n²).
#[must_use]
pub fn from_roots<R: Ring>(roots: &[R]) -> Vec<R> {
    let mut coeffs = Vec::with_capacity(roots.len() + 1);
    coeffs.push(R::one());

    for root in roots {
        // c'[j] = c[j-1] - root * c[j], with c[len] = 0
        coeffs.push(R::zero());
        for j in (1..coeffs.len()).rev() {
            coeffs[j] = coeffs[j - 1].clone() - coeffs[j].clone() * root.clone();
        }
        coeffs[0] = -(coeffs[0].clone() * root.clone());
    }

    coeffs
}
