//! Quadratic factors.

use genpo_poly::DensePoly;
use genpo_rings::{Ring, Q};
use num_integer::Roots;
use rand::Rng;

use crate::easy::rand_easy_num;

/// Returns the coefficients of `a·x² + b·x + c` as `[c, b, a]`.
#[must_use]
pub fn parabola<R: Ring>(a: R, b: R, c: R) -> DensePoly<R> {
    DensePoly::with_constant(c, [b, a])
}

/// Draws a monic quadratic `x² + b·x + c` with no real roots.
///
/// `c` is a positive easy number; `|b|` is bounded by `2⌊√c⌋ − 1`, which
/// keeps the discriminant `b² − 4c` negative.
pub fn random_no_root_quadratic<R: Rng + ?Sized>(rng: &mut R) -> DensePoly<Q> {
    let c = rand_easy_num(rng, false, None) + 1;

    let max_abs_b = 2 * c.sqrt() - 1;
    let b = if max_abs_b <= 0 {
        0
    } else {
        rng.gen_range(-max_abs_b..=max_abs_b)
    };

    tracing::trace!(b, c, "drew root-free quadratic");
    parabola(Q::from_integer(1), Q::from_integer(b), Q::from_integer(c))
}
