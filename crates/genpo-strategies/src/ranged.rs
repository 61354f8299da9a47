//! Interval-constrained generation.

use genpo_poly::Result;
use genpo_random::{
    expand_roots_by_multiplicity, random_leading_coefficient, random_multiplicities,
    random_no_root_quadratic, GradeBounds,
};
use rand::Rng;

use crate::config::RangedBounds;
use crate::outcome::{Generated, RangedOutcome};

/// Generates a polynomial whose degree, number of distinct roots and
/// multiplicities are each drawn from the intervals in `bounds`.
///
/// The number of distinct roots is drawn first, then their multiplicities,
/// then a target degree in `[max(rooted degree, min_grade), max_grade]`.
/// If the target leaves an odd gap above the rooted degree it is lowered by
/// one; the gap is then filled with root-free quadratics.
///
/// Returns [`RangedOutcome::NoPolynomial`] when zero roots were drawn and
/// the target degree came out as 0.
///
/// # Errors
///
/// Returns [`genpo_poly::GenpoError::InvalidInput`] if the bounds are
/// inconsistent (see [`RangedBounds::resolve`]) or the drawn number of
/// roots cannot be given multiplicities within `max_grade`.
pub fn generate_ranged<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: &RangedBounds,
) -> Result<RangedOutcome> {
    let resolved = bounds.resolve()?;
    let grade = resolved.grade;
    let multiplicity = resolved.multiplicity;

    let root_count = rng.gen_range(resolved.roots.min..=resolved.roots.max);

    let roots = if root_count > 0 {
        // Few roots with capped multiplicities may not reach min_grade on
        // their own; the quadratics make up the rest.
        let reachable = grade.min.min(root_count.saturating_mul(multiplicity.max));
        let multiplicities = random_multiplicities(
            rng,
            root_count,
            GradeBounds::between(reachable, grade.max),
            Some(multiplicity),
        )?;
        expand_roots_by_multiplicity(rng, &multiplicities)?
    } else {
        Vec::new()
    };

    let rooted = i64::try_from(roots.len()).unwrap_or(i64::MAX);
    let mut degree = rng.gen_range(rooted.max(grade.min)..=grade.max);
    if (degree - rooted) % 2 != 0 {
        degree -= 1;
    }

    let padding = degree - rooted;
    let quadratics: Vec<_> = (0..padding / 2).map(|_| random_no_root_quadratic(rng)).collect();

    tracing::debug!(root_count, rooted, degree, padding, "drew ranged polynomial shape");

    if roots.is_empty() && quadratics.is_empty() {
        return Ok(RangedOutcome::NoPolynomial);
    }

    let leading = random_leading_coefficient(rng);
    Generated::assemble(roots, quadratics, leading).map(RangedOutcome::Polynomial)
}
