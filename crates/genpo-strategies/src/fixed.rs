//! Strategies with an exact degree.

use genpo_poly::{GenpoError, Result};
use genpo_random::{
    expand_roots_by_multiplicity, random_distinct_roots, random_leading_coefficient,
    random_no_root_quadratic, random_span, validate_multiplicities,
};
use rand::Rng;

use crate::outcome::Generated;

/// Generates a polynomial of exactly `degree` whose real roots are
/// `root_count` distinct easy integers.
///
/// The distinct roots are spread over `degree` slots, so some of them may
/// repeat. `root_count` defaults to `degree`, giving simple roots only.
///
/// # Errors
///
/// Returns [`GenpoError::InvalidInput`] if `root_count < 1` or
/// `degree < root_count`.
pub fn generate_fixed<R: Rng + ?Sized>(
    rng: &mut R,
    degree: i64,
    root_count: Option<i64>,
) -> Result<Generated> {
    let root_count = root_count.unwrap_or(degree);

    if degree < root_count {
        return Err(GenpoError::invalid(format!(
            "degree ({degree}) cannot be less than the number of roots ({root_count})"
        )));
    }
    if root_count < 1 {
        return Err(GenpoError::invalid(format!(
            "at least one root is required, got {root_count}"
        )));
    }

    let slots = usize::try_from(degree)
        .map_err(|_| GenpoError::invalid(format!("degree {degree} is out of range")))?;

    let distinct = random_distinct_roots(rng, root_count)?;
    let roots = random_span(rng, distinct, slots)?;
    let leading = random_leading_coefficient(rng);

    tracing::debug!(degree, root_count, %leading, "generated fixed-degree polynomial");
    Generated::assemble(roots, Vec::new(), leading)
}

/// Generates a polynomial from explicit root multiplicities.
///
/// One distinct root is drawn per multiplicity. When `grade` exceeds the
/// sum of the multiplicities, the gap is filled with root-free quadratics,
/// so the gap must be even. Missing multiplicities default to `grade`
/// simple roots; a missing `grade` defaults to the sum of the
/// multiplicities.
///
/// # Errors
///
/// Returns [`GenpoError::InvalidInput`] if both arguments are `None`, a
/// multiplicity is not positive, the multiplicities sum past `grade`, the
/// remaining gap is odd, or there is no root at all.
pub fn generate_from_multiplicities<R: Rng + ?Sized>(
    rng: &mut R,
    multiplicities: Option<&[i64]>,
    grade: Option<i64>,
) -> Result<Generated> {
    let (multiplicities, grade) = match (multiplicities, grade) {
        (None, None) => {
            return Err(GenpoError::invalid(
                "either a degree or a list of multiplicities is required",
            ))
        }
        (Some(m), Some(g)) => (m.to_vec(), g),
        (Some(m), None) => (m.to_vec(), m.iter().sum()),
        (None, Some(g)) => {
            let simple = usize::try_from(g)
                .map_err(|_| GenpoError::invalid(format!("degree {g} is negative")))?;
            (vec![1; simple], g)
        }
    };

    validate_multiplicities(&multiplicities, None, Some(grade))?;

    let rooted: i64 = multiplicities.iter().sum();
    let gap = grade - rooted;
    if gap % 2 != 0 {
        return Err(GenpoError::invalid(format!(
            "cannot reach degree {grade} from multiplicities summing to {rooted}: \
             an odd gap of {gap} cannot be filled with root-free quadratics"
        )));
    }

    let roots = expand_roots_by_multiplicity(rng, &multiplicities)?;
    let quadratics = (0..gap / 2).map(|_| random_no_root_quadratic(rng)).collect();
    let leading = random_leading_coefficient(rng);

    tracing::debug!(grade, rooted, padding = gap, %leading, "generated polynomial from multiplicities");
    Generated::assemble(roots, quadratics, leading)
}
