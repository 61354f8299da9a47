//! Bounds for interval-constrained generation.

use genpo_poly::{GenpoError, Result};
use genpo_random::Interval;

/// Default lowest degree when none is given.
pub const DEFAULT_MIN_GRADE: i64 = 2;

/// Default width of the degree interval when no maximum is given.
pub const DEFAULT_GRADE_SPAN: i64 = 3;

/// Optional bounds for [`crate::generate_ranged`].
///
/// Every field may be left unset; [`RangedBounds::resolve`] fills in the
/// defaults and rejects inconsistent combinations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RangedBounds {
    /// Lowest degree. Defaults to 2; negative values count as 0.
    ///
    /// Explicit values of 0 and 1 are kept rather than raised to 2, so
    /// `with_grade(1, 1)` with no roots yields
    /// [`RangedOutcome::NoPolynomial`](crate::RangedOutcome::NoPolynomial)
    /// instead of a quadratic.
    pub min_grade: Option<i64>,
    /// Highest degree. Defaults to `min_grade + 3`.
    pub max_grade: Option<i64>,
    /// Fewest distinct real roots. Defaults to 0; negative values count as 0.
    pub min_roots: Option<i64>,
    /// Most distinct real roots. Defaults to, and is capped at, the highest
    /// degree.
    pub max_roots: Option<i64>,
    /// Lowest multiplicity of a root.
    pub min_multiplicity: Option<i64>,
    /// Highest multiplicity of a root.
    pub max_multiplicity: Option<i64>,
}

/// [`RangedBounds`] with every default applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedBounds {
    /// Admissible degrees.
    pub grade: Interval,
    /// Admissible numbers of distinct roots.
    pub roots: Interval,
    /// Admissible multiplicities.
    pub multiplicity: Interval,
}

impl RangedBounds {
    /// No bounds set: every default applies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the degree interval.
    #[must_use]
    pub fn with_grade(mut self, min: i64, max: i64) -> Self {
        self.min_grade = Some(min);
        self.max_grade = Some(max);
        self
    }

    /// Sets the interval for the number of distinct roots.
    #[must_use]
    pub fn with_roots(mut self, min: i64, max: i64) -> Self {
        self.min_roots = Some(min);
        self.max_roots = Some(max);
        self
    }

    /// Sets the multiplicity interval.
    #[must_use]
    pub fn with_multiplicity(mut self, min: i64, max: i64) -> Self {
        self.min_multiplicity = Some(min);
        self.max_multiplicity = Some(max);
        self
    }

    /// Applies the defaults and checks every pairwise ordering.
    ///
    /// Missing multiplicity bounds are derived from the others: the minimum
    /// defaults to `max(1, ⌊min_grade / max_roots⌋)` and the maximum to
    /// `max(min, ⌈max_grade / min_roots⌉)`, falling back to 1 and the
    /// minimum respectively when the divisor is zero.
    ///
    /// # Errors
    ///
    /// Returns [`GenpoError::InvalidInput`] if `max_grade < min_grade`,
    /// `max_roots < min_roots`, `max_grade < min_roots`, or the multiplicity
    /// interval ends up inverted.
    pub fn resolve(&self) -> Result<ResolvedBounds> {
        let min_grade = self.min_grade.map_or(DEFAULT_MIN_GRADE, |g| g.max(0));
        let max_grade = match self.max_grade {
            Some(max_grade) => max_grade,
            None => min_grade.checked_add(DEFAULT_GRADE_SPAN).ok_or_else(|| {
                GenpoError::invalid(format!(
                    "min_grade ({min_grade}) is too large to derive a default max_grade"
                ))
            })?,
        };
        if max_grade < min_grade {
            return Err(GenpoError::invalid(format!(
                "degree interval is inverted: max_grade ({max_grade}) < min_grade ({min_grade})"
            )));
        }

        let min_roots = self.min_roots.map_or(0, |r| r.max(0));
        if let Some(max_roots) = self.max_roots {
            if max_roots < min_roots {
                return Err(GenpoError::invalid(format!(
                    "root interval is inverted: max_roots ({max_roots}) < min_roots ({min_roots})"
                )));
            }
        }
        if max_grade < min_roots {
            return Err(GenpoError::invalid(format!(
                "max_grade ({max_grade}) cannot hold min_roots ({min_roots}) roots"
            )));
        }

        let max_roots = self.max_roots.map_or(max_grade, |r| r.min(max_grade));
        let min_grade = min_grade.max(min_roots);

        let min_multiplicity = self.min_multiplicity.unwrap_or_else(|| {
            if max_roots == 0 {
                1
            } else {
                (min_grade / max_roots).max(1)
            }
        });
        let max_multiplicity = self.max_multiplicity.unwrap_or_else(|| {
            if min_roots == 0 {
                min_multiplicity
            } else {
                ceil_div(max_grade, min_roots).max(min_multiplicity)
            }
        });

        Ok(ResolvedBounds {
            grade: Interval::new(min_grade, max_grade)?,
            roots: Interval::new(min_roots, max_roots)?,
            multiplicity: Interval::new(min_multiplicity, max_multiplicity)?,
        })
    }
}

/// `⌈a / b⌉` for `b > 0`.
fn ceil_div(a: i64, b: i64) -> i64 {
    if a > 0 {
        (a - 1) / b + 1
    } else {
        a / b
    }
}
