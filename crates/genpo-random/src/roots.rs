//! Random roots and multiplicities.
//!
//! Roots are small integers drawn from an easy-number interval, so that
//! the resulting polynomial can be solved by hand (rational root test,
//! synthetic division). Multiplicities say how often each root repeats.

use genpo_poly::{GenpoError, Result};
use genpo_rings::Q;
use rand::Rng;
use rustc_hash::FxHashSet;

use crate::bounds::{GradeBounds, Interval};
use crate::easy::easy_num_interval;

/// Draws `n` pairwise distinct integer roots.
///
/// The candidates come from `easy_num_interval(true, Some(n))`, which
/// always holds at least `max(7, n)` values, so rejection sampling
/// terminates quickly. Roots are returned in the order they were drawn.
///
/// # Errors
///
/// Returns [`GenpoError::InvalidInput`] if `n` is negative.
pub fn random_distinct_roots<R: Rng + ?Sized>(rng: &mut R, n: i64) -> Result<Vec<Q>> {
    let count = usize::try_from(n)
        .map_err(|_| GenpoError::invalid(format!("cannot draw {n} roots: count is negative")))?;

    let (low, high) = easy_num_interval(true, Some(n));

    let mut seen = FxHashSet::default();
    let mut roots = Vec::with_capacity(count);
    while roots.len() < count {
        let candidate = rng.gen_range(low..=high);
        if seen.insert(candidate) {
            roots.push(candidate);
        } else {
            tracing::trace!(candidate, "rejected repeated root");
        }
    }

    Ok(roots.into_iter().map(Q::from_integer).collect())
}

/// Drops every multiplicity below one.
#[must_use]
pub fn keep_valid_multiplicities(multiplicities: &[i64]) -> Vec<i64> {
    multiplicities.iter().copied().filter(|&m| m >= 1).collect()
}

/// Checks that every multiplicity is positive and that their sum lies in
/// `[sum_min, sum_max]` for the bounds that are set.
///
/// # Errors
///
/// Returns [`GenpoError::InvalidInput`] if the bounds are inverted, a
/// multiplicity is not positive, or the sum is out of bounds.
pub fn validate_multiplicities(
    multiplicities: &[i64],
    sum_min: Option<i64>,
    sum_max: Option<i64>,
) -> Result<()> {
    let bounds = GradeBounds {
        min: sum_min,
        max: sum_max,
    };
    bounds.validate()?;

    if let Some(m) = multiplicities.iter().find(|&&m| m <= 0) {
        return Err(GenpoError::invalid(format!(
            "multiplicity {m} is not positive"
        )));
    }

    let total: i64 = multiplicities.iter().sum();
    if !bounds.contains(total) {
        return Err(GenpoError::invalid(format!(
            "sum of multiplicities ({total}) is outside {}",
            describe(bounds)
        )));
    }

    Ok(())
}

/// Draws one multiplicity per root, then adjusts them so their sum fits
/// the degree bounds.
///
/// Each multiplicity starts uniform in `multiplicity` (exactly 1 when
/// `None`; the lower end is raised to 1). If the sum exceeds `grade.max`,
/// multiplicities are lowered in index order, each down to the interval
/// minimum, until it fits. Otherwise, if the sum is below `grade.min`,
/// they are raised in index order, each up to the interval maximum.
///
/// # Errors
///
/// Returns [`GenpoError::InvalidInput`] if `root_count < 1`, either bound
/// pair is inverted, or no assignment within the multiplicity interval can
/// reach the degree bounds.
pub fn random_multiplicities<R: Rng + ?Sized>(
    rng: &mut R,
    root_count: i64,
    grade: GradeBounds,
    multiplicity: Option<Interval>,
) -> Result<Vec<i64>> {
    if root_count < 1 {
        return Err(GenpoError::invalid(format!(
            "cannot assign multiplicities to {root_count} roots"
        )));
    }
    let count = usize::try_from(root_count)
        .map_err(|_| GenpoError::invalid(format!("root count {root_count} is too large")))?;

    grade.validate()?;

    let range = match multiplicity {
        Some(interval) => {
            interval.validate()?;
            let min = interval.min.max(1);
            Interval {
                min,
                max: interval.max.max(min),
            }
        }
        None => Interval::exactly(1),
    };

    let mut multiplicities: Vec<i64> = (0..count)
        .map(|_| rng.gen_range(range.min..=range.max))
        .collect();

    if grade.is_unbounded() {
        return Ok(multiplicities);
    }

    let total: i64 = multiplicities.iter().sum();
    match (grade.min, grade.max) {
        (_, Some(max)) if total > max => {
            tracing::trace!(total, max, "lowering multiplicities");
            lower_in_order(&mut multiplicities, total - max, range.min);
        }
        (Some(min), _) if total < min => {
            tracing::trace!(total, min, "raising multiplicities");
            raise_in_order(&mut multiplicities, min - total, range.max);
        }
        _ => {}
    }

    let total: i64 = multiplicities.iter().sum();
    if !grade.contains(total) {
        return Err(GenpoError::invalid(format!(
            "{root_count} roots with multiplicities in [{}, {}] cannot reach a degree in {}",
            range.min,
            range.max,
            describe(grade)
        )));
    }

    Ok(multiplicities)
}

fn lower_in_order(multiplicities: &mut [i64], mut excess: i64, floor: i64) {
    for m in multiplicities.iter_mut() {
        if excess == 0 {
            break;
        }
        let step = (*m - floor).clamp(0, excess);
        *m -= step;
        excess -= step;
    }
}

fn raise_in_order(multiplicities: &mut [i64], mut deficit: i64, ceiling: i64) {
    for m in multiplicities.iter_mut() {
        if deficit == 0 {
            break;
        }
        let step = (ceiling - *m).clamp(0, deficit);
        *m += step;
        deficit -= step;
    }
}

fn describe(bounds: GradeBounds) -> String {
    let show = |b: Option<i64>| b.map_or_else(|| "_".to_string(), |v| v.to_string());
    format!("[{}, {}]", show(bounds.min), show(bounds.max))
}

/// Draws distinct roots and repeats each as often as its multiplicity.
///
/// Non-positive multiplicities are dropped first. The result holds
/// `sum(multiplicities)` roots, grouped by root.
///
/// # Errors
///
/// Returns [`GenpoError::InvalidInput`] if no positive multiplicity is
/// left after filtering.
pub fn expand_roots_by_multiplicity<R: Rng + ?Sized>(
    rng: &mut R,
    multiplicities: &[i64],
) -> Result<Vec<Q>> {
    let kept = keep_valid_multiplicities(multiplicities);
    if kept.is_empty() {
        return Err(GenpoError::invalid(
            "at least one positive multiplicity is required",
        ));
    }
    validate_multiplicities(&kept, None, None)?;

    let distinct = i64::try_from(kept.len())
        .map_err(|_| GenpoError::invalid("too many multiplicities"))?;
    let roots = random_distinct_roots(rng, distinct)?;

    let mut expanded = Vec::new();
    for (root, m) in roots.into_iter().zip(kept) {
        for _ in 0..m {
            expanded.push(root.clone());
        }
    }
    Ok(expanded)
}

/// Extends `values` to `target_length` with elements drawn, with
/// replacement, from the original values.
///
/// The vector is returned as is when it already has the target length.
///
/// # Errors
///
/// Returns [`GenpoError::InvalidInput`] if `target_length` is smaller than
/// `values.len()`, or if `values` is empty and would have to grow.
pub fn random_span<T: Clone, R: Rng + ?Sized>(
    rng: &mut R,
    mut values: Vec<T>,
    target_length: usize,
) -> Result<Vec<T>> {
    let unique = values.len();

    if target_length < unique {
        return Err(GenpoError::invalid(format!(
            "target length ({target_length}) is less than the number of values ({unique})"
        )));
    }

    if target_length == unique {
        return Ok(values);
    }

    if unique == 0 {
        return Err(GenpoError::invalid("cannot span an empty list of values"));
    }

    values.reserve(target_length - unique);
    for _ in unique..target_length {
        let pick = values[rng.gen_range(0..unique)].clone();
        values.push(pick);
    }

    Ok(values)
}
