//! Coefficient-array arithmetic.
//!
//! All functions work on plain slices in ascending degree order. The
//! N-ary forms take a non-empty slice of polynomials; the identities are
//! `[0]` for [`add`] and `[1]` for [`multiply`].

use genpo_rings::Ring;

use crate::error::{GenpoError, Result};

/// Multiplies every coefficient by `factor` in place.
///
/// Does nothing when `factor` is one.
pub fn scale<R: Ring>(coeffs: &mut [R], factor: &R) {
    if factor.is_one() {
        return;
    }

    for c in coeffs.iter_mut() {
        *c = c.clone() * factor.clone();
    }
}

/// Adds two coefficient arrays of any lengths.
///
/// The result is as long as the longer input.
#[must_use]
pub fn add_pair<R: Ring>(a: &[R], b: &[R]) -> Vec<R> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut result = long.to_vec();
    for (r, c) in result.iter_mut().zip(short) {
        *r = r.clone() + c.clone();
    }
    result
}

/// Sums a non-empty sequence of polynomials.
///
/// Inputs may come in any order and have different lengths; shorter ones
/// are zero-padded. The result is as long as the longest input.
///
/// # Errors
///
/// Returns [`GenpoError::InvalidInput`] if `polys` is empty.
pub fn add<R: Ring, P: AsRef<[R]>>(polys: &[P]) -> Result<Vec<R>> {
    let mut sorted: Vec<&[R]> = polys.iter().map(AsRef::as_ref).collect();

    // Longest first so the accumulator never has to grow
    sorted.sort_by_key(|p| std::cmp::Reverse(p.len()));

    let (first, rest) = sorted
        .split_first()
        .ok_or_else(|| GenpoError::invalid("cannot sum an empty sequence of polynomials"))?;

    Ok(rest.iter().fold(first.to_vec(), |mut acc, p| {
        for (a, c) in acc.iter_mut().zip(p.iter()) {
            *a = a.clone() + c.clone();
        }
        acc
    }))
}

/// Schoolbook product of two non-empty coefficient arrays.
///
/// The degrees add: the result has `a.len() + b.len() - 1` coefficients.
/// An empty operand yields an empty result.
#[must_use]
pub fn mul_pair<R: Ring>(a: &[R], b: &[R]) -> Vec<R> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result = vec![R::zero(); a.len() + b.len() - 1];
    for (i, ai) in a.iter().enumerate() {
        for (j, bj) in b.iter().enumerate() {
            result[i + j] = result[i + j].clone() + ai.clone() * bj.clone();
        }
    }
    result
}

/// Multiplies a non-empty sequence of polynomials, left to right.
///
/// # Errors
///
/// Returns [`GenpoError::InvalidInput`] if `polys` is empty or any member
/// has no coefficients.
pub fn multiply<R: Ring, P: AsRef<[R]>>(polys: &[P]) -> Result<Vec<R>> {
    let (first, rest) = polys
        .split_first()
        .ok_or_else(|| GenpoError::invalid("cannot multiply an empty sequence of polynomials"))?;

    if polys.iter().any(|p| p.as_ref().is_empty()) {
        return Err(GenpoError::invalid(
            "cannot multiply a polynomial without coefficients",
        ));
    }

    Ok(rest
        .iter()
        .fold(first.as_ref().to_vec(), |acc, p| mul_pair(&acc, p.as_ref())))
}

/// Evaluates the polynomial at `x` using Horner's method.
///
/// # Errors
///
/// Returns [`GenpoError::InvalidInput`] if `coeffs` is empty.
pub fn evaluate<R: Ring>(coeffs: &[R], x: &R) -> Result<R> {
    let (lead, rest) = coeffs
        .split_last()
        .ok_or_else(|| GenpoError::invalid("cannot evaluate a polynomial without coefficients"))?;

    Ok(rest
        .iter()
        .rev()
        .fold(lead.clone(), |p, c| p * x.clone() + c.clone()))
}

/// Evaluates the polynomial and its first derivative at `x` in one pass.
///
/// Returns `(p(x), p'(x))`. The derivative accumulator is updated before
/// the value accumulator at each step: `p' <- p'·x + p`, then
/// `p <- p·x + c`.
///
/// # Errors
///
/// Returns [`GenpoError::InvalidInput`] if `coeffs` is empty.
pub fn evaluate_with_derivative<R: Ring>(coeffs: &[R], x: &R) -> Result<(R, R)> {
    let (lead, rest) = coeffs
        .split_last()
        .ok_or_else(|| GenpoError::invalid("cannot evaluate a polynomial without coefficients"))?;

    let mut p = lead.clone();
    let mut pdx = R::zero();

    for c in rest.iter().rev() {
        pdx = pdx * x.clone() + p.clone();
        p = p * x.clone() + c.clone();
    }

    Ok((p, pdx))
}
