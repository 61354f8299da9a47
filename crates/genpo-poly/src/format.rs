//! String representations of coefficient arrays.

use std::fmt::Display;

use genpo_rings::Ring;

use crate::error::{GenpoError, Result};

/// Lists every coefficient with its power, highest power first.
///
/// When `min_degree` is given the array is zero-padded to at least
/// `min_degree + 1` coefficients before formatting. Zero coefficients are
/// kept, e.g. `[1(2), 0(1), -4(0)]` for `x^2 - 4`.
#[must_use]
pub fn format_compact<R: Ring + Display>(coeffs: &[R], min_degree: Option<usize>) -> String {
    let mut padded = coeffs.to_vec();
    if let Some(degree) = min_degree {
        if padded.len() <= degree {
            padded.resize(degree + 1, R::zero());
        }
    }

    let tokens: Vec<String> = padded
        .iter()
        .enumerate()
        .rev()
        .map(|(pow, c)| format!("{c}({pow})"))
        .collect();

    format!("[{}]", tokens.join(", "))
}

/// Renders the polynomial as a sum of terms, highest power first.
///
/// Terms look like `3x^2`; the constant term is written bare. Zero
/// coefficients are omitted and an all-zero polynomial renders as `"0"`.
///
/// # Errors
///
/// Returns [`GenpoError::InvalidInput`] if `coeffs` is empty.
pub fn format_algebraic<R: Ring + Display>(coeffs: &[R]) -> Result<String> {
    let (constant, rest) = coeffs
        .split_first()
        .ok_or_else(|| GenpoError::invalid("cannot format a polynomial without coefficients"))?;

    let mut terms: Vec<String> = rest
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, c)| !c.is_zero())
        .map(|(i, c)| format!("{c}x^{}", i + 1))
        .collect();

    if !constant.is_zero() {
        terms.push(constant.to_string());
    }

    if terms.is_empty() {
        return Ok("0".to_string());
    }

    Ok(terms.join(" + "))
}
