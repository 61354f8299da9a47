//! Dense univariate polynomials.
//!
//! [`DensePoly`] owns a non-empty coefficient vector and exposes the
//! slice operations of [`crate::arith`] as methods that cannot fail.

use std::fmt;

use genpo_rings::Ring;

use crate::arith;
use crate::error::{GenpoError, Result};
use crate::format::format_algebraic;
use crate::roots;

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order and are never
/// normalised: `degree()` is the index of the last stored coefficient,
/// even if that coefficient is zero.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DensePoly<R: Ring> {
    /// Coefficients in ascending degree order. Never empty.
    coeffs: Vec<R>,
}

impl<R: Ring> DensePoly<R> {
    /// Creates a polynomial from coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`GenpoError::InvalidInput`] if `coeffs` is empty.
    pub fn new(coeffs: Vec<R>) -> Result<Self> {
        if coeffs.is_empty() {
            return Err(GenpoError::invalid(
                "a polynomial needs at least one coefficient",
            ));
        }
        Ok(Self { coeffs })
    }

    /// Creates the zero polynomial `[0]`.
    #[must_use]
    pub fn zero() -> Self {
        Self::constant(R::zero())
    }

    /// Creates the constant polynomial `[1]`.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(R::one())
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self { coeffs: vec![c] }
    }

    /// Creates a polynomial from its constant term and the coefficients of
    /// x, x², ... in order.
    #[must_use]
    pub fn with_constant(constant: R, higher: impl IntoIterator<Item = R>) -> Self {
        let mut coeffs = vec![constant];
        coeffs.extend(higher);
        Self { coeffs }
    }

    /// Creates the monic polynomial with the given root multiset.
    ///
    /// See [`roots::from_roots`].
    #[must_use]
    pub fn from_roots(roots: &[R]) -> Self {
        Self {
            coeffs: roots::from_roots(roots),
        }
    }

    /// Multiplies a non-empty sequence of polynomials.
    ///
    /// # Errors
    ///
    /// Returns [`GenpoError::InvalidInput`] if `polys` is empty.
    pub fn product(polys: &[Self]) -> Result<Self> {
        arith::multiply(polys).map(|coeffs| Self { coeffs })
    }

    /// Sums a non-empty sequence of polynomials.
    ///
    /// # Errors
    ///
    /// Returns [`GenpoError::InvalidInput`] if `polys` is empty.
    pub fn sum(polys: &[Self]) -> Result<Self> {
        arith::add(polys).map(|coeffs| Self { coeffs })
    }

    /// Returns the degree, i.e. the number of coefficients minus one.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if every coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Ring::is_zero)
    }

    /// Returns the highest stored coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> &R {
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns the coefficient of x^i, zero past the end.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Consumes the polynomial, returning its coefficients.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<R> {
        self.coeffs
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self {
            coeffs: arith::add_pair(&self.coeffs, &other.coeffs),
        }
    }

    /// Multiplies two polynomials.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self {
            coeffs: arith::mul_pair(&self.coeffs, &other.coeffs),
        }
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, factor: &R) -> Self {
        let mut coeffs = self.coeffs.clone();
        arith::scale(&mut coeffs, factor);
        Self { coeffs }
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        self.coeffs
            .iter()
            .rev()
            .fold(R::zero(), |acc, c| acc * x.clone() + c.clone())
    }

    /// Evaluates the polynomial and its derivative at a point.
    ///
    /// See [`arith::evaluate_with_derivative`].
    #[must_use]
    pub fn eval_with_derivative(&self, x: &R) -> (R, R) {
        let mut p = R::zero();
        let mut pdx = R::zero();
        for c in self.coeffs.iter().rev() {
            pdx = pdx * x.clone() + p.clone();
            p = p * x.clone() + c.clone();
        }
        (p, pdx)
    }

    /// Computes the formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.coeffs.len() == 1 {
            return Self::zero();
        }

        Self {
            coeffs: self
                .coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, c)| c.mul_by_scalar(i as i64))
                .collect(),
        }
    }
}

impl<R: Ring> AsRef<[R]> for DensePoly<R> {
    fn as_ref(&self) -> &[R] {
        &self.coeffs
    }
}

impl<R: Ring + fmt::Display> fmt::Display for DensePoly<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The coefficient vector is never empty
        match format_algebraic(&self.coeffs) {
            Ok(s) => f.write_str(&s),
            Err(_) => Err(fmt::Error),
        }
    }
}
