//! Results of the generation strategies.

use genpo_poly::{DensePoly, Result};
use genpo_rings::Q;

/// A generated polynomial together with how it was built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generated {
    /// The coefficients, constant term first.
    pub polynomial: DensePoly<Q>,
    /// Every real root, repeated per multiplicity, in ascending order.
    pub roots: Vec<Q>,
    /// Root-free monic quadratics multiplied in to raise the degree.
    pub quadratics: Vec<DensePoly<Q>>,
    /// The factor the monic product was scaled by.
    pub leading_coefficient: Q,
}

impl Generated {
    /// Multiplies `∏(x − root)` by the quadratics, then scales the product
    /// by `leading_coefficient`.
    pub(crate) fn assemble(
        mut roots: Vec<Q>,
        quadratics: Vec<DensePoly<Q>>,
        leading_coefficient: Q,
    ) -> Result<Self> {
        let mut factors = Vec::with_capacity(quadratics.len() + 1);
        factors.push(DensePoly::from_roots(&roots));
        factors.extend(quadratics.iter().cloned());

        let polynomial = DensePoly::product(&factors)?.scale(&leading_coefficient);

        roots.sort();
        Ok(Self {
            polynomial,
            roots,
            quadratics,
            leading_coefficient,
        })
    }

    /// Degree of the generated polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.polynomial.degree()
    }

    /// The distinct roots with their multiplicities, in ascending order.
    #[must_use]
    pub fn root_multiplicities(&self) -> Vec<(Q, usize)> {
        let mut grouped: Vec<(Q, usize)> = Vec::new();
        for root in &self.roots {
            match grouped.last_mut() {
                Some((last, count)) if last == root => *count += 1,
                _ => grouped.push((root.clone(), 1)),
            }
        }
        grouped
    }
}

/// Result of [`crate::generate_ranged`].
///
/// `NoPolynomial` is returned only when zero roots were drawn and no
/// quadratic padding was needed, i.e. the target degree came out as 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RangedOutcome {
    /// A polynomial was generated.
    Polynomial(Generated),
    /// Nothing to generate: no roots and degree 0.
    NoPolynomial,
}

impl RangedOutcome {
    /// Returns true if a polynomial was generated.
    #[must_use]
    pub fn is_polynomial(&self) -> bool {
        matches!(self, RangedOutcome::Polynomial(_))
    }

    /// Returns the generated polynomial if present.
    #[must_use]
    pub fn generated(&self) -> Option<&Generated> {
        match self {
            RangedOutcome::Polynomial(g) => Some(g),
            RangedOutcome::NoPolynomial => None,
        }
    }

    /// Consumes the outcome, returning the generated polynomial if present.
    #[must_use]
    pub fn into_generated(self) -> Option<Generated> {
        match self {
            RangedOutcome::Polynomial(g) => Some(g),
            RangedOutcome::NoPolynomial => None,
        }
    }
}
