//! # genpo-strategies
//!
//! Named strategies that combine random roots, multiplicities and
//! root-free quadratic factors into finished practice polynomials.
//!
//! - [`generate_fixed`]: exact degree and number of distinct roots
//! - [`generate_from_multiplicities`]: explicit multiplicities, optional
//!   degree padded with quadratics
//! - [`generate_ranged`]: every dimension drawn from an interval
//!
//! Each strategy reports the roots it used alongside the coefficients.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod fixed;
pub mod outcome;
pub mod ranged;

#[cfg(test)]
mod proptests;

pub use config::{RangedBounds, ResolvedBounds};
pub use fixed::{generate_fixed, generate_from_multiplicities};
pub use outcome::{Generated, RangedOutcome};
pub use ranged::generate_ranged;
