//! # genpo-poly
//!
//! Dense univariate polynomial arithmetic for genpo.
//!
//! This crate provides:
//! - Addition, multiplication and scaling of coefficient arrays
//! - Horner evaluation with the first derivative in one pass
//! - Synthesis of monic polynomials from a multiset of roots
//! - Compact and algebraic string formatting
//!
//! Coefficients are stored in ascending degree order: index `i` holds the
//! coefficient of `x^i`. Arrays are never normalised, so trailing zeros
//! survive every operation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arith;
pub mod dense;
pub mod error;
pub mod format;
pub mod roots;

#[cfg(test)]
mod proptests;

pub use arith::{add, evaluate, evaluate_with_derivative, multiply, scale};
pub use dense::DensePoly;
pub use error::{GenpoError, Result};
pub use format::{format_algebraic, format_compact};
pub use roots::from_roots;
