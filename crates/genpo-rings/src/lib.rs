//! # genpo-rings
//!
//! Coefficient fields for genpo polynomials.
//!
//! This crate provides:
//! - The abstract `Ring` trait every coefficient type implements
//! - Exact rationals `Q`, backed by `dashu`
//! - Machine integers (`i64`) for quick integer-only work
//!
//! Generated polynomials use `Q` so that scaling by simple fractions
//! such as 1/3 stays exact.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integers;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use rationals::Q;
pub use traits::Ring;
