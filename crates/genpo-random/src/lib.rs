//! # genpo-random
//!
//! Random building blocks for polynomials with easy roots.
//!
//! This crate provides:
//! - "Easy number" intervals and simple fractions
//! - Pairwise distinct integer roots and root multisets
//! - Multiplicity assignments honouring degree and multiplicity bounds
//! - Monic quadratics without real roots, used to pad the degree
//! - Random leading coefficients
//!
//! Every function takes the random source as an explicit `&mut impl Rng`,
//! so a seeded generator makes any result reproducible.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bounds;
pub mod easy;
pub mod quadratic;
pub mod roots;

#[cfg(test)]
mod proptests;

pub use bounds::{GradeBounds, Interval};
pub use easy::{
    easy_num_interval, rand_easy_num, rand_simple_fraction, random_leading_coefficient,
    SIMPLE_FRACTIONS,
};
pub use quadratic::{parabola, random_no_root_quadratic};
pub use roots::{
    expand_roots_by_multiplicity, keep_valid_multiplicities, random_distinct_roots,
    random_multiplicities, random_span, validate_multiplicities,
};
