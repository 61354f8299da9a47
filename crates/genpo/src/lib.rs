//! # genpo
//!
//! Random polynomials with easy roots, for algebra exercises that can be
//! solved by hand.
//!
//! ## Features
//!
//! - **Exact Coefficients**: arbitrary-precision rationals throughout
//! - **Dense Arithmetic**: sums, products, Horner evaluation with derivative
//! - **Root Synthesis**: coefficients of `∏(x − rᵢ)` from a list of roots
//! - **Constrained Randomness**: distinct easy roots, bounded multiplicities,
//!   root-free quadratic padding, simple leading coefficients
//! - **Strategies**: fixed degree, explicit multiplicities, or interval bounds
//!
//! ## Quick Start
//!
//! ```rust
//! use genpo::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let g = generate_fixed(&mut rng, 3, Some(2)).unwrap();
//!
//! assert_eq!(g.degree(), 3);
//! for root in &g.roots {
//!     assert!(g.polynomial.eval(root).is_zero());
//! }
//! println!("{}", format_algebraic(g.polynomial.coeffs()).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use genpo_poly as poly;
pub use genpo_random as random;
pub use genpo_rings as rings;
pub use genpo_strategies as strategies;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use genpo_poly::{format_algebraic, format_compact, DensePoly, GenpoError};
    pub use genpo_random::{GradeBounds, Interval};
    pub use genpo_rings::{Ring, Q};
    pub use genpo_strategies::{
        generate_fixed, generate_from_multiplicities, generate_ranged, Generated, RangedBounds,
        RangedOutcome,
    };
}
