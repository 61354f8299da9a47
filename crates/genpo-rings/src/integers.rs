//! Machine integers as a coefficient ring.
//!
//! Overflow is not checked: the polynomials genpo deals with have a few
//! dozen small coefficients at most.

use crate::traits::Ring;

impl Ring for i64 {
    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn is_one(&self) -> bool {
        *self == 1
    }
}
