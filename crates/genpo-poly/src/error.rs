//! Error type shared by every genpo crate.

use thiserror::Error;

/// Errors raised by polynomial arithmetic and generation.
///
/// Every failure is a caller mistake detected up front; nothing is
/// retried and no partial result is returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenpoError {
    /// A parameter, bound or coefficient array was rejected.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl GenpoError {
    /// Builds a [`GenpoError::InvalidInput`] from any message.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }
}

/// Result alias used across genpo.
pub type Result<T> = std::result::Result<T, GenpoError>;
