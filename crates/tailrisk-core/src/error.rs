//! Error types for core domain validation.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while constructing core domain types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Ticker symbol failed normalization.
    #[error("invalid symbol '{value}': {reason}")]
    InvalidSymbol {
        /// The offending input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl CoreError {
    /// Create an invalid symbol error.
    #[must_use]
    pub fn invalid_symbol(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSymbol {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
