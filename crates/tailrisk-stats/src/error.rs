//! Error types for statistical calculations.

use thiserror::Error;

/// Result type for statistics operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors that can occur during statistical calculations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// Too few observations for the requested statistic.
    #[error("insufficient data: {reason}")]
    InsufficientData {
        /// Why the sample is too small.
        reason: String,
    },

    /// Zero-variance sample makes the statistic undefined.
    #[error("degenerate distribution: {reason}")]
    DegenerateDistribution {
        /// Which statistic became undefined.
        reason: String,
    },

    /// Invalid parameter (confidence level, percentile rank, ...).
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// The violated constraint.
        reason: String,
    },
}

impl StatsError {
    /// Create an insufficient data error.
    #[must_use]
    pub fn insufficient_data(reason: impl Into<String>) -> Self {
        Self::InsufficientData {
            reason: reason.into(),
        }
    }

    /// Create a degenerate distribution error.
    #[must_use]
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateDistribution {
            reason: reason.into(),
        }
    }

    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StatsError::insufficient_data("need at least 2 observations");
        assert!(err.to_string().contains("at least 2"));

        let err = StatsError::degenerate("zero variance");
        assert!(err.to_string().contains("zero variance"));
    }
}
