//! Error types for the risk engine.

use thiserror::Error;

use tailrisk_core::CoreError;
use tailrisk_data::DataError;
use tailrisk_stats::StatsError;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur during a portfolio VaR calculation.
///
/// Any of these aborts the whole `calculate_full_portfolio` call; the engine
/// never returns a partial report and never retries — retries belong to the
/// transport behind the data source traits.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Malformed or out-of-range weight vector (count mismatch, weight
    /// outside (0, 100], sum away from 100, empty request, too many
    /// positions).
    #[error("invalid weights: {reason}")]
    InvalidWeight {
        /// The violated constraint.
        reason: String,
    },

    /// Malformed or duplicated ticker in the request.
    #[error("invalid symbol: {reason}")]
    InvalidSymbol {
        /// The violated constraint.
        reason: String,
    },

    /// Too few aligned observations to estimate tail statistics.
    #[error("insufficient data: {reason}")]
    InsufficientData {
        /// Why the aligned sample is too small.
        reason: String,
    },

    /// Zero-variance return series; parametric quantiles are undefined.
    #[error("degenerate series: {reason}")]
    DegenerateSeries {
        /// Which series collapsed.
        reason: String,
    },

    /// The price-history fetch did not complete within the configured bound.
    #[error("price fetch timed out after {waited_ms} ms")]
    FetchTimeout {
        /// How long the engine waited.
        waited_ms: u64,
    },

    /// Collaborator failure (unknown symbol, unavailable data, I/O).
    #[error(transparent)]
    Data(#[from] DataError),

    /// Internal calculation failure that is not one of the above.
    #[error("calculation failed: {reason}")]
    Calculation {
        /// What failed.
        reason: String,
    },
}

impl EngineError {
    /// Create an invalid-weight error.
    #[must_use]
    pub fn invalid_weight(reason: impl Into<String>) -> Self {
        Self::InvalidWeight {
            reason: reason.into(),
        }
    }

    /// Create an invalid-symbol error.
    #[must_use]
    pub fn invalid_symbol(reason: impl Into<String>) -> Self {
        Self::InvalidSymbol {
            reason: reason.into(),
        }
    }

    /// Create an insufficient-data error.
    #[must_use]
    pub fn insufficient_data(reason: impl Into<String>) -> Self {
        Self::InsufficientData {
            reason: reason.into(),
        }
    }

    /// Create a degenerate-series error.
    #[must_use]
    pub fn degenerate_series(reason: impl Into<String>) -> Self {
        Self::DegenerateSeries {
            reason: reason.into(),
        }
    }
}

impl From<StatsError> for EngineError {
    fn from(e: StatsError) -> Self {
        match e {
            StatsError::InsufficientData { reason } => Self::InsufficientData { reason },
            StatsError::DegenerateDistribution { reason } => Self::DegenerateSeries { reason },
            StatsError::InvalidInput { reason } => Self::Calculation { reason },
        }
    }
}

impl From<CoreError> for EngineError {
    fn from(e: CoreError) -> Self {
        Self::InvalidSymbol {
            reason: e.to_string(),
        }
    }
}
