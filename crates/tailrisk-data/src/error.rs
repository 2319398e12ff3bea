//! Error types for market-data sources.

use thiserror::Error;

/// Result type for data source operations.
pub type DataResult<T> = Result<T, DataError>;

/// Errors raised by market-data collaborators.
#[derive(Error, Debug, Clone)]
pub enum DataError {
    /// The symbol is unknown or has no tradable price.
    #[error("symbol not found: {symbol}")]
    NotFound {
        /// The requested ticker.
        symbol: String,
    },

    /// The source returned no usable data for the requested period.
    #[error("price data unavailable: {reason}")]
    Unavailable {
        /// What was missing.
        reason: String,
    },

    /// Underlying I/O failure (file sources).
    #[error("data source I/O error: {reason}")]
    Io {
        /// The underlying error message.
        reason: String,
    },

    /// Malformed source payload (bad CSV row, unparsable date, ...).
    #[error("malformed data: {reason}")]
    Malformed {
        /// What failed to parse.
        reason: String,
    },
}

impl DataError {
    /// Create a not-found error for a symbol.
    #[must_use]
    pub fn not_found(symbol: impl Into<String>) -> Self {
        Self::NotFound {
            symbol: symbol.into(),
        }
    }

    /// Create an unavailable-data error.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Create a malformed-data error.
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for DataError {
    fn from(e: std::io::Error) -> Self {
        Self::Io {
            reason: e.to_string(),
        }
    }
}

impl From<csv::Error> for DataError {
    fn from(e: csv::Error) -> Self {
        Self::Malformed {
            reason: e.to_string(),
        }
    }
}
