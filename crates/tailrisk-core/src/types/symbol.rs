//! Ticker symbol type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// A case-normalized equity ticker symbol.
///
/// Symbols are uppercased and trimmed on construction so that `"aapl"`,
/// `" AAPL "` and `"AAPL"` all compare equal. A symbol must be non-empty
/// and consist of ASCII alphanumerics plus `.` and `-` (share classes such
/// as `BRK.B` and `BF-B` are valid).
///
/// # Example
///
/// ```rust
/// use tailrisk_core::types::Symbol;
///
/// let sym = Symbol::new("msft")?;
/// assert_eq!(sym.as_str(), "MSFT");
/// # Ok::<(), tailrisk_core::CoreError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Creates a normalized symbol from raw user input.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidSymbol` if the input is empty after
    /// trimming or contains characters outside `[A-Za-z0-9.-]`.
    pub fn new(raw: impl AsRef<str>) -> CoreResult<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CoreError::invalid_symbol(raw.as_ref(), "empty ticker"));
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return Err(CoreError::invalid_symbol(
                raw.as_ref(),
                "tickers may contain only letters, digits, '.' and '-'",
            ));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Returns the normalized ticker.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the symbol, returning the normalized ticker string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Symbol {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
