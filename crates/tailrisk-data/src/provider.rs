//! Collaborator contracts consumed by the risk engine.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use tailrisk_core::types::{Lookback, PriceSeries, Symbol};

use crate::error::DataResult;

/// Resolved quote for a ticker lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerQuote {
    /// Normalized ticker.
    pub symbol: Symbol,
    /// Human-readable security name.
    pub display_name: String,
    /// Last traded price.
    pub last_price: f64,
}

/// Resolves tickers to display names and last prices.
///
/// Used for search-box style validation before a portfolio is submitted;
/// the engine itself only needs [`PriceHistorySource`].
#[async_trait]
pub trait TickerLookup: Send + Sync {
    /// Looks up a single symbol.
    ///
    /// # Errors
    ///
    /// `DataError::NotFound` if the symbol is unknown or has no tradable
    /// price.
    async fn lookup(&self, symbol: &Symbol) -> DataResult<TickerQuote>;
}

/// Supplies trailing adjusted daily closes for a set of securities.
#[async_trait]
pub trait PriceHistorySource: Send + Sync {
    /// Fetches adjusted closes for every requested symbol over the trailing
    /// `lookback` window.
    ///
    /// The result must contain an entry for each requested symbol; sources
    /// fail rather than silently dropping tickers.
    ///
    /// # Errors
    ///
    /// - `DataError::NotFound` if a symbol is unknown to the source
    /// - `DataError::Unavailable` if a symbol has no data in the window
    async fn adjusted_close(
        &self,
        symbols: &[Symbol],
        lookback: Lookback,
    ) -> DataResult<HashMap<Symbol, PriceSeries>>;
}
