//! In-memory fixture-backed data source.

use std::collections::HashMap;

use async_trait::async_trait;

use tailrisk_core::types::{Lookback, PriceSeries, Symbol};

use crate::error::{DataError, DataResult};
use crate::provider::{PriceHistorySource, TickerLookup, TickerQuote};

/// A data source backed by in-memory fixtures.
///
/// Implements both collaborator contracts. Primarily for tests and offline
/// demos, but also the adapter point for callers that fetch prices through
/// their own transport and hand the series over wholesale.
///
/// # Example
///
/// ```rust,ignore
/// let source = MemoryDataSource::new()
///     .with_series(Symbol::new("AAPL")?, aapl_series)
///     .with_quote(TickerQuote {
///         symbol: Symbol::new("AAPL")?,
///         display_name: "Apple Inc.".into(),
///         last_price: 242.70,
///     });
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryDataSource {
    prices: HashMap<Symbol, PriceSeries>,
    quotes: HashMap<Symbol, TickerQuote>,
}

impl MemoryDataSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a price series for a symbol.
    #[must_use]
    pub fn with_series(mut self, symbol: Symbol, series: PriceSeries) -> Self {
        self.prices.insert(symbol, series);
        self
    }

    /// Adds a lookup quote. The last price is rounded to cents, matching
    /// what quote providers surface.
    #[must_use]
    pub fn with_quote(mut self, quote: TickerQuote) -> Self {
        let rounded = TickerQuote {
            last_price: (quote.last_price * 100.0).round() / 100.0,
            ..quote
        };
        self.quotes.insert(rounded.symbol.clone(), rounded);
        self
    }
}

#[async_trait]
impl TickerLookup for MemoryDataSource {
    async fn lookup(&self, symbol: &Symbol) -> DataResult<TickerQuote> {
        self.quotes
            .get(symbol)
            .cloned()
            .ok_or_else(|| DataError::not_found(symbol.as_str()))
    }
}

#[async_trait]
impl PriceHistorySource for MemoryDataSource {
    async fn adjusted_close(
        &self,
        symbols: &[Symbol],
        lookback: Lookback,
    ) -> DataResult<HashMap<Symbol, PriceSeries>> {
        let mut out = HashMap::with_capacity(symbols.len());
        for symbol in symbols {
            let series = self
                .prices
                .get(symbol)
                .ok_or_else(|| DataError::not_found(symbol.as_str()))?
                .tail_window(lookback);
            if series.is_empty() {
                return Err(DataError::unavailable(format!(
                    "no observations for {symbol} in the requested window"
                )));
            }
            out.insert(symbol.clone(), series);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sym(s: &str) -> Symbol {
        Symbol::new(s).unwrap()
    }

    fn series(days: u32) -> PriceSeries {
        PriceSeries::from_closes(
            (1..=days)
                .map(|d| (NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + chrono::Duration::days(i64::from(d)), 100.0 + f64::from(d)))
                .collect(),
        )
    }

    #[tokio::test]
    async fn test_fetches_all_requested_symbols() {
        let source = MemoryDataSource::new()
            .with_series(sym("AAPL"), series(30))
            .with_series(sym("MSFT"), series(30));

        let out = source
            .adjusted_close(&[sym("AAPL"), sym("MSFT")], Lookback::ONE_YEAR)
            .await
            .unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[&sym("AAPL")].len(), 30);
    }

    #[tokio::test]
    async fn test_unknown_symbol_fails_whole_fetch() {
        let source = MemoryDataSource::new().with_series(sym("AAPL"), series(30));
        let err = source
            .adjusted_close(&[sym("AAPL"), sym("ZZZZ")], Lookback::ONE_YEAR)
            .await
            .unwrap_err();
        assert!(matches!(err, DataError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_lookup_rounds_to_cents() {
        let source = MemoryDataSource::new().with_quote(TickerQuote {
            symbol: sym("AAPL"),
            display_name: "Apple Inc.".into(),
            last_price: 242.70499,
        });

        let quote = source.lookup(&sym("AAPL")).await.unwrap();
        assert_eq!(quote.last_price, 242.70);
        assert!(source.lookup(&sym("MSFT")).await.is_err());
    }
}
