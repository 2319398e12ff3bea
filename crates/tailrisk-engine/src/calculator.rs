//! Top-level portfolio VaR orchestration.
//!
//! [`VarCalculator`] owns a price-history source and a configuration, and
//! drives the full request: validation, bounded fetch, return alignment,
//! per-security and portfolio estimation, report assembly. Any failure
//! aborts the whole request; no partial report is ever returned.

use std::collections::HashSet;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use tokio::time::timeout;
use tracing::{debug, instrument};

use tailrisk_core::types::{
    Lookback, PortfolioVarReport, PriceSeries, RiskStatistics, Symbol, MAX_POSITIONS,
};
use tailrisk_data::{DataError, PriceHistorySource};

use crate::error::{EngineError, EngineResult};
use crate::portfolio::{combine_returns, to_fractions};
use crate::returns::align_log_returns;
use crate::var::{derive_stream_seed, estimate_risk_statistics_with, EstimatorConfig};

/// Relative tolerance on the weight sum (weights must total 100%).
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Configuration for a [`VarCalculator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorConfig {
    /// Trailing window requested from the price source.
    pub lookback: Lookback,
    /// Per-series estimator settings.
    pub estimator: EstimatorConfig,
    /// Base seed for Monte Carlo draw streams. `None` seeds from OS entropy;
    /// `Some` makes runs reproducible (each series' stream is derived from
    /// this seed and the series content).
    pub seed: Option<u64>,
    /// Upper bound on the price-history fetch.
    pub fetch_timeout: Duration,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            lookback: Lookback::ONE_YEAR,
            estimator: EstimatorConfig::default(),
            seed: None,
            fetch_timeout: Duration::from_secs(30),
        }
    }
}

/// Computes per-security and portfolio VaR for a weighted basket of tickers.
#[derive(Debug, Clone)]
pub struct VarCalculator<P> {
    source: P,
    config: CalculatorConfig,
}

impl<P: PriceHistorySource> VarCalculator<P> {
    /// Creates a calculator over a price source with default configuration.
    pub fn new(source: P) -> Self {
        Self::with_config(source, CalculatorConfig::default())
    }

    /// Creates a calculator with explicit configuration.
    pub fn with_config(source: P, config: CalculatorConfig) -> Self {
        Self { source, config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Computes the full VaR report for a weighted portfolio.
    ///
    /// `weights` are percentage allocations in `(0, 100]`, one per symbol,
    /// summing to 100. The report holds one [`RiskStatistics`] record per
    /// security in request order plus the synthesized `"Portfolio"` entry
    /// last.
    ///
    /// # Errors
    ///
    /// - `EngineError::InvalidWeight` / `InvalidSymbol` for malformed
    ///   requests (see [`CalculatorConfig`] and the crate docs)
    /// - `EngineError::FetchTimeout` if the source does not answer in time
    /// - `EngineError::Data` for collaborator failures
    /// - `EngineError::InsufficientData` / `DegenerateSeries` from the
    ///   statistics pipeline
    #[instrument(skip_all, fields(positions = symbols.len()))]
    pub async fn calculate_full_portfolio<S: AsRef<str>>(
        &self,
        symbols: &[S],
        weights: &[f64],
    ) -> EngineResult<PortfolioVarReport> {
        let symbols = validate_request(symbols, weights)?;
        let fractions = to_fractions(weights);

        let mut fetched = match timeout(
            self.config.fetch_timeout,
            self.source.adjusted_close(&symbols, self.config.lookback),
        )
        .await
        {
            Ok(result) => result?,
            Err(_) => {
                return Err(EngineError::FetchTimeout {
                    waited_ms: self.config.fetch_timeout.as_millis() as u64,
                })
            }
        };

        // Re-impose request order; the source hands back an unordered map.
        let ordered: Vec<(Symbol, PriceSeries)> = symbols
            .iter()
            .map(|symbol| {
                fetched
                    .remove(symbol)
                    .map(|series| (symbol.clone(), series))
                    .ok_or_else(|| {
                        DataError::unavailable(format!("no series returned for {symbol}"))
                    })
            })
            .collect::<Result<_, DataError>>()?;

        let aligned = align_log_returns(&ordered)?;
        debug!(observations = aligned.len(), "estimating risk statistics");

        let estimator = self.config.estimator;
        let seed = self.config.seed;

        // Each security's estimation is independent and side-effect-free;
        // the aligned table is read-only from here on.
        let columns: Vec<(&Symbol, &[f64])> = aligned.iter().collect();
        let per_security: Vec<(Symbol, RiskStatistics)> = columns
            .into_par_iter()
            .map(|(symbol, series)| {
                let mut rng = rng_for(seed, series);
                estimate_risk_statistics_with(series, &estimator, &mut rng)
                    .map(|stats| (symbol.clone(), stats))
            })
            .collect::<EngineResult<Vec<_>>>()?;

        let portfolio_series = combine_returns(&aligned, &fractions)?;
        let mut rng = rng_for(seed, &portfolio_series);
        let portfolio_stats =
            estimate_risk_statistics_with(&portfolio_series, &estimator, &mut rng)?;

        Ok(PortfolioVarReport::from_parts(per_security, portfolio_stats))
    }
}

fn rng_for(seed: Option<u64>, series: &[f64]) -> StdRng {
    match seed {
        Some(base) => StdRng::seed_from_u64(derive_stream_seed(base, series)),
        None => StdRng::from_entropy(),
    }
}

/// Validates the request shape and normalizes the symbols.
fn validate_request<S: AsRef<str>>(symbols: &[S], weights: &[f64]) -> EngineResult<Vec<Symbol>> {
    if symbols.is_empty() {
        return Err(EngineError::invalid_weight("no symbols in request"));
    }
    if symbols.len() != weights.len() {
        return Err(EngineError::invalid_weight(format!(
            "{} weights for {} symbols",
            weights.len(),
            symbols.len()
        )));
    }
    if symbols.len() > MAX_POSITIONS {
        return Err(EngineError::invalid_weight(format!(
            "{} positions exceeds the maximum of {MAX_POSITIONS}",
            symbols.len()
        )));
    }

    let normalized: Vec<Symbol> = symbols
        .iter()
        .map(|s| Symbol::new(s.as_ref()))
        .collect::<Result<_, _>>()?;

    let mut seen = HashSet::new();
    for symbol in &normalized {
        if !seen.insert(symbol) {
            return Err(EngineError::invalid_symbol(format!(
                "duplicate ticker {symbol}"
            )));
        }
    }

    for (symbol, weight) in normalized.iter().zip(weights) {
        if !weight.is_finite() || *weight <= 0.0 || *weight > 100.0 {
            return Err(EngineError::invalid_weight(format!(
                "weight {weight} for {symbol} must be in (0, 100]"
            )));
        }
    }

    let sum: f64 = weights.iter().sum();
    if (sum - 100.0).abs() > 100.0 * WEIGHT_SUM_TOLERANCE {
        return Err(EngineError::invalid_weight(format!(
            "weights must sum to 100, got {sum}"
        )));
    }

    Ok(normalized)
}
