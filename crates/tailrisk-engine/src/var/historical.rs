//! Historical-simulation VaR.

use tailrisk_stats::quantile::percentile;

use super::tail_probability;
use crate::error::EngineResult;

/// Historical VaR: the empirical `(1-c)·100`-th percentile of the observed
/// returns, with no distributional assumption.
///
/// Uses linear interpolation between order statistics, so the figure is
/// deterministic: the same series always yields the same VaR.
///
/// # Errors
///
/// `EngineError::InsufficientData` for an empty series; rejects confidence
/// levels outside `(0, 1)`.
pub fn historical_var(returns: &[f64], confidence: f64) -> EngineResult<f64> {
    let p = tail_probability(confidence)?;
    Ok(percentile(returns, p * 100.0)?)
}
