//! Combined per-series risk estimation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tailrisk_core::types::RiskStatistics;
use tailrisk_stats::moments::SampleMoments;
use tailrisk_stats::precision::round_to;

use super::{
    cornish_fisher_var, historical_var, monte_carlo_var, normal_var, CONFIDENCE_95,
    CONFIDENCE_99, DEFAULT_MONTE_CARLO_PATHS,
};
use crate::error::{EngineError, EngineResult};

/// Tuning knobs for the per-series estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimatorConfig {
    /// Monte Carlo sample size.
    pub monte_carlo_paths: usize,
    /// Decimal places applied to every surfaced figure.
    pub decimals: u32,
    /// Trading days per year used to annualize the expected return.
    pub trading_days: u32,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            monte_carlo_paths: DEFAULT_MONTE_CARLO_PATHS,
            decimals: 6,
            trading_days: 252,
        }
    }
}

/// Computes the full [`RiskStatistics`] record for one return series using
/// an OS-entropy-seeded RNG for the Monte Carlo step.
///
/// # Errors
///
/// - `EngineError::InsufficientData` for fewer than 2 observations
/// - `EngineError::DegenerateSeries` for a zero-variance series
pub fn estimate_risk_statistics(
    returns: &[f64],
    config: &EstimatorConfig,
) -> EngineResult<RiskStatistics> {
    estimate_risk_statistics_with(returns, config, &mut StdRng::from_entropy())
}

/// Computes the full [`RiskStatistics`] record for one return series with a
/// caller-supplied RNG for the Monte Carlo step.
///
/// All other figures are deterministic functions of the series; the RNG only
/// feeds the Monte Carlo draws.
///
/// # Errors
///
/// See [`estimate_risk_statistics`].
pub fn estimate_risk_statistics_with<R: Rng + ?Sized>(
    returns: &[f64],
    config: &EstimatorConfig,
    rng: &mut R,
) -> EngineResult<RiskStatistics> {
    let moments = SampleMoments::from_sample(returns)?;
    if moments.is_degenerate() {
        return Err(EngineError::degenerate_series(format!(
            "zero variance across {} observations",
            moments.len()
        )));
    }

    let (mean, std) = (moments.mean(), moments.std_dev());
    let skew = moments.skewness()?;
    let kurt = moments.excess_kurtosis()?;

    let stats = RiskStatistics {
        normal_95: normal_var(mean, std, CONFIDENCE_95)?,
        normal_99: normal_var(mean, std, CONFIDENCE_99)?,
        hist_95: historical_var(returns, CONFIDENCE_95)?,
        hist_99: historical_var(returns, CONFIDENCE_99)?,
        mc_95: monte_carlo_var(mean, std, CONFIDENCE_95, config.monte_carlo_paths, rng)?,
        mc_99: monte_carlo_var(mean, std, CONFIDENCE_99, config.monte_carlo_paths, rng)?,
        cf_95: cornish_fisher_var(mean, std, skew, kurt, CONFIDENCE_95)?,
        cf_99: cornish_fisher_var(mean, std, skew, kurt, CONFIDENCE_99)?,
        expected_return: annualized_return(mean, config.trading_days),
    };

    Ok(stats.map(|x| round_to(x, config.decimals)))
}

/// Annualizes a mean daily return: `(1 + μ)^days − 1`.
#[must_use]
pub fn annualized_return(mean_daily: f64, trading_days: u32) -> f64 {
    (1.0 + mean_daily).powi(trading_days as i32) - 1.0
}
