//! Value at Risk (VaR) estimation.
//!
//! All four methodologies express VaR as a one-day log-return quantile:
//! negative values denote losses. Each estimator is a pure function of the
//! return series (plus an RNG for Monte Carlo); the combined
//! [`estimate_risk_statistics`] entry evaluates all of them at 95% and 99%
//! confidence and rounds the figures once at the edge.

mod cornish_fisher;
mod estimator;
mod historical;
mod monte_carlo;
mod normal;

pub use cornish_fisher::cornish_fisher_var;
pub use estimator::{
    estimate_risk_statistics, estimate_risk_statistics_with, EstimatorConfig,
};
pub use historical::historical_var;
pub use monte_carlo::{derive_stream_seed, monte_carlo_var};
pub use normal::normal_var;

use crate::error::{EngineError, EngineResult};

/// 95% confidence level.
pub const CONFIDENCE_95: f64 = 0.95;

/// 99% confidence level.
pub const CONFIDENCE_99: f64 = 0.99;

/// Reference Monte Carlo sample size.
pub const DEFAULT_MONTE_CARLO_PATHS: usize = 10_000;

/// Validates a confidence level, returning the tail probability `1 - c`.
pub(crate) fn tail_probability(confidence: f64) -> EngineResult<f64> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(EngineError::Calculation {
            reason: format!("confidence level must be in (0, 1), got {confidence}"),
        });
    }
    Ok(1.0 - confidence)
}
