//! Empirical and parametric quantiles.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::{StatsError, StatsResult};

/// Empirical percentile of a sample with linear interpolation between order
/// statistics.
///
/// `pct` is a rank in `[0, 100]`. The interpolation follows the numpy
/// `percentile` reference behavior: rank `pct/100 × (n−1)` into the sorted
/// sample, interpolating linearly between the two bracketing order
/// statistics.
///
/// # Errors
///
/// - `StatsError::InsufficientData` for an empty sample
/// - `StatsError::InvalidInput` if `pct` is outside `[0, 100]` or any
///   observation is not finite
pub fn percentile(values: &[f64], pct: f64) -> StatsResult<f64> {
    if values.is_empty() {
        return Err(StatsError::insufficient_data(
            "percentile of an empty sample",
        ));
    }
    if !(0.0..=100.0).contains(&pct) {
        return Err(StatsError::invalid_input(format!(
            "percentile rank must be in [0, 100], got {pct}"
        )));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(StatsError::invalid_input(
            "non-finite observation in sample",
        ));
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = pct / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return Ok(sorted[lower]);
    }

    let frac = rank - lower as f64;
    Ok(sorted[lower] + frac * (sorted[upper] - sorted[lower]))
}

/// Quantile of the Normal(mean, std²) distribution at probability `p`.
///
/// # Errors
///
/// - `StatsError::DegenerateDistribution` if `std` is not strictly positive
/// - `StatsError::InvalidInput` if `p` is outside `(0, 1)`
pub fn normal_quantile(mean: f64, std: f64, p: f64) -> StatsResult<f64> {
    if !(std.is_finite() && std > 0.0) {
        return Err(StatsError::degenerate(format!(
            "normal quantile requires a positive standard deviation, got {std}"
        )));
    }
    if !(p > 0.0 && p < 1.0) {
        return Err(StatsError::invalid_input(format!(
            "quantile probability must be in (0, 1), got {p}"
        )));
    }

    let dist = Normal::new(mean, std)
        .map_err(|e| StatsError::invalid_input(format!("normal distribution: {e}")))?;
    Ok(dist.inverse_cdf(p))
}

/// Quantile of the standard normal distribution at probability `p`.
///
/// # Errors
///
/// Returns `StatsError::InvalidInput` if `p` is outside `(0, 1)`.
pub fn standard_normal_quantile(p: f64) -> StatsResult<f64> {
    normal_quantile(0.0, 1.0, p)
}
