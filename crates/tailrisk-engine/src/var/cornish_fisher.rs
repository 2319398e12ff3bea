//! Cornish-Fisher VaR.

use tailrisk_stats::quantile::standard_normal_quantile;

use super::tail_probability;
use crate::error::{EngineError, EngineResult};

/// Cornish-Fisher VaR: a normal quantile corrected for sample skewness and
/// excess kurtosis.
///
/// With `z = Φ⁻¹(1-c)`, skewness `s` and *excess* kurtosis `k`:
///
/// ```text
/// z_cf = z + (z²-1)·s/6 + (z³-3z)·k/24 − (2z³-5z)·s²/36
/// VaR  = μ + σ·z_cf
/// ```
///
/// The expansion reduces to the plain normal quantile when `s = 0` and
/// `k = 0`.
///
/// # Errors
///
/// `EngineError::DegenerateSeries` for `std <= 0`; rejects confidence levels
/// outside `(0, 1)`.
pub fn cornish_fisher_var(
    mean: f64,
    std: f64,
    skewness: f64,
    excess_kurtosis: f64,
    confidence: f64,
) -> EngineResult<f64> {
    let p = tail_probability(confidence)?;
    if !(std.is_finite() && std > 0.0) {
        return Err(EngineError::degenerate_series(format!(
            "Cornish-Fisher quantile requires a positive standard deviation, got {std}"
        )));
    }

    let z = standard_normal_quantile(p)?;
    let z2 = z * z;
    let z3 = z2 * z;
    let z_cf = z
        + (z2 - 1.0) * skewness / 6.0
        + (z3 - 3.0 * z) * excess_kurtosis / 24.0
        - (2.0 * z3 - 5.0 * z) * skewness * skewness / 36.0;

    Ok(mean + std * z_cf)
}
