//! Portfolio return aggregation.
//!
//! Combines per-security aligned return series into the single weighted
//! portfolio series. The combined series then flows through the same
//! per-series estimator as any individual security.

use crate::error::{EngineError, EngineResult};
use crate::returns::AlignedReturns;

/// Converts percentage weights to fractions (`60.0` -> `0.6`).
#[must_use]
pub fn to_fractions(weights_pct: &[f64]) -> Vec<f64> {
    weights_pct.iter().map(|w| w / 100.0).collect()
}

/// Computes the portfolio return series as the per-date weighted sum
/// `r_p[t] = Σ_i w_i · r_i[t]` over the aligned table.
///
/// `fractions` must be in column order of `aligned` and already fractional.
///
/// # Errors
///
/// `EngineError::InvalidWeight` if the fraction count differs from the
/// number of columns.
pub fn combine_returns(aligned: &AlignedReturns, fractions: &[f64]) -> EngineResult<Vec<f64>> {
    let columns: Vec<&[f64]> = aligned.iter().map(|(_, returns)| returns).collect();
    if columns.len() != fractions.len() {
        return Err(EngineError::invalid_weight(format!(
            "{} weights for {} securities",
            fractions.len(),
            columns.len()
        )));
    }

    let combined = (0..aligned.len())
        .map(|t| {
            columns
                .iter()
                .zip(fractions)
                .map(|(series, w)| w * series[t])
                .sum()
        })
        .collect();
    Ok(combined)
}
