//! Monte Carlo VaR.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use tailrisk_stats::quantile::percentile;

use super::tail_probability;
use crate::error::{EngineError, EngineResult};

/// Monte Carlo VaR: draw `paths` independent returns from Normal(mean, std²)
/// and take the empirical `(1-c)·100`-th percentile of the simulated sample.
///
/// Sampling noise is intentional — two calls with different RNG states give
/// slightly different figures. Callers needing reproducibility seed the RNG;
/// see [`derive_stream_seed`].
///
/// # Errors
///
/// `EngineError::DegenerateSeries` for `std <= 0`, `Calculation` for a zero
/// path count or an out-of-range confidence level.
pub fn monte_carlo_var<R: Rng + ?Sized>(
    mean: f64,
    std: f64,
    confidence: f64,
    paths: usize,
    rng: &mut R,
) -> EngineResult<f64> {
    let p = tail_probability(confidence)?;
    if paths == 0 {
        return Err(EngineError::Calculation {
            reason: "Monte Carlo requires at least one path".to_string(),
        });
    }
    if !(std.is_finite() && std > 0.0) {
        return Err(EngineError::degenerate_series(format!(
            "Monte Carlo draws require a positive standard deviation, got {std}"
        )));
    }

    let dist = Normal::new(mean, std).map_err(|e| EngineError::Calculation {
        reason: format!("normal sampler: {e}"),
    })?;
    let sims: Vec<f64> = (0..paths).map(|_| dist.sample(rng)).collect();

    Ok(percentile(&sims, p * 100.0)?)
}

/// Derives a per-series RNG seed from a base seed and the series content.
///
/// Identical return series map to identical seeds, so a single-security
/// portfolio at weight 100 reproduces that security's Monte Carlo figures
/// exactly; distinct series get independent draw streams.
#[must_use]
pub fn derive_stream_seed(base: u64, returns: &[f64]) -> u64 {
    let mut x = base ^ 0x9e37_79b9_7f4a_7c15;
    for r in returns {
        x ^= r.to_bits();
        x = x.wrapping_mul(0x517c_c1b7_2722_0a95);
        x ^= x >> 32;
    }
    x
}
