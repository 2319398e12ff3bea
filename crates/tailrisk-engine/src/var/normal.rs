//! Parametric (normal) VaR.

use tailrisk_stats::quantile::normal_quantile;

use super::tail_probability;
use crate::error::EngineResult;

/// Parametric VaR: the `(1-c)`-quantile of Normal(mean, std²).
///
/// # Arguments
///
/// * `mean` - sample mean of the daily log returns
/// * `std` - unbiased sample standard deviation
/// * `confidence` - confidence level, e.g. 0.95
///
/// # Errors
///
/// Propagates `DegenerateSeries` for `std <= 0` and rejects confidence
/// levels outside `(0, 1)`.
pub fn normal_var(mean: f64, std: f64, confidence: f64) -> EngineResult<f64> {
    let p = tail_probability(confidence)?;
    Ok(normal_quantile(mean, std, p)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::var::{CONFIDENCE_95, CONFIDENCE_99};
    use approx::assert_relative_eq;

    #[test]
    fn test_matches_closed_form() {
        // μ + σ·Φ⁻¹(0.05) with Φ⁻¹(0.05) ≈ -1.6448536
        let var = normal_var(0.0005, 0.012, CONFIDENCE_95).unwrap();
        assert_relative_eq!(var, 0.0005 + 0.012 * -1.6448536, epsilon = 1e-6);
    }

    #[test]
    fn test_99_is_deeper_in_the_tail() {
        let var95 = normal_var(0.0005, 0.012, CONFIDENCE_95).unwrap();
        let var99 = normal_var(0.0005, 0.012, CONFIDENCE_99).unwrap();
        assert!(var99 < var95);
    }

    #[test]
    fn test_degenerate_std() {
        assert!(matches!(
            normal_var(0.001, 0.0, CONFIDENCE_95),
            Err(EngineError::DegenerateSeries { .. })
        ));
    }
}
