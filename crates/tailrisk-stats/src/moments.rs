//! Sample moments of a return series.

use crate::error::{StatsError, StatsResult};

/// Central moments of a sample, computed in one pass over the data.
///
/// Estimator choices (applied consistently throughout the library):
///
/// - `std_dev` uses the unbiased sample estimator (divisor n−1)
/// - `skewness` is the population moment ratio g1 = m3 / m2^(3/2)
/// - `excess_kurtosis` is g2 = m4 / m2² − 3
///
/// This is the combination produced by pandas `std()` together with scipy
/// `skew()` / `kurtosis(fisher=True)` at their defaults, so figures line up
/// with the usual Python risk stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleMoments {
    n: usize,
    mean: f64,
    m2: f64,
    m3: f64,
    m4: f64,
}

impl SampleMoments {
    /// Computes moments for a sample.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::InsufficientData` for samples with fewer than 2
    /// observations, and `StatsError::InvalidInput` if any observation is
    /// not finite.
    pub fn from_sample(values: &[f64]) -> StatsResult<Self> {
        if values.len() < 2 {
            return Err(StatsError::insufficient_data(format!(
                "need at least 2 observations, got {}",
                values.len()
            )));
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(StatsError::invalid_input(format!(
                "non-finite observation in sample: {bad}"
            )));
        }

        let n = values.len();
        let mean = values.iter().sum::<f64>() / n as f64;

        let (mut m2, mut m3, mut m4) = (0.0, 0.0, 0.0);
        for v in values {
            let d = v - mean;
            let d2 = d * d;
            m2 += d2;
            m3 += d2 * d;
            m4 += d2 * d2;
        }
        m2 /= n as f64;
        m3 /= n as f64;
        m4 /= n as f64;

        Ok(Self { n, mean, m2, m3, m4 })
    }

    /// Sample size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Returns true if the sample is empty (never the case after
    /// construction, kept for API symmetry).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Sample mean.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Unbiased sample standard deviation (divisor n−1).
    #[must_use]
    pub fn std_dev(&self) -> f64 {
        (self.m2 * self.n as f64 / (self.n as f64 - 1.0)).sqrt()
    }

    /// Returns true if every observation equals the mean.
    ///
    /// Parametric quantiles are undefined for such a sample.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.m2 == 0.0
    }

    /// Sample skewness g1.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::DegenerateDistribution` for a zero-variance sample.
    pub fn skewness(&self) -> StatsResult<f64> {
        if self.is_degenerate() {
            return Err(StatsError::degenerate(
                "skewness undefined for zero-variance sample",
            ));
        }
        Ok(self.m3 / self.m2.powf(1.5))
    }

    /// Sample excess kurtosis g2 (kurtosis − 3).
    ///
    /// # Errors
    ///
    /// Returns `StatsError::DegenerateDistribution` for a zero-variance sample.
    pub fn excess_kurtosis(&self) -> StatsResult<f64> {
        if self.is_degenerate() {
            return Err(StatsError::degenerate(
                "kurtosis undefined for zero-variance sample",
            ));
        }
        Ok(self.m4 / (self.m2 * self.m2) - 3.0)
    }
}
