//! Per-entity risk statistics record.

use serde::{Deserialize, Serialize};

/// The full set of risk/return figures for one entity (a security or the
/// combined portfolio).
///
/// All VaR figures are one-day log-return quantiles: negative values denote
/// losses, so `normal_95 = -0.021` reads "with 95% confidence, the one-day
/// loss will not exceed 2.1%". `expected_return` is annualized over 252
/// trading days.
///
/// Serde field names match the wire shape consumed by downstream renderers
/// (`Normal95`, `Hist95`, ... `ExpReturn`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskStatistics {
    /// Parametric (normal) VaR at 95% confidence.
    #[serde(rename = "Normal95")]
    pub normal_95: f64,
    /// Parametric (normal) VaR at 99% confidence.
    #[serde(rename = "Normal99")]
    pub normal_99: f64,
    /// Historical-simulation VaR at 95% confidence.
    #[serde(rename = "Hist95")]
    pub hist_95: f64,
    /// Historical-simulation VaR at 99% confidence.
    #[serde(rename = "Hist99")]
    pub hist_99: f64,
    /// Monte Carlo VaR at 95% confidence.
    #[serde(rename = "MC95")]
    pub mc_95: f64,
    /// Monte Carlo VaR at 99% confidence.
    #[serde(rename = "MC99")]
    pub mc_99: f64,
    /// Cornish-Fisher VaR at 95% confidence.
    #[serde(rename = "CF95")]
    pub cf_95: f64,
    /// Cornish-Fisher VaR at 99% confidence.
    #[serde(rename = "CF99")]
    pub cf_99: f64,
    /// Expected annual return, e.g. 0.08 for 8%.
    #[serde(rename = "ExpReturn")]
    pub expected_return: f64,
}

impl RiskStatistics {
    /// Returns the record with every figure mapped through `f`.
    ///
    /// Used by the estimator to apply the fixed-precision rounding step in
    /// one place.
    #[must_use]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            normal_95: f(self.normal_95),
            normal_99: f(self.normal_99),
            hist_95: f(self.hist_95),
            hist_99: f(self.hist_99),
            mc_95: f(self.mc_95),
            mc_99: f(self.mc_99),
            cf_95: f(self.cf_95),
            cf_99: f(self.cf_99),
            expected_return: f(self.expected_return),
        }
    }
}
