//! # Tailrisk Stats
//!
//! Sample-statistics toolkit for the Tailrisk VaR library.
//!
//! This crate provides:
//!
//! - **Moments**: mean, unbiased sample standard deviation, skewness,
//!   excess kurtosis ([`SampleMoments`])
//! - **Quantiles**: empirical percentile with linear interpolation between
//!   order statistics, and the normal distribution quantile
//! - **Precision**: fixed-decimal rounding for surfaced figures
//!
//! ## Design Philosophy
//!
//! - **Numerical Stability**: central moments are computed against the mean,
//!   not via raw power sums
//! - **Explicit estimator choice**: the standard deviation uses the unbiased
//!   n−1 estimator; skewness and kurtosis use population moment ratios
//!   (g1, g2), matching common statistics libraries

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod error;
pub mod moments;
pub mod precision;
pub mod quantile;

pub use error::{StatsError, StatsResult};
pub use moments::SampleMoments;
pub use precision::round_to;
pub use quantile::{normal_quantile, percentile};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{StatsError, StatsResult};
    pub use crate::moments::SampleMoments;
    pub use crate::precision::round_to;
    pub use crate::quantile::{normal_quantile, percentile};
}
