//! # Tailrisk Engine
//!
//! The portfolio risk-statistics engine: given historical daily prices for a
//! small basket of securities and user-assigned percentage weights, compute
//! per-security and aggregate-portfolio Value-at-Risk under four
//! methodologies at 95% and 99% confidence, plus annualized expected return.
//!
//! The pipeline is one-directional and pure between the collaborator calls:
//!
//! ```text
//! raw prices -> aligned log returns -> (per-security ∥ portfolio) stats -> report
//! ```
//!
//! - [`returns`]: inner-join price series on trading dates and take log
//!   returns
//! - [`var`]: the four estimators (normal, historical, Monte Carlo,
//!   Cornish-Fisher) and the combined per-series record
//! - [`portfolio`]: fractional-weight combination of aligned return series
//! - [`calculator`]: request validation, data fetch with timeout, fan-out,
//!   report assembly
//!
//! ## Example
//!
//! ```rust,ignore
//! use tailrisk_engine::prelude::*;
//!
//! let calculator = VarCalculator::new(source);
//! let report = calculator
//!     .calculate_full_portfolio(&["AAPL", "MSFT"], &[60.0, 40.0])
//!     .await?;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod calculator;
pub mod error;
pub mod portfolio;
pub mod returns;
pub mod var;

pub use calculator::{CalculatorConfig, VarCalculator};
pub use error::{EngineError, EngineResult};
pub use returns::{align_log_returns, AlignedReturns};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::calculator::{CalculatorConfig, VarCalculator};
    pub use crate::error::{EngineError, EngineResult};
    pub use crate::portfolio::{combine_returns, to_fractions};
    pub use crate::returns::{align_log_returns, AlignedReturns};
    pub use crate::var::{
        cornish_fisher_var, estimate_risk_statistics, estimate_risk_statistics_with,
        historical_var, monte_carlo_var, normal_var, EstimatorConfig, CONFIDENCE_95,
        CONFIDENCE_99,
    };
    pub use tailrisk_core::prelude::*;
}
