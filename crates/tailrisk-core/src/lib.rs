//! # Tailrisk Core
//!
//! Core domain types for the Tailrisk portfolio Value-at-Risk library.
//!
//! This crate provides the foundational building blocks used throughout
//! Tailrisk:
//!
//! - **Types**: `Symbol`, `PriceSeries`, `RiskStatistics`, `PortfolioVarReport`
//! - **Request bounds**: maximum portfolio size, trailing data windows
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing raw strings with normalized tickers
//! - **Immutable Results**: statistics records are created once per request and
//!   never mutated afterwards
//! - **Explicit Over Implicit**: no process-global state; everything travels as
//!   request parameters
//!
//! ## Example
//!
//! ```rust
//! use tailrisk_core::types::{PricePoint, PriceSeries, Symbol};
//! use chrono::NaiveDate;
//!
//! let symbol = Symbol::new("aapl")?;
//! assert_eq!(symbol.as_str(), "AAPL");
//!
//! let series = PriceSeries::from_points(vec![
//!     PricePoint::observed(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(), 242.70),
//!     PricePoint::gap(NaiveDate::from_ymd_opt(2025, 1, 3).unwrap()),
//! ]);
//! assert_eq!(series.len(), 2);
//! # Ok::<(), tailrisk_core::CoreError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use types::{
    Lookback, PortfolioVarReport, PricePoint, PriceSeries, RiskStatistics, Symbol,
    MAX_POSITIONS, PORTFOLIO_ENTRY,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        Lookback, PortfolioVarReport, PricePoint, PriceSeries, RiskStatistics, Symbol,
        MAX_POSITIONS, PORTFOLIO_ENTRY,
    };
}
