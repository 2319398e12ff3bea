//! Domain types for portfolio risk analytics.
//!
//! This module provides type-safe representations of the engine's inputs
//! and outputs:
//!
//! - [`Symbol`]: Case-normalized ticker symbol
//! - [`PriceSeries`]: Dated adjusted-close observations with gap markers
//! - [`RiskStatistics`]: The eight VaR figures plus expected annual return
//! - [`PortfolioVarReport`]: Ordered entity-to-statistics mapping
//! - [`Lookback`]: Trailing data window for history fetches

mod lookback;
mod report;
mod series;
mod statistics;
mod symbol;

pub use lookback::Lookback;
pub use report::{PortfolioVarReport, PORTFOLIO_ENTRY};
pub use series::{PricePoint, PriceSeries};
pub use statistics::RiskStatistics;
pub use symbol::Symbol;

/// Maximum number of positions accepted in a single request.
///
/// Tail estimates for larger baskets are no harder to compute, but the
/// product this engine serves caps portfolios at five tickers.
pub const MAX_POSITIONS: usize = 5;
