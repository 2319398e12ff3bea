//! # Tailrisk Data
//!
//! Market-data collaborator contracts for the Tailrisk VaR library, plus two
//! concrete sources.
//!
//! The risk engine is transport-agnostic: it consumes exactly two contracts,
//! defined here, and never touches HTTP clients, proxies or scripting
//! bridges directly:
//!
//! - [`TickerLookup`]: resolve a ticker to a display name and last price
//! - [`PriceHistorySource`]: fetch trailing adjusted closes for a set of
//!   tickers
//!
//! Implementations in this crate:
//!
//! - [`MemoryDataSource`]: fixture-backed, implements both traits; the
//!   workhorse for tests and offline demos
//! - [`CsvPriceSource`]: one `<SYMBOL>.csv` file per ticker in a directory,
//!   for end-of-day workflows
//!
//! Retries, caching and rate limiting belong to the implementations behind
//! these traits, never to the engine.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod csv_file;
pub mod error;
pub mod memory;
pub mod provider;

pub use csv_file::CsvPriceSource;
pub use error::{DataError, DataResult};
pub use memory::MemoryDataSource;
pub use provider::{PriceHistorySource, TickerLookup, TickerQuote};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::csv_file::CsvPriceSource;
    pub use crate::error::{DataError, DataResult};
    pub use crate::memory::MemoryDataSource;
    pub use crate::provider::{PriceHistorySource, TickerLookup, TickerQuote};
}
