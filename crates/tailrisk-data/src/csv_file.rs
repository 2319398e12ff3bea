//! CSV-backed end-of-day price source.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use tailrisk_core::types::{Lookback, PricePoint, PriceSeries, Symbol};

use crate::error::{DataError, DataResult};
use crate::provider::PriceHistorySource;

/// One row of a per-symbol price file.
///
/// An empty `adjusted_close` cell deserializes to `None` and becomes a gap
/// marker, mirroring how EOD vendors export missing closes.
#[derive(Debug, Deserialize)]
struct PriceRow {
    date: NaiveDate,
    adjusted_close: Option<f64>,
}

/// Reads adjusted closes from a directory of `<SYMBOL>.csv` files.
///
/// Each file carries a `date,adjusted_close` header and one row per trading
/// day. Files are read in full and clipped to the requested lookback window,
/// measured back from each file's last row.
#[derive(Debug, Clone)]
pub struct CsvPriceSource {
    dir: PathBuf,
}

impl CsvPriceSource {
    /// Creates a source rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, symbol: &Symbol) -> PathBuf {
        self.dir.join(format!("{symbol}.csv"))
    }

    fn read_series(path: &Path, symbol: &Symbol) -> DataResult<PriceSeries> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            let missing = matches!(
                e.kind(),
                csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound
            );
            if missing {
                DataError::not_found(symbol.as_str())
            } else {
                DataError::from(e)
            }
        })?;

        let mut points = Vec::new();
        for row in reader.deserialize::<PriceRow>() {
            let row = row.map_err(|e| {
                DataError::malformed(format!("{}: {e}", path.display()))
            })?;
            points.push(PricePoint {
                date: row.date,
                adjusted_close: row.adjusted_close,
            });
        }
        debug!(symbol = %symbol, rows = points.len(), "read price file");
        Ok(PriceSeries::from_points(points))
    }
}

#[async_trait]
impl PriceHistorySource for CsvPriceSource {
    async fn adjusted_close(
        &self,
        symbols: &[Symbol],
        lookback: Lookback,
    ) -> DataResult<HashMap<Symbol, PriceSeries>> {
        let mut out = HashMap::with_capacity(symbols.len());
        for symbol in symbols {
            let series =
                Self::read_series(&self.path_for(symbol), symbol)?.tail_window(lookback);
            if series.is_empty() {
                return Err(DataError::unavailable(format!(
                    "{symbol}: no rows in the requested window"
                )));
            }
            out.insert(symbol.clone(), series);
        }
        Ok(out)
    }
}
