//! Return series construction.
//!
//! Converts raw adjusted-close series for N securities into log-return
//! series aligned on their common trading dates. A date survives the join
//! only if every security has a usable close there; gap markers and absent
//! dates both knock a date out.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use tailrisk_core::types::{PriceSeries, Symbol};

use crate::error::{EngineError, EngineResult};

/// Log-return series for a set of securities, aligned on common dates.
///
/// Column order follows the request order of the input. Each column has one
/// return per entry of [`dates`](Self::dates): the return dated `d` is
/// `ln(p_d / p_prev)` where `prev` is the preceding aligned date.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedReturns {
    dates: Vec<NaiveDate>,
    columns: Vec<(Symbol, Vec<f64>)>,
}

impl AlignedReturns {
    /// Number of return observations per security.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the table holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The aligned return dates, ascending.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// The symbols in column order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.columns.iter().map(|(symbol, _)| symbol)
    }

    /// The return series for one security.
    #[must_use]
    pub fn series(&self, symbol: &Symbol) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, returns)| returns.as_slice())
    }

    /// Iterates `(symbol, returns)` columns in request order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &[f64])> {
        self.columns
            .iter()
            .map(|(symbol, returns)| (symbol, returns.as_slice()))
    }
}

/// Builds aligned log-return series from raw price series.
///
/// Inner-joins all series by date, then takes the first difference of the
/// natural log per column: `r[t] = ln(p[t] / p[t-1])`. The output is one
/// observation shorter than the aligned price table.
///
/// # Errors
///
/// `EngineError::InsufficientData` if the input set is empty or fewer than
/// 2 aligned price observations remain after the join.
pub fn align_log_returns(series: &[(Symbol, PriceSeries)]) -> EngineResult<AlignedReturns> {
    if series.is_empty() {
        return Err(EngineError::insufficient_data(
            "no securities to align",
        ));
    }

    let tables: Vec<(&Symbol, BTreeMap<NaiveDate, f64>)> = series
        .iter()
        .map(|(symbol, prices)| (symbol, prices.usable_observations().collect()))
        .collect();

    // Intersection of trading dates across all securities.
    let mut aligned_dates: Vec<NaiveDate> = tables[0]
        .1
        .keys()
        .filter(|date| tables[1..].iter().all(|(_, t)| t.contains_key(*date)))
        .copied()
        .collect();

    if aligned_dates.len() < 2 {
        return Err(EngineError::insufficient_data(format!(
            "{} aligned price observations across {} securities, need at least 2",
            aligned_dates.len(),
            tables.len()
        )));
    }

    let columns = tables
        .iter()
        .map(|(symbol, table)| {
            let returns = aligned_dates
                .windows(2)
                .map(|pair| (table[&pair[1]] / table[&pair[0]]).ln())
                .collect();
            ((*symbol).clone(), returns)
        })
        .collect();

    // Return dates drop the first aligned price date.
    aligned_dates.remove(0);

    debug!(
        securities = series.len(),
        observations = aligned_dates.len(),
        "aligned return table built"
    );

    Ok(AlignedReturns {
        dates: aligned_dates,
        columns,
    })
}
