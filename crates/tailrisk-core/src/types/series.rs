//! Adjusted-close price series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated adjusted-close observation.
///
/// A point with `adjusted_close == None` is a gap marker: the venue traded
/// that day but the provider had no usable close (halts, late corrections,
/// partial multi-symbol downloads). Gaps participate in alignment exactly
/// like absent dates — they knock the date out of the joined table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading date of the observation.
    pub date: NaiveDate,
    /// Adjusted close, or `None` for a gap.
    pub adjusted_close: Option<f64>,
}

impl PricePoint {
    /// Creates an observed price point.
    #[must_use]
    pub fn observed(date: NaiveDate, adjusted_close: f64) -> Self {
        Self {
            date,
            adjusted_close: Some(adjusted_close),
        }
    }

    /// Creates a gap marker for a date with no usable close.
    #[must_use]
    pub fn gap(date: NaiveDate) -> Self {
        Self {
            date,
            adjusted_close: None,
        }
    }

    /// Returns the close if it is present, finite and strictly positive.
    ///
    /// Non-positive and non-finite closes are treated as gaps; a zero or
    /// negative price would make the log return undefined.
    #[must_use]
    pub fn usable_close(&self) -> Option<f64> {
        self.adjusted_close
            .filter(|p| p.is_finite() && *p > 0.0)
    }
}

/// An ordered-by-date series of adjusted closes for one security.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Builds a series from points, sorting by date.
    ///
    /// Providers usually return data already ordered; sorting here makes the
    /// invariant hold regardless of the source.
    #[must_use]
    pub fn from_points(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        Self { points }
    }

    /// Builds a series from `(date, close)` pairs with no gaps.
    #[must_use]
    pub fn from_closes(closes: Vec<(NaiveDate, f64)>) -> Self {
        Self::from_points(
            closes
                .into_iter()
                .map(|(date, close)| PricePoint::observed(date, close))
                .collect(),
        )
    }

    /// Number of points in the series, gaps included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series has no points at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over all points in date order.
    pub fn iter(&self) -> impl Iterator<Item = &PricePoint> {
        self.points.iter()
    }

    /// Iterates over `(date, close)` pairs that are usable for return
    /// calculations (present, finite, positive).
    pub fn usable_observations(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.points
            .iter()
            .filter_map(|p| p.usable_close().map(|close| (p.date, close)))
    }

    /// Returns the trailing portion of the series covered by `lookback`,
    /// measured back from the last point's date.
    ///
    /// An empty series stays empty.
    #[must_use]
    pub fn tail_window(&self, lookback: super::Lookback) -> Self {
        let Some(end) = self.points.last().map(|p| p.date) else {
            return Self::default();
        };
        let start = lookback.start_from(end);
        Self {
            points: self
                .points
                .iter()
                .copied()
                .filter(|p| p.date >= start)
                .collect(),
        }
    }
}

impl FromIterator<PricePoint> for PriceSeries {
    fn from_iter<T: IntoIterator<Item = PricePoint>>(iter: T) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}
