//! Trailing data window for price-history fetches.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A trailing calendar window ending at the request date.
///
/// Tail-statistic estimates need dozens to hundreds of observations; the
/// default one-year window yields roughly 252 trading days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lookback {
    /// Window length in calendar days.
    days: u32,
}

impl Lookback {
    /// One trailing calendar year (~252 trading days).
    pub const ONE_YEAR: Self = Self { days: 365 };

    /// Six trailing calendar months.
    pub const SIX_MONTHS: Self = Self { days: 182 };

    /// Creates a window of `days` calendar days.
    #[must_use]
    pub fn days(days: u32) -> Self {
        Self { days }
    }

    /// Window length in calendar days.
    #[must_use]
    pub fn as_days(&self) -> u32 {
        self.days
    }

    /// First date covered by the window ending at `end` (inclusive).
    #[must_use]
    pub fn start_from(&self, end: NaiveDate) -> NaiveDate {
        end - Duration::days(i64::from(self.days))
    }
}

impl Default for Lookback {
    fn default() -> Self {
        Self::ONE_YEAR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_one_year() {
        assert_eq!(Lookback::default(), Lookback::ONE_YEAR);
        assert_eq!(Lookback::ONE_YEAR.as_days(), 365);
    }

    #[test]
    fn test_start_from() {
        let end = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let start = Lookback::days(30).start_from(end);
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 5, 31).unwrap());
    }
}
