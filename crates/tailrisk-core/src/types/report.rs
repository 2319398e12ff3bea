//! Ordered portfolio VaR report.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{RiskStatistics, Symbol};

/// Reserved entity name for the combined-portfolio entry.
pub const PORTFOLIO_ENTRY: &str = "Portfolio";

/// The result of a full portfolio VaR calculation: one [`RiskStatistics`]
/// record per requested security plus one for the synthesized portfolio.
///
/// Entries keep request order with the portfolio last. The order is
/// presentational (tables render securities before the total row); lookups
/// go through [`get`](Self::get).
///
/// Serializes as a JSON object keyed by ticker, mirroring the original
/// backend response:
///
/// ```json
/// { "AAPL": { "Normal95": -0.0213, ... }, "MSFT": { ... }, "Portfolio": { ... } }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioVarReport {
    entries: Vec<(String, RiskStatistics)>,
}

impl PortfolioVarReport {
    /// Assembles a report from per-security records and the portfolio record.
    #[must_use]
    pub fn from_parts(
        securities: Vec<(Symbol, RiskStatistics)>,
        portfolio: RiskStatistics,
    ) -> Self {
        let mut entries: Vec<(String, RiskStatistics)> = securities
            .into_iter()
            .map(|(symbol, stats)| (symbol.into_string(), stats))
            .collect();
        entries.push((PORTFOLIO_ENTRY.to_string(), portfolio));
        Self { entries }
    }

    /// Looks up the record for an entity name (ticker or `"Portfolio"`).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RiskStatistics> {
        self.entries
            .iter()
            .find(|(entity, _)| entity == name)
            .map(|(_, stats)| stats)
    }

    /// Returns the combined-portfolio record.
    ///
    /// Present by construction for reports built through
    /// [`from_parts`](Self::from_parts).
    #[must_use]
    pub fn portfolio(&self) -> Option<&RiskStatistics> {
        self.get(PORTFOLIO_ENTRY)
    }

    /// Iterates entries in presentation order (securities, then portfolio).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RiskStatistics)> {
        self.entries
            .iter()
            .map(|(entity, stats)| (entity.as_str(), stats))
    }

    /// Number of entries, portfolio included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the report holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for PortfolioVarReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (entity, stats) in &self.entries {
            map.serialize_entry(entity, stats)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PortfolioVarReport {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ReportVisitor;

        impl<'de> Visitor<'de> for ReportVisitor {
            type Value = PortfolioVarReport;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of entity name to risk statistics")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((entity, stats)) =
                    access.next_entry::<String, RiskStatistics>()?
                {
                    entries.push((entity, stats));
                }
                Ok(PortfolioVarReport { entries })
            }
        }

        deserializer.deserialize_map(ReportVisitor)
    }
}
