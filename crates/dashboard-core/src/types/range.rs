//! Provider lookback ranges for chart requests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DataError;

/// Lookback window accepted by the chart endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ChartRange {
    /// All available history
    #[serde(rename = "max")]
    Max,
    /// Five years
    #[serde(rename = "5y")]
    #[default]
    FiveYears,
    /// Two years
    #[serde(rename = "2y")]
    TwoYears,
    /// One year
    #[serde(rename = "1y")]
    OneYear,
    /// Year to date
    #[serde(rename = "ytd")]
    YearToDate,
    /// Six months
    #[serde(rename = "6m")]
    SixMonths,
    /// Three months
    #[serde(rename = "3m")]
    ThreeMonths,
    /// One month
    #[serde(rename = "1m")]
    OneMonth,
    /// Five trading days
    #[serde(rename = "5d")]
    FiveDays,
}

impl ChartRange {
    /// Provider code used in the request path.
    pub fn code(&self) -> &'static str {
        match self {
            ChartRange::Max => "max",
            ChartRange::FiveYears => "5y",
            ChartRange::TwoYears => "2y",
            ChartRange::OneYear => "1y",
            ChartRange::YearToDate => "ytd",
            ChartRange::SixMonths => "6m",
            ChartRange::ThreeMonths => "3m",
            ChartRange::OneMonth => "1m",
            ChartRange::FiveDays => "5d",
        }
    }

    /// Get all available ranges.
    pub fn all() -> &'static [ChartRange] {
        &[
            ChartRange::Max,
            ChartRange::FiveYears,
            ChartRange::TwoYears,
            ChartRange::OneYear,
            ChartRange::YearToDate,
            ChartRange::SixMonths,
            ChartRange::ThreeMonths,
            ChartRange::OneMonth,
            ChartRange::FiveDays,
        ]
    }
}

impl fmt::Display for ChartRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ChartRange {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ChartRange::all()
            .iter()
            .copied()
            .find(|r| r.code() == wanted)
            .ok_or_else(|| DataError::InvalidRange(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_parse() {
        assert_eq!(ChartRange::from_str("5y").unwrap(), ChartRange::FiveYears);
        assert_eq!(ChartRange::from_str("YTD").unwrap(), ChartRange::YearToDate);
        assert_eq!(ChartRange::from_str(" max ").unwrap(), ChartRange::Max);
        assert!(ChartRange::from_str("7y").is_err());
    }

    #[test]
    fn test_range_display() {
        assert_eq!(ChartRange::default().to_string(), "5y");
        assert_eq!(ChartRange::SixMonths.to_string(), "6m");
    }

    #[test]
    fn test_range_serde_uses_codes() {
        let json = serde_json::to_string(&ChartRange::OneMonth).unwrap();
        assert_eq!(json, "\"1m\"");
        let back: ChartRange = serde_json::from_str("\"2y\"").unwrap();
        assert_eq!(back, ChartRange::TwoYears);
    }
}
