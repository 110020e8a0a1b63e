//! Year-over-year price change.

use chrono::NaiveDate;
use dashboard_core::PriceSeries;
use serde::{Deserialize, Serialize};

use crate::TRADING_DAYS_PER_YEAR;

/// Relative change against a baseline, undefined when the baseline is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum PercentChange {
    Defined(f64),
    Undefined,
}

impl PercentChange {
    /// The percentage, if defined.
    pub fn value(&self) -> Option<f64> {
        match self {
            PercentChange::Defined(v) => Some(*v),
            PercentChange::Undefined => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, PercentChange::Undefined)
    }
}

/// Latest close compared with the close one trading year earlier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearOverYearChange {
    /// Close of the most recent bar
    pub latest: f64,
    /// Close of the baseline bar
    pub reference: f64,
    /// Date of the baseline bar
    pub reference_date: NaiveDate,
    /// `latest - reference`
    pub difference: f64,
    /// `difference / reference * 100`
    pub percent: PercentChange,
}

/// Index of the baseline bar for a series of `len` bars.
///
/// The bar 252 sessions before the last one when the history is long enough,
/// otherwise the oldest bar.
#[inline]
pub fn reference_index(len: usize) -> usize {
    if len > TRADING_DAYS_PER_YEAR {
        len - 1 - TRADING_DAYS_PER_YEAR
    } else {
        0
    }
}

/// Express `difference` as a percentage of `reference`.
pub fn percent_change(difference: f64, reference: f64) -> PercentChange {
    if reference == 0.0 {
        PercentChange::Undefined
    } else {
        PercentChange::Defined(difference / reference * 100.0)
    }
}

/// Close of the most recent bar.
#[inline]
pub fn latest_close(series: &PriceSeries) -> f64 {
    series.last().close
}

/// Compute the year-over-year change for a series.
pub fn year_over_year_change(series: &PriceSeries) -> YearOverYearChange {
    let latest = latest_close(series);
    let baseline = series.bars()[reference_index(series.len())];
    let difference = latest - baseline.close;

    YearOverYearChange {
        latest,
        reference: baseline.close,
        reference_date: baseline.date,
        difference,
        percent: percent_change(difference, baseline.close),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{linear_series, series_from_closes};

    #[test]
    fn test_linear_300_bars() {
        // closes 100.00 ..= 399.00
        let series = linear_series(300, 100.0);
        let change = year_over_year_change(&series);

        assert_eq!(change.latest, 399.0);
        assert_eq!(change.reference, 147.0);
        assert_eq!(change.difference, 252.0);
        assert_eq!(change.reference_date, series.bars()[47].date);

        let pct = change.percent.value().unwrap();
        assert!((pct - 252.0 / 147.0 * 100.0).abs() < 1e-9);
        assert!((pct - 171.428_571).abs() < 1e-4);
    }

    #[test]
    fn test_short_history_uses_first_bar() {
        let series = series_from_closes(&[50.0, 51.0, 49.0, 52.0, 55.0, 53.0, 54.0, 56.0, 58.0, 60.0]);
        let change = year_over_year_change(&series);

        assert_eq!(change.reference, series.bars()[0].close);
        assert_eq!(change.difference, 10.0);
        assert!((change.percent.value().unwrap() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_reference_index_boundaries() {
        assert_eq!(reference_index(1), 0);
        assert_eq!(reference_index(252), 0);
        assert_eq!(reference_index(253), 0);
        assert_eq!(reference_index(254), 1);
        assert_eq!(reference_index(300), 47);
    }

    #[test]
    fn test_reference_is_252_sessions_back() {
        for len in [253usize, 254, 300, 504, 1260] {
            let series = linear_series(len, 10.0);
            let change = year_over_year_change(&series);
            let expected = series.bars()[len - 1 - TRADING_DAYS_PER_YEAR].close;
            assert_eq!(change.reference, expected, "len = {}", len);
            assert_eq!(change.difference, TRADING_DAYS_PER_YEAR as f64);
        }

        for len in [1usize, 2, 100, 251, 252] {
            let series = linear_series(len, 10.0);
            assert_eq!(year_over_year_change(&series).reference, 10.0, "len = {}", len);
        }
    }

    #[test]
    fn test_single_bar_has_zero_change() {
        let series = series_from_closes(&[42.0]);
        let change = year_over_year_change(&series);

        assert_eq!(change.difference, 0.0);
        assert_eq!(change.percent, PercentChange::Defined(0.0));
    }

    #[test]
    fn test_zero_baseline_is_undefined() {
        assert_eq!(percent_change(5.0, 0.0), PercentChange::Undefined);
        assert!(percent_change(5.0, 0.0).value().is_none());
        let down = percent_change(-5.0, 50.0).value().unwrap();
        assert!((down + 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_idempotent() {
        let series = linear_series(400, 20.0);
        assert_eq!(year_over_year_change(&series), year_over_year_change(&series));
    }

    #[test]
    fn test_percent_serializes_tagged() {
        let json = serde_json::to_string(&PercentChange::Undefined).unwrap();
        assert_eq!(json, r#"{"kind":"undefined"}"#);
        let json = serde_json::to_string(&PercentChange::Defined(2.5)).unwrap();
        assert_eq!(json, r#"{"kind":"defined","value":2.5}"#);
    }
}
