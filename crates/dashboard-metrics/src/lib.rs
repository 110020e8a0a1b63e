//! Summary metrics derived from a daily price series.
//!
//! Everything here is a pure function of an immutable [`PriceSeries`]:
//! - Year-over-year price change against the bar one trading year back
//! - 52-week high/low over the most recent trading year
//! - A bundled [`MetricSummary`] with text and JSON rendering
//!
//! [`PriceSeries`]: dashboard_core::PriceSeries

pub mod change;
pub mod range;
pub mod summary;

pub use change::{
    latest_close, percent_change, reference_index, year_over_year_change, PercentChange,
    YearOverYearChange,
};
pub use range::{week52_range, Week52Range};
pub use summary::MetricSummary;

/// Sessions in one trading year.
pub const TRADING_DAYS_PER_YEAR: usize = 252;

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{Days, NaiveDate};
    use dashboard_core::{PriceBar, PriceSeries};

    /// Consecutive daily bars whose closes are given, with a one-point band.
    pub fn series_from_closes(closes: &[f64]) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let date = start.checked_add_days(Days::new(i as u64)).unwrap();
                PriceBar::new(date, c, c + 0.5, c - 0.5, c, 1_000 + i as u64)
            })
            .collect();
        PriceSeries::new("TEST", bars).unwrap()
    }

    /// Closes rising by 1.00 per bar starting at `start`.
    pub fn linear_series(len: usize, start: f64) -> PriceSeries {
        let closes: Vec<f64> = (0..len).map(|i| start + i as f64).collect();
        series_from_closes(&closes)
    }
}
