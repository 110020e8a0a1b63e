//! 52-week high/low range.

use dashboard_core::PriceSeries;
use serde::{Deserialize, Serialize};

use crate::TRADING_DAYS_PER_YEAR;

/// Extremes over the most recent trading year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Week52Range {
    /// Highest high in the window
    pub high: f64,
    /// Lowest low in the window
    pub low: f64,
    /// Number of bars the window covered
    pub sessions: usize,
}

impl Week52Range {
    /// Distance between the extremes.
    pub fn spread(&self) -> f64 {
        self.high - self.low
    }

    /// Where `price` sits inside the range, 0.0 at the low and 1.0 at the high.
    pub fn position_of(&self, price: f64) -> Option<f64> {
        let spread = self.spread();
        if spread <= 0.0 {
            None
        } else {
            Some((price - self.low) / spread)
        }
    }
}

/// Max high and min low over the last `min(252, len)` bars.
pub fn week52_range(series: &PriceSeries) -> Week52Range {
    let window = series.tail(TRADING_DAYS_PER_YEAR);

    let (high, low) = window
        .iter()
        .fold((f64::NEG_INFINITY, f64::INFINITY), |(hi, lo), b| {
            (hi.max(b.high), lo.min(b.low))
        });

    Week52Range {
        high,
        low,
        sessions: window.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{linear_series, series_from_closes};
    use chrono::{Days, NaiveDate};
    use dashboard_core::PriceBar;

    #[test]
    fn test_window_is_last_252_bars() {
        // closes 100..=399, band of 0.5 around each close
        let series = linear_series(300, 100.0);
        let range = week52_range(&series);

        assert_eq!(range.sessions, 252);
        assert_eq!(range.high, 399.5);
        // first bar in the window is index 48
        assert_eq!(range.low, 147.5);
    }

    #[test]
    fn test_short_series_uses_everything() {
        let series = series_from_closes(&[10.0, 30.0, 20.0]);
        let range = week52_range(&series);

        assert_eq!(range.sessions, 3);
        assert_eq!(range.high, 30.5);
        assert_eq!(range.low, 9.5);
    }

    #[test]
    fn test_flat_market() {
        let start = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let bars = (0..20)
            .map(|i| {
                let date = start.checked_add_days(Days::new(i)).unwrap();
                PriceBar::new(date, 75.25, 75.25, 75.25, 75.25, 500)
            })
            .collect();
        let series = PriceSeries::new("FLAT", bars).unwrap();
        let range = week52_range(&series);

        assert_eq!(range.high, 75.25);
        assert_eq!(range.low, 75.25);
        assert_eq!(range.spread(), 0.0);
        assert!(range.position_of(75.25).is_none());
    }

    #[test]
    fn test_range_bounded_by_full_series() {
        let closes: Vec<f64> = (0..600)
            .map(|i| 200.0 + (i as f64 * 0.05).sin() * 50.0 + (i as f64 * 0.013).cos() * 20.0)
            .collect();
        let series = series_from_closes(&closes);
        let range = week52_range(&series);

        let all_high = series.highs().into_iter().fold(f64::NEG_INFINITY, f64::max);
        let all_low = series.lows().into_iter().fold(f64::INFINITY, f64::min);

        assert!(range.high >= range.low);
        assert!(range.high <= all_high && range.high >= all_low);
        assert!(range.low >= all_low && range.low <= all_high);
    }

    #[test]
    fn test_idempotent_and_position() {
        let series = linear_series(50, 10.0);
        let first = week52_range(&series);
        assert_eq!(first, week52_range(&series));

        let mid = first.position_of((first.high + first.low) / 2.0).unwrap();
        assert!((mid - 0.5).abs() < 1e-12);
    }
}
