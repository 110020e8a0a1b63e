//! Daily OHLCV (Open, High, Low, Close, Volume) data types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// One trading day's record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Trading session date
    pub date: NaiveDate,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Shares traded
    pub volume: u64,
}

impl PriceBar {
    /// Create a new bar.
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Check if the bar is bullish (close > open).
    #[inline]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Check if the bar is bearish (close < open).
    #[inline]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// Check prices are positive and finite and that `low <= open, close <= high`.
    pub fn validate(&self) -> Result<(), DataError> {
        let invalid = |reason: String| DataError::InvalidBar {
            date: self.date,
            reason,
        };

        for (name, value) in [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(format!("{} must be a positive price, got {}", name, value)));
            }
        }

        if self.low > self.high {
            return Err(invalid(format!("low {} above high {}", self.low, self.high)));
        }
        if self.open < self.low || self.open > self.high {
            return Err(invalid(format!(
                "open {} outside [{}, {}]",
                self.open, self.low, self.high
            )));
        }
        if self.close < self.low || self.close > self.high {
            return Err(invalid(format!(
                "close {} outside [{}, {}]",
                self.close, self.low, self.high
            )));
        }

        Ok(())
    }
}

/// Immutable, date-ascending sequence of daily bars for one symbol.
///
/// A series always holds at least one bar and never repeats a date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    symbol: String,
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Build a series, sorting bars ascending by date.
    ///
    /// Fails on an empty input, a repeated date, or a bar that breaks the
    /// OHLC invariants.
    pub fn new(symbol: impl Into<String>, mut bars: Vec<PriceBar>) -> Result<Self, DataError> {
        if bars.is_empty() {
            return Err(DataError::NoDataAvailable);
        }

        bars.sort_by_key(|b| b.date);

        if let Some(pair) = bars.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(DataError::DuplicateDate(pair[1].date));
        }

        for bar in &bars {
            bar.validate()?;
        }

        Ok(Self {
            symbol: symbol.into(),
            bars,
        })
    }

    /// Symbol the series was fetched for.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Get the number of bars.
    #[inline]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Check if the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Get all bars as a slice, oldest first.
    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// Oldest bar.
    pub fn first(&self) -> &PriceBar {
        &self.bars[0]
    }

    /// Most recent bar.
    pub fn last(&self) -> &PriceBar {
        &self.bars[self.bars.len() - 1]
    }

    /// Get a bar by index (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&PriceBar> {
        self.bars.get(index)
    }

    /// Get the last `n` bars, or the whole series when it is shorter.
    pub fn tail(&self, n: usize) -> &[PriceBar] {
        let start = self.bars.len().saturating_sub(n);
        &self.bars[start..]
    }

    /// Extract close prices as a vector.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Extract high prices as a vector.
    pub fn highs(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.high).collect()
    }

    /// Extract low prices as a vector.
    pub fn lows(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.low).collect()
    }

    /// Get an iterator over the bars.
    pub fn iter(&self) -> impl Iterator<Item = &PriceBar> {
        self.bars.iter()
    }
}
