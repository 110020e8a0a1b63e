//! CSV reader for exported or third-party daily bar files.

use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use dashboard_core::{DataError, PriceBar, PriceSeries};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CSV record format.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "date", alias = "timestamp", alias = "Timestamp")]
    date: String,
    #[serde(alias = "Open", alias = "open")]
    open: f64,
    #[serde(alias = "High", alias = "high")]
    high: f64,
    #[serde(alias = "Low", alias = "low")]
    low: f64,
    #[serde(alias = "Close", alias = "close", default)]
    close: Option<f64>,
    #[serde(rename = "Adj Close", alias = "adj_close", default)]
    adj_close: Option<f64>,
    #[serde(alias = "Volume", alias = "volume", default)]
    volume: f64,
}

/// Reads a date-indexed OHLCV file into a [`PriceSeries`].
pub struct CsvSeriesReader {
    path: PathBuf,
}

impl CsvSeriesReader {
    /// Create a reader for an existing file.
    pub fn new(path: &Path) -> Result<Self, DataError> {
        if !path.is_file() {
            return Err(DataError::NoDataAvailable);
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Load every row as a bar of `symbol`.
    pub fn load(&self, symbol: &str) -> Result<PriceSeries, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| DataError::ParseError(e.to_string()))?;

        let mut bars = Vec::new();

        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| DataError::ParseError(e.to_string()))?;
            let date = parse_date(&record.date)?;
            let close = record.close.or(record.adj_close).ok_or_else(|| {
                DataError::ParseError(format!("Row {} has no close column", date))
            })?;

            if !record.volume.is_finite() || record.volume < 0.0 {
                return Err(DataError::InvalidBar {
                    date,
                    reason: format!("volume must be non-negative, got {}", record.volume),
                });
            }

            bars.push(PriceBar::new(
                date,
                record.open,
                record.high,
                record.low,
                close,
                record.volume.round() as u64,
            ));
        }

        debug!(path = %self.path.display(), rows = bars.len(), "Loaded CSV bars");
        PriceSeries::new(symbol, bars)
    }
}

/// Parse the common daily date formats, ignoring any time-of-day part.
fn parse_date(date_str: &str) -> Result<NaiveDate, DataError> {
    let s = date_str.trim();

    for format in ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, format) {
            return Ok(d);
        }
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt.date());
        }
    }

    Err(DataError::ParseError(format!("Could not parse date: {}", date_str)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

        assert_eq!(parse_date("2024-01-15").unwrap(), expected);
        assert_eq!(parse_date("2024/01/15").unwrap(), expected);
        assert_eq!(parse_date("01/15/2024").unwrap(), expected);
        assert_eq!(parse_date("2024-01-15 00:00:00").unwrap(), expected);
        assert!(parse_date("yesterday").is_err());
    }

    #[test]
    fn test_load_with_aliases_and_unsorted_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Date,Open,High,Low,Adj Close,Volume").unwrap();
        writeln!(file, "2024-01-03,11.0,12.0,10.5,11.5,2000").unwrap();
        writeln!(file, "2024-01-02,10.0,11.0,9.5,10.5,1500.0").unwrap();
        file.flush().unwrap();

        let series = CsvSeriesReader::new(file.path()).unwrap().load("ITUB3").unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.first().close, 10.5);
        assert_eq!(series.first().volume, 1500);
        assert_eq!(series.symbol(), "ITUB3");
    }

    #[test]
    fn test_load_yahoo_layout_prefers_close() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Date,Open,High,Low,Close,Adj Close,Volume").unwrap();
        writeln!(file, "2024-01-02,10.0,11.0,9.5,10.5,10.1,1500").unwrap();
        writeln!(file, "2024-01-03,11.0,12.0,10.5,11.5,11.2,2000").unwrap();
        file.flush().unwrap();

        let series = CsvSeriesReader::new(file.path()).unwrap().load("AAPL").unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.first().close, 10.5);
        assert_eq!(series.last().close, 11.5);
        assert_eq!(series.last().volume, 2000);
    }

    #[test]
    fn test_row_without_close_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Date,Open,High,Low,Volume").unwrap();
        writeln!(file, "2024-01-02,10.0,11.0,9.5,1500").unwrap();
        file.flush().unwrap();

        let err = CsvSeriesReader::new(file.path()).unwrap().load("AAPL").unwrap_err();
        assert!(matches!(err, DataError::ParseError(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = CsvSeriesReader::new(Path::new("/definitely/not/here.csv")).err().unwrap();
        assert!(matches!(err, DataError::NoDataAvailable));
    }
}
