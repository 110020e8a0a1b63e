//! CSV export of a full price series.

use chrono::NaiveDate;
use csv::Writer;
use dashboard_core::{DataError, PriceSeries};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Row layout: date index followed by the OHLCV columns.
#[derive(Debug, Serialize)]
struct CsvRow {
    date: NaiveDate,
    #[serde(rename = "Open")]
    open: f64,
    #[serde(rename = "High")]
    high: f64,
    #[serde(rename = "Low")]
    low: f64,
    #[serde(rename = "Close")]
    close: f64,
    #[serde(rename = "Volume")]
    volume: u64,
}

/// Name of the downloadable artifact for a symbol.
pub fn export_file_name(symbol: &str) -> String {
    format!("{}_dados_acoes", symbol)
}

/// Write the whole series, oldest first, with a header row.
pub fn write_csv<W: io::Write>(series: &PriceSeries, writer: W) -> Result<(), DataError> {
    let mut wtr = Writer::from_writer(writer);

    for bar in series.iter() {
        wtr.serialize(CsvRow {
            date: bar.date,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
        })
        .map_err(|e| DataError::ParseError(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render the series as CSV text.
pub fn to_csv_string(series: &PriceSeries) -> Result<String, DataError> {
    let mut buf = Vec::new();
    write_csv(series, &mut buf)?;
    String::from_utf8(buf).map_err(|e| DataError::ParseError(e.to_string()))
}

/// Write `{symbol}_dados_acoes` into `dir` and return its path.
pub fn export_to_dir(series: &PriceSeries, dir: &Path) -> Result<PathBuf, DataError> {
    let path = dir.join(export_file_name(series.symbol()));
    let file = std::fs::File::create(&path)?;
    write_csv(series, io::BufWriter::new(file))?;

    info!(path = %path.display(), bars = series.len(), "Exported price series");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load_csv;
    use dashboard_core::PriceBar;

    fn sample() -> PriceSeries {
        let d = |day| NaiveDate::from_ymd_opt(2024, 2, day).unwrap();
        PriceSeries::new(
            "VALE3",
            vec![
                PriceBar::new(d(2), 68.5, 69.1, 67.9, 68.2, 21_000_000),
                PriceBar::new(d(1), 67.0, 68.75, 66.8, 68.5, 18_500_000),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_file_name() {
        assert_eq!(export_file_name("MSFT"), "MSFT_dados_acoes");
    }

    #[test]
    fn test_csv_layout() {
        let text = to_csv_string(&sample()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "date,Open,High,Low,Close,Volume");
        assert_eq!(lines[1], "2024-02-01,67.0,68.75,66.8,68.5,18500000");
        assert_eq!(lines[2], "2024-02-02,68.5,69.1,67.9,68.2,21000000");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_export_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let series = sample();

        let path = export_to_dir(&series, dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "VALE3_dados_acoes");

        let loaded = load_csv(&path, "VALE3").unwrap();
        assert_eq!(loaded, series);
    }
}
