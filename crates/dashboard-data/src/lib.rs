//! Market-data fetching and CSV export for the stock dashboard.

mod csv_source;
mod export;
mod iex;
mod payload;

pub use csv_source::CsvSeriesReader;
pub use export::{export_file_name, export_to_dir, to_csv_string, write_csv};
pub use iex::{IexCloudClient, ProviderConfig, DEFAULT_BASE_URL};
pub use payload::decode_chart_payload;

use dashboard_core::{DataError, PriceSeries};
use std::path::Path;

/// Load a previously exported series from a CSV file.
pub fn load_csv(path: &Path, symbol: &str) -> Result<PriceSeries, DataError> {
    let reader = CsvSeriesReader::new(path)?;
    reader.load(symbol)
}
