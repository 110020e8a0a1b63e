//! Data source trait definitions.

use async_trait::async_trait;

use crate::error::DataError;
use crate::types::{ChartRange, PriceSeries, Symbol};

/// Trait for providers of historical daily bars.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch daily bars for a symbol.
    ///
    /// # Arguments
    /// * `symbol` - The ticker to fetch
    /// * `range` - How far back to look
    ///
    /// # Returns
    /// A series ordered from oldest to newest. A provider-side rejection is
    /// reported as [`DataError::Provider`] and yields no series.
    async fn fetch_daily_bars(
        &self,
        symbol: &Symbol,
        range: ChartRange,
    ) -> Result<PriceSeries, DataError>;

    /// Get the data source name.
    fn name(&self) -> &str;
}
