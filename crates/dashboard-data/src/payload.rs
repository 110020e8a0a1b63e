//! Decoding of chart endpoint response bodies.

use chrono::NaiveDate;
use dashboard_core::{DataError, PriceBar, PriceSeries};
use serde::Deserialize;
use serde_json::Value;

/// One element of the chart array. Extra provider fields are ignored.
#[derive(Debug, Deserialize)]
struct ChartBar {
    date: NaiveDate,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
}

impl From<ChartBar> for PriceBar {
    fn from(b: ChartBar) -> Self {
        PriceBar::new(b.date, b.open, b.high, b.low, b.close, b.volume)
    }
}

/// Turn a chart response body into a series.
///
/// An object carrying an `error` field becomes [`DataError::Provider`] and is
/// never parsed as bars.
pub fn decode_chart_payload(symbol: &str, body: &str) -> Result<PriceSeries, DataError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| DataError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    match value {
        Value::Object(map) => match map.get("error") {
            Some(Value::String(message)) => Err(DataError::Provider(message.clone())),
            Some(other) => Err(DataError::Provider(other.to_string())),
            None => Err(DataError::MalformedResponse(
                "expected an array of bars, got an object".to_string(),
            )),
        },
        Value::Array(_) => {
            let bars: Vec<ChartBar> = serde_json::from_value(value)
                .map_err(|e| DataError::MalformedResponse(e.to_string()))?;
            PriceSeries::new(symbol, bars.into_iter().map(PriceBar::from).collect())
        }
        other => Err(DataError::MalformedResponse(format!(
            "expected an array of bars, got {}",
            other
        ))),
    }
}
