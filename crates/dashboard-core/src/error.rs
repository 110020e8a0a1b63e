//! Error types for the stock dashboard.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while fetching, decoding or storing price data.
#[derive(Error, Debug)]
pub enum DataError {
    /// The provider answered with an error payload instead of bars.
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("No data available for the requested range")]
    NoDataAvailable,

    #[error("Invalid bar on {date}: {reason}")]
    InvalidBar { date: NaiveDate, reason: String },

    #[error("Duplicate bar date: {0}")]
    DuplicateDate(NaiveDate),

    #[error("Invalid symbol: {0:?}")]
    InvalidSymbol(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DataError {
    /// True when the provider itself rejected the request.
    pub fn is_provider_error(&self) -> bool {
        matches!(self, DataError::Provider(_))
    }
}
