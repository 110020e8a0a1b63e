//! Core types and traits for the stock dashboard.
//!
//! This crate provides the foundational building blocks including:
//! - Daily price data (PriceBar, PriceSeries)
//! - Provider lookback ranges and validated ticker symbols
//! - The data source trait implemented by market-data providers

pub mod error;
pub mod traits;
pub mod types;

pub use error::DataError;
pub use traits::*;
pub use types::*;
