//! Core data types for the stock dashboard.

mod price;
mod range;
mod symbol;

pub use price::{PriceBar, PriceSeries};
pub use range::ChartRange;
pub use symbol::Symbol;
