//! Core traits for the stock dashboard.

mod data_source;

pub use data_source::DataSource;
