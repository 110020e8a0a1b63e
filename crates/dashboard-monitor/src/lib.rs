//! Logging setup and the terminal stock dashboard.

mod candles;
mod dashboard;
mod logging;

pub use candles::CandleChart;
pub use dashboard::{Dashboard, DashboardState, View};
pub use logging::{setup_logging, LogOutput};
