//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use dashboard_core::ChartRange;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stock-dashboard")]
#[command(author, version, about = "Interactive daily stock-price dashboard")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (overrides logging.level)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive terminal dashboard
    Show(ShowArgs),
    /// Print the summary metrics for one stock
    Summary(SummaryArgs),
    /// Download the full price series as CSV
    Export(ExportArgs),
    /// List the configured stocks
    Symbols,
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct ShowArgs {
    /// Stock to open with (ticker or display name)
    #[arg(short, long)]
    pub symbol: Option<String>,

    /// Lookback range (max, 5y, 2y, 1y, ytd, 6m, 3m, 1m, 5d)
    #[arg(short, long)]
    pub range: Option<ChartRange>,

    /// Directory CSV exports are written to
    #[arg(long, default_value = ".")]
    pub export_dir: PathBuf,
}

#[derive(clap::Args)]
pub struct SummaryArgs {
    /// Stock to summarise (ticker or display name)
    #[arg(short, long)]
    pub symbol: Option<String>,

    /// Lookback range (max, 5y, 2y, 1y, ytd, 6m, 3m, 1m, 5d)
    #[arg(short, long)]
    pub range: Option<ChartRange>,

    /// Read bars from a previously exported CSV instead of the provider
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct ExportArgs {
    /// Stock to export (ticker or display name)
    #[arg(short, long)]
    pub symbol: Option<String>,

    /// Lookback range (max, 5y, 2y, 1y, ytd, 6m, 3m, 1m, 5d)
    #[arg(short, long)]
    pub range: Option<ChartRange>,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,
}
