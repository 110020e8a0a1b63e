//! Stock dashboard CLI application.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use dashboard_config::load_config;
use dashboard_monitor::{setup_logging, LogOutput};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration from {:?}", cli.config))?;

    // Setup logging; the dashboard owns the terminal, so it only logs to a file
    let log_level = cli
        .log_level
        .map(|l| l.as_str().to_string())
        .unwrap_or_else(|| config.logging.level.clone());
    let json = cli.json_logs || config.logging.is_json();
    let output = match (config.logging.file.as_deref(), &cli.command) {
        (Some(file), _) => LogOutput::File(Path::new(file)),
        (None, Commands::Show(_)) => LogOutput::Disabled,
        (None, _) => LogOutput::Stderr,
    };
    let _log_guard = setup_logging(&log_level, json, output);

    // Execute command
    match cli.command {
        Commands::Show(args) => cli::commands::show::run(args, &config).await,
        Commands::Summary(args) => cli::commands::summary::run(args, &config).await,
        Commands::Export(args) => cli::commands::export::run(args, &config).await,
        Commands::Symbols => cli::commands::symbols::run(&config).await,
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config, &config).await,
    }
}
