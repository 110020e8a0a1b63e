//! Interactive dashboard command.

use anyhow::{Context, Result};
use dashboard_config::{AppConfig, SymbolEntry};
use dashboard_monitor::{Dashboard, DashboardState};
use tracing::info;

use super::{build_client, resolve_symbol};
use crate::cli::ShowArgs;

pub async fn run(args: ShowArgs, config: &AppConfig) -> Result<()> {
    config.validate().context("Configuration is invalid")?;
    let client = build_client(config)?;
    let settings = &config.dashboard;

    let mut symbols = settings.symbols.clone();
    let selected = match args.symbol.as_deref() {
        Some(query) => match settings.find(query) {
            Some((index, _)) => index,
            None => {
                let symbol = resolve_symbol(settings, Some(query))?;
                symbols.push(SymbolEntry {
                    name: symbol.to_string(),
                    symbol,
                });
                symbols.len() - 1
            }
        },
        None => settings.default_index,
    };

    let range = args.range.unwrap_or(config.provider.range);
    info!(%range, symbols = symbols.len(), "Opening dashboard");

    let state = DashboardState::new(symbols, selected, settings.tail_rows);
    let dashboard = Dashboard::new(settings.refresh_ms, range, args.export_dir);
    dashboard
        .run(&client, state)
        .await
        .context("Terminal dashboard failed")?;

    Ok(())
}
