//! CSV export command.

use anyhow::{Context, Result};
use dashboard_config::AppConfig;
use dashboard_core::DataSource;
use dashboard_data::export_to_dir;

use super::{build_client, resolve_symbol};
use crate::cli::ExportArgs;

pub async fn run(args: ExportArgs, config: &AppConfig) -> Result<()> {
    let client = build_client(config)?;
    let symbol = resolve_symbol(&config.dashboard, args.symbol.as_deref())?;
    let range = args.range.unwrap_or(config.provider.range);

    let series = client.fetch_daily_bars(&symbol, range).await?;

    std::fs::create_dir_all(&args.dir)
        .with_context(|| format!("Cannot create {}", args.dir.display()))?;
    let path = export_to_dir(&series, &args.dir)?;

    println!("Wrote {} bars to {}", series.len(), path.display());
    Ok(())
}
