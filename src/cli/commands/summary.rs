//! Summary metrics command.

use anyhow::{Context, Result};
use dashboard_config::AppConfig;
use dashboard_core::DataSource;
use dashboard_data::load_csv;
use dashboard_metrics::MetricSummary;
use tracing::info;

use super::{build_client, resolve_symbol};
use crate::cli::{OutputFormat, SummaryArgs};

pub async fn run(args: SummaryArgs, config: &AppConfig) -> Result<()> {
    let series = match &args.csv {
        Some(path) => {
            let symbol = match args.symbol.as_deref() {
                Some(s) => s.to_string(),
                None => path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .map(|s| s.trim_end_matches("_dados_acoes").to_string())
                    .unwrap_or_else(|| "CSV".to_string()),
            };
            load_csv(path, &symbol)
                .with_context(|| format!("Failed to load {}", path.display()))?
        }
        None => {
            let client = build_client(config)?;
            let symbol = resolve_symbol(&config.dashboard, args.symbol.as_deref())?;
            let range = args.range.unwrap_or(config.provider.range);
            client.fetch_daily_bars(&symbol, range).await?
        }
    };

    info!(symbol = series.symbol(), bars = series.len(), "Computing summary");
    let summary = MetricSummary::compute(&series);

    match args.output {
        OutputFormat::Json => println!("{}", summary.to_json()?),
        OutputFormat::Text => print!("{}", summary.summary()),
    }

    Ok(())
}
