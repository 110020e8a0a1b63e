//! CLI command implementations.

pub mod export;
pub mod show;
pub mod summary;
pub mod symbols;
pub mod validate;

use anyhow::{Context, Result};
use dashboard_config::{AppConfig, DashboardSettings};
use dashboard_core::Symbol;
use dashboard_data::IexCloudClient;

/// Pick the requested stock, falling back to the configured default.
///
/// A query matching no configured entry is accepted as a raw ticker.
pub fn resolve_symbol(settings: &DashboardSettings, query: Option<&str>) -> Result<Symbol> {
    match query {
        Some(q) => match settings.find(q) {
            Some((_, entry)) => Ok(entry.symbol.clone()),
            None => Symbol::new(q).with_context(|| format!("'{}' is not a usable ticker", q)),
        },
        None => settings
            .default_symbol()
            .map(|e| e.symbol.clone())
            .context("No stocks configured under [[dashboard.symbols]]"),
    }
}

/// Build the provider client from validated configuration.
pub fn build_client(config: &AppConfig) -> Result<IexCloudClient> {
    let provider = config
        .provider
        .to_provider_config()
        .context("Provider configuration is incomplete")?;
    Ok(IexCloudClient::new(provider)?)
}
