//! Validate configuration command.

use anyhow::Result;
use dashboard_config::AppConfig;
use std::path::Path;

pub async fn run(config_path: &Path, config: &AppConfig) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match config.validate() {
        Ok(()) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Provider: {}", config.provider.base_url);
            println!("API token: set");
            println!("Range: {}", config.provider.range);
            println!("Stocks: {}", config.dashboard.symbols.len());
            if let Some(entry) = config.dashboard.default_symbol() {
                println!("Default stock: {} ({})", entry.symbol, entry.name);
            }
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
