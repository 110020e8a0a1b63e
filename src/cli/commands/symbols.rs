//! List configured stocks command.

use anyhow::Result;
use dashboard_config::AppConfig;

pub async fn run(config: &AppConfig) -> Result<()> {
    let settings = &config.dashboard;

    println!("Available Stocks");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    for (i, entry) in settings.symbols.iter().enumerate() {
        let marker = if i == settings.default_index { "*" } else { " " };
        println!("  {} {:<8} {}", marker, entry.symbol, entry.name);
    }

    println!();
    println!("* default selection. Use --symbol <ticker|name> to pick another.");

    Ok(())
}
