//! Configuration management.
//!
//! Settings come from an optional TOML file layered under environment
//! variables prefixed with `DASHBOARD`, using `__` between path segments
//! (for example `DASHBOARD__PROVIDER__API_TOKEN`).

mod settings;

pub use settings::{
    AppConfig, AppSettings, DashboardSettings, LoggingConfig, ProviderSettings, SymbolEntry,
    MAX_TAIL_ROWS,
};

use config::{Config, Environment, File};
use std::path::Path;
use thiserror::Error;

/// Environment prefix for overrides.
pub const ENV_PREFIX: &str = "DASHBOARD";

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("provider.api_token is not set (use DASHBOARD__PROVIDER__API_TOKEN)")]
    MissingToken,

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Load configuration from file and environment.
///
/// A missing file is not an error; built-in defaults apply.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    load_with_env(path, Environment::with_prefix(ENV_PREFIX))
}

fn load_with_env(path: &Path, env: Environment) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(env.separator("__").try_parsing(true))
        .build()?;

    Ok(config.try_deserialize()?)
}
