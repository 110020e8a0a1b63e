//! Configuration structures.

use dashboard_core::{ChartRange, Symbol};
use dashboard_data::{ProviderConfig, DEFAULT_BASE_URL};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use crate::ConfigError;

/// Largest tail table the dashboard will draw.
pub const MAX_TAIL_ROWS: usize = 100;

/// Main application configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub provider: ProviderSettings,
    #[serde(default)]
    pub dashboard: DashboardSettings,
}

impl AppConfig {
    /// Check everything the dashboard needs before the first fetch.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.provider.to_provider_config()?;
        self.dashboard.validate()
    }
}

/// General app settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "stock-dashboard".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

/// Market-data provider settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    pub base_url: String,
    pub api_token: Option<SecretString>,
    pub range: ChartRange,
    pub timeout_secs: Option<u64>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: None,
            range: ChartRange::default(),
            timeout_secs: None,
        }
    }
}

impl ProviderSettings {
    /// Build the fetcher configuration, requiring a non-empty token.
    pub fn to_provider_config(&self) -> Result<ProviderConfig, ConfigError> {
        let token = self
            .api_token
            .as_ref()
            .filter(|t| !t.expose_secret().trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let config = ProviderConfig {
            base_url: self.base_url.clone(),
            api_token: token.clone(),
            range: self.range,
            timeout: self.timeout_secs.map(Duration::from_secs),
        };
        config
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(config)
    }
}

/// One entry of the ticker selector.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SymbolEntry {
    /// Label shown in the selector
    pub name: String,
    /// Provider ticker
    pub symbol: Symbol,
}

impl SymbolEntry {
    pub fn new(name: &str, symbol: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            name: name.to_string(),
            symbol: Symbol::new(symbol).map_err(|e| ConfigError::Invalid(e.to_string()))?,
        })
    }
}

/// Terminal dashboard settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    pub refresh_ms: u64,
    pub tail_rows: usize,
    pub default_index: usize,
    pub symbols: Vec<SymbolEntry>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        let symbols = [
            ("Apple", "AAPL"),
            ("Alphabet", "GOOGL"),
            ("Microsoft", "MSFT"),
            ("Amazon", "AMZN"),
            ("Petrobras", "PETR3"),
            ("Meta", "FB"),
            ("Vale", "VALE3"),
            ("Ambev", "ABEV3"),
            ("Nvidia", "NVDA"),
            ("Itau Unibanco", "ITUB3"),
        ]
        .into_iter()
        .filter_map(|(name, symbol)| SymbolEntry::new(name, symbol).ok())
        .collect();

        Self {
            refresh_ms: 250,
            tail_rows: 5,
            default_index: 2,
            symbols,
        }
    }
}

impl DashboardSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.symbols.is_empty() {
            return Err(ConfigError::Invalid("dashboard.symbols must not be empty".into()));
        }
        if self.default_index >= self.symbols.len() {
            return Err(ConfigError::Invalid(format!(
                "dashboard.default_index {} out of range for {} symbols",
                self.default_index,
                self.symbols.len()
            )));
        }
        if self.tail_rows == 0 || self.tail_rows > MAX_TAIL_ROWS {
            return Err(ConfigError::Invalid(format!(
                "dashboard.tail_rows must be between 1 and {}, got {}",
                MAX_TAIL_ROWS, self.tail_rows
            )));
        }
        if self.refresh_ms == 0 {
            return Err(ConfigError::Invalid("dashboard.refresh_ms must be positive".into()));
        }
        Ok(())
    }

    /// Entry selected when the dashboard opens.
    pub fn default_symbol(&self) -> Option<&SymbolEntry> {
        self.symbols.get(self.default_index)
    }

    /// Find an entry by ticker or display name, case-insensitively.
    pub fn find(&self, query: &str) -> Option<(usize, &SymbolEntry)> {
        self.symbols.iter().enumerate().find(|(_, e)| {
            e.symbol.as_str().eq_ignore_ascii_case(query) || e.name.eq_ignore_ascii_case(query)
        })
    }
}
