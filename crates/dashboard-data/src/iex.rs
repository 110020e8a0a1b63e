//! IEX Cloud chart client.

use async_trait::async_trait;
use dashboard_core::{ChartRange, DataError, DataSource, PriceSeries, Symbol};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::payload::decode_chart_payload;

/// Public IEX Cloud endpoint.
pub const DEFAULT_BASE_URL: &str = "https://cloud.iexapis.com/stable/";

/// Settings the client is built from.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_token: SecretString,
    pub range: ChartRange,
    pub timeout: Option<Duration>,
}

impl ProviderConfig {
    /// Create config against the public endpoint with the default range.
    pub fn new(api_token: impl Into<String>) -> Self {
        let token: String = api_token.into();
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: SecretString::from(token),
            range: ChartRange::default(),
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_range(mut self, range: ChartRange) -> Self {
        self.range = range;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Reject an empty token or base URL.
    pub fn validate(&self) -> Result<(), DataError> {
        if self.api_token.expose_secret().trim().is_empty() {
            return Err(DataError::Configuration("api_token must not be empty".into()));
        }
        if self.base_url.trim().is_empty() {
            return Err(DataError::Configuration("base_url must not be empty".into()));
        }
        Ok(())
    }
}

/// Client for the `stock/{symbol}/chart/{range}` endpoint.
pub struct IexCloudClient {
    base_url: String,
    api_token: SecretString,
    default_range: ChartRange,
    client: Client,
}

impl IexCloudClient {
    /// Create a new client, validating the configuration first.
    pub fn new(config: ProviderConfig) -> Result<Self, DataError> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| DataError::Connection(e.to_string()))?;

        let mut base_url = config.base_url.trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self {
            base_url,
            api_token: config.api_token,
            default_range: config.range,
            client,
        })
    }

    /// Range used when the caller has no preference.
    pub fn default_range(&self) -> ChartRange {
        self.default_range
    }

    /// Chart URL without the token query parameter.
    pub fn chart_url(&self, symbol: &Symbol, range: ChartRange) -> String {
        format!("{}stock/{}/chart/{}", self.base_url, symbol, range)
    }
}

#[async_trait]
impl DataSource for IexCloudClient {
    async fn fetch_daily_bars(
        &self,
        symbol: &Symbol,
        range: ChartRange,
    ) -> Result<PriceSeries, DataError> {
        let url = self.chart_url(symbol, range);
        info!(%symbol, %range, "Fetching daily bars");
        debug!(url = %url, "Chart request");

        let resp = self
            .client
            .get(&url)
            .query(&[("token", self.api_token.expose_secret())])
            .send()
            .await
            .map_err(|e| DataError::Connection(e.without_url().to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| DataError::Connection(e.without_url().to_string()))?;

        let result = if status.is_success() {
            decode_chart_payload(symbol.as_str(), &body)
        } else {
            match decode_chart_payload(symbol.as_str(), &body) {
                Err(e @ DataError::Provider(_)) => Err(e),
                _ => Err(DataError::Provider(format!("{}: {}", status, body.trim()))),
            }
        };

        match &result {
            Ok(series) => info!(%symbol, bars = series.len(), "Fetched daily bars"),
            Err(e) => warn!(%symbol, error = %e, "Chart request failed"),
        }

        result
    }

    fn name(&self) -> &str {
        "iex-cloud"
    }
}
