//! Alpha Vantage market data client.

use async_trait::async_trait;
use dashboard_core::error::DataError;
use dashboard_core::traits::StockDataSource;
use dashboard_core::types::{MoversPeriod, StockQuote, SymbolMatch, TimeSeries, TopMovers};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

use crate::decode;

/// Alpha Vantage client configuration.
#[derive(Debug, Clone)]
pub struct AlphaVantageConfig {
    pub base_url: String,
    pub api_key: String,
    /// Exchange suffix appended to equity symbols, e.g. `.BSE`
    pub exchange_suffix: String,
    pub timeout: Duration,
}

impl AlphaVantageConfig {
    /// Create config with default endpoint settings.
    pub fn new(api_key: String) -> Self {
        Self {
            base_url: "https://www.alphavantage.co/query".to_string(),
            api_key,
            exchange_suffix: ".BSE".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Symbol as sent to the API.
    ///
    /// Index symbols (`^NSEI`) and symbols that already carry the exchange
    /// suffix are sent unchanged.
    pub fn qualify(&self, symbol: &str) -> String {
        let symbol = symbol.trim();
        if symbol.starts_with('^') || symbol.ends_with(&self.exchange_suffix) {
            symbol.to_string()
        } else {
            format!("{}{}", symbol, self.exchange_suffix)
        }
    }
}

/// Alpha Vantage data source.
pub struct AlphaVantageClient {
    config: AlphaVantageConfig,
    client: Client,
}

impl AlphaVantageClient {
    /// Create a new client.
    pub fn new(config: AlphaVantageConfig) -> Result<Self, DataError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DataError::ConnectionError(e.to_string()))?;

        Ok(Self { config, client })
    }

    async fn query(&self, params: &[(&str, &str)]) -> Result<Value, DataError> {
        debug!(?params, "Alpha Vantage request");

        let resp = self
            .client
            .get(&self.config.base_url)
            .query(params)
            .query(&[("apikey", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| DataError::ConnectionError(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(DataError::ApiError(format!("{}: {}", status, text)));
        }

        resp.json()
            .await
            .map_err(|e| DataError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl StockDataSource for AlphaVantageClient {
    async fn get_quote(&self, symbol: &str) -> Result<StockQuote, DataError> {
        let symbol = self.config.qualify(symbol);
        let body = self
            .query(&[("function", "GLOBAL_QUOTE"), ("symbol", symbol.as_str())])
            .await?;

        decode::parse_quote(&body, &symbol)
    }

    async fn get_time_series(&self, symbol: &str) -> Result<TimeSeries, DataError> {
        let symbol = self.config.qualify(symbol);
        let body = self
            .query(&[
                ("function", "TIME_SERIES_DAILY"),
                ("symbol", symbol.as_str()),
                ("outputsize", "compact"),
            ])
            .await?;

        let series = decode::parse_time_series(&body)?;
        info!(symbol = %symbol, bars = series.len(), "Loaded daily time series");
        Ok(series)
    }

    async fn search(&self, keyword: &str) -> Result<Vec<SymbolMatch>, DataError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(Vec::new());
        }

        let body = self
            .query(&[("function", "SYMBOL_SEARCH"), ("keywords", keyword)])
            .await?;

        decode::parse_search(&body, keyword)
    }

    async fn top_movers(&self, period: MoversPeriod) -> Result<TopMovers, DataError> {
        let body = self.query(&[("function", period.endpoint())]).await?;

        decode::parse_top_movers(&body)
    }

    fn name(&self) -> &str {
        "Alpha Vantage"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualify_symbols() {
        let config = AlphaVantageConfig::new("demo".into());

        assert_eq!(config.qualify("RELIANCE"), "RELIANCE.BSE");
        assert_eq!(config.qualify(" TCS.BSE "), "TCS.BSE");
        assert_eq!(config.qualify("^NSEI"), "^NSEI");
    }

    #[test]
    fn test_client_builds() {
        let client = AlphaVantageClient::new(AlphaVantageConfig::new("demo".into())).unwrap();

        assert_eq!(client.name(), "Alpha Vantage");
        assert_eq!(client.config.timeout, Duration::from_secs(10));
    }
}
