//! CLI command implementations.

pub mod chart;
pub mod methods;
pub mod movers;
pub mod predict;
pub mod quote;
pub mod search;
pub mod validate;
pub mod watch;

use anyhow::{Context, Result};
use dashboard_config::{load_config, AppConfig};
use dashboard_core::traits::StockDataSource;
use dashboard_data::{AlphaVantageClient, AlphaVantageConfig, CsvDataSource};
use dashboard_indicators::PredictionMethod;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use crate::controller::DashboardController;

/// Load and validate the configuration file.
pub fn load(config_path: &Path) -> Result<AppConfig> {
    load_config(config_path)
        .with_context(|| format!("Failed to load configuration from {:?}", config_path))
}

/// Build the Alpha Vantage source from configuration.
pub fn api_source(config: &AppConfig) -> Result<Arc<dyn StockDataSource>> {
    let api_key = std::env::var(&config.api.api_key_env).with_context(|| {
        format!(
            "{} is not set. Export your Alpha Vantage API key, or pass --data <file.csv> where supported",
            config.api.api_key_env
        )
    })?;

    let client = AlphaVantageClient::new(AlphaVantageConfig {
        base_url: config.api.base_url.clone(),
        exchange_suffix: config.api.exchange_suffix.clone(),
        timeout: config.api.timeout(),
        ..AlphaVantageConfig::new(api_key)
    })?;

    debug!(base_url = %config.api.base_url, "Using Alpha Vantage data source");
    Ok(Arc::new(client))
}

/// CSV file source when `--data` is given, the API otherwise.
pub fn data_source(config: &AppConfig, data: Option<&Path>) -> Result<Arc<dyn StockDataSource>> {
    match data {
        Some(path) => {
            let source = CsvDataSource::new(path).with_context(|| {
                format!("Data file '{}' does not exist", path.display())
            })?;
            Ok(Arc::new(source))
        }
        None => api_source(config),
    }
}

/// Controller over `source` using the configured window.
pub fn controller(config: &AppConfig, source: Arc<dyn StockDataSource>) -> DashboardController {
    DashboardController::new(source, config.analysis.window, config.refresh.interval())
}

/// Parse `--method`, falling back to the configured default.
pub fn method_or_default(method: Option<&str>, config: &AppConfig) -> Result<PredictionMethod> {
    match method {
        Some(m) => m.parse::<PredictionMethod>().context("Use one of: sma, ema, rsi, macd"),
        None => Ok(config.analysis.default_method),
    }
}
