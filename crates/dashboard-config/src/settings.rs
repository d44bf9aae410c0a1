//! Configuration structures.

use dashboard_core::types::DEFAULT_WINDOW;
use dashboard_indicators::PredictionMethod;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::SettingsError;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub refresh: RefreshSettings,
}

impl AppConfig {
    /// Reject values the dashboard cannot run with.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.api.base_url.trim().is_empty() {
            return Err(SettingsError::Invalid("api.base_url must not be empty".into()));
        }
        if self.api.timeout_secs == 0 {
            return Err(SettingsError::Invalid("api.timeout_secs must be positive".into()));
        }
        if self.analysis.window == 0 {
            return Err(SettingsError::Invalid("analysis.window must be positive".into()));
        }
        if self.refresh.interval_secs == 0 {
            return Err(SettingsError::Invalid(
                "refresh.interval_secs must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
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
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Market data API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    pub exchange_suffix: String,
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.alphavantage.co/query".to_string(),
            api_key_env: "ALPHAVANTAGE_API_KEY".to_string(),
            exchange_suffix: ".BSE".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Indicator engine inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Number of most recent sessions analysed
    pub window: usize,
    pub default_method: PredictionMethod,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            default_method: PredictionMethod::Sma,
        }
    }
}

/// Periodic market data refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshSettings {
    pub interval_secs: u64,
    /// Index symbols shown on every refresh
    pub indices: Vec<String>,
    /// Movers shown per list
    pub movers_limit: usize,
}

impl RefreshSettings {
    /// Refresh interval.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            interval_secs: 300,
            indices: vec!["^NSEI".to_string(), "^BSESN".to_string()],
            movers_limit: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.analysis.window, 30);
        assert_eq!(config.refresh.interval(), Duration::from_secs(300));
        assert_eq!(config.api.exchange_suffix, ".BSE");
    }

    #[test]
    fn test_validate_rejects_zero_window() {
        let mut config = AppConfig::default();
        config.analysis.window = 0;

        assert!(matches!(config.validate(), Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let mut config = AppConfig::default();
        config.refresh.interval_secs = 0;

        assert!(config.validate().is_err());
    }
}
