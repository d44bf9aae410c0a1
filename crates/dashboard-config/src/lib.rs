//! Configuration management.

mod settings;

pub use settings::{
    AnalysisSettings, ApiConfig, AppConfig, AppSettings, LoggingConfig, RefreshSettings,
};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Load configuration from file and environment.
///
/// The file is optional; environment variables such as
/// `DASHBOARD__REFRESH__INTERVAL_SECS=60` override it.
pub fn load_config(path: &Path) -> Result<AppConfig, SettingsError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("DASHBOARD")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    finish(config)
}

fn finish(config: Config) -> Result<AppConfig, SettingsError> {
    let config: AppConfig = config.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use dashboard_indicators::PredictionMethod;

    fn load_config_str(toml: &str) -> Result<AppConfig, SettingsError> {
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        finish(config)
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = load_config_str(
            r#"
            [analysis]
            default_method = "macd"

            [refresh]
            interval_secs = 60
            "#,
        )
        .unwrap();

        assert_eq!(config.analysis.default_method, PredictionMethod::Macd);
        assert_eq!(config.analysis.window, 30);
        assert_eq!(config.refresh.interval_secs, 60);
        assert_eq!(config.refresh.indices, vec!["^NSEI", "^BSESN"]);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let result = load_config_str("[analysis]\nwindow = 0\n");

        assert!(matches!(result, Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn test_unknown_method_is_a_load_error() {
        let result = load_config_str("[analysis]\ndefault_method = \"bollinger\"\n");

        assert!(matches!(result, Err(SettingsError::Load(_))));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load_config(Path::new("/definitely/not/here.toml")).unwrap();

        assert_eq!(config.app.name, "stock-dashboard");
    }
}
