//! Validate configuration command.

use anyhow::Result;
use dashboard_config::load_config;
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("API endpoint: {}", config.api.base_url);
            println!("API key variable: {}", config.api.api_key_env);
            println!("Exchange suffix: {}", config.api.exchange_suffix);
            println!("Analysis window: {} days", config.analysis.window);
            println!("Default method: {}", config.analysis.default_method);
            println!("Refresh interval: {}s", config.refresh.interval_secs);
            println!("Indices: {}", config.refresh.indices.join(", "));
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
