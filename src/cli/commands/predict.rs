//! Predict command implementation.

use anyhow::{Context, Result};
use dashboard_view::{render_prediction, render_quote};
use std::path::Path;
use tracing::info;

use super::{controller, data_source, load, method_or_default};
use crate::cli::{OutputFormat, PredictArgs};

pub async fn run(args: PredictArgs, config_path: &Path) -> Result<()> {
    let config = load(config_path)?;
    let method = method_or_default(args.method.as_deref(), &config)?;
    info!(symbol = %args.symbol, %method, "Predicting trend");

    let source = data_source(&config, args.data.as_deref())?;
    let mut controller = controller(&config, source);
    controller
        .load_stock(&args.symbol)
        .await
        .with_context(|| format!("Failed to load data for {}", args.symbol))?;
    controller.select_method(Some(method));

    let result = controller
        .prediction()
        .context("No prediction available")?
        .with_context(|| format!("{} prediction failed for {}", method, args.symbol))?;

    match args.output {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "symbol": controller.symbol(),
                "method": method,
                "quote": controller.quote(),
                "prediction": result,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Text => {
            if let Some(quote) = controller.quote() {
                println!("{}", render_quote(quote));
            }
            println!("{}", render_prediction(method, &result));
        }
    }

    Ok(())
}
