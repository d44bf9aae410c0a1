//! Chart command implementation.

use anyhow::{Context, Result};
use dashboard_core::types::DEFAULT_WINDOW;
use dashboard_view::render_chart_table;
use std::path::Path;

use super::{controller, data_source, load};
use crate::cli::ChartArgs;

pub async fn run(args: ChartArgs, config_path: &Path) -> Result<()> {
    let config = load(config_path)?;
    let source = data_source(&config, args.data.as_deref())?;
    let mut controller = controller(&config, source);

    controller
        .load_stock(&args.symbol)
        .await
        .with_context(|| format!("Failed to load data for {}", args.symbol))?;
    let series = controller.series().context("No price history loaded")?;

    println!("{} - last {} sessions", args.symbol, DEFAULT_WINDOW);
    print!("{}", render_chart_table(series, DEFAULT_WINDOW)?);
    Ok(())
}
