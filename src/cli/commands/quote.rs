//! Quote command implementation.

use anyhow::{Context, Result};
use dashboard_view::render_quote;
use std::path::Path;

use super::{api_source, load};
use crate::cli::QuoteArgs;

pub async fn run(args: QuoteArgs, config_path: &Path) -> Result<()> {
    let config = load(config_path)?;
    let source = api_source(&config)?;

    let quote = source
        .get_quote(&args.symbol)
        .await
        .with_context(|| format!("Failed to fetch quote for {}", args.symbol))?;

    println!("{}", render_quote(&quote));
    Ok(())
}
