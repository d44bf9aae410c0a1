//! Top movers command implementation.

use anyhow::{Context, Result};
use dashboard_core::types::MoversPeriod;
use dashboard_view::render_movers;
use std::path::Path;

use super::{api_source, load};
use crate::cli::MoversArgs;

pub async fn run(args: MoversArgs, config_path: &Path) -> Result<()> {
    let period: MoversPeriod = args
        .period
        .parse()
        .context("Use one of: 1d, 1w, 1m")?;

    let config = load(config_path)?;
    let limit = args.limit.unwrap_or(config.refresh.movers_limit);
    let source = api_source(&config)?;

    let movers = source
        .top_movers(period)
        .await
        .context("Failed to fetch top movers")?;

    println!("Top Movers ({})", period);
    println!();
    print!("{}", render_movers(&movers, limit));
    Ok(())
}
