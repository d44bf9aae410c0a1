//! Search command implementation.

use anyhow::{Context, Result};
use dashboard_view::render_search;
use std::path::Path;
use tracing::info;

use super::{api_source, load};
use crate::cli::SearchArgs;

pub async fn run(args: SearchArgs, config_path: &Path) -> Result<()> {
    let keyword = args.keyword.trim();
    if keyword.is_empty() {
        anyhow::bail!("Search keyword must not be empty");
    }

    let config = load(config_path)?;
    let source = api_source(&config)?;

    let matches = source
        .search(keyword)
        .await
        .with_context(|| format!("Search for '{}' failed", keyword))?;
    info!(keyword, matches = matches.len(), "Search complete");

    print!("{}", render_search(&matches));
    Ok(())
}
