//! Describe prediction methods command.

use anyhow::Result;
use dashboard_view::render_method_catalog;

pub async fn run() -> Result<()> {
    print!("{}", render_method_catalog());
    println!();
    println!("Use --method <name> to select a method: sma, ema, rsi, macd");

    Ok(())
}
