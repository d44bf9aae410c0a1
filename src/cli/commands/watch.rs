//! Watch command implementation.

use anyhow::{Context, Result};
use dashboard_core::types::MoversPeriod;
use dashboard_indicators::PredictionMethod;
use dashboard_view::{
    render_index_line, render_movers, render_prediction, render_prediction_prompt, render_quote,
};
use std::path::Path;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, warn};

use super::{api_source, controller, load};
use crate::cli::WatchArgs;
use crate::controller::DashboardController;

pub async fn run(args: WatchArgs, config_path: &Path) -> Result<()> {
    let config = load(config_path)?;
    let source = api_source(&config)?;
    let mut controller = controller(&config, source);

    let method = args
        .method
        .as_deref()
        .map(str::parse::<PredictionMethod>)
        .transpose()
        .context("Use one of: sma, ema, rsi, macd")?;
    controller.select_method(method);

    let mut ticker = interval(config.refresh.interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(
        interval_secs = config.refresh.interval_secs,
        "Watching market, press Ctrl-C to stop"
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                refresh(&mut controller, &args, &config.refresh.indices, config.refresh.movers_limit).await;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Stopping watch");
                break;
            }
        }
    }

    Ok(())
}

async fn refresh(
    controller: &mut DashboardController,
    args: &WatchArgs,
    indices: &[String],
    movers_limit: usize,
) {
    println!("Market Overview");
    println!("═══════════════════════════════════════════════════════════");
    for (name, quote) in controller.index_quotes(indices).await {
        println!("{}", render_index_line(&name, quote.as_ref()));
    }
    println!();

    match controller.movers(MoversPeriod::Day).await {
        Ok(movers) => print!("{}", render_movers(&movers, movers_limit)),
        Err(e) => warn!(error = %e, "Top movers unavailable"),
    }

    let Some(symbol) = args.symbol.as_deref() else {
        return;
    };
    if let Err(e) = controller.refresh_stock(symbol).await {
        warn!(symbol, error = %e, "Failed to refresh stock");
        return;
    }
    if let Some(quote) = controller.quote() {
        println!("{}", render_quote(quote));
    }
    match (controller.method(), controller.prediction()) {
        (Some(method), Some(Ok(result))) => println!("{}", render_prediction(method, &result)),
        (_, Some(Err(e))) => warn!(symbol, error = %e, "Prediction unavailable"),
        _ => println!("{}", render_prediction_prompt()),
    }
}
