//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stock-dashboard")]
#[command(author, version, about = "Indian equity dashboard with technical trend predictions")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict the trend of a stock
    Predict(PredictArgs),
    /// Show the latest quote of a stock or index
    Quote(QuoteArgs),
    /// Search Indian listings by keyword
    Search(SearchArgs),
    /// Show top gainers and losers
    Movers(MoversArgs),
    /// Describe the available prediction methods
    Methods,
    /// Show recent prices with moving average overlays
    Chart(ChartArgs),
    /// Refresh market overview periodically
    Watch(WatchArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(clap::Args)]
pub struct PredictArgs {
    /// Stock symbol, e.g. RELIANCE
    #[arg(short, long)]
    pub symbol: String,

    /// Prediction method (sma, ema, rsi, macd); defaults to the configured one
    #[arg(short, long)]
    pub method: Option<String>,

    /// Daily bars CSV file to use instead of the API
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct QuoteArgs {
    /// Stock or index symbol, e.g. TCS or ^NSEI
    #[arg(short, long)]
    pub symbol: String,
}

#[derive(clap::Args)]
pub struct SearchArgs {
    /// Company name or symbol fragment
    pub keyword: String,
}

#[derive(clap::Args)]
pub struct MoversArgs {
    /// Period (1d, 1w, 1m)
    #[arg(short, long, default_value = "1d")]
    pub period: String,

    /// Rows per list; defaults to the configured limit
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(clap::Args)]
pub struct ChartArgs {
    /// Stock symbol
    #[arg(short, long)]
    pub symbol: String,

    /// Daily bars CSV file to use instead of the API
    #[arg(long)]
    pub data: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct WatchArgs {
    /// Stock to follow alongside the market overview
    #[arg(short, long)]
    pub symbol: Option<String>,

    /// Prediction method for the followed stock
    #[arg(short, long)]
    pub method: Option<String>,
}
