//! Stock dashboard CLI application.

mod cli;
mod controller;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use dashboard_view::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.log_level {
        cli::LogLevel::Trace => "trace",
        cli::LogLevel::Debug => "debug",
        cli::LogLevel::Info => "info",
        cli::LogLevel::Warn => "warn",
        cli::LogLevel::Error => "error",
    };
    setup_logging(log_level, cli.json_logs);

    // Execute command
    match cli.command {
        Commands::Predict(args) => cli::commands::predict::run(args, &cli.config).await,
        Commands::Quote(args) => cli::commands::quote::run(args, &cli.config).await,
        Commands::Search(args) => cli::commands::search::run(args, &cli.config).await,
        Commands::Movers(args) => cli::commands::movers::run(args, &cli.config).await,
        Commands::Methods => cli::commands::methods::run().await,
        Commands::Chart(args) => cli::commands::chart::run(args, &cli.config).await,
        Commands::Watch(args) => cli::commands::watch::run(args, &cli.config).await,
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config).await,
    }
}
