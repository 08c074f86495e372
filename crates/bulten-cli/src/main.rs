//! Bulten CLI - Turkish market newsletter generator
//!
//! Usage:
//!   bulten fetch              Fetch news/quotes and print the dashboard
//!   bulten export --dir out   Write the newsletter documents
//!   bulten config             Show the resolved configuration

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Fetch { top, no_heat } => {
            commands::cmd_fetch(cli.config.as_deref(), top, no_heat).await
        }
        Commands::Export { dir, top } => {
            commands::cmd_export(cli.config.as_deref(), dir, top).await
        }
        Commands::Config => commands::cmd_config(cli.config.as_deref()),
    }
}
