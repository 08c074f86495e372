//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Bulten - Turkish market newsletter generator
#[derive(Parser)]
#[command(name = "bulten")]
#[command(about = "Noise-free, sector-aware Turkish market newsletter", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file path (defaults to ~/.config/bulten/bulten.toml, then the
    /// built-in configuration)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch today's news and quotes and print the dashboard summary
    Fetch {
        /// Number of top articles to keep (overrides config)
        #[arg(long)]
        top: Option<usize>,

        /// Skip the sector heat indicator
        #[arg(long)]
        no_heat: bool,
    },

    /// Generate the newsletter documents (Markdown and plain text)
    Export {
        /// Output directory (defaults to the configured export directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Number of top articles to keep (overrides config)
        #[arg(long)]
        top: Option<usize>,
    },

    /// Show the resolved configuration
    Config,
}
