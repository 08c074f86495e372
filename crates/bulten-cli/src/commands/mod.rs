//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `config` - Configuration inspection
//! - `export` - Newsletter document generation
//! - `fetch` - Fetch cycle and dashboard rendering

pub mod config;
pub mod export;
pub mod fetch;

// Re-export command functions for main.rs
pub use config::*;
pub use export::*;
pub use fetch::*;

use std::path::Path;

use anyhow::{Context, Result};

/// Load the configuration, applying the optional top-N override.
pub fn load_config(path: Option<&Path>, top: Option<usize>) -> Result<bulten_core::Config> {
    let mut config =
        bulten_core::Config::load(path).context("Failed to load configuration")?;
    if let Some(n) = top {
        config.scoring.top_n = n;
    }
    Ok(config)
}

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
