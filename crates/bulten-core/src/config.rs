//! Newsletter configuration
//!
//! All keyword lists, feed URLs, weights, and symbols live in one immutable
//! `Config` value built at startup. Resolution is two-layer:
//! 1. An explicit `--config` path, if given
//! 2. A user override at `~/.config/bulten/bulten.toml`
//! 3. Embedded defaults (compiled into the binary)
//!
//! An override file replaces the embedded defaults wholesale.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/bulten.toml");

/// A named feed source.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedSource {
    pub name: String,
    pub url: String,
}

/// Keyword tiers, weights, and ranking parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub high_keywords: Vec<String>,
    pub medium_keywords: Vec<String>,
    pub high_weight: f64,
    pub medium_weight: f64,
    pub trusted_sources: Vec<String>,
    pub trusted_bonus: f64,
    /// Recency bonus ceiling in points; also the decay horizon in hours.
    pub recency_cap_hours: f64,
    /// Trailing window for keeping feed entries, in hours.
    pub window_hours: i64,
    pub top_n: usize,
}

impl ScoringConfig {
    pub fn is_trusted(&self, source: &str) -> bool {
        self.trusted_sources.iter().any(|s| s == source)
    }
}

/// Keyword groups per sector. The groups are checked independently; an
/// article may match several.
#[derive(Debug, Clone, Deserialize)]
pub struct SectorConfig {
    pub banking: Vec<String>,
    pub industrial: Vec<String>,
    pub energy: Vec<String>,
}

/// Positive/negative sentiment keyword lists for heat aggregation.
#[derive(Debug, Clone, Deserialize)]
pub struct SentimentConfig {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// Quote lookup symbols.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketConfig {
    pub index_symbol: String,
    pub fx_symbol: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub feeds: Vec<FeedSource>,
    pub scoring: ScoringConfig,
    pub sectors: SectorConfig,
    pub sentiment: SentimentConfig,
    pub market: MarketConfig,
    pub export: ExportConfig,
    pub cache_ttl_secs: u64,
}

impl Config {
    /// Parse the embedded default configuration.
    pub fn embedded() -> Result<Self> {
        Ok(toml::from_str(DEFAULT_CONFIG)?)
    }

    /// Resolve configuration: explicit path > user override > embedded default.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!("Loading config from {}", path.display());
            let text = fs::read_to_string(path)?;
            return Ok(toml::from_str(&text)?);
        }

        if let Some(path) = Self::override_path() {
            if path.exists() {
                debug!("Loading config override from {}", path.display());
                let text = fs::read_to_string(&path)?;
                return Ok(toml::from_str(&text)?);
            }
        }

        Self::embedded()
    }

    /// Location of the optional user override file.
    pub fn override_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("bulten").join("bulten.toml"))
    }
}
