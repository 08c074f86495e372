//! Bulten Core Library
//!
//! Shared functionality for the bulten Turkish market newsletter tool:
//! - RSS feed and market quote adapters
//! - Keyword/recency news scoring and top-N selection
//! - Sector classification and sentiment heat aggregation
//! - Turkish narrative generation (market summary, per-article rationale)
//! - Newsletter export (Markdown and plain text)
//! - Time-windowed fetch memoization

pub mod cache;
pub mod config;
pub mod error;
pub mod export;
pub mod feeds;
pub mod market;
pub mod models;
pub mod narrative;
pub mod pipeline;
pub mod scoring;
pub mod sector;

/// Test utilities including the mock feed/quote server
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use cache::FetchCache;
pub use config::Config;
pub use error::{Error, Result};
pub use export::{export_bulletin, ExportFormat};
pub use feeds::FeedClient;
pub use market::MarketDataClient;
pub use models::{
    Bulletin, BulletinItem, HeatLabel, MarketSnapshot, NewsArticle, Sector, SectorHeat,
};
pub use narrative::{market_summary, why_this_matters};
pub use pipeline::Pipeline;
pub use scoring::{recency_bonus, score_article, select_top};
pub use sector::{aggregate_heat, classify, sentiment_delta};
