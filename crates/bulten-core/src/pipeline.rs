//! One fetch cycle, end to end
//!
//! adapters → scoring → selection → sector heat → narratives → `Bulletin`.
//! The cycle is synchronous per trigger and re-entrant; the only state that
//! survives it is the caller-owned fetch memo and any exported files. `now`
//! is captured once by the caller and threaded through everything that reads
//! the clock.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::cache::FetchCache;
use crate::config::Config;
use crate::error::Result;
use crate::feeds::FeedClient;
use crate::market::MarketDataClient;
use crate::models::{Bulletin, BulletinItem};
use crate::narrative::{market_summary, why_this_matters};
use crate::scoring::select_top;
use crate::sector::{aggregate_heat, classify};

pub struct Pipeline {
    config: Config,
    feeds: FeedClient,
    market: MarketDataClient,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        let feeds = FeedClient::new(&config);
        let market = MarketDataClient::new(&config.market);
        Self {
            config,
            feeds,
            market,
        }
    }

    /// Build a pipeline around preconfigured clients (used by tests to point
    /// the adapters at a mock server).
    pub fn with_clients(config: Config, feeds: FeedClient, market: MarketDataClient) -> Self {
        Self {
            config,
            feeds,
            market,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one cycle. News fetching tolerates individual feed failures; a
    /// quote failure aborts the cycle so a half-rendered bulletin never
    /// reaches the user.
    pub async fn run_cycle(&self, cache: &mut FetchCache, now: DateTime<Utc>) -> Result<Bulletin> {
        let articles = match cache.news(now) {
            Some(cached) => cached.to_vec(),
            None => {
                let fresh = self.feeds.fetch_news(now).await?;
                cache.store_news(now, fresh.clone());
                fresh
            }
        };

        let snapshot = match cache.market(now) {
            Some(cached) => cached,
            None => {
                let fresh = self.market.fetch_snapshot().await?;
                cache.store_market(now, fresh);
                fresh
            }
        };

        let top = select_top(
            articles,
            &self.config.scoring,
            now,
            self.config.scoring.top_n,
        );
        info!("Selected {} of the fetched articles", top.len());

        let heat = aggregate_heat(&top, &self.config.sectors, &self.config.sentiment);

        let items = top
            .into_iter()
            .map(|article| {
                let sectors = classify(&article, &self.config.sectors);
                let rationale = why_this_matters(&article);
                BulletinItem {
                    article,
                    sectors,
                    rationale,
                }
            })
            .collect();

        Ok(Bulletin {
            generated_at: now,
            snapshot,
            market_summary: market_summary(&snapshot),
            items,
            heat,
        })
    }
}
