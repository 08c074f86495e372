//! Market quote adapter
//!
//! Reads the latest daily bar for the benchmark index and the currency pair
//! from the Yahoo Finance v8 chart endpoint. Unlike feed fetching, a quote
//! failure is fatal to the cycle: a bulletin without a market snapshot is
//! not rendered.

use serde::Deserialize;
use tracing::{debug, info};

use crate::config::MarketConfig;
use crate::error::{Error, Result};
use crate::models::MarketSnapshot;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

pub struct MarketDataClient {
    http_client: reqwest::Client,
    base_url: String,
    index_symbol: String,
    fx_symbol: String,
}

/// Chart API response structures
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<QuoteBlock>,
}

#[derive(Debug, Deserialize)]
struct QuoteBlock {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
}

struct DailyBar {
    open: f64,
    close: f64,
}

impl MarketDataClient {
    pub fn new(config: &MarketConfig) -> Self {
        Self::with_base_url(config, DEFAULT_BASE_URL)
    }

    /// Point the client at a different chart endpoint (used by tests).
    pub fn with_base_url(config: &MarketConfig, base_url: &str) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            index_symbol: config.index_symbol.clone(),
            fx_symbol: config.fx_symbol.clone(),
        }
    }

    /// Fetch the latest index bar and FX close and derive the snapshot.
    pub async fn fetch_snapshot(&self) -> Result<MarketSnapshot> {
        let index = self.fetch_latest_bar(&self.index_symbol).await?;
        let fx = self.fetch_latest_bar(&self.fx_symbol).await?;

        let change_pct = (index.close / index.open - 1.0) * 100.0;
        let snapshot = MarketSnapshot {
            index_close: round2(index.close),
            index_change_pct: round2(change_pct),
            fx_rate: round2(fx.close),
        };

        info!(
            "Market snapshot: index {} ({:+.2}%), fx {}",
            snapshot.index_close, snapshot.index_change_pct, snapshot.fx_rate
        );
        Ok(snapshot)
    }

    async fn fetch_latest_bar(&self, symbol: &str) -> Result<DailyBar> {
        let url = format!(
            "{}/v8/finance/chart/{}?interval=1d&range=1d",
            self.base_url, symbol
        );
        debug!("GET {}", url);

        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Api {
                status_code: response.status().as_u16(),
                message: format!("chart lookup failed for {}", symbol),
            });
        }

        let body: ChartResponse = response.json().await?;

        let result = body
            .chart
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .ok_or_else(|| Error::NoData(symbol.to_string()))?;

        let quote = result
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| Error::NoData(symbol.to_string()))?;

        // Latest bar with both open and close present.
        quote
            .open
            .iter()
            .zip(quote.close.iter())
            .rev()
            .find_map(|(open, close)| match (open, close) {
                (Some(open), Some(close)) => Some(DailyBar {
                    open: *open,
                    close: *close,
                }),
                _ => None,
            })
            .ok_or_else(|| Error::NoData(symbol.to_string()))
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
