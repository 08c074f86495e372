//! News feed adapter
//!
//! Pulls the configured RSS feeds and normalizes entries into `NewsArticle`
//! records. Only entries inside the trailing fetch window are kept; entries
//! without a parseable publish time default to the fetch moment. A feed that
//! fails to download or parse is logged and skipped so one bad source does
//! not abort the whole cycle.

use chrono::{DateTime, Duration, Utc};
use rss::Channel;
use tracing::{debug, info, warn};

use crate::config::{Config, FeedSource};
use crate::error::{Error, Result};
use crate::models::NewsArticle;

pub struct FeedClient {
    http_client: reqwest::Client,
    feeds: Vec<FeedSource>,
    window: Duration,
}

impl FeedClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            feeds: config.feeds.clone(),
            window: Duration::hours(config.scoring.window_hours),
        }
    }

    /// Fetch every configured feed and return the entries published within
    /// the trailing window, newest sources first in feed order.
    pub async fn fetch_news(&self, now: DateTime<Utc>) -> Result<Vec<NewsArticle>> {
        let cutoff = now - self.window;
        let mut articles = Vec::new();

        for feed in &self.feeds {
            match self.fetch_feed(feed, now, cutoff).await {
                Ok(mut entries) => {
                    info!("Fetched {} entries from {}", entries.len(), feed.name);
                    articles.append(&mut entries);
                }
                Err(e) => {
                    warn!("Feed {} failed: {}, skipping", feed.name, e);
                }
            }
        }

        Ok(articles)
    }

    async fn fetch_feed(
        &self,
        feed: &FeedSource,
        now: DateTime<Utc>,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<NewsArticle>> {
        debug!("GET {}", feed.url);
        let response = self.http_client.get(&feed.url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Api {
                status_code: response.status().as_u16(),
                message: format!("{} returned an error status", feed.name),
            });
        }

        let bytes = response.bytes().await?;
        let channel = Channel::read_from(&bytes[..])?;

        let mut articles = Vec::new();
        for item in channel.items() {
            let title = match item.title() {
                Some(t) => t.trim().to_string(),
                None => continue,
            };

            let published = item
                .pub_date()
                .and_then(parse_publish_time)
                .unwrap_or(now);

            if published < cutoff {
                continue;
            }

            articles.push(NewsArticle {
                title,
                summary: item.description().unwrap_or("").trim().to_string(),
                source: feed.name.clone(),
                link: item.link().map(String::from),
                published,
                score: None,
            });
        }

        Ok(articles)
    }
}

/// Parse an RSS publish time. Feeds mostly use RFC 2822; a few emit RFC 3339.
fn parse_publish_time(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::test_utils::MockFeedServer;

    fn mock_config(server: &MockFeedServer) -> Config {
        let mut config = Config::embedded().unwrap();
        config.feeds = vec![
            FeedSource {
                name: "Bigpara".to_string(),
                url: format!("{}/rss/bigpara", server.url()),
            },
            FeedSource {
                name: "BloombergHT".to_string(),
                url: format!("{}/rss/bloomberght", server.url()),
            },
        ];
        config
    }

    #[test]
    fn test_parse_publish_time_formats() {
        assert!(parse_publish_time("Mon, 04 Nov 2024 09:00:00 +0000").is_some());
        assert!(parse_publish_time("2024-11-04T09:00:00Z").is_some());
        assert!(parse_publish_time("next tuesday").is_none());
    }

    #[tokio::test]
    async fn test_fetch_news_from_mock_feeds() {
        let mut server = MockFeedServer::start().await;
        let config = mock_config(&server);
        let client = FeedClient::new(&config);

        let now = Utc::now();
        let articles = client.fetch_news(now).await.unwrap();

        // Bigpara serves two fresh items plus one stale (filtered); the
        // BloombergHT item has no pubDate and defaults to `now`.
        assert_eq!(articles.len(), 3);
        assert!(articles.iter().any(|a| a.title.contains("TCMB")));
        assert!(articles.iter().all(|a| a.published >= now - Duration::hours(18)));

        let undated = articles
            .iter()
            .find(|a| a.source == "BloombergHT")
            .unwrap();
        assert_eq!(undated.published, now);

        server.stop();
    }

    #[tokio::test]
    async fn test_missing_summary_defaults_to_empty() {
        let mut server = MockFeedServer::start().await;
        let config = mock_config(&server);
        let client = FeedClient::new(&config);

        let articles = client.fetch_news(Utc::now()).await.unwrap();
        let bare = articles.iter().find(|a| a.title.contains("Endeks")).unwrap();
        assert_eq!(bare.summary, "");

        server.stop();
    }

    #[tokio::test]
    async fn test_bad_feed_is_isolated() {
        let mut server = MockFeedServer::start().await;
        let mut config = mock_config(&server);
        config.feeds.push(FeedSource {
            name: "Broken".to_string(),
            url: format!("{}/rss/missing", server.url()),
        });
        let client = FeedClient::new(&config);

        // The 404 feed is skipped; the healthy feeds still come through.
        let articles = client.fetch_news(Utc::now()).await.unwrap();
        assert_eq!(articles.len(), 3);
        assert!(articles.iter().all(|a| a.source != "Broken"));

        server.stop();
    }
}
