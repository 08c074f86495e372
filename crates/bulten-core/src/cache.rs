//! Time-windowed fetch memo
//!
//! One slot per adapter, owned by the pipeline's caller and passed in
//! explicitly. Validity is judged against the caller's `now`, so tests can
//! drive expiry with a fixed clock. Access is single-flow; concurrent
//! triggers would need a lock around this.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::models::{MarketSnapshot, NewsArticle};

struct Slot<T> {
    fetched_at: DateTime<Utc>,
    value: T,
}

/// Memoized fetch results with a bounded TTL.
pub struct FetchCache {
    ttl: Duration,
    news: Option<Slot<Vec<NewsArticle>>>,
    market: Option<Slot<MarketSnapshot>>,
}

impl FetchCache {
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            ttl: Duration::seconds(ttl_secs as i64),
            news: None,
            market: None,
        }
    }

    fn is_valid<T>(&self, slot: &Slot<T>, now: DateTime<Utc>) -> bool {
        now >= slot.fetched_at && now - slot.fetched_at <= self.ttl
    }

    /// The memoized news list, if still within the TTL window.
    pub fn news(&self, now: DateTime<Utc>) -> Option<&[NewsArticle]> {
        match &self.news {
            Some(slot) if self.is_valid(slot, now) => {
                debug!("news fetch memo hit");
                Some(&slot.value)
            }
            _ => None,
        }
    }

    pub fn store_news(&mut self, now: DateTime<Utc>, value: Vec<NewsArticle>) {
        self.news = Some(Slot {
            fetched_at: now,
            value,
        });
    }

    /// The memoized market snapshot, if still within the TTL window.
    pub fn market(&self, now: DateTime<Utc>) -> Option<MarketSnapshot> {
        match &self.market {
            Some(slot) if self.is_valid(slot, now) => {
                debug!("market fetch memo hit");
                Some(slot.value)
            }
            _ => None,
        }
    }

    pub fn store_market(&mut self, now: DateTime<Utc>, value: MarketSnapshot) {
        self.market = Some(Slot {
            fetched_at: now,
            value,
        });
    }

    /// Drop both slots.
    pub fn clear(&mut self) {
        self.news = None;
        self.market = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 4, 12, 0, 0).unwrap()
    }

    fn snapshot() -> MarketSnapshot {
        MarketSnapshot {
            index_close: 10250.0,
            index_change_pct: 1.25,
            fx_rate: 41.25,
        }
    }

    #[test]
    fn test_empty_cache_misses() {
        let cache = FetchCache::new(900);
        assert!(cache.news(fixed_now()).is_none());
        assert!(cache.market(fixed_now()).is_none());
    }

    #[test]
    fn test_hit_within_ttl() {
        let now = fixed_now();
        let mut cache = FetchCache::new(900);
        cache.store_news(now, Vec::new());
        cache.store_market(now, snapshot());

        let later = now + Duration::seconds(600);
        assert!(cache.news(later).is_some());
        assert!(cache.market(later).is_some());
    }

    #[test]
    fn test_miss_after_ttl() {
        let now = fixed_now();
        let mut cache = FetchCache::new(900);
        cache.store_news(now, Vec::new());
        cache.store_market(now, snapshot());

        let later = now + Duration::seconds(901);
        assert!(cache.news(later).is_none());
        assert!(cache.market(later).is_none());
    }

    #[test]
    fn test_clock_moving_backwards_invalidates() {
        let now = fixed_now();
        let mut cache = FetchCache::new(900);
        cache.store_news(now, Vec::new());

        assert!(cache.news(now - Duration::seconds(1)).is_none());
    }

    #[test]
    fn test_clear() {
        let now = fixed_now();
        let mut cache = FetchCache::new(900);
        cache.store_market(now, snapshot());
        cache.clear();
        assert!(cache.market(now).is_none());
    }
}
