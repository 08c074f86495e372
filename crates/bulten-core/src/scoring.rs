//! News scoring and selection
//!
//! Relevance is a static heuristic: keyword tier points + source trust bonus
//! + a linearly decaying recency bonus. Deterministic given a fixed `now`,
//! which callers thread through explicitly.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::config::ScoringConfig;
use crate::models::NewsArticle;

/// True when any keyword occurs (case-insensitively) in the lowercased text.
pub(crate) fn any_keyword(text: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|kw| text.contains(&kw.to_lowercase()))
}

/// Recency bonus: starts at `cap` points for a just-published article and
/// decays linearly to zero over `cap` hours. Clamped to [0, cap].
pub fn recency_bonus(published: DateTime<Utc>, now: DateTime<Utc>, cap: f64) -> f64 {
    let hours_old = (now - published).num_seconds() as f64 / 3600.0;
    (cap - hours_old).clamp(0.0, cap)
}

/// Score one article. Pure function of (article fields, config, now).
pub fn score_article(article: &NewsArticle, config: &ScoringConfig, now: DateTime<Utc>) -> f64 {
    let text = article.matched_text();
    let mut score = 0.0;

    for kw in &config.high_keywords {
        if text.contains(&kw.to_lowercase()) {
            score += config.high_weight;
        }
    }

    for kw in &config.medium_keywords {
        if text.contains(&kw.to_lowercase()) {
            score += config.medium_weight;
        }
    }

    if config.is_trusted(&article.source) {
        score += config.trusted_bonus;
    }

    score + recency_bonus(article.published, now, config.recency_cap_hours)
}

/// Score every article, sort descending, keep the first `n`.
///
/// The sort is stable: ties keep their original relative order. Fewer than
/// `n` articles returns all of them.
pub fn select_top(
    mut articles: Vec<NewsArticle>,
    config: &ScoringConfig,
    now: DateTime<Utc>,
    n: usize,
) -> Vec<NewsArticle> {
    for article in &mut articles {
        article.score = Some(score_article(article, config, now));
    }

    articles.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    articles.truncate(n);
    articles
}
