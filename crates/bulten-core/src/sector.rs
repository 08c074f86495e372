//! Sector classification and heat aggregation
//!
//! Classification is non-exclusive: the three keyword groups are checked
//! independently and an article may land in several sectors. Heat adds one
//! sentiment delta per article to every matched sector except BroadMarket.

use crate::config::{SectorConfig, SentimentConfig};
use crate::models::{NewsArticle, Sector, SectorHeat};
use crate::scoring::any_keyword;

/// Tag an article with its matching sectors. Never empty: an article that
/// matches no group is tagged BroadMarket.
pub fn classify(article: &NewsArticle, sectors: &SectorConfig) -> Vec<Sector> {
    let text = article.matched_text();
    let mut matched = Vec::new();

    if any_keyword(&text, &sectors.banking) {
        matched.push(Sector::Banking);
    }
    if any_keyword(&text, &sectors.industrial) {
        matched.push(Sector::Industrial);
    }
    if any_keyword(&text, &sectors.energy) {
        matched.push(Sector::Energy);
    }

    if matched.is_empty() {
        matched.push(Sector::BroadMarket);
    }
    matched
}

/// Sentiment delta for one article: +1 for any positive keyword, -1 for any
/// negative keyword. Both checks always apply, so an article carrying both
/// cancels to 0.
pub fn sentiment_delta(article: &NewsArticle, sentiment: &SentimentConfig) -> i32 {
    let text = article.matched_text();
    let positive = if any_keyword(&text, &sentiment.positive) {
        1
    } else {
        0
    };
    let negative = if any_keyword(&text, &sentiment.negative) {
        1
    } else {
        0
    };
    positive - negative
}

/// Accumulate sentiment deltas across the selected articles into per-sector
/// heat counters.
pub fn aggregate_heat(
    articles: &[NewsArticle],
    sectors: &SectorConfig,
    sentiment: &SentimentConfig,
) -> SectorHeat {
    let mut heat = SectorHeat::default();
    for article in articles {
        let delta = sentiment_delta(article, sentiment);
        for sector in classify(article, sectors) {
            heat.add(sector, delta);
        }
    }
    heat
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::HeatLabel;
    use chrono::{TimeZone, Utc};

    fn article(title: &str, summary: &str) -> NewsArticle {
        NewsArticle {
            title: title.to_string(),
            summary: summary.to_string(),
            source: "Bigpara".to_string(),
            link: None,
            published: Utc.with_ymd_and_hms(2024, 11, 4, 12, 0, 0).unwrap(),
            score: None,
        }
    }

    #[test]
    fn test_classify_banking() {
        let config = Config::embedded().unwrap();
        let a = article("TCMB faiz kararı", "");
        assert_eq!(classify(&a, &config.sectors), vec![Sector::Banking]);
    }

    #[test]
    fn test_classify_checks_summary_too() {
        let config = Config::embedded().unwrap();
        let a = article("Günün haberleri", "Elektrik fiyatlarında düzenleme");
        assert_eq!(classify(&a, &config.sectors), vec![Sector::Energy]);
    }

    #[test]
    fn test_classify_multi_label() {
        let config = Config::embedded().unwrap();
        let a = article("Banka kredileri ve enerji yatırımları", "");
        assert_eq!(
            classify(&a, &config.sectors),
            vec![Sector::Banking, Sector::Energy]
        );
    }

    #[test]
    fn test_classify_falls_back_to_broad_market() {
        let config = Config::embedded().unwrap();
        let a = article("Hava durumu raporu", "");
        assert_eq!(classify(&a, &config.sectors), vec![Sector::BroadMarket]);
    }

    #[test]
    fn test_sentiment_delta_values() {
        let config = Config::embedded().unwrap();

        assert_eq!(
            sentiment_delta(&article("Rekor yükseliş", ""), &config.sentiment),
            1
        );
        assert_eq!(
            sentiment_delta(&article("Sert düşüş", ""), &config.sentiment),
            -1
        );
        assert_eq!(
            sentiment_delta(&article("Gün sakin geçti", ""), &config.sentiment),
            0
        );
        // Positive and negative both present cancel to zero.
        assert_eq!(
            sentiment_delta(
                &article("Güçlü başlangıç sonrası düşüş", ""),
                &config.sentiment
            ),
            0
        );
    }

    #[test]
    fn test_aggregate_heat_sums_deltas() {
        let config = Config::embedded().unwrap();
        let articles = vec![
            article("Bankalarda rekor kar", ""),       // Banking +1
            article("Kredi faizlerinde yükseliş", ""), // Banking +1
            article("Sanayi üretiminde gerileme", ""), // Industrial -1
        ];

        let heat = aggregate_heat(&articles, &config.sectors, &config.sentiment);
        assert_eq!(heat.banking, 2);
        assert_eq!(heat.industrial, -1);
        assert_eq!(heat.energy, 0);
        assert_eq!(heat.label(Sector::Banking), HeatLabel::Positive);
        assert_eq!(heat.label(Sector::Industrial), HeatLabel::Negative);
        assert_eq!(heat.label(Sector::Energy), HeatLabel::Neutral);
    }

    #[test]
    fn test_aggregate_heat_multi_sector_article() {
        let config = Config::embedded().unwrap();
        // One positive article tagged both Banking and Energy bumps both.
        let articles = vec![article("Banka ve enerji hisselerinde güçlü artış", "")];

        let heat = aggregate_heat(&articles, &config.sectors, &config.sentiment);
        assert_eq!(heat.banking, 1);
        assert_eq!(heat.energy, 1);
        assert_eq!(heat.industrial, 0);
    }

    #[test]
    fn test_aggregate_heat_broad_market_not_counted() {
        let config = Config::embedded().unwrap();
        let articles = vec![article("Piyasalarda olumlu hava", "")];

        let heat = aggregate_heat(&articles, &config.sectors, &config.sentiment);
        assert_eq!(heat.banking, 0);
        assert_eq!(heat.industrial, 0);
        assert_eq!(heat.energy, 0);
    }
}
