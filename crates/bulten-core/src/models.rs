//! Core data model: news articles, market snapshots, sectors, and the
//! assembled bulletin handed to rendering and export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A normalized news entry from one of the configured feeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    /// Feed description, empty string when the feed omits it.
    pub summary: String,
    /// Configured feed name (e.g. "Bigpara"), not the feed's self-declared title.
    pub source: String,
    pub link: Option<String>,
    pub published: DateTime<Utc>,
    /// Relevance score. `None` until the scoring engine runs; set exactly once.
    pub score: Option<f64>,
}

impl NewsArticle {
    /// Lowercased title + summary, the text the keyword matchers run against.
    pub fn matched_text(&self) -> String {
        format!("{} {}", self.title, self.summary).to_lowercase()
    }
}

/// Latest daily bar of the benchmark index plus the FX rate.
/// Immutable once constructed; one snapshot per fetch cycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub index_close: f64,
    /// Percent change of the latest bar: (close/open - 1) * 100.
    pub index_change_pct: f64,
    pub fx_rate: f64,
}

/// Fixed sector buckets for news classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    Banking,
    Industrial,
    Energy,
    /// Fallback when no sector keyword matches. Never accumulated in heat.
    BroadMarket,
}

impl Sector {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Banking => "Banking",
            Self::Industrial => "Industrial",
            Self::Energy => "Energy",
            Self::BroadMarket => "Broad Market",
        }
    }

    /// The sectors that participate in heat accumulation.
    pub fn heat_sectors() -> &'static [Sector] {
        &[Self::Banking, Self::Industrial, Self::Energy]
    }
}

impl std::str::FromStr for Sector {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "banking" => Ok(Self::Banking),
            "industrial" => Ok(Self::Industrial),
            "energy" => Ok(Self::Energy),
            "broad market" | "broad_market" => Ok(Self::BroadMarket),
            _ => Err(format!("Unknown sector: {}", s)),
        }
    }
}

/// Tri-state sentiment summary for a sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatLabel {
    Positive,
    Negative,
    Neutral,
}

impl HeatLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

/// Sentiment accumulators per heat sector.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SectorHeat {
    pub banking: i32,
    pub industrial: i32,
    pub energy: i32,
}

impl SectorHeat {
    /// Add a sentiment delta to one sector's accumulator.
    /// BroadMarket contributions are dropped.
    pub fn add(&mut self, sector: Sector, delta: i32) {
        match sector {
            Sector::Banking => self.banking += delta,
            Sector::Industrial => self.industrial += delta,
            Sector::Energy => self.energy += delta,
            Sector::BroadMarket => {}
        }
    }

    pub fn value(&self, sector: Sector) -> i32 {
        match sector {
            Sector::Banking => self.banking,
            Sector::Industrial => self.industrial,
            Sector::Energy => self.energy,
            Sector::BroadMarket => 0,
        }
    }

    /// Project an accumulator to its tri-state label.
    pub fn label(&self, sector: Sector) -> HeatLabel {
        let v = self.value(sector);
        if v > 0 {
            HeatLabel::Positive
        } else if v < 0 {
            HeatLabel::Negative
        } else {
            HeatLabel::Neutral
        }
    }

    /// (sector, accumulator, label) rows in display order.
    pub fn entries(&self) -> Vec<(Sector, i32, HeatLabel)> {
        Sector::heat_sectors()
            .iter()
            .map(|&s| (s, self.value(s), self.label(s)))
            .collect()
    }
}

/// One ranked article with its derived annotations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletinItem {
    pub article: NewsArticle,
    pub sectors: Vec<Sector>,
    /// "Why this matters" sentence for this article.
    pub rationale: String,
}

/// The assembled result of one fetch cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bulletin {
    pub generated_at: DateTime<Utc>,
    pub snapshot: MarketSnapshot,
    pub market_summary: String,
    pub items: Vec<BulletinItem>,
    pub heat: SectorHeat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sector_roundtrip() {
        for s in [
            Sector::Banking,
            Sector::Industrial,
            Sector::Energy,
            Sector::BroadMarket,
        ] {
            let parsed: Sector = s.as_str().parse().unwrap();
            assert_eq!(parsed, s);
        }
        assert!("utilities".parse::<Sector>().is_err());
    }

    #[test]
    fn test_heat_label_projection() {
        let mut heat = SectorHeat::default();
        heat.add(Sector::Banking, 2);
        heat.add(Sector::Energy, -1);
        assert_eq!(heat.label(Sector::Banking), HeatLabel::Positive);
        assert_eq!(heat.label(Sector::Energy), HeatLabel::Negative);
        assert_eq!(heat.label(Sector::Industrial), HeatLabel::Neutral);
    }

    #[test]
    fn test_heat_ignores_broad_market() {
        let mut heat = SectorHeat::default();
        heat.add(Sector::BroadMarket, 5);
        assert_eq!(heat.value(Sector::Banking), 0);
        assert_eq!(heat.value(Sector::Industrial), 0);
        assert_eq!(heat.value(Sector::Energy), 0);
    }

    #[test]
    fn test_matched_text_lowercases() {
        let article = NewsArticle {
            title: "TCMB Faiz".to_string(),
            summary: "BIST Endeks".to_string(),
            source: "Bigpara".to_string(),
            link: None,
            published: Utc::now(),
            score: None,
        };
        assert_eq!(article.matched_text(), "tcmb faiz bist endeks");
    }
}
