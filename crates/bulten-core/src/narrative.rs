//! Narrative generation
//!
//! Fixed Turkish templates: a one-line market summary from the snapshot and a
//! "why this matters" rationale per article. The rationale rules are checked
//! first-match-wins against the TITLE only, unlike sector classification
//! which also reads the summary.

use crate::models::{MarketSnapshot, NewsArticle};

const MONETARY_KEYWORDS: &[&str] = &["faiz", "tcmb", "merkez bankası"];
const EARNINGS_KEYWORDS: &[&str] = &["bilanço", "kar", "zarar"];
const GLOBAL_MACRO_KEYWORDS: &[&str] = &["fed", "abd", "enflasyon"];
const COMMODITY_KEYWORDS: &[&str] = &["petrol", "emtia", "altın"];

const MONETARY_SENTENCE: &str = "Para politikası adımları, özellikle bankacılık sektörü olmak \
     üzere tüm piyasa değerlemelerini etkiler.";
const EARNINGS_SENTENCE: &str = "Finansal sonuçlar, şirketin operasyonel gücünü ve mevcut \
     fiyatlamaların sürdürülebilirliğini gösterir.";
const GLOBAL_MACRO_SENTENCE: &str = "Küresel makro gelişmeler, gelişen piyasalara yönelik risk \
     iştahını ve sermaye akımlarını belirler.";
const COMMODITY_SENTENCE: &str = "Emtia fiyatları, enflasyon beklentileri ve ilgili sektörler \
     üzerinde belirleyici rol oynar.";
const GENERIC_SENTENCE: &str = "Bu gelişme, yatırımcı algısı ve piyasa beklentileri açısından \
     önem taşıyor.";

/// One-line market summary. A strictly positive change reads as rising;
/// zero goes to the falling branch.
pub fn market_summary(snapshot: &MarketSnapshot) -> String {
    let direction = if snapshot.index_change_pct > 0.0 {
        "yükselişle"
    } else {
        "düşüşle"
    };

    format!(
        "BIST 100 günü %{} {} {} seviyesinde tamamladı. USD/TRY {} seviyesinde izleniyor.",
        snapshot.index_change_pct.abs(),
        direction,
        snapshot.index_close,
        snapshot.fx_rate
    )
}

/// First-match-wins rationale for an article, keyed on the title alone.
/// Priority: monetary policy, earnings, global macro, commodities.
pub fn why_this_matters(article: &NewsArticle) -> String {
    let title = article.title.to_lowercase();

    let sentence = if contains_any(&title, MONETARY_KEYWORDS) {
        MONETARY_SENTENCE
    } else if contains_any(&title, EARNINGS_KEYWORDS) {
        EARNINGS_SENTENCE
    } else if contains_any(&title, GLOBAL_MACRO_KEYWORDS) {
        GLOBAL_MACRO_SENTENCE
    } else if contains_any(&title, COMMODITY_KEYWORDS) {
        COMMODITY_SENTENCE
    } else {
        GENERIC_SENTENCE
    };

    sentence.to_string()
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}
