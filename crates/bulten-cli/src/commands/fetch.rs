//! Fetch command: run one cycle and print the dashboard summary

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use bulten_core::{FetchCache, Pipeline};

use super::{load_config, truncate};

pub async fn cmd_fetch(config_path: Option<&Path>, top: Option<usize>, no_heat: bool) -> Result<()> {
    let config = load_config(config_path, top)?;
    let cache_ttl = config.cache_ttl_secs;
    let pipeline = Pipeline::new(config);

    let mut cache = FetchCache::new(cache_ttl);
    let now = Utc::now();
    let bulletin = pipeline
        .run_cycle(&mut cache, now)
        .await
        .context("Fetch cycle failed")?;

    println!();
    println!("📊 Piyasa Görünümü");
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   BIST 100: {} ({:+.2}%)",
        bulletin.snapshot.index_close, bulletin.snapshot.index_change_pct
    );
    println!("   USD/TRY: {}", bulletin.snapshot.fx_rate);
    println!("   {}", bulletin.market_summary);

    if !no_heat {
        println!();
        println!("🌡️  Sektör Isı Göstergesi");
        println!("   ─────────────────────────────────────────────────────────────");
        for (sector, value, label) in bulletin.heat.entries() {
            println!(
                "   {:12} {} ({:+})",
                sector.as_str(),
                label.as_str(),
                value
            );
        }
    }

    println!();
    println!("📰 Öne Çıkan Haberler");
    println!("   ─────────────────────────────────────────────────────────────");
    if bulletin.items.is_empty() {
        println!("   Son saatlerde haber bulunamadı.");
        return Ok(());
    }

    for (i, item) in bulletin.items.iter().enumerate() {
        let sectors: Vec<&str> = item.sectors.iter().map(|s| s.as_str()).collect();
        println!("   {}. {}", i + 1, truncate(&item.article.title, 70));
        if !item.article.summary.is_empty() {
            println!("      {}", truncate(&item.article.summary, 90));
        }
        println!("      Sector impact: {}", sectors.join(", "));
        println!("      Why this matters: {}", item.rationale);
        println!(
            "      Source: {} | Score: {:.2}",
            item.article.source,
            item.article.score.unwrap_or(0.0)
        );
        println!();
    }

    Ok(())
}
