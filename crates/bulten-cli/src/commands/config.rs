//! Config command: show the resolved configuration

use std::path::Path;

use anyhow::Result;

use super::load_config;

pub fn cmd_config(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path, None)?;

    println!();
    println!("⚙️  Configuration");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Feeds:");
    for feed in &config.feeds {
        println!("     {:12} {}", feed.name, feed.url);
    }
    println!(
        "   Keywords: {} high / {} medium",
        config.scoring.high_keywords.len(),
        config.scoring.medium_keywords.len()
    );
    println!(
        "   Trusted sources: {}",
        config.scoring.trusted_sources.join(", ")
    );
    println!(
        "   Window: {}h | Top-N: {} | Cache TTL: {}s",
        config.scoring.window_hours, config.scoring.top_n, config.cache_ttl_secs
    );
    println!(
        "   Symbols: {} / {}",
        config.market.index_symbol, config.market.fx_symbol
    );
    println!("   Output dir: {}", config.export.output_dir.display());

    Ok(())
}
