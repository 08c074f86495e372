//! Export command: run one cycle and write the newsletter documents

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;

use bulten_core::{export_bulletin, ExportFormat, FetchCache, Pipeline};

use super::load_config;

pub async fn cmd_export(
    config_path: Option<&Path>,
    dir: Option<PathBuf>,
    top: Option<usize>,
) -> Result<()> {
    let config = load_config(config_path, top)?;
    let output_dir = dir.unwrap_or_else(|| config.export.output_dir.clone());
    let cache_ttl = config.cache_ttl_secs;
    let pipeline = Pipeline::new(config);

    let mut cache = FetchCache::new(cache_ttl);
    let now = Utc::now();
    let bulletin = pipeline
        .run_cycle(&mut cache, now)
        .await
        .context("Fetch cycle failed")?;

    for &format in ExportFormat::all() {
        let path = export_bulletin(&bulletin, format, &output_dir)
            .with_context(|| format!("Failed to write {} newsletter", format.as_str()))?;
        println!("📄 Wrote {}", path.display());
    }

    println!(
        "✅ Newsletter generated with {} article(s)",
        bulletin.items.len()
    );
    Ok(())
}
