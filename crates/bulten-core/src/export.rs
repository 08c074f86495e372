//! Bulletin export
//!
//! Two fixed flat document formats written under the output directory:
//! - Markdown (`newsletter.md`): the detailed rendering with sector tags,
//!   source/score captions, and the sector heat section
//! - Plain text (`newsletter.txt`): the plain rendering with just titles,
//!   summaries, and rationales
//!
//! Fixed filenames; a prior export is silently overwritten.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::models::Bulletin;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Text,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Text => "text",
        }
    }

    /// Fixed output filename for this format.
    pub fn filename(&self) -> &'static str {
        match self {
            Self::Markdown => "newsletter.md",
            Self::Text => "newsletter.txt",
        }
    }

    pub fn all() -> &'static [ExportFormat] {
        &[Self::Markdown, Self::Text]
    }
}

/// Render and write one document. Creates the output directory if absent and
/// returns the written path.
pub fn export_bulletin(
    bulletin: &Bulletin,
    format: ExportFormat,
    output_dir: &Path,
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;

    let content = match format {
        ExportFormat::Markdown => render_markdown(bulletin),
        ExportFormat::Text => render_text(bulletin),
    };

    let path = output_dir.join(format.filename());
    fs::write(&path, content)?;
    info!("Wrote {} newsletter to {}", format.as_str(), path.display());
    Ok(path)
}

fn heading(bulletin: &Bulletin) -> String {
    format!(
        "Günlük Piyasa Bülteni – {}",
        bulletin.generated_at.format("%d %B %Y")
    )
}

/// Detailed rendering: sector tags, captions, and the heat section.
fn render_markdown(bulletin: &Bulletin) -> String {
    let mut doc = format!("# {}\n\n", heading(bulletin));

    for (i, item) in bulletin.items.iter().enumerate() {
        doc.push_str(&format!("## {}. {}\n\n", i + 1, item.article.title));
        doc.push_str(&format!("{}\n\n", item.article.summary));
        doc.push_str(&format!("Why this matters: {}\n\n", item.rationale));

        let sectors: Vec<&str> = item.sectors.iter().map(|s| s.as_str()).collect();
        doc.push_str(&format!("**Sector impact:** {}\n", sectors.join(", ")));
        doc.push_str(&format!(
            "*Source: {} | Score: {:.2}*\n\n",
            item.article.source,
            item.article.score.unwrap_or(0.0)
        ));
    }

    doc.push_str("## Sektör Isı Göstergesi\n\n");
    for (sector, value, label) in bulletin.heat.entries() {
        doc.push_str(&format!(
            "- {}: {} ({})\n",
            sector.as_str(),
            label.as_str(),
            value
        ));
    }
    doc.push('\n');

    doc.push_str("## Piyasa Özeti\n\n");
    doc.push_str(&format!("{}\n", bulletin.market_summary));

    doc
}

/// Plain rendering: titles, summaries, and rationales only.
fn render_text(bulletin: &Bulletin) -> String {
    let mut doc = format!("{}\n\n", heading(bulletin));

    for (i, item) in bulletin.items.iter().enumerate() {
        doc.push_str(&format!("{}. {}\n", i + 1, item.article.title));
        doc.push_str(&format!("{}\n", item.article.summary));
        doc.push_str(&format!("Why this matters: {}\n\n", item.rationale));
    }

    doc.push_str("Piyasa Özeti\n");
    doc.push_str(&format!("{}\n", bulletin.market_summary));

    doc
}
