//! Export posts to Markdown

use anyhow::{Context, Result};
use std::path::Path;

use crate::exporter::{ExportReport, Exporter, MarkdownExporter};
use crate::Wxr2Md;

/// Parse `input` and write every post into the configured output directory
pub fn run(app: &Wxr2Md, input: &Path) -> Result<ExportReport> {
    let start = std::time::Instant::now();

    let posts = app.load(input)?;
    tracing::info!("Loaded {} items from \"{}\"", posts.len(), posts.title);

    let output_dir = app.output_dir();
    let mut exporter = MarkdownExporter::with_config(&posts, app.config.clone());
    exporter.set_dir_path(&output_dir)?;

    let report = exporter
        .export()
        .with_context(|| format!("Export to {:?} stopped", output_dir))?;

    let duration = start.elapsed();
    tracing::info!("Completed in {:.2}s", duration.as_secs_f64());

    Ok(report)
}
