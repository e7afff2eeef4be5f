//! Export orchestrator for artifacts and reports.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::reporting::artifacts::{ArtifactManager, ArtifactPaths};
use crate::reporting::reports::MarkdownReportGenerator;
use crate::run::GrowthRun;

pub fn export_run_with_report(
    output_dir: impl AsRef<Path>,
    run: &GrowthRun,
    include_report: bool,
) -> Result<ArtifactPaths> {
    let manager = ArtifactManager::new(output_dir)?;
    let mut paths = manager.save_run(run)?;

    if include_report {
        let report_path = paths.run_dir.join("report.md");
        let report = MarkdownReportGenerator.generate(run);
        std::fs::write(&report_path, report)
            .with_context(|| format!("Failed to write report {}", report_path.display()))?;
        paths.report_markdown = Some(report_path);
    }

    info!(run_id = %run.run_id, run_dir = %paths.run_dir.display(), "run exported");
    Ok(paths)
}
