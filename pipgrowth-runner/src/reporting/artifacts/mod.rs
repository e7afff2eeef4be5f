//! Artifact manager for persisting run outputs.

mod ledger;
mod manifest;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::run::GrowthRun;

pub use ledger::{ledger_csv, LEDGER_CSV_HEADER};
pub use manifest::RunManifest;

/// Artifact paths returned after export.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub run_dir: PathBuf,
    pub manifest: PathBuf,
    pub ledger_csv: PathBuf,
    pub ledger_json: PathBuf,
    pub report_markdown: Option<PathBuf>,
}

/// Manages writing all artifacts for a run.
#[derive(Debug, Clone)]
pub struct ArtifactManager {
    output_dir: PathBuf,
}

impl ArtifactManager {
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&output_dir)
            .context("Failed to create artifact output directory")?;
        Ok(Self { output_dir })
    }

    /// Save complete run artifacts under `<output_dir>/<run_id>/`.
    ///
    /// Identical parameters share a run id, so re-running overwrites in place.
    pub fn save_run(&self, run: &GrowthRun) -> Result<ArtifactPaths> {
        let run_dir = self.output_dir.join(&run.run_id);
        std::fs::create_dir_all(&run_dir).context("Failed to create run artifact directory")?;

        let manifest_path = run_dir.join("manifest.json");
        manifest::write_manifest(&manifest_path, run)?;

        let ledger_csv = run_dir.join("ledger.csv");
        let ledger_json = run_dir.join("ledger.json");
        ledger::write_ledger_csv(&ledger_csv, &run.simulation.records)?;
        ledger::write_ledger_json(&ledger_json, &run.simulation.records)?;

        debug!(run_dir = %run_dir.display(), "artifacts written");

        Ok(ArtifactPaths {
            run_dir,
            manifest: manifest_path,
            ledger_csv,
            ledger_json,
            report_markdown: None,
        })
    }
}
