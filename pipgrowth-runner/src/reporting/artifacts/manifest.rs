//! Run manifest export (JSON).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use pipgrowth_core::{SimulationOutcome, SimulationParameters};

use crate::run::GrowthRun;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub schema_version: u32,
    pub run_id: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub parameters: SimulationParameters,
    pub outcome: SimulationOutcome,
    pub trials_to_target: usize,
    pub total_growth_percent: Option<f64>,
    pub final_balance: f64,
    pub projected_trials: Option<u32>,
}

impl RunManifest {
    pub fn from_run(run: &GrowthRun) -> Self {
        let sim = &run.simulation;
        Self {
            schema_version: run.schema_version,
            run_id: run.run_id.clone(),
            timestamp: chrono::Utc::now(),
            parameters: *run.params(),
            outcome: sim.outcome,
            trials_to_target: sim.trials_to_target(),
            total_growth_percent: sim.total_growth_percent(),
            final_balance: sim.final_balance(),
            projected_trials: run.projected_trials,
        }
    }
}

pub fn write_manifest(path: &Path, run: &GrowthRun) -> Result<()> {
    let manifest = RunManifest::from_run(run);

    let json =
        serde_json::to_string_pretty(&manifest).context("Failed to serialize run manifest")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write manifest to {}", path.display()))?;
    Ok(())
}
