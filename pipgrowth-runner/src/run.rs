//! Growth runner: validates a config, simulates, and fingerprints the run.
//!
//! Entry points:
//! - `run_growth()`: from a `GrowthConfig` (file, preset, or default). Used by CLI and TUI.
//! - `run_id()`: BLAKE3 fingerprint of the parameters; identical inputs share an id.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use pipgrowth_core::{
    cap_binds, projected_trials, simulate, GrowthConfig, GrowthSimulation, ParamError,
    SimulationParameters,
};

/// Errors from the runner.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("invalid simulation parameters: {0}")]
    Invalid(#[from] ParamError),
}

/// Current schema version for persisted artifacts.
pub const SCHEMA_VERSION: u32 = 1;

/// A completed growth run plus everything the view layers need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthRun {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub run_id: String,
    pub config: GrowthConfig,
    pub simulation: GrowthSimulation,
    /// Closed-form wins needed, ignoring the cap. `None` if unreachable.
    pub projected_trials: Option<u32>,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl GrowthRun {
    pub fn params(&self) -> &SimulationParameters {
        &self.config.simulation
    }
}

/// Validate and simulate.
pub fn run_growth(config: &GrowthConfig) -> Result<GrowthRun, RunError> {
    let params = &config.simulation;
    params.validate()?;

    let run_id = run_id(params);
    debug!(
        run_id = %run_id,
        starting_balance = params.starting_balance,
        risk_fraction = params.risk_fraction,
        reward_risk_ratio = params.reward_risk_ratio,
        target_balance = params.target_balance,
        max_trials = params.max_trials,
        "starting growth simulation"
    );

    let simulation = simulate(params);
    let projected = projected_trials(params);
    if cap_binds(params) {
        info!(
            run_id = %run_id,
            max_trials = params.max_trials,
            projected_trials = ?projected,
            "trial cap ends the run before the target"
        );
    }

    info!(
        run_id = %run_id,
        trials = simulation.trials_to_target(),
        outcome = simulation.outcome.label(),
        final_balance = simulation.final_balance(),
        "growth simulation finished"
    );

    Ok(GrowthRun {
        schema_version: SCHEMA_VERSION,
        run_id,
        config: config.clone(),
        simulation,
        projected_trials: projected,
    })
}

/// Deterministic BLAKE3 hash over the canonical JSON of the parameters.
pub fn run_id(params: &SimulationParameters) -> String {
    let canonical = serde_json::json!({
        "starting_balance": params.starting_balance,
        "risk_fraction": params.risk_fraction,
        "reward_risk_ratio": params.reward_risk_ratio,
        "target_balance": params.target_balance,
        "max_trials": params.max_trials,
    });
    let hash = blake3::hash(canonical.to_string().as_bytes());
    hash.to_hex()[..16].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipgrowth_core::{Preset, SimulationOutcome};

    #[test]
    fn run_id_is_deterministic() {
        let params = SimulationParameters::reference();
        let id1 = run_id(&params);
        let id2 = run_id(&params);
        assert_eq!(id1, id2, "run id should be deterministic");
        assert_eq!(id1.len(), 16);
    }

    #[test]
    fn run_id_changes_with_params() {
        let a = SimulationParameters::reference();
        let mut b = a;
        b.max_trials = 31;
        assert_ne!(run_id(&a), run_id(&b));
    }

    #[test]
    fn reference_run_reaches_target() {
        let run = run_growth(&GrowthConfig::default()).unwrap();
        assert_eq!(run.simulation.outcome, SimulationOutcome::TargetReached { trial: 30 });
        assert_eq!(run.projected_trials, Some(30));
        assert!(!cap_binds(run.params()));
        assert_eq!(run.schema_version, SCHEMA_VERSION);
    }

    #[test]
    fn capped_run_stops_at_the_cap() {
        let mut config = GrowthConfig::default();
        config.simulation.max_trials = 12;
        let run = run_growth(&config).unwrap();
        assert!(cap_binds(run.params()));
        assert_eq!(run.simulation.outcome, SimulationOutcome::CapReached);
        assert_eq!(run.simulation.records.len(), 12);
    }

    #[test]
    fn flat_growth_is_rejected_before_simulating() {
        let mut config = GrowthConfig::default();
        config.simulation.risk_fraction = 1e-9;
        config.simulation.reward_risk_ratio = 1e-9;
        config.simulation.max_trials = u32::MAX;
        let err = run_growth(&config).unwrap_err();
        assert!(matches!(err, RunError::Invalid(ParamError::NoGrowth { .. })));
    }

    #[test]
    fn invalid_config_fails_fast() {
        let mut config = GrowthConfig::default();
        config.simulation.max_trials = 0;
        let err = run_growth(&config).unwrap_err();
        assert!(matches!(err, RunError::Invalid(ParamError::ZeroTrialCap)));
    }

    #[test]
    fn presets_all_run() {
        for preset in Preset::ALL {
            let run = run_growth(&GrowthConfig::from_preset(preset)).unwrap();
            assert!(!run.simulation.records.is_empty(), "{}", preset.name());
        }
    }

    #[test]
    fn json_round_trip_keeps_ledger() {
        let run = run_growth(&GrowthConfig::default()).unwrap();
        let json = serde_json::to_string(&run).unwrap();
        let back: GrowthRun = serde_json::from_str(&json).unwrap();
        assert_eq!(back.run_id, run.run_id);
        assert_eq!(back.simulation.outcome, run.simulation.outcome);
        assert_eq!(back.simulation.records.len(), run.simulation.records.len());
        let (a, b) = (back.simulation.final_balance(), run.simulation.final_balance());
        assert!((a - b).abs() / b < 1e-12);
    }
}
