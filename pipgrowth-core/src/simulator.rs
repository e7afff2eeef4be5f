//! Compounding growth simulator.
//!
//! A single bounded loop over winning trials. Each trial risks a fixed
//! fraction of the *current* balance, so growth compounds. The loop has one
//! success exit (target reached) and one fallback exit (trial cap reached).
//!
//! `simulate` is total: it never validates and never fails. Degenerate
//! parameters produce well-defined results:
//! - `max_trials == 0` → empty ledger, no growth figure, `CapReached`
//! - zero risk or zero ratio → flat ledger that runs to the cap
//! - `target_balance <= starting_balance` → exactly one trial
//!
//! Balances are carried at full `f64` precision; rounding belongs to the
//! presentation layer.

use serde::{Deserialize, Serialize};

use crate::params::SimulationParameters;
use crate::record::TrialRecord;

/// How the simulation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SimulationOutcome {
    /// The record at `trial` is the first whose end balance meets the target.
    TargetReached { trial: u32 },
    /// The trial cap was exhausted before the target was met.
    CapReached,
}

impl SimulationOutcome {
    pub fn reached_target(self) -> bool {
        matches!(self, Self::TargetReached { .. })
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::TargetReached { .. } => "target reached",
            Self::CapReached => "trial cap reached",
        }
    }
}

/// Full output of one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthSimulation {
    pub params: SimulationParameters,
    pub records: Vec<TrialRecord>,
    pub outcome: SimulationOutcome,
}

impl GrowthSimulation {
    /// Number of trials simulated (equal to the ledger length).
    pub fn trials_to_target(&self) -> usize {
        self.records.len()
    }

    /// Growth from the starting balance to the last end balance, in percent.
    ///
    /// `None` when no trial was simulated.
    pub fn total_growth_percent(&self) -> Option<f64> {
        self.records
            .last()
            .map(|last| (last.end_balance / self.params.starting_balance - 1.0) * 100.0)
    }

    /// End balance of the last trial, or the starting balance if there were none.
    pub fn final_balance(&self) -> f64 {
        self.records
            .last()
            .map_or(self.params.starting_balance, |r| r.end_balance)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Run the compounding loop for `params`.
pub fn simulate(params: &SimulationParameters) -> GrowthSimulation {
    let mut records = Vec::with_capacity(params.max_trials.min(4096) as usize);
    let mut balance = params.starting_balance;
    let mut outcome = SimulationOutcome::CapReached;

    for trial_index in 1..=params.max_trials {
        let record = TrialRecord::winning(trial_index, balance, params);
        balance = record.end_balance;
        records.push(record);

        if balance >= params.target_balance {
            outcome = SimulationOutcome::TargetReached { trial: trial_index };
            break;
        }
    }

    GrowthSimulation {
        params: *params,
        records,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_reaches_target_on_the_capped_trial() {
        let sim = simulate(&SimulationParameters::reference());

        assert_eq!(sim.trials_to_target(), 30);
        assert_eq!(sim.outcome, SimulationOutcome::TargetReached { trial: 30 });

        let penultimate = &sim.records[28];
        let last = &sim.records[29];
        assert!(penultimate.end_balance < 50_000.0);
        assert!(last.end_balance >= 50_000.0);
        assert!((last.end_balance - 51_204.075_333).abs() < 1e-3);
    }

    #[test]
    fn reference_end_balance_matches_closed_form() {
        let sim = simulate(&SimulationParameters::reference());
        for record in &sim.records {
            let expected = 20.0 * 1.299_f64.powi(record.trial_index as i32);
            assert!(
                (record.end_balance - expected).abs() / expected < 1e-12,
                "trial {} drifted: {} vs {}",
                record.trial_index,
                record.end_balance,
                expected
            );
        }
    }

    #[test]
    fn total_growth_uses_first_and_last_balance() {
        let sim = simulate(&SimulationParameters::reference());
        let growth = sim.total_growth_percent().unwrap();
        assert!((growth - 255_920.376_665).abs() < 1e-3);
        assert!((sim.final_balance() - 51_204.075_333).abs() < 1e-3);
    }

    #[test]
    fn tighter_cap_truncates_without_reaching_target() {
        let mut params = SimulationParameters::reference();
        params.max_trials = 29;
        let sim = simulate(&params);

        assert_eq!(sim.trials_to_target(), 29);
        assert_eq!(sim.outcome, SimulationOutcome::CapReached);
        assert!(!sim.outcome.reached_target());
    }

    #[test]
    fn zero_cap_yields_empty_ledger() {
        let mut params = SimulationParameters::reference();
        params.max_trials = 0;
        let sim = simulate(&params);

        assert!(sim.is_empty());
        assert_eq!(sim.trials_to_target(), 0);
        assert_eq!(sim.total_growth_percent(), None);
        assert_eq!(sim.final_balance(), 20.0);
        assert_eq!(sim.outcome, SimulationOutcome::CapReached);
    }

    #[test]
    fn zero_risk_runs_flat_to_cap() {
        let params = SimulationParameters::new(100.0, 0.0, 1.3, 1_000.0, 12);
        let sim = simulate(&params);

        assert_eq!(sim.trials_to_target(), 12);
        assert!(sim.records.iter().all(|r| r.end_balance == 100.0));
        assert_eq!(sim.total_growth_percent(), Some(0.0));
        assert_eq!(sim.outcome, SimulationOutcome::CapReached);
    }

    #[test]
    fn target_at_or_below_start_stops_after_one_trial() {
        for target in [20.0, 10.0] {
            let params = SimulationParameters::new(20.0, 0.23, 1.3, target, 30);
            let sim = simulate(&params);
            assert_eq!(sim.trials_to_target(), 1);
            assert_eq!(sim.outcome, SimulationOutcome::TargetReached { trial: 1 });
        }
    }

    #[test]
    fn target_hit_exactly_counts_as_reached() {
        // 100 * (1 + 0.5 * 1.0) = 150 exactly
        let params = SimulationParameters::new(100.0, 0.5, 1.0, 150.0, 10);
        let sim = simulate(&params);
        assert_eq!(sim.outcome, SimulationOutcome::TargetReached { trial: 1 });
    }

    #[test]
    fn outcome_labels() {
        assert_eq!(
            SimulationOutcome::TargetReached { trial: 3 }.label(),
            "target reached"
        );
        assert_eq!(SimulationOutcome::CapReached.label(), "trial cap reached");
    }
}
