//! Per-trial ledger entries.

use serde::{Deserialize, Serialize};

use crate::params::SimulationParameters;

/// One simulated winning trial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    /// 1-based position in the sequence.
    pub trial_index: u32,
    pub start_balance: f64,
    pub amount_risked: f64,
    pub profit: f64,
    pub end_balance: f64,
    pub growth_percent: f64,
}

impl TrialRecord {
    /// Build the record for a winning trial starting from `start_balance`.
    pub fn winning(trial_index: u32, start_balance: f64, params: &SimulationParameters) -> Self {
        let (amount_risked, profit) = stake(start_balance, params);
        let end_balance = win(start_balance, params);

        Self {
            trial_index,
            start_balance,
            amount_risked,
            profit,
            end_balance,
            growth_percent: (end_balance / start_balance - 1.0) * 100.0,
        }
    }
}

/// Balance after one winning trial.
pub fn win(balance: f64, params: &SimulationParameters) -> f64 {
    let (_, profit) = stake(balance, params);
    balance + profit
}

/// `(amount_risked, profit)` for a win at `balance`.
fn stake(balance: f64, params: &SimulationParameters) -> (f64, f64) {
    let amount_risked = balance * params.risk_fraction;
    (amount_risked, amount_risked * params.reward_risk_ratio)
}
