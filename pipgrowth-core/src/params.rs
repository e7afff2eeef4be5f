//! Simulation parameters and fail-fast validation.
//!
//! `SimulationParameters` is a plain value: fields are public so callers can
//! build degenerate inputs on purpose. The simulator never rejects them; every
//! outer surface (config loading, runner, binaries) calls `validate()` first.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::win;

/// Invalid simulation parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("starting_balance must be > 0, got {0}")]
    NonPositiveStartingBalance(f64),

    #[error("risk_fraction must be in (0, 1), got {0}")]
    RiskFractionOutOfRange(f64),

    #[error("reward_risk_ratio must be > 0, got {0}")]
    NonPositiveRewardRisk(f64),

    #[error("a winning trial does not grow the balance (multiplier {multiplier})")]
    NoGrowth { multiplier: f64 },

    #[error("target_balance ({target}) must exceed starting_balance ({start})")]
    TargetNotAboveStart { start: f64, target: f64 },

    #[error("max_trials must be at least 1")]
    ZeroTrialCap,
}

/// Inputs to the growth simulator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Balance before the first trial.
    pub starting_balance: f64,
    /// Fraction of the current balance put at risk each trial.
    pub risk_fraction: f64,
    /// Profit multiple applied to the risked amount on a win.
    pub reward_risk_ratio: f64,
    /// Balance at which the simulation stops.
    pub target_balance: f64,
    /// Hard cap on simulated trials, independent of the target.
    pub max_trials: u32,
}

impl SimulationParameters {
    pub fn new(
        starting_balance: f64,
        risk_fraction: f64,
        reward_risk_ratio: f64,
        target_balance: f64,
        max_trials: u32,
    ) -> Self {
        Self {
            starting_balance,
            risk_fraction,
            reward_risk_ratio,
            target_balance,
            max_trials,
        }
    }

    /// The 20 pip challenge: $20 start, 23% risk, 1:1.3, $50,000 target, 30 trials.
    pub fn reference() -> Self {
        Self::new(20.0, 0.23, 1.3, 50_000.0, 30)
    }

    /// Balance multiplier of a single winning trial: `1 + risk * ratio`.
    pub fn growth_multiplier(&self) -> f64 {
        1.0 + self.risk_fraction * self.reward_risk_ratio
    }

    /// Check every field, returning the first violation found.
    pub fn validate(&self) -> Result<(), ParamError> {
        for (field, value) in [
            ("starting_balance", self.starting_balance),
            ("risk_fraction", self.risk_fraction),
            ("reward_risk_ratio", self.reward_risk_ratio),
            ("target_balance", self.target_balance),
        ] {
            if !value.is_finite() {
                return Err(ParamError::NotFinite { field, value });
            }
        }

        if self.starting_balance <= 0.0 {
            return Err(ParamError::NonPositiveStartingBalance(self.starting_balance));
        }
        if self.risk_fraction <= 0.0 || self.risk_fraction >= 1.0 {
            return Err(ParamError::RiskFractionOutOfRange(self.risk_fraction));
        }
        if self.reward_risk_ratio <= 0.0 {
            return Err(ParamError::NonPositiveRewardRisk(self.reward_risk_ratio));
        }
        // Tiny risk times ratio can round the multiplier to exactly 1.0.
        if win(self.starting_balance, self) <= self.starting_balance {
            return Err(ParamError::NoGrowth {
                multiplier: self.growth_multiplier(),
            });
        }
        if self.target_balance <= self.starting_balance {
            return Err(ParamError::TargetNotAboveStart {
                start: self.starting_balance,
                target: self.target_balance,
            });
        }
        if self.max_trials == 0 {
            return Err(ParamError::ZeroTrialCap);
        }

        Ok(())
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self::reference()
    }
}
