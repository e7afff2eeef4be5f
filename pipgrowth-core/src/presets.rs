//! Named parameter presets.

use thiserror::Error;

use crate::params::SimulationParameters;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown preset '{name}'. Valid: {}", Preset::names().join(", "))]
pub struct PresetError {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// $20 → $50,000 at 23% risk and 1:1.3.
    TwentyPip,
    /// 2% risk, 1:2, ten-fold target over up to 200 trials.
    Conservative,
    /// 50% risk at 1:1 toward the same $50,000 target.
    Aggressive,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::TwentyPip, Preset::Conservative, Preset::Aggressive];

    pub fn name(self) -> &'static str {
        match self {
            Preset::TwentyPip => "twenty_pip",
            Preset::Conservative => "conservative",
            Preset::Aggressive => "aggressive",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Preset::TwentyPip => "20 pip challenge: $20 start, 23% risk, 1:1.3, $50,000 target",
            Preset::Conservative => "$1,000 start, 2% risk, 1:2, $10,000 target, 200 trials",
            Preset::Aggressive => "$20 start, 50% risk, 1:1, $50,000 target, 30 trials",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|p| p.name()).collect()
    }

    pub fn from_name(name: &str) -> Result<Self, PresetError> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| PresetError {
                name: name.to_string(),
            })
    }

    pub fn params(self) -> SimulationParameters {
        match self {
            Preset::TwentyPip => SimulationParameters::reference(),
            Preset::Conservative => SimulationParameters::new(1_000.0, 0.02, 2.0, 10_000.0, 200),
            Preset::Aggressive => SimulationParameters::new(20.0, 0.5, 1.0, 50_000.0, 30),
        }
    }
}
