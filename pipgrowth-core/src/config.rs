//! TOML configuration for a growth run.
//!
//! ```toml
//! [simulation]
//! starting_balance = 20.0
//! risk_fraction = 0.23
//! reward_risk_ratio = 1.3
//! target_balance = 50000.0
//! max_trials = 30
//!
//! [display]
//! title = "20 Pip Challenge"
//! currency_symbol = "$"
//! ```
//!
//! `[display]` is optional. Parameters are validated on load.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::params::{ParamError, SimulationParameters};
use crate::presets::{Preset, PresetError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid simulation parameters: {0}")]
    Invalid(#[from] ParamError),

    #[error(transparent)]
    Preset(#[from] PresetError),
}

/// Presentation settings carried alongside the parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub title: String,
    pub currency_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "20 Pip Challenge".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GrowthConfig {
    pub simulation: SimulationParameters,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl GrowthConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: GrowthConfig = toml::from_str(content)?;
        config.simulation.validate()?;
        Ok(config)
    }

    pub fn from_preset(preset: Preset) -> Self {
        let display = match preset {
            Preset::TwentyPip => DisplayConfig::default(),
            other => DisplayConfig {
                title: format!("Growth Simulation ({})", other.name()),
                ..DisplayConfig::default()
            },
        };
        Self {
            simulation: preset.params(),
            display,
        }
    }

    /// Config from a file, a named preset, or the reference defaults when
    /// neither is given. Callers enforce that at most one is set.
    pub fn resolve(path: Option<&Path>, preset: Option<&str>) -> Result<Self, ConfigError> {
        match (path, preset) {
            (Some(path), _) => Self::from_file(path),
            (None, Some(name)) => Ok(Self::from_preset(Preset::from_name(name)?)),
            (None, None) => Ok(Self::default()),
        }
    }

    /// Render back to TOML (used for `presets --toml` and round-trip tests).
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
