//! PipGrowth Core: deterministic compounding-growth simulator.
//!
//! This crate contains the whole computation:
//! - Simulation parameters with fail-fast validation
//! - Per-trial ledger records
//! - The bounded compounding loop and its summary values
//! - Closed-form projection of wins needed
//! - Named presets and TOML configuration
//!
//! Nothing here formats or renders; see `pipgrowth-runner` for the view model.

pub mod config;
pub mod params;
pub mod presets;
pub mod projection;
pub mod record;
pub mod simulator;

pub use config::{ConfigError, DisplayConfig, GrowthConfig};
pub use params::{ParamError, SimulationParameters};
pub use presets::{Preset, PresetError};
pub use projection::{cap_binds, projected_trials};
pub use record::{win, TrialRecord};
pub use simulator::{simulate, GrowthSimulation, SimulationOutcome};
