//! PipGrowth Runner: run orchestration and the presentation view model.
//!
//! This crate builds on `pipgrowth-core` to provide:
//! - Validated runs with a deterministic run id
//! - Number formatting (grouped currency, trimmed percentages)
//! - Ledger table rows, summary lines, and chart series with log-axis ticks
//! - Artifact export: manifest, ledger CSV/JSON, markdown report

pub mod chart;
pub mod format;
pub mod reporting;
pub mod run;
pub mod summary;
pub mod table;

pub use chart::{AxisScale, AxisTick, ChartSeries};
pub use reporting::{export_run_with_report, ArtifactManager, ArtifactPaths, RunManifest};
pub use run::{run_growth, run_id, GrowthRun, RunError, SCHEMA_VERSION};
pub use summary::{Summary, SummaryLine};
pub use table::{build_table, render_text_table, TableRow, TABLE_HEADERS};
