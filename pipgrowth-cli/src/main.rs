//! PipGrowth CLI: simulate, export, and preset commands.
//!
//! Commands:
//! - `simulate`: print the summary header and ledger table (or JSON)
//! - `export`: write manifest, ledger CSV/JSON, and optional markdown report
//! - `presets`: list the named parameter presets

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pipgrowth_core::{GrowthConfig, Preset};
use pipgrowth_runner::{
    build_table, export_run_with_report, render_text_table, run_growth, GrowthRun, Summary,
};

#[derive(Parser)]
#[command(
    name = "pipgrowth",
    about = "PipGrowth CLI: compounding growth over consecutive winning trades"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the parameters come from. Neither flag means the 20 pip challenge.
#[derive(Args, Debug, Default)]
struct Source {
    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Named preset (see `pipgrowth presets`).
    #[arg(long)]
    preset: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate and print the summary and ledger table.
    Simulate {
        #[command(flatten)]
        source: Source,

        /// Print the run as JSON instead of tables.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Simulate and write artifacts to `<output-dir>/<run_id>/`.
    Export {
        #[command(flatten)]
        source: Source,

        /// Output directory for artifacts.
        #[arg(long, default_value = "results")]
        output_dir: PathBuf,

        /// Also write a markdown report.
        #[arg(long, default_value_t = false)]
        report: bool,
    },
    /// List named presets.
    Presets {
        /// Print each preset as a ready-to-edit TOML config.
        #[arg(long, default_value_t = false)]
        toml: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PIPGROWTH_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate { source, json } => run_simulate(&source, json),
        Commands::Export {
            source,
            output_dir,
            report,
        } => run_export(&source, output_dir, report),
        Commands::Presets { toml } => run_presets(toml),
    }
}

fn resolve_config(source: &Source) -> Result<GrowthConfig> {
    if source.config.is_some() && source.preset.is_some() {
        bail!("--config and --preset are mutually exclusive");
    }
    Ok(GrowthConfig::resolve(
        source.config.as_deref(),
        source.preset.as_deref(),
    )?)
}

fn resolve_run(source: &Source) -> Result<GrowthRun> {
    let config = resolve_config(source)?;
    let run = run_growth(&config)?;
    info!(run_id = %run.run_id, trials = run.simulation.records.len(), "simulated");
    Ok(run)
}

fn run_simulate(source: &Source, json: bool) -> Result<()> {
    let run = resolve_run(source)?;
    if json {
        println!("{}", render_json(&run)?);
    } else {
        print!("{}", render_text(&run));
    }
    Ok(())
}

fn render_text(run: &GrowthRun) -> String {
    let summary = Summary::from_run(run);
    let table = render_text_table(&build_table(&run.simulation));
    format!("{}\n{}", summary.to_text(), table)
}

fn render_json(run: &GrowthRun) -> Result<String> {
    let value = serde_json::json!({
        "summary": Summary::from_run(run),
        "run": run,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

fn run_export(source: &Source, output_dir: PathBuf, report: bool) -> Result<()> {
    let run = resolve_run(source)?;
    let paths = export_run_with_report(&output_dir, &run, report)?;

    print!("{}", Summary::from_run(&run).to_text());
    println!();
    println!("Artifacts saved to: {}", paths.run_dir.display());
    println!("  {}", paths.manifest.display());
    println!("  {}", paths.ledger_csv.display());
    println!("  {}", paths.ledger_json.display());
    if let Some(report) = &paths.report_markdown {
        println!("  {}", report.display());
    }
    Ok(())
}

fn run_presets(toml: bool) -> Result<()> {
    for preset in Preset::ALL {
        if toml {
            println!("# {}: {}", preset.name(), preset.description());
            println!("{}", GrowthConfig::from_preset(preset).to_toml()?);
        } else {
            println!("{:<14} {}", preset.name(), preset.description());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn source(config: Option<PathBuf>, preset: Option<&str>) -> Source {
        Source {
            config,
            preset: preset.map(str::to_string),
        }
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn neither_flag_uses_reference() {
        let config = resolve_config(&Source::default()).unwrap();
        assert_eq!(config, GrowthConfig::default());
    }

    #[test]
    fn both_flags_are_rejected() {
        let err = resolve_config(&source(Some("a.toml".into()), Some("aggressive"))).unwrap_err();
        assert!(err.to_string().contains("mutually exclusive"));
    }

    #[test]
    fn unknown_preset_lists_choices() {
        let err = resolve_config(&source(None, Some("moonshot"))).unwrap_err();
        assert!(err.to_string().contains("conservative"));
    }

    #[test]
    fn invalid_config_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[simulation]\nstarting_balance = 20.0\nrisk_fraction = 0.0\nreward_risk_ratio = 1.3\ntarget_balance = 50000.0\nmax_trials = 30"
        )
        .unwrap();
        let err = resolve_run(&source(Some(file.path().to_path_buf()), None)).unwrap_err();
        assert!(err.to_string().contains("invalid simulation parameters"));
    }

    #[test]
    fn text_output_has_summary_and_table() {
        let run = resolve_run(&Source::default()).unwrap();
        let text = render_text(&run);
        assert!(text.starts_with("=== 20 Pip Challenge ==="));
        assert!(text.contains("Consecutive Wins Needed: 30"));
        assert!(text.contains("51,204.08"));
    }

    #[test]
    fn json_output_parses() {
        let run = resolve_run(&source(None, Some("conservative"))).unwrap();
        let value: serde_json::Value = serde_json::from_str(&render_json(&run).unwrap()).unwrap();
        assert_eq!(value["run"]["run_id"], run.run_id.as_str());
        assert_eq!(value["summary"]["title"], "Growth Simulation (conservative)");
    }

    #[test]
    fn export_writes_into_run_directory() {
        let dir = tempfile::tempdir().unwrap();
        run_export(&Source::default(), dir.path().to_path_buf(), true).unwrap();

        let run = resolve_run(&Source::default()).unwrap();
        let run_dir = dir.path().join(&run.run_id);
        assert!(run_dir.join("manifest.json").exists());
        assert!(run_dir.join("ledger.csv").exists());
        assert!(run_dir.join("report.md").exists());
    }
}
