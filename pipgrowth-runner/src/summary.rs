//! Summary header: the run's parameters and its two derived figures.

use serde::Serialize;

use pipgrowth_core::SimulationOutcome;

use crate::format::{format_money, format_ratio, trim_number};
use crate::run::GrowthRun;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub title: String,
    pub lines: Vec<SummaryLine>,
}

impl Summary {
    pub fn from_run(run: &GrowthRun) -> Self {
        let params = run.params();
        let symbol = run.config.display.currency_symbol.as_str();
        let sim = &run.simulation;

        let lines = vec![
            line("Starting Balance", format_money(symbol, params.starting_balance)),
            line(
                "Risk per Trade",
                format!(
                    "{}% of current balance",
                    trim_number(params.risk_fraction * 100.0, 2)
                ),
            ),
            line("Reward:Risk Ratio", format_ratio(params.reward_risk_ratio)),
            line("Target", format_money(symbol, params.target_balance)),
            line("Consecutive Wins Needed", sim.trials_to_target().to_string()),
            line("Total Growth", total_growth_text(sim.total_growth_percent())),
            line("Outcome", outcome_text(run)),
        ];

        Self {
            title: run.config.display.title.clone(),
            lines,
        }
    }

    /// `Label: value` lines for terminal output.
    pub fn to_text(&self) -> String {
        let width = self.lines.iter().map(|l| l.label.len()).max().unwrap_or(0) + 1;
        let mut out = format!("=== {} ===\n", self.title);
        for l in &self.lines {
            out.push_str(&format!("{:<width$} {}\n", format!("{}:", l.label), l.value));
        }
        out
    }

    pub fn value(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|l| l.label == label)
            .map(|l| l.value.as_str())
    }
}

fn line(label: &'static str, value: String) -> SummaryLine {
    SummaryLine { label, value }
}

/// Two fixed decimals, `n/a` when no trial ran.
pub fn total_growth_text(growth: Option<f64>) -> String {
    match growth {
        Some(g) if g.is_finite() => format!("{:.2}%", g),
        _ => "n/a".to_string(),
    }
}

fn outcome_text(run: &GrowthRun) -> String {
    match run.simulation.outcome {
        SimulationOutcome::TargetReached { trial } => {
            format!("target reached on trade {trial}")
        }
        SimulationOutcome::CapReached => match run.projected_trials {
            Some(n) => format!(
                "trial cap of {} reached before target (needs {n} wins)",
                run.params().max_trials
            ),
            None => format!(
                "trial cap of {} reached; target unreachable",
                run.params().max_trials
            ),
        },
    }
}
