//! Ledger table view model: one row of display strings per trial.

use serde::Serialize;

use pipgrowth_core::{GrowthSimulation, TrialRecord};

use crate::format::{format_currency, format_percent, format_risk_percent};

pub const TABLE_HEADERS: [&str; 7] = [
    "Trade #",
    "Starting Balance",
    "Risk %",
    "Amount Risked",
    "Profit",
    "Ending Balance",
    "Growth %",
];

/// A formatted ledger row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub trial: String,
    pub start_balance: String,
    pub risk_percent: String,
    pub amount_risked: String,
    pub profit: String,
    pub end_balance: String,
    pub growth_percent: String,
}

impl TableRow {
    pub fn from_record(record: &TrialRecord, risk_fraction: f64) -> Self {
        Self {
            trial: record.trial_index.to_string(),
            start_balance: format_currency(record.start_balance),
            risk_percent: format_risk_percent(risk_fraction),
            amount_risked: format_currency(record.amount_risked),
            profit: format_currency(record.profit),
            end_balance: format_currency(record.end_balance),
            growth_percent: format_percent(record.growth_percent),
        }
    }

    /// Cells in `TABLE_HEADERS` order.
    pub fn cells(&self) -> [&str; 7] {
        [
            &self.trial,
            &self.start_balance,
            &self.risk_percent,
            &self.amount_risked,
            &self.profit,
            &self.end_balance,
            &self.growth_percent,
        ]
    }
}

pub fn build_table(simulation: &GrowthSimulation) -> Vec<TableRow> {
    let risk = simulation.params.risk_fraction;
    simulation
        .records
        .iter()
        .map(|r| TableRow::from_record(r, risk))
        .collect()
}

/// Plain-text table with right-aligned columns, for terminal output.
pub fn render_text_table(rows: &[TableRow]) -> String {
    let mut widths = TABLE_HEADERS.map(str::len);
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row.cells()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &TABLE_HEADERS, &widths);
    let rule_len = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');
    for row in rows {
        push_line(&mut out, &row.cells(), &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[&str; 7], widths: &[usize; 7]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{:>width$}", cell, width = *w))
        .collect();
    out.push_str(&line.join("  "));
    out.push('\n');
}
