//! Trial ledger export (CSV/JSON).
//!
//! Values are written in shortest round-trip form, so parsing the CSV gives
//! back the exact `f64`s. The rounded view lives in the markdown report.

use anyhow::{Context, Result};
use std::path::Path;

use pipgrowth_core::TrialRecord;

pub const LEDGER_CSV_HEADER: [&str; 6] = [
    "trial_index",
    "start_balance",
    "amount_risked",
    "profit",
    "end_balance",
    "growth_percent",
];

pub fn ledger_csv(records: &[TrialRecord]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(LEDGER_CSV_HEADER)?;

    for r in records {
        wtr.write_record([
            &r.trial_index.to_string(),
            &r.start_balance.to_string(),
            &r.amount_risked.to_string(),
            &r.profit.to_string(),
            &r.end_balance.to_string(),
            &r.growth_percent.to_string(),
        ])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

pub fn write_ledger_csv(path: &Path, records: &[TrialRecord]) -> Result<()> {
    let csv = ledger_csv(records)?;
    std::fs::write(path, csv)
        .with_context(|| format!("Failed to write ledger CSV {}", path.display()))?;
    Ok(())
}

pub fn write_ledger_json(path: &Path, records: &[TrialRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records).context("Failed to serialize ledger")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write ledger JSON {}", path.display()))?;
    Ok(())
}
