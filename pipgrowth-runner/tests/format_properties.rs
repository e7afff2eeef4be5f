//! Property tests for display formatting.
//!
//! 1. Grouped currency parses back to the value rounded to cents
//! 2. Grouping commas sit every three integer digits
//! 3. Table rows mirror the ledger one-to-one

use pipgrowth_core::{simulate, SimulationParameters};
use pipgrowth_runner::format::{format_currency, format_percent};
use pipgrowth_runner::{build_table, ChartSeries};
use proptest::prelude::*;

proptest! {
    #[test]
    fn currency_parses_back(value in 0.0..1e12_f64) {
        let text = format_currency(value);
        let parsed: f64 = text.replace(',', "").parse().unwrap();
        prop_assert!((parsed - value).abs() <= 0.005 + value * 1e-15);
    }

    #[test]
    fn commas_group_by_three(value in 0.0..1e12_f64) {
        let text = format_currency(value);
        let int_part = text.split('.').next().unwrap();
        for group in int_part.split(',').skip(1) {
            prop_assert_eq!(group.len(), 3);
        }
        let first = int_part.split(',').next().unwrap();
        prop_assert!(!first.is_empty() && first.len() <= 3);
    }

    #[test]
    fn percent_never_has_trailing_zero_decimals(value in -1e6..1e6_f64) {
        let text = format_percent(value);
        let number = text.trim_end_matches('%');
        if number.contains('.') {
            prop_assert!(!number.ends_with('0'));
        }
    }

    #[test]
    fn table_and_chart_mirror_ledger(
        risk in 0.01..0.9_f64,
        ratio in 0.1..3.0_f64,
        cap in 1u32..120,
    ) {
        let params = SimulationParameters::new(100.0, risk, ratio, 1e7, cap);
        let sim = simulate(&params);
        let rows = build_table(&sim);
        let series = ChartSeries::from_simulation(&sim, "$");

        prop_assert_eq!(rows.len(), sim.records.len());
        prop_assert_eq!(series.points.len(), sim.records.len());
        for (i, row) in rows.iter().enumerate() {
            prop_assert_eq!(row.trial.clone(), (i + 1).to_string());
        }
    }
}
