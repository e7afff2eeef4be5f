//! Markdown report generator.

use crate::run::GrowthRun;
use crate::summary::Summary;
use crate::table::{build_table, TABLE_HEADERS};

pub struct MarkdownReportGenerator;

impl MarkdownReportGenerator {
    pub fn generate(&self, run: &GrowthRun) -> String {
        let summary = Summary::from_run(run);
        let mut report = format!(
            "# {} Report\n\nRun ID: `{}`\n\n## Summary\n",
            summary.title, run.run_id
        );
        for line in &summary.lines {
            report.push_str(&format!("- **{}:** {}\n", line.label, line.value));
        }

        report.push_str("\n## Detailed Breakdown\n\n");
        let rows = build_table(&run.simulation);
        if rows.is_empty() {
            report.push_str("No trades simulated.\n");
        } else {
            report.push_str(&format!("| {} |\n", TABLE_HEADERS.join(" | ")));
            report.push_str(&format!(
                "|{}|\n",
                TABLE_HEADERS.map(|_| "---:").join("|")
            ));
            for row in &rows {
                report.push_str(&format!("| {} |\n", row.cells().join(" | ")));
            }
        }

        report.push_str(
            "\n## Notes\n\
- Every trade in this ledger is a win; losses are not modeled.\n\
- Figures are rounded for display; `ledger.csv` holds full precision.\n",
        );

        report
    }
}
