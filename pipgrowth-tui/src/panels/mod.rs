//! TUI panels
//!
//! - Summary: parameters, wins needed, total growth, outcome
//! - Chart: balance after each trade on a log (or linear) axis
//! - Ledger: per-trade table with the selected row highlighted
//! - Help: key binding overlay

pub mod chart;
pub mod help;
pub mod ledger;
pub mod summary;

pub use chart::ChartPanel;
pub use help::HelpOverlay;
pub use ledger::LedgerPanel;
pub use summary::SummaryPanel;

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut content = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            content.push_str(buf.cell((area.x + x, area.y + y)).map_or(" ", |c| c.symbol()));
        }
        content.push('\n');
    }
    content
}
