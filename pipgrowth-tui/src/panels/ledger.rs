//! Ledger panel - one row per simulated trade
//!
//! Columns: trade #, starting balance, risk %, amount risked, profit,
//! ending balance, growth %. Numbers are right-aligned and the table scrolls
//! to keep the selected row visible.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Cell, Row, StatefulWidget, Table, TableState, Widget},
};

use pipgrowth_runner::{TableRow, TABLE_HEADERS};

use crate::theme::Theme;

/// Ledger panel widget
pub struct LedgerPanel<'a> {
    rows: &'a [TableRow],
    selected: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> LedgerPanel<'a> {
    pub fn new(rows: &'a [TableRow], selected: usize, theme: &'a Theme) -> Self {
        Self {
            rows,
            selected,
            focused: false,
            theme,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

fn right(text: &str) -> Cell<'_> {
    Cell::from(Line::from(text).alignment(Alignment::Right))
}

impl<'a> Widget for LedgerPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" Ledger ({} trades) ", self.rows.len()))
            .borders(Borders::ALL)
            .border_style(self.theme.border(self.focused))
            .style(Style::default().bg(self.theme.background));

        let header = Row::new(TABLE_HEADERS.map(right))
            .style(self.theme.header())
            .height(1);

        let body = self.rows.iter().map(|row| {
            Row::new(row.cells().map(right))
                .style(Style::default().fg(self.theme.text_primary))
                .height(1)
        });

        let widths = [
            Constraint::Length(7),
            Constraint::Length(16),
            Constraint::Length(7),
            Constraint::Length(13),
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Min(9),
        ];

        let table = Table::new(body, widths)
            .header(header)
            .block(block)
            .column_spacing(1)
            .row_highlight_style(self.theme.selected_row());

        let mut state = TableState::default();
        if !self.rows.is_empty() {
            state.select(Some(self.selected.min(self.rows.len() - 1)));
        }

        StatefulWidget::render(table, area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::buffer_text;
    use pipgrowth_core::{simulate, SimulationParameters};
    use pipgrowth_runner::build_table;

    fn reference_rows() -> Vec<TableRow> {
        build_table(&simulate(&SimulationParameters::reference()))
    }

    fn render(panel: LedgerPanel, height: u16) -> String {
        let area = Rect::new(0, 0, 100, height);
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_ledger_renders_headers_and_first_trade() {
        let theme = Theme::default();
        let rows = reference_rows();
        let content = render(LedgerPanel::new(&rows, 0, &theme), 12);

        assert!(content.contains("Ledger (30 trades)"));
        assert!(content.contains("Starting Balance"));
        assert!(content.contains("Growth %"));
        assert!(content.contains("20.00"));
        assert!(content.contains("25.98"));
        assert!(content.contains("23.0%"));
        assert!(content.contains("29.9%"));
    }

    #[test]
    fn test_ledger_scrolls_to_selection() {
        let theme = Theme::default();
        let rows = reference_rows();
        let content = render(LedgerPanel::new(&rows, 29, &theme), 10);

        assert!(content.contains("51,204.08"));
        assert!(!content.contains("25.98"));
    }

    #[test]
    fn test_empty_ledger() {
        let theme = Theme::default();
        let content = render(LedgerPanel::new(&[], 0, &theme), 6);
        assert!(content.contains("Ledger (0 trades)"));
    }
}
