//! Summary panel - title plus the `Label: value` header lines.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use pipgrowth_core::SimulationOutcome;
use pipgrowth_runner::Summary;

use crate::theme::Theme;

pub struct SummaryPanel<'a> {
    summary: &'a Summary,
    outcome: SimulationOutcome,
    theme: &'a Theme,
}

impl<'a> SummaryPanel<'a> {
    pub fn new(summary: &'a Summary, outcome: SimulationOutcome, theme: &'a Theme) -> Self {
        Self {
            summary,
            outcome,
            theme,
        }
    }

    /// Rows needed to show every line inside the border.
    pub fn height(summary: &Summary) -> u16 {
        summary.lines.len() as u16 + 2
    }
}

impl<'a> Widget for SummaryPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = self
            .summary
            .lines
            .iter()
            .map(|l| l.label.len() + 1)
            .max()
            .unwrap_or(0);

        let lines: Vec<Line> = self
            .summary
            .lines
            .iter()
            .map(|l| {
                let value_style = if l.label == "Outcome" {
                    Style::default()
                        .fg(self.theme.outcome_color(self.outcome))
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(self.theme.text_primary)
                };
                Line::from(vec![
                    Span::styled(
                        format!(" {:<label_width$} ", format!("{}:", l.label)),
                        Style::default().fg(self.theme.muted),
                    ),
                    Span::styled(l.value.clone(), value_style),
                ])
            })
            .collect();

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.summary.title),
                self.theme.header(),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.muted))
            .style(Style::default().bg(self.theme.background));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
