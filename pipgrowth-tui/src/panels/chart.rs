//! Chart panel - balance after each trade
//!
//! Displays:
//! - Balance curve (log10 axis by default, `l` toggles linear)
//! - Selected trade marker, mirrored from the ledger selection
//! - Tooltip for the selected trade in the title

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Widget},
};

use pipgrowth_runner::{AxisScale, AxisTick, ChartSeries};

use crate::theme::Theme;

/// Chart panel widget
pub struct ChartPanel<'a> {
    series: &'a ChartSeries,
    scale: AxisScale,
    selected: Option<usize>,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ChartPanel<'a> {
    pub fn new(series: &'a ChartSeries, scale: AxisScale, theme: &'a Theme) -> Self {
        Self {
            series,
            scale,
            selected: None,
            focused: false,
            theme,
        }
    }

    pub fn selected(mut self, index: usize) -> Self {
        self.selected = Some(index);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn title(&self) -> String {
        match self.selected.and_then(|i| self.series.tooltip(i)) {
            Some((trade, balance)) => {
                format!(" Balance ({}) | {trade}: {balance} ", self.scale.label())
            }
            None => format!(" Balance ({}) ", self.scale.label()),
        }
    }

    fn labels(&self, ticks: Vec<AxisTick>) -> Vec<Span<'static>> {
        ticks
            .into_iter()
            .map(|t| Span::styled(t.label, Style::default().fg(self.theme.text_secondary)))
            .collect()
    }
}

impl<'a> Widget for ChartPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.title())
            .borders(Borders::ALL)
            .border_style(self.theme.border(self.focused))
            .style(Style::default().bg(self.theme.background));

        let curve = self.series.plot_points(self.scale);
        if curve.is_empty() {
            Paragraph::new("No trades simulated")
                .style(Style::default().fg(self.theme.text_secondary))
                .block(block)
                .render(area, buf);
            return;
        }

        // The marker is looked up by trial so it stays aligned when log mode drops points.
        let marker: Vec<(f64, f64)> = self
            .selected
            .and_then(|i| self.series.points.get(i))
            .and_then(|&(trial, _)| curve.iter().copied().find(|&(x, _)| x == trial))
            .into_iter()
            .collect();

        let datasets = vec![
            Dataset::default()
                .name("Balance")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(self.theme.accent))
                .data(&curve),
            Dataset::default()
                .marker(symbols::Marker::Block)
                .graph_type(GraphType::Scatter)
                .style(
                    Style::default()
                        .fg(self.theme.positive)
                        .add_modifier(Modifier::BOLD),
                )
                .data(&marker),
        ];

        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .title(Span::styled("Trade", Style::default().fg(self.theme.text_secondary)))
                    .style(Style::default().fg(self.theme.muted))
                    .bounds(self.series.x_bounds())
                    .labels(self.labels(self.series.x_ticks())),
            )
            .y_axis(
                Axis::default()
                    .title(Span::styled(
                        "Balance",
                        Style::default().fg(self.theme.text_secondary),
                    ))
                    .style(Style::default().fg(self.theme.muted))
                    .bounds(self.series.y_bounds(self.scale))
                    .labels(self.labels(self.series.y_ticks(self.scale))),
            );

        chart.render(area, buf);
    }
}
