//! Help overlay: key bindings in a centered popup.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::navigation::key_bindings_help;
use crate::theme::Theme;

pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

impl<'a> Widget for HelpOverlay<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bindings = key_bindings_help();
        let lines: Vec<Line> = bindings
            .iter()
            .map(|(keys, desc)| {
                Line::from(vec![
                    Span::styled(format!(" {:>12}  ", keys), Style::default().fg(self.theme.accent)),
                    Span::styled(*desc, Style::default().fg(self.theme.text_secondary)),
                ])
            })
            .collect();

        let popup = centered(area, 56, bindings.len() as u16 + 2);
        Clear.render(popup, buf);
        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(Span::styled(" Keys (? to close) ", self.theme.header()))
                    .borders(Borders::ALL)
                    .border_style(self.theme.border(true))
                    .style(Style::default().bg(self.theme.background)),
            )
            .render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::buffer_text;

    #[test]
    fn test_help_overlay_lists_bindings() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        HelpOverlay::new(&theme).render(area, &mut buf);
        let content = buffer_text(&buf);

        assert!(content.contains("Keys (? to close)"));
        assert!(content.contains("Toggle log / linear balance axis"));
        assert!(content.contains("Quit"));
    }
}
