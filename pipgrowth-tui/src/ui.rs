//! Frame layout: summary header, chart, ledger, status bar, help overlay.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, Focus};
use crate::panels::{ChartPanel, HelpOverlay, LedgerPanel, SummaryPanel};
use crate::theme::Theme;

pub fn draw(f: &mut Frame, app: &App) {
    let theme = Theme::default();
    let [header, chart, ledger, status] = Layout::vertical([
        Constraint::Length(SummaryPanel::height(&app.summary)),
        Constraint::Percentage(50),
        Constraint::Min(6),
        Constraint::Length(1),
    ])
    .areas(f.area());

    f.render_widget(
        SummaryPanel::new(&app.summary, app.run.simulation.outcome, &theme),
        header,
    );
    f.render_widget(
        ChartPanel::new(&app.series, app.scale, &theme)
            .selected(app.selected)
            .focused(app.focus == Focus::Chart),
        chart,
    );
    f.render_widget(
        LedgerPanel::new(&app.rows, app.selected, &theme).focused(app.focus == Focus::Ledger),
        ledger,
    );
    render_status_bar(f, status, app, &theme);

    if app.show_help {
        f.render_widget(HelpOverlay::new(&theme), f.area());
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let position = if app.rows.is_empty() {
        "no trades".to_string()
    } else {
        format!("trade {}/{}", app.selected + 1, app.rows.len())
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} | {position} ", app.focus.label()),
            Style::default().fg(theme.accent),
        ),
        Span::styled(
            "| q:quit Tab:focus l:log/linear ?:help",
            Style::default().fg(theme.muted),
        ),
    ];

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(theme.warning)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::buffer_text;
    use pipgrowth_core::GrowthConfig;
    use pipgrowth_runner::run_growth;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw_app(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 48)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_draw_full_frame() {
        let app = App::new(run_growth(&GrowthConfig::default()).unwrap());
        let content = draw_app(&app);

        assert!(content.contains("20 Pip Challenge"));
        assert!(content.contains("Balance (log)"));
        assert!(content.contains("Ledger (30 trades)"));
        assert!(content.contains("trade 1/30"));
    }

    #[test]
    fn test_draw_help_and_status_message() {
        let mut app = App::new(run_growth(&GrowthConfig::default()).unwrap());
        app.toggle_scale();
        app.toggle_help();
        let content = draw_app(&app);

        assert!(content.contains("Balance axis: linear"));
        assert!(content.contains("Keys (? to close)"));
    }
}
