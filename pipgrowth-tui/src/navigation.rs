//! Keyboard navigation and event handling
//!
//! Maps keyboard events to app actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

const PAGE: usize = 10;

/// Handle keyboard input and update app state
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // The help overlay swallows everything except its own toggles and quit.
    if app.show_help {
        match key.code {
            KeyCode::Char('?') | KeyCode::Esc => app.toggle_help(),
            KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
            _ => {}
        }
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Left | KeyCode::Char('h') if app.focus == crate::app::Focus::Chart => {
            app.select_previous()
        }
        KeyCode::Right if app.focus == crate::app::Focus::Chart => app.select_next(),
        KeyCode::PageUp => app.page_up(PAGE),
        KeyCode::PageDown => app.page_down(PAGE),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),

        // Views
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        KeyCode::Char('l') | KeyCode::Char('L') => app.toggle_scale(),
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

/// Key bindings help text
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("q / Ctrl+C", "Quit"),
        ("↑/k, ↓/j", "Previous / next trade"),
        ("←/h, →", "Previous / next trade (chart focus)"),
        ("PgUp, PgDn", "Jump 10 trades"),
        ("g / G", "First / last trade"),
        ("Tab", "Switch focus chart / ledger"),
        ("l", "Toggle log / linear balance axis"),
        ("?", "Toggle this help"),
    ]
}
