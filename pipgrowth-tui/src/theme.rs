//! Parrot/neon theme tokens for the PipGrowth TUI
//!
//! # Color Palette
//! - **Background**: Near-black / deep charcoal (base layer)
//! - **Accent**: Electric cyan (primary highlights, focus, balance line)
//! - **Positive**: Neon green (profit, target reached)
//! - **Negative**: Hot pink (errors)
//! - **Warning**: Neon orange (trial cap reached before target)
//! - **Neutral**: Cool purple (selection)
//! - **Muted**: Steel blue (axes, secondary text)

use ratatui::style::{Color, Modifier, Style};

use pipgrowth_core::SimulationOutcome;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub neutral: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub fn parrot_neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Green when the target was reached, orange when the cap cut the run short.
    pub fn outcome_color(&self, outcome: SimulationOutcome) -> Color {
        if outcome.reached_target() {
            self.positive
        } else {
            self.warning
        }
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.muted)
        }
    }

    pub fn header(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected_row(&self) -> Style {
        Style::default()
            .bg(self.neutral)
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_colors() {
        let theme = Theme::default();
        assert_eq!(
            theme.outcome_color(SimulationOutcome::TargetReached { trial: 30 }),
            theme.positive
        );
        assert_eq!(
            theme.outcome_color(SimulationOutcome::CapReached),
            theme.warning
        );
    }

    #[test]
    fn focused_border_uses_accent() {
        let theme = Theme::default();
        assert_eq!(theme.border(true).fg, Some(theme.accent));
        assert_eq!(theme.border(false).fg, Some(theme.muted));
    }
}
