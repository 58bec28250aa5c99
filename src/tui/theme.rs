//! Colors and the styles built from them.

use ratatui::style::{Color, Modifier, Style};

/// Palette shared by every widget.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Body text.
    pub fg: Color,
    /// Titles, key hints and the user's own lines.
    pub accent: Color,
    /// Coach replies and the live-model badge.
    pub coach: Color,
    /// Notices, warnings and mock mode.
    pub warning: Color,
    /// Error dialogs.
    pub error: Color,
    /// Secondary text.
    pub muted: Color,
    pub border: Color,
    /// Border of the input receiving keys.
    pub focus: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            accent: Color::Cyan,
            coach: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            muted: Color::DarkGray,
            border: Color::Gray,
            focus: Color::Cyan,
        }
    }
}

impl Theme {
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Bold accent, used for titles and key hints.
    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn coach_style(&self) -> Style {
        Style::default().fg(self.coach)
    }

    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Border of a block; the focused input gets the focus color.
    #[must_use]
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused { self.focus } else { self.border })
    }

    #[must_use]
    pub fn tab_selected_style(&self) -> Style {
        self.accent_style().add_modifier(Modifier::REVERSED)
    }

    /// Track and thumb styles of a pane scrollbar.
    #[must_use]
    pub fn scrollbar_styles(&self) -> (Style, Style) {
        (
            Style::default().fg(self.muted),
            Style::default().fg(self.accent),
        )
    }

    /// Dimmed gray, readable on light and dark terminals.
    #[must_use]
    pub fn placeholder_style(&self) -> Style {
        Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
    }
}
