//! Single-line status bar widget.

use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::Theme;

/// Status bar showing the last status message and the generation mode.
///
/// The left side shows `HH:MM:SS message`; the right side shows the model
/// in use, or `Mock mode` when no backend is configured.
pub struct StatusBarWidget<'a> {
    message: &'a str,
    updated_at: DateTime<Local>,
    model_id: Option<&'a str>,
    is_busy: bool,
    theme: &'a Theme,
}

impl<'a> StatusBarWidget<'a> {
    #[must_use]
    pub const fn new(
        message: &'a str,
        updated_at: DateTime<Local>,
        model_id: Option<&'a str>,
        is_busy: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            message,
            updated_at,
            model_id,
            is_busy,
            theme,
        }
    }

    fn mode_label(&self) -> String {
        match self.model_id {
            Some(model) => format!("Gemini {model} "),
            None => "Mock mode ".to_string(),
        }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mode = self.mode_label();
        #[allow(clippy::cast_possible_truncation)] // Label is a short ASCII string
        let mode_width = mode.len() as u16;
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(mode_width)]).areas(area);

        let (icon, icon_style) = if self.is_busy {
            ("▶ ", self.theme.accent_style())
        } else {
            ("· ", self.theme.muted_style())
        };

        let status = Line::from(vec![
            Span::styled(format!(" {icon}"), icon_style),
            Span::styled(
                format!("{} ", self.updated_at.format("%H:%M:%S")),
                self.theme.muted_style(),
            ),
            Span::styled(self.message, self.theme.text_style()),
        ]);
        Paragraph::new(status).render(left, buf);

        let mode_style = if self.model_id.is_some() {
            self.theme.coach_style()
        } else {
            self.theme.warning_style()
        };
        Paragraph::new(Line::from(Span::styled(mode, mode_style))).render(right, buf);
    }
}
