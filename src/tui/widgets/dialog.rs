//! Modal message dialog widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::tui::Theme;

/// Preferred dialog width, clamped to the screen.
const DIALOG_WIDTH: u16 = 60;

/// Severity of a dialog, used for its label and border color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// Precondition not met, nothing is wrong.
    Info,
    /// A required artifact is missing.
    Warning,
    /// A backend call or save failed.
    Error,
}

impl DialogKind {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }

    fn border_style(self, theme: &Theme) -> Style {
        match self {
            Self::Info => theme.accent_style(),
            Self::Warning => theme.warning_style(),
            Self::Error => theme.error_style(),
        }
    }
}

/// A centered modal with a title, a wrapped message and a dismiss hint.
pub struct DialogWidget<'a> {
    kind: DialogKind,
    title: &'a str,
    message: &'a str,
    theme: &'a Theme,
}

impl<'a> DialogWidget<'a> {
    #[must_use]
    pub const fn new(kind: DialogKind, title: &'a str, message: &'a str, theme: &'a Theme) -> Self {
        Self {
            kind,
            title,
            message,
            theme,
        }
    }

    /// Returns the centered area the dialog occupies inside `screen`.
    #[must_use]
    pub fn area(&self, screen: Rect) -> Rect {
        let width = DIALOG_WIDTH.min(screen.width);
        let text_width = usize::from(width.saturating_sub(4)).max(1);
        let message_rows: usize = self
            .message
            .split('\n')
            .map(|line| line.chars().count().div_ceil(text_width).max(1))
            .sum();
        // Borders, blank separator and hint line.
        let wanted = u16::try_from(message_rows + 4).unwrap_or(u16::MAX);
        let height = wanted.min(screen.height);

        let x = screen.x + screen.width.saturating_sub(width) / 2;
        let y = screen.y + screen.height.saturating_sub(height) / 2;
        Rect::new(x, y, width, height)
    }
}

impl Widget for DialogWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = self.area(area);
        Clear.render(popup_area, buf);

        let mut lines: Vec<Line> = self
            .message
            .split('\n')
            .map(|line| Line::from(Span::styled(line, self.theme.text_style())))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("[Enter] ", self.theme.accent_style()),
            Span::styled("OK", self.theme.muted_style()),
        ]));

        let block = Block::default()
            .title(format!(" {}: {} ", self.kind.label(), self.title))
            .title_style(self.kind.border_style(self.theme))
            .borders(Borders::ALL)
            .border_style(self.kind.border_style(self.theme));

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .render(popup_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_title_message_and_hint() -> Result<()> {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 20))?;
        terminal.draw(|frame| {
            let widget = DialogWidget::new(
                DialogKind::Warning,
                "Missing Fact Library",
                "Save a fact library before running this check.",
                &theme,
            );
            frame.render_widget(widget, frame.area());
        })?;

        let text = screen_text(&terminal);
        assert!(text.contains("Warning: Missing Fact Library"));
        assert!(text.contains("Save a fact library before running this check."));
        assert!(text.contains("[Enter] OK"));
        Ok(())
    }

    #[test]
    fn area_is_centered_and_clamped() {
        let theme = Theme::default();
        let widget = DialogWidget::new(DialogKind::Info, "t", "short", &theme);

        let area = widget.area(Rect::new(0, 0, 100, 30));
        assert_eq!(area.width, 60);
        assert_eq!(area.height, 5);
        assert_eq!(area.x, 20);

        let small = widget.area(Rect::new(0, 0, 30, 3));
        assert_eq!(small.width, 30);
        assert_eq!(small.height, 3);
    }

    #[test]
    fn long_messages_grow_the_dialog() {
        let theme = Theme::default();
        let message = "x".repeat(120);
        let widget = DialogWidget::new(DialogKind::Error, "Checker Error", &message, &theme);

        // 56 text columns: 120 chars need 3 rows.
        assert_eq!(widget.area(Rect::new(0, 0, 100, 30)).height, 7);
    }
}
