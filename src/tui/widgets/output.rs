//! Scrollable transcript and result pane widget.
//!
//! Every read-only pane in the application (the workshop chat log, the style
//! preview and the checker results) is a list of [`OutputLine`]s rendered by
//! [`OutputWidget`] with wrapping and a scrollbar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget,
        Widget,
    },
};
use unicode_width::UnicodeWidthChar;

use crate::tui::Theme;

/// Kinds of pane lines, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputLineType {
    /// Message or result body.
    #[default]
    Body,
    /// Header of a line written by the user.
    User,
    /// Header of a line written by the coach.
    Coach,
    /// Application message (saved files and similar).
    System,
    /// Notice that mock output was used.
    Notice,
}

/// A line of pane content with its type for styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    /// The text content.
    pub text: String,
    /// The line type for styling.
    pub line_type: OutputLineType,
}

impl OutputLine {
    #[must_use]
    pub fn new(line_type: OutputLineType, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            line_type,
        }
    }

    /// Creates a body line.
    #[must_use]
    pub fn body(text: impl Into<String>) -> Self {
        Self::new(OutputLineType::Body, text)
    }

    /// Creates a notice line.
    #[must_use]
    pub fn notice(text: impl Into<String>) -> Self {
        Self::new(OutputLineType::Notice, text)
    }

    /// Splits multi-line `text` into lines sharing one type.
    ///
    /// An empty string yields a single empty line.
    #[must_use]
    pub fn block(line_type: OutputLineType, text: &str) -> Vec<Self> {
        text.split('\n')
            .map(|line| Self::new(line_type, line))
            .collect()
    }
}

/// Joins pane lines back into plain text.
#[must_use]
pub fn lines_to_text(lines: &[OutputLine]) -> String {
    lines
        .iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// A scrollable, bordered pane widget.
pub struct OutputWidget<'a> {
    lines: &'a [OutputLine],
    scroll_offset: usize,
    title: &'a str,
    theme: &'a Theme,
    /// Placeholder shown while there are no lines.
    placeholder: Option<&'a str>,
}

impl<'a> OutputWidget<'a> {
    /// Creates a new output widget.
    #[must_use]
    pub const fn new(
        lines: &'a [OutputLine],
        scroll_offset: usize,
        title: &'a str,
        theme: &'a Theme,
    ) -> Self {
        Self {
            lines,
            scroll_offset,
            title,
            theme,
            placeholder: None,
        }
    }

    /// Sets the text shown while the pane is empty.
    #[must_use]
    pub const fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    fn style_for(&self, line_type: OutputLineType) -> ratatui::style::Style {
        match line_type {
            OutputLineType::Body => self.theme.text_style(),
            OutputLineType::User => self.theme.accent_style(),
            OutputLineType::Coach => self.theme.coach_style(),
            OutputLineType::System => self.theme.muted_style(),
            OutputLineType::Notice => self.theme.warning_style(),
        }
    }
}

/// Calculates the total number of visual lines after wrapping.
///
/// The App uses this to keep scroll offsets in range for panes whose
/// lines wrap.
#[must_use]
pub fn calculate_visual_line_count(lines: &[OutputLine], content_width: usize) -> usize {
    if content_width == 0 {
        return lines.len();
    }

    lines
        .iter()
        .map(|line| wrap_line_to_width(&line.text, content_width).len())
        .sum()
}

/// Wraps a single line of text to fit within the given width.
///
/// Uses Unicode-aware width calculation to handle wide characters.
fn wrap_line_to_width(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.is_empty() {
        return vec![String::new()];
    }

    let mut result = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let char_width = ch.width().unwrap_or(0);

        if current_width + char_width > width {
            result.push(std::mem::take(&mut current_line));
            current_width = 0;
        }

        current_line.push(ch);
        current_width += char_width;
    }

    result.push(current_line);
    result
}

impl Widget for OutputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner_area = Block::default().borders(Borders::ALL).inner(area);
        let visible_height = inner_area.height as usize;

        // One column is reserved for the scrollbar.
        let content_width = inner_area.width.saturating_sub(1) as usize;

        let visual_lines: Vec<(String, OutputLineType)> = self
            .lines
            .iter()
            .flat_map(|line| {
                wrap_line_to_width(&line.text, content_width)
                    .into_iter()
                    .map(move |text| (text, line.line_type))
            })
            .collect();

        let total_visual_lines = visual_lines.len();

        let visible_lines: Vec<Line> = if self.lines.is_empty() {
            self.placeholder
                .map(|text| Line::from(Span::styled(text, self.theme.placeholder_style())))
                .into_iter()
                .collect()
        } else {
            visual_lines
                .into_iter()
                .skip(self.scroll_offset)
                .take(visible_height)
                .map(|(text, line_type)| Line::from(Span::styled(text, self.style_for(line_type))))
                .collect()
        };

        let scroll_info = if total_visual_lines > visible_height {
            format!(
                " ({}-{}/{})",
                self.scroll_offset + 1,
                (self.scroll_offset + visible_height).min(total_visual_lines),
                total_visual_lines
            )
        } else {
            String::new()
        };

        let block = Block::default()
            .title(Line::from(vec![Span::styled(
                format!("{}{scroll_info}", self.title),
                self.theme.accent_style(),
            )]))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));

        block.render(area, buf);
        Paragraph::new(visible_lines).render(inner_area, buf);

        if total_visual_lines > visible_height {
            let (track_style, thumb_style) = self.theme.scrollbar_styles();
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .track_style(track_style)
                .thumb_style(thumb_style);

            let mut scrollbar_state = ScrollbarState::new(total_visual_lines)
                .position(self.scroll_offset)
                .viewport_content_length(visible_height);

            scrollbar.render(inner_area, buf, &mut scrollbar_state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use ratatui::{Terminal, backend::TestBackend};

    fn row(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    fn draw(
        lines: &[OutputLine],
        offset: usize,
        width: u16,
        height: u16,
    ) -> Result<Terminal<TestBackend>> {
        let mut terminal = Terminal::new(TestBackend::new(width, height))?;
        let theme = Theme::default();
        terminal.draw(|frame| {
            let widget =
                OutputWidget::new(lines, offset, "Results", &theme).placeholder("Nothing yet");
            frame.render_widget(widget, frame.area());
        })?;
        Ok(terminal)
    }

    #[test]
    fn renders_title_and_borders() -> Result<()> {
        let terminal = draw(&[], 0, 40, 5)?;
        let buffer = terminal.backend().buffer();

        assert!(row(&terminal, 0).contains("Results"));
        assert_eq!(buffer[(0, 0)].symbol(), "┌");
        assert_eq!(buffer[(39, 4)].symbol(), "┘");
        Ok(())
    }

    #[test]
    fn empty_pane_shows_placeholder() -> Result<()> {
        let terminal = draw(&[], 0, 40, 5)?;
        assert!(row(&terminal, 1).contains("Nothing yet"));
        Ok(())
    }

    #[test]
    fn line_types_use_theme_styles() -> Result<()> {
        let theme = Theme::default();
        let lines = vec![
            OutputLine::new(OutputLineType::User, "You:"),
            OutputLine::body("hello"),
            OutputLine::notice("mock"),
        ];
        let terminal = draw(&lines, 0, 40, 6)?;
        let buffer = terminal.backend().buffer();

        assert!(row(&terminal, 1).contains("You:"));
        assert_eq!(buffer[(1, 1)].style().fg, Some(theme.accent));
        assert_eq!(buffer[(1, 2)].style().fg, Some(theme.fg));
        assert_eq!(buffer[(1, 3)].style().fg, Some(theme.warning));
        Ok(())
    }

    #[test]
    fn respects_scroll_offset_and_shows_range() -> Result<()> {
        let lines: Vec<_> = ["One", "Two", "Three", "Four", "Five"]
            .into_iter()
            .map(OutputLine::body)
            .collect();
        let terminal = draw(&lines, 1, 40, 5)?;

        assert!(row(&terminal, 0).contains("(2-4/5)"));
        assert!(row(&terminal, 1).contains("Two"));
        assert!(!row(&terminal, 1).contains("One"));
        Ok(())
    }

    #[test]
    fn long_lines_wrap() -> Result<()> {
        // Content width is 20 - 2 borders - 1 scrollbar = 17.
        let lines = vec![OutputLine::body("This is a very long line that wraps")];
        let terminal = draw(&lines, 0, 20, 6)?;

        assert!(row(&terminal, 1).contains("This is a very lo"));
        assert!(row(&terminal, 2).contains("ng line that wrap"));
        Ok(())
    }

    #[test]
    fn block_splits_on_newlines() {
        let lines = OutputLine::block(OutputLineType::Coach, "a\n\nb");
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.line_type == OutputLineType::Coach));
        assert_eq!(lines_to_text(&lines), "a\n\nb");
        assert_eq!(OutputLine::block(OutputLineType::Body, "").len(), 1);
    }

    #[test]
    fn visual_line_count_accounts_for_wrapping() {
        let lines = vec![OutputLine::body("abcdefghij"), OutputLine::body("")];
        assert_eq!(calculate_visual_line_count(&lines, 4), 4);
        assert_eq!(calculate_visual_line_count(&lines, 0), 2);
    }

    #[test]
    fn wrap_handles_wide_characters() {
        // Each CJK character is two columns wide.
        assert_eq!(wrap_line_to_width("日本語", 4), vec!["日本", "語"]);
    }
}
