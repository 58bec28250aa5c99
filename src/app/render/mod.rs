//! Rendering methods for the App.
//!
//! Every frame has the same outline:
//! - **Tab bar**: F-key labels, busy tabs marked with `*`
//! - **Tab body**: the active tab's inputs and result pane (see `tabs`)
//! - **Status bar** and **key hints**
//! - **Dialog**: modal overlay while one is open

mod tabs;

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
};

use super::App;
use crate::app::state::Tab;
use crate::tui::widgets::{DialogWidget, StatusBarWidget};

impl App {
    /// Renders the application UI.
    ///
    /// Uses the layout cached by [`App::update_layout`].
    pub fn render(&self, frame: &mut Frame) {
        let layout = self.layout.tabs;

        self.render_tab_bar(frame, layout.tabs);
        self.render_active_tab(frame, &layout);
        self.render_status(frame, layout.status);
        self.render_footer(frame, layout.footer);

        if let Some(dialog) = self.dialog() {
            let widget = DialogWidget::new(dialog.kind, &dialog.title, &dialog.message, &self.theme);
            frame.render_widget(widget, frame.area());
        }
    }

    /// Renders the tab bar (single line).
    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let titles = Tab::all().iter().map(|tab| {
            let marker = if self.is_busy(*tab) { " *" } else { "" };
            Line::from(format!("F{} {}{marker}", tab.index() + 1, tab.title()))
        });

        let tabs = Tabs::new(titles)
            .select(self.active_tab.index())
            .style(self.theme.muted_style())
            .highlight_style(self.theme.tab_selected_style())
            .divider(Span::styled("|", self.theme.border_style(false)));
        frame.render_widget(tabs, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let status = StatusBarWidget::new(
            &self.status.message,
            self.status.updated_at,
            self.client.model_id(),
            self.is_busy(self.active_tab),
            &self.theme,
        );
        frame.render_widget(status, area);
    }

    /// Renders the key hints for the active tab (single line).
    ///
    /// Submit hints are muted while the tab is busy.
    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let actions: &[(&str, &str)] = match self.active_tab {
            Tab::IdeaWorkshop => &[("Enter", "Send"), ("Ctrl+R", "Save Report")],
            Tab::StyleBuilder => &[("Tab", "Switch Field"), ("Ctrl+G", "Generate")],
            Tab::FactLibrary => &[("Ctrl+S", "Save"), ("Ctrl+L", "Reload")],
            Tab::FactChecker => &[("Ctrl+G", "Check Facts")],
            Tab::Checkers => &[("Ctrl+G", "Style Check"), ("Ctrl+K", "Consistency Check")],
        };

        let busy = self.is_busy(self.active_tab);
        let key_style = if busy {
            self.theme.muted_style()
        } else {
            self.theme.accent_style()
        };

        let mut spans = Vec::new();
        for (key, label) in actions {
            spans.push(Span::styled(format!(" [{key}] "), key_style));
            spans.push(Span::styled(*label, self.theme.muted_style()));
        }
        spans.push(Span::styled("  [F1-F5] ", self.theme.accent_style()));
        spans.push(Span::styled("Tabs", self.theme.muted_style()));
        spans.push(Span::styled("  [Ctrl+Q] ", self.theme.accent_style()));
        spans.push(Span::styled("Quit", self.theme.muted_style()));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
