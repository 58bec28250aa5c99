//! Tab body rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Block,
};
use tui_textarea::TextArea;

use crate::app::App;
use crate::app::layout::TabLayout;
use crate::app::state::{Pane, StyleField, Tab};
use crate::tui::widgets::OutputWidget;

const WORKSHOP_INTRO: &str =
    "Describe a premise, a character or a scene. The coach will ask questions to develop it.";
const STYLE_INTRO: &str = "The generated style profile appears here.";
const FACT_CHECK_INTRO: &str = "Results appear here. The fact library is used as ground truth.";
const CHECKERS_INTRO: &str = "Results of the style or consistency check appear here.";

impl App {
    /// Renders the body of the active tab.
    pub(crate) fn render_active_tab(&self, frame: &mut Frame, layout: &TabLayout) {
        match self.active_tab {
            Tab::IdeaWorkshop => {
                let state = &self.workshop;
                self.render_pane(frame, layout.pane, &state.log, "Conversation", WORKSHOP_INTRO);
                self.render_input(frame, layout.primary, &state.input, " Message ", true);
            }
            Tab::StyleBuilder => {
                let state = &self.style_builder;
                let author_focused = state.focus == StyleField::Author;
                self.render_input(frame, layout.primary, &state.author, " Author ", author_focused);
                self.render_input(
                    frame,
                    layout.secondary,
                    &state.description,
                    " Style Description ",
                    !author_focused,
                );
                self.render_pane(frame, layout.pane, &state.preview, "Style Profile", STYLE_INTRO);
            }
            Tab::FactLibrary => {
                self.render_input(
                    frame,
                    layout.primary,
                    &self.fact_library.editor,
                    " Fact Library ",
                    true,
                );
            }
            Tab::FactChecker => {
                let state = &self.fact_checker;
                self.render_input(frame, layout.primary, &state.input, " Text to Verify ", true);
                self.render_pane(
                    frame,
                    layout.pane,
                    &state.results,
                    "Fact Check",
                    FACT_CHECK_INTRO,
                );
            }
            Tab::Checkers => {
                let state = &self.checkers;
                self.render_input(frame, layout.primary, &state.input, " Text to Review ", true);
                self.render_pane(frame, layout.pane, &state.results, "Results", CHECKERS_INTRO);
            }
        }
    }

    /// Renders a text input; only the focused one shows a cursor.
    fn render_input(
        &self,
        frame: &mut Frame,
        area: Rect,
        textarea: &TextArea<'static>,
        title: &str,
        focused: bool,
    ) {
        let block = Block::bordered()
            .title(title.to_string())
            .title_style(self.theme.accent_style())
            .border_style(self.theme.border_style(focused));

        // Clone so styling stays a render concern.
        let mut textarea = textarea.clone();
        textarea.set_block(block);
        textarea.set_style(self.theme.text_style());
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_style(self.theme.placeholder_style());
        if focused {
            textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
        } else {
            textarea.set_cursor_style(Style::default());
        }

        frame.render_widget(&textarea, area);
    }

    fn render_pane(&self, frame: &mut Frame, area: Rect, pane: &Pane, title: &str, intro: &str) {
        let widget =
            OutputWidget::new(&pane.lines, pane.scroll.offset, title, &self.theme).placeholder(intro);
        frame.render_widget(widget, area);
    }
}
