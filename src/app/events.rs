//! Event handling logic for the App.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::TextArea;

use super::App;
use crate::app::state::{AppEvent, StyleField, Tab};
use crate::tui::widgets::calculate_visual_line_count;

/// Scroll page size for navigation.
const SCROLL_PAGE_SIZE: usize = 10;

/// Returns true if `key` is `Ctrl+<c>`.
fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

/// Returns true for keys a text area turns into a line break.
fn is_newline_key(key: &KeyEvent) -> bool {
    key.code == KeyCode::Enter || is_ctrl(key, 'm') || is_ctrl(key, 'j')
}

/// Feeds a key to a single-line field, dropping line breaks.
fn input_single_line(textarea: &mut TextArea<'static>, key: KeyEvent) {
    if !is_newline_key(&key) {
        textarea.input(key);
    }
}

impl App {
    /// Handles pasted text from bracketed paste mode.
    ///
    /// The text is inserted at the cursor of the focused field. Line endings
    /// are normalized to `\n` and other control characters dropped; in
    /// single-line fields line breaks become spaces.
    pub fn handle_paste(&mut self, text: &str) {
        if text.is_empty() || !self.dialogs.is_empty() {
            return;
        }

        // tui-textarea handles \n and \r\n but not standalone \r.
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let filtered: String = normalized
            .chars()
            .filter(|c| !c.is_control() || *c == '\n')
            .collect();

        let (textarea, single_line) = self.focused_input_mut();
        if single_line {
            textarea.insert_str(filtered.replace('\n', " "));
        } else {
            textarea.insert_str(&filtered);
        }
    }

    /// Handles a key event.
    ///
    /// An open dialog takes every key; `Enter` or `Esc` dismisses it and shows
    /// the next queued one. Global keys (quit, tab switching, pane scrolling)
    /// come next; anything else goes to the active tab.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if !self.dialogs.is_empty() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dialogs.pop_front();
            }
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c' | 'q') if ctrl => {
                tracing::info!("quit requested");
                self.should_quit = true;
            }
            KeyCode::F(n @ 1..=5) => {
                if let Some(tab) = Tab::from_index(usize::from(n - 1)) {
                    self.select_tab(tab);
                }
            }
            KeyCode::Char('t') | KeyCode::Right if ctrl => {
                self.select_tab(self.active_tab.next());
            }
            KeyCode::Left if ctrl => self.select_tab(self.active_tab.prev()),
            // The fact library has no pane; its editor scrolls itself.
            KeyCode::PageUp if self.active_tab != Tab::FactLibrary => self.page_up_pane(),
            KeyCode::PageDown if self.active_tab != Tab::FactLibrary => self.page_down_pane(),
            _ => match self.active_tab {
                Tab::IdeaWorkshop => self.handle_workshop_key(key),
                Tab::StyleBuilder => self.handle_style_builder_key(key),
                Tab::FactLibrary => self.handle_fact_library_key(key),
                Tab::FactChecker => self.handle_fact_checker_key(key),
                Tab::Checkers => self.handle_checkers_key(key),
            },
        }
    }

    fn handle_workshop_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            self.send_message();
            self.auto_scroll_workshop_log();
        } else if is_ctrl(&key, 'r') {
            self.save_report();
        } else {
            input_single_line(&mut self.workshop.input, key);
        }
    }

    fn handle_style_builder_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.style_builder.focus = self.style_builder.focus.toggle();
            }
            _ if is_ctrl(&key, 'g') => self.generate_style(),
            _ => match self.style_builder.focus {
                StyleField::Author => input_single_line(&mut self.style_builder.author, key),
                StyleField::Description => {
                    self.style_builder.description.input(key);
                }
            },
        }
    }

    fn handle_fact_library_key(&mut self, key: KeyEvent) {
        if is_ctrl(&key, 's') {
            self.save_fact_library();
        } else if is_ctrl(&key, 'l') {
            self.reload_fact_library();
        } else {
            self.fact_library.editor.input(key);
        }
    }

    fn handle_fact_checker_key(&mut self, key: KeyEvent) {
        if is_ctrl(&key, 'g') {
            self.run_fact_check();
        } else {
            self.fact_checker.input.input(key);
        }
    }

    fn handle_checkers_key(&mut self, key: KeyEvent) {
        if is_ctrl(&key, 'g') {
            self.run_style_check();
        } else if is_ctrl(&key, 'k') {
            self.run_consistency_check();
        } else {
            self.checkers.input.input(key);
        }
    }

    /// Returns the field receiving keys and whether it is single-line.
    fn focused_input_mut(&mut self) -> (&mut TextArea<'static>, bool) {
        match self.active_tab {
            Tab::IdeaWorkshop => (&mut self.workshop.input, true),
            Tab::StyleBuilder => match self.style_builder.focus {
                StyleField::Author => (&mut self.style_builder.author, true),
                StyleField::Description => (&mut self.style_builder.description, false),
            },
            Tab::FactLibrary => (&mut self.fact_library.editor, false),
            Tab::FactChecker => (&mut self.fact_checker.input, false),
            Tab::Checkers => (&mut self.checkers.input, false),
        }
    }

    // =========================================================================
    // Pane Scrolling
    // =========================================================================

    /// Scrolls the active result pane up by one page.
    fn page_up_pane(&mut self) {
        if let Some(pane) = self.pane_mut(self.active_tab) {
            pane.scroll.page_up(SCROLL_PAGE_SIZE);
        }
    }

    /// Scrolls the active result pane down by one page.
    fn page_down_pane(&mut self) {
        let layout = self.layout.tabs;
        if let Some(pane) = self.pane_mut(self.active_tab) {
            let content_len = calculate_visual_line_count(&pane.lines, layout.pane_content_width);
            pane.scroll
                .page_down(content_len, layout.pane_visible_height, SCROLL_PAGE_SIZE);
        }
    }

    // =========================================================================
    // Task Events
    // =========================================================================

    /// Applies every job outcome delivered since the last call.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            let tab = match event {
                AppEvent::Completed { job, result } => {
                    self.apply_completion(job, result);
                    job.tab()
                }
                AppEvent::Failed { job, message } => {
                    self.apply_failure(job, message);
                    job.tab()
                }
            };

            // Result panes restart at the top; only the chat log follows new content.
            if tab == Tab::IdeaWorkshop {
                self.auto_scroll_workshop_log();
            }
        }
    }

    /// Auto-scrolls the workshop log if auto-scroll is enabled.
    fn auto_scroll_workshop_log(&mut self) {
        let layout = self.layout.for_tab(Tab::IdeaWorkshop);
        let content_len =
            calculate_visual_line_count(&self.workshop.log.lines, layout.pane_content_width);
        self.workshop
            .log
            .scroll
            .auto_scroll_if_enabled(content_len, layout.pane_visible_height);
    }
}
