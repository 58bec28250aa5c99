//! Main application state and logic.
//!
//! The App struct and its implementation are organized into submodules:
//! - `actions` - Tab actions: precondition checks, job submission, result handling
//! - `events` - Key, paste and task-event handling
//! - `layout` - Area calculation shared by events and rendering
//! - `render` - UI rendering
//! - `state` - Application state structures
//!
//! ## Jobs
//!
//! Every backend call is a [`Job`] owned by one tab. Submitting a job marks
//! the tab busy and runs the work on the [`TaskRunner`]; its outcome comes
//! back as an [`AppEvent`] over an unbounded channel and is applied on the
//! UI thread by [`App::process_events`]. A busy tab ignores its submit
//! shortcuts; the other tabs stay usable.

mod actions;
pub mod events;
mod layout;
mod render;
pub mod state;

#[cfg(test)]
mod tests;

pub use layout::{TabLayout, calculate_tab_layout};

use std::collections::VecDeque;

use anyhow::Result;
use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::core::{GenerationClient, TaskRunner};
use crate::fs::WorkspacePaths;
use crate::tui::Theme;

pub use self::state::{
    Activity, AppEvent, CheckersState, Dialog, FactCheckerState, FactLibraryState, Job,
    LayoutState, Pane, ScrollState, StatusLine, StyleBuilderState, StyleField, Tab, WorkshopState,
};

/// Main application state.
///
/// Organized into per-tab sub-structs:
/// - `workshop`: idea workshop conversation, chat log and input
/// - `style_builder`: author and description inputs, profile preview
/// - `fact_library`: fact library editor
/// - `fact_checker` / `checkers`: review input and results
pub struct App {
    // =========================================================================
    // Shared State
    // =========================================================================
    /// Data directory and credential file locations.
    pub(crate) paths: WorkspacePaths,
    /// Generation client shared by all tabs.
    pub(crate) client: GenerationClient,
    /// Runs jobs off the UI thread.
    pub(crate) runner: TaskRunner,
    /// Theme for styling.
    pub(crate) theme: Theme,
    /// Tab receiving keys.
    pub(crate) active_tab: Tab,
    /// Status bar content.
    pub(crate) status: StatusLine,
    /// Dialogs waiting to be dismissed, oldest first. The front one is shown
    /// and swallows keys.
    pub(crate) dialogs: VecDeque<Dialog>,
    /// Should quit flag.
    should_quit: bool,

    // =========================================================================
    // Event Channel
    // =========================================================================
    /// Job outcomes from task handlers.
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Cloned into every submitted job.
    event_tx: mpsc::UnboundedSender<AppEvent>,

    // =========================================================================
    // Tab States
    // =========================================================================
    pub(crate) workshop: WorkshopState,
    pub(crate) style_builder: StyleBuilderState,
    pub(crate) fact_library: FactLibraryState,
    pub(crate) fact_checker: FactCheckerState,
    pub(crate) checkers: CheckersState,
    /// Layout of the last frame.
    pub(crate) layout: LayoutState,
}

impl App {
    /// Creates the application on the current tokio runtime.
    ///
    /// Creates the data directory and loads the saved fact library.
    ///
    /// # Errors
    ///
    /// Returns an error when called outside a tokio runtime.
    pub fn new(paths: WorkspacePaths, client: GenerationClient) -> Result<Self> {
        let runner = TaskRunner::from_current()?;
        Ok(Self::with_runner(paths, client, runner))
    }

    /// Creates the application with an explicit task runner.
    #[must_use]
    pub fn with_runner(paths: WorkspacePaths, client: GenerationClient, runner: TaskRunner) -> Self {
        if let Err(e) = paths.ensure_data_dir() {
            // Saves will report the failure again with context.
            tracing::warn!(error = %format!("{e:#}"), "could not create data directory");
        }

        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let mut app = Self {
            paths,
            client,
            runner,
            theme: Theme::default(),
            active_tab: Tab::default(),
            status: StatusLine::new("Ready"),
            dialogs: VecDeque::new(),
            should_quit: false,
            event_rx,
            event_tx,
            workshop: WorkshopState::default(),
            style_builder: StyleBuilderState::default(),
            fact_library: FactLibraryState::default(),
            fact_checker: FactCheckerState::default(),
            checkers: CheckersState::default(),
            layout: LayoutState::default(),
        };

        if let Err(e) = app.load_fact_library() {
            tracing::warn!(error = %format!("{e:#}"), "could not load fact library");
        }

        tracing::info!(
            data_dir = %app.paths.data_dir().display(),
            model = app.client.model_id().unwrap_or("mock"),
            "application started"
        );
        app
    }

    /// Returns true if the application should quit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the tab receiving keys.
    #[must_use]
    pub const fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Returns the current status bar message.
    #[must_use]
    pub fn status_message(&self) -> &str {
        &self.status.message
    }

    /// Returns the dialog on screen, if any.
    #[must_use]
    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialogs.front()
    }

    /// Gets the paths configuration for this app instance.
    #[must_use]
    pub const fn paths(&self) -> &WorkspacePaths {
        &self.paths
    }

    /// Returns true if `tab` has a job in flight.
    #[must_use]
    pub const fn is_busy(&self, tab: Tab) -> bool {
        match tab {
            Tab::IdeaWorkshop => self.workshop.activity.is_busy(),
            Tab::StyleBuilder => self.style_builder.activity.is_busy(),
            Tab::FactLibrary => false,
            Tab::FactChecker => self.fact_checker.activity.is_busy(),
            Tab::Checkers => self.checkers.activity.is_busy(),
        }
    }

    /// Returns the activity of a tab that runs jobs.
    pub(crate) const fn activity_mut(&mut self, tab: Tab) -> Option<&mut Activity> {
        match tab {
            Tab::IdeaWorkshop => Some(&mut self.workshop.activity),
            Tab::StyleBuilder => Some(&mut self.style_builder.activity),
            Tab::FactLibrary => None,
            Tab::FactChecker => Some(&mut self.fact_checker.activity),
            Tab::Checkers => Some(&mut self.checkers.activity),
        }
    }

    /// Returns the read-only pane of a tab, if it has one.
    pub(crate) const fn pane_mut(&mut self, tab: Tab) -> Option<&mut Pane> {
        match tab {
            Tab::IdeaWorkshop => Some(&mut self.workshop.log),
            Tab::StyleBuilder => Some(&mut self.style_builder.preview),
            Tab::FactLibrary => None,
            Tab::FactChecker => Some(&mut self.fact_checker.results),
            Tab::Checkers => Some(&mut self.checkers.results),
        }
    }

    /// Switches to `tab`.
    pub(crate) fn select_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            tracing::debug!(tab = tab.title(), "tab selected");
            self.active_tab = tab;
            self.layout.tabs = self.layout.for_tab(tab);
        }
    }

    /// Replaces the status bar message.
    pub(crate) fn set_status(&mut self, message: impl Into<String>) {
        self.status = StatusLine::new(message);
    }

    /// Queues a dialog behind any already open.
    pub(crate) fn show_dialog(&mut self, dialog: Dialog) {
        tracing::debug!(
            title = %dialog.title,
            kind = dialog.kind.label(),
            queued = self.dialogs.len(),
            "dialog shown"
        );
        self.dialogs.push_back(dialog);
    }

    /// Calculates and caches the layout based on terminal dimensions.
    ///
    /// Should be called once per frame before rendering.
    pub fn update_layout(&mut self, terminal_area: Rect) {
        self.layout.area = terminal_area;
        self.layout.tabs = calculate_tab_layout(terminal_area, self.active_tab);
    }
}
