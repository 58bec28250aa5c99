//! Application state structures.
//!
//! - **`Tab`**: the five feature tabs, in display order
//! - **`Job`**: a unit of background work, owned by exactly one tab
//! - **`AppEvent`**: task outcomes delivered back to the UI thread
//! - **`Dialog`**: the transient modal shown for preconditions and failures
//! - Per-tab states (`WorkshopState`, `StyleBuilderState`, ...)
//! - **`ScrollState`** / **`LayoutState`**: pane scrolling and cached layout

use chrono::{DateTime, Local};
use ratatui::layout::Rect;
use tui_textarea::{CursorMove, TextArea};

use crate::app::layout::{TabLayout, calculate_tab_layout};
use crate::core::{Conversation, GenerationResult};
use crate::tui::widgets::{DialogKind, OutputLine, OutputLineType, lines_to_text};

/// Feature tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    IdeaWorkshop,
    StyleBuilder,
    FactLibrary,
    FactChecker,
    Checkers,
}

impl Tab {
    /// Returns all tabs in display order.
    #[must_use]
    pub const fn all() -> &'static [Tab] {
        &[
            Tab::IdeaWorkshop,
            Tab::StyleBuilder,
            Tab::FactLibrary,
            Tab::FactChecker,
            Tab::Checkers,
        ]
    }

    /// Returns the tab title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::IdeaWorkshop => "Idea Workshop",
            Self::StyleBuilder => "Style Builder",
            Self::FactLibrary => "Fact Library",
            Self::FactChecker => "Fact Checker",
            Self::Checkers => "Checkers",
        }
    }

    /// Returns the zero-based position of the tab.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::IdeaWorkshop => 0,
            Self::StyleBuilder => 1,
            Self::FactLibrary => 2,
            Self::FactChecker => 3,
            Self::Checkers => 4,
        }
    }

    /// Returns the tab at `index`, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// Returns the next tab, wrapping around.
    #[must_use]
    pub fn next(&self) -> Self {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    /// Returns the previous tab, wrapping around.
    #[must_use]
    pub fn prev(&self) -> Self {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

/// Whether a tab has a job in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activity {
    #[default]
    Idle,
    Busy,
}

impl Activity {
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(self, Self::Busy)
    }
}

/// A background job submitted by one of the tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    /// Next coach turn in the idea workshop.
    CoachReply,
    /// Idea report synthesis and save.
    WorkshopReport,
    /// Style profile generation and save.
    StyleProfile,
    /// Search-augmented fact check.
    FactCheck,
    /// Style check against the style profile.
    StyleCheck,
    /// Consistency check against the idea report.
    ConsistencyCheck,
}

impl Job {
    /// Returns the tab that owns this job.
    #[must_use]
    pub const fn tab(&self) -> Tab {
        match self {
            Self::CoachReply | Self::WorkshopReport => Tab::IdeaWorkshop,
            Self::StyleProfile => Tab::StyleBuilder,
            Self::FactCheck => Tab::FactChecker,
            Self::StyleCheck | Self::ConsistencyCheck => Tab::Checkers,
        }
    }

    /// Status shown while the job runs.
    #[must_use]
    pub const fn running_status(&self) -> &'static str {
        match self {
            Self::CoachReply => "Generating response...",
            Self::WorkshopReport => "Generating workshop report...",
            Self::StyleProfile => "Generating style profile...",
            Self::FactCheck => "Running fact check with Google Search...",
            Self::StyleCheck => "Running style check...",
            Self::ConsistencyCheck => "Running consistency check...",
        }
    }

    /// Status shown once the job succeeded.
    #[must_use]
    pub const fn success_status(&self) -> &'static str {
        match self {
            Self::CoachReply => "Ready",
            Self::WorkshopReport => "Workshop report saved",
            Self::StyleProfile => "Style profile saved",
            Self::FactCheck => "Fact check complete",
            Self::StyleCheck | Self::ConsistencyCheck => "Check complete",
        }
    }

    /// Status shown when the job failed.
    #[must_use]
    pub const fn failure_status(&self) -> &'static str {
        match self {
            Self::CoachReply | Self::WorkshopReport => "Error generating response",
            Self::StyleProfile => "Error generating style profile",
            Self::FactCheck => "Fact checker error",
            Self::StyleCheck | Self::ConsistencyCheck => "Checker error",
        }
    }

    /// Title of the error dialog shown when the job failed.
    #[must_use]
    pub const fn error_title(&self) -> &'static str {
        match self {
            Self::CoachReply | Self::WorkshopReport => "Idea Workshop Error",
            Self::StyleProfile => "Style Profile Error",
            Self::FactCheck => "Fact Checker Error",
            Self::StyleCheck | Self::ConsistencyCheck => "Checker Error",
        }
    }
}

/// Outcome of a job, sent from task handlers to the UI thread.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The job produced a result.
    Completed { job: Job, result: GenerationResult },
    /// The job failed with a message.
    Failed { job: Job, message: String },
}

/// A transient modal message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

impl Dialog {
    #[must_use]
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(DialogKind::Info, title, message)
    }

    #[must_use]
    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(DialogKind::Warning, title, message)
    }

    #[must_use]
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(DialogKind::Error, title, message)
    }

    fn new(kind: DialogKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Last status message and when it was set.
#[derive(Debug, Clone)]
pub struct StatusLine {
    pub message: String,
    pub updated_at: DateTime<Local>,
}

impl StatusLine {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            updated_at: Local::now(),
        }
    }
}

/// Scroll position of a read-only pane.
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Current scroll offset (visual lines from the top).
    pub offset: usize,
    /// Whether to follow new content. Cleared when the user scrolls up,
    /// set again when they reach the bottom.
    pub auto_scroll: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollState {
    /// Creates a new scroll state with auto-scroll enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: 0,
            auto_scroll: true,
        }
    }

    /// Resets to the top with auto-scroll enabled.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.auto_scroll = true;
    }

    /// Scrolls up by a page, disabling auto-scroll.
    pub fn page_up(&mut self, page_size: usize) {
        self.offset = self.offset.saturating_sub(page_size);
        self.auto_scroll = false;
    }

    /// Scrolls down by a page, enabling auto-scroll if at the bottom.
    pub fn page_down(&mut self, content_len: usize, visible_height: usize, page_size: usize) {
        let max_scroll = content_len.saturating_sub(visible_height);
        self.offset = (self.offset + page_size).min(max_scroll);
        self.auto_scroll = self.offset >= max_scroll;
    }

    /// Jumps to the bottom if auto-scroll is enabled.
    pub fn auto_scroll_if_enabled(&mut self, content_len: usize, visible_height: usize) {
        if self.auto_scroll {
            self.offset = content_len.saturating_sub(visible_height);
        }
    }
}

/// A read-only, scrollable pane of lines.
#[derive(Debug, Clone, Default)]
pub struct Pane {
    pub lines: Vec<OutputLine>,
    pub scroll: ScrollState,
}

impl Pane {
    /// Appends a `Speaker:` header followed by the message lines and a blank line.
    pub fn push_entry(&mut self, header_type: OutputLineType, speaker: &str, message: &str) {
        self.lines
            .push(OutputLine::new(header_type, format!("{speaker}:")));
        let body_type = match header_type {
            OutputLineType::Notice | OutputLineType::System => header_type,
            _ => OutputLineType::Body,
        };
        self.lines.extend(OutputLine::block(body_type, message));
        self.lines.push(OutputLine::body(""));
    }

    /// Replaces the content with a result and an optional notice.
    pub fn set_result(&mut self, text: &str, notice: Option<&str>) {
        self.lines = OutputLine::block(OutputLineType::Body, text);
        if let Some(notice) = notice {
            self.lines.push(OutputLine::body(""));
            self.lines.push(OutputLine::notice(notice));
        }
        self.scroll.reset();
    }

    /// Returns the pane content as plain text.
    #[must_use]
    pub fn text(&self) -> String {
        lines_to_text(&self.lines)
    }
}

pub const WORKSHOP_PLACEHOLDER: &str = "Share your story idea...";
pub const AUTHOR_PLACEHOLDER: &str = "Author name (optional)";
pub const DESCRIPTION_PLACEHOLDER: &str =
    "Describe tone, voice, pacing, or any stylistic constraints.";
pub const FACT_LIBRARY_PLACEHOLDER: &str = "Add facts, citations, or notes...";
pub const FACT_CHECK_PLACEHOLDER: &str = "Paste claims or draft text to verify...";
pub const CHECKERS_PLACEHOLDER: &str = "Paste manuscript text here...";

/// Creates an empty text area with the given placeholder.
#[must_use]
pub fn text_area(placeholder: &str) -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_placeholder_text(placeholder.to_string());
    textarea
}

/// Creates a text area holding `content`, cursor at the end.
#[must_use]
pub fn text_area_with(placeholder: &str, content: &str) -> TextArea<'static> {
    let lines: Vec<String> = content.split('\n').map(String::from).collect();
    let mut textarea = TextArea::new(lines);
    textarea.set_placeholder_text(placeholder.to_string());
    textarea.move_cursor(CursorMove::Bottom);
    textarea.move_cursor(CursorMove::End);
    textarea
}

/// Returns the whole content of a text area, lines joined by `\n`.
#[must_use]
pub fn text_of(textarea: &TextArea<'_>) -> String {
    textarea.lines().join("\n")
}

/// Idea workshop tab.
#[derive(Debug, Clone)]
pub struct WorkshopState {
    /// Single-line message input.
    pub input: TextArea<'static>,
    /// Session conversation.
    pub conversation: Conversation,
    /// Chat log pane.
    pub log: Pane,
    pub activity: Activity,
}

impl WorkshopState {
    /// Empties the message input.
    pub fn clear_input(&mut self) {
        self.input = text_area(WORKSHOP_PLACEHOLDER);
    }
}

impl Default for WorkshopState {
    fn default() -> Self {
        Self {
            input: text_area(WORKSHOP_PLACEHOLDER),
            conversation: Conversation::new(),
            log: Pane::default(),
            activity: Activity::Idle,
        }
    }
}

/// Which style builder field receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleField {
    Author,
    #[default]
    Description,
}

impl StyleField {
    #[must_use]
    pub const fn toggle(&self) -> Self {
        match self {
            Self::Author => Self::Description,
            Self::Description => Self::Author,
        }
    }
}

/// Style builder tab.
#[derive(Debug, Clone)]
pub struct StyleBuilderState {
    /// Optional author name (single line).
    pub author: TextArea<'static>,
    /// Style description (multi-line).
    pub description: TextArea<'static>,
    pub focus: StyleField,
    /// Preview of the last generated profile.
    pub preview: Pane,
    pub activity: Activity,
}

impl Default for StyleBuilderState {
    fn default() -> Self {
        Self {
            author: text_area(AUTHOR_PLACEHOLDER),
            description: text_area(DESCRIPTION_PLACEHOLDER),
            focus: StyleField::default(),
            preview: Pane::default(),
            activity: Activity::Idle,
        }
    }
}

/// Fact library tab.
#[derive(Debug, Clone)]
pub struct FactLibraryState {
    pub editor: TextArea<'static>,
}

impl Default for FactLibraryState {
    fn default() -> Self {
        Self {
            editor: text_area(FACT_LIBRARY_PLACEHOLDER),
        }
    }
}

/// Fact checker tab.
#[derive(Debug, Clone)]
pub struct FactCheckerState {
    pub input: TextArea<'static>,
    pub results: Pane,
    pub activity: Activity,
}

impl Default for FactCheckerState {
    fn default() -> Self {
        Self {
            input: text_area(FACT_CHECK_PLACEHOLDER),
            results: Pane::default(),
            activity: Activity::Idle,
        }
    }
}

/// Checkers tab. Both checks share one activity.
#[derive(Debug, Clone)]
pub struct CheckersState {
    pub input: TextArea<'static>,
    pub results: Pane,
    pub activity: Activity,
}

impl Default for CheckersState {
    fn default() -> Self {
        Self {
            input: text_area(CHECKERS_PLACEHOLDER),
            results: Pane::default(),
            activity: Activity::Idle,
        }
    }
}

/// Layout cached once per frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutState {
    /// Terminal area of the last frame.
    pub area: Rect,
    /// Layout of the active tab.
    pub tabs: TabLayout,
}

impl LayoutState {
    /// Layout of any tab for the last frame's area.
    #[must_use]
    pub fn for_tab(&self, tab: Tab) -> TabLayout {
        calculate_tab_layout(self.area, tab)
    }

    /// Visible height of the active result pane.
    #[must_use]
    pub const fn pane_visible_height(&self) -> usize {
        self.tabs.pane_visible_height
    }

    /// Content width of the active result pane.
    #[must_use]
    pub const fn pane_content_width(&self) -> usize {
        self.tabs.pane_content_width
    }
}
