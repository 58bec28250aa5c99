//! Layout calculation helpers for the TUI.
//!
//! Single source of truth for area sizes, so that scroll calculations in
//! the event handlers and rendering always agree.

use ratatui::layout::{Constraint, Layout, Rect};

use crate::app::state::Tab;

/// Areas of one frame for the active tab.
///
/// `primary` is the input that receives keys by default, `secondary` is the
/// second input of tabs that have one, and `pane` is the read-only result
/// pane. Unused areas are zero-sized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabLayout {
    /// Tab bar (1 line).
    pub tabs: Rect,
    pub primary: Rect,
    pub secondary: Rect,
    pub pane: Rect,
    /// Status bar (1 line).
    pub status: Rect,
    /// Key hints (1 line).
    pub footer: Rect,
    /// Visible height of the pane (excluding borders).
    pub pane_visible_height: usize,
    /// Content width of the pane (excluding borders and scrollbar).
    pub pane_content_width: usize,
}

/// Frame constraints shared by every tab.
const FRAME_CONSTRAINTS: [Constraint; 4] = [
    Constraint::Length(1), // Tab bar
    Constraint::Min(0),    // Tab body
    Constraint::Length(1), // Status bar
    Constraint::Length(1), // Key hints
];

/// Height of a single-line input with borders.
const SINGLE_LINE_INPUT: u16 = 3;

/// Height of the style description input.
const DESCRIPTION_INPUT: u16 = 7;

/// Height of the text input on the checking tabs.
const REVIEW_INPUT: u16 = 10;

/// Minimum height of a result pane.
const MIN_PANE: u16 = 5;

/// Calculates the layout of `tab` inside `area`.
#[must_use]
pub fn calculate_tab_layout(area: Rect, tab: Tab) -> TabLayout {
    let [tabs, body, status, footer] = Layout::vertical(FRAME_CONSTRAINTS).areas(area);

    let (primary, secondary, pane) = match tab {
        Tab::IdeaWorkshop => {
            let [log, input] = Layout::vertical([
                Constraint::Min(MIN_PANE),
                Constraint::Length(SINGLE_LINE_INPUT),
            ])
            .areas(body);
            (input, Rect::default(), log)
        }
        Tab::StyleBuilder => {
            let [author, description, preview] = Layout::vertical([
                Constraint::Length(SINGLE_LINE_INPUT),
                Constraint::Length(DESCRIPTION_INPUT),
                Constraint::Min(MIN_PANE),
            ])
            .areas(body);
            (author, description, preview)
        }
        Tab::FactLibrary => (body, Rect::default(), Rect::default()),
        Tab::FactChecker | Tab::Checkers => {
            let [input, results] = Layout::vertical([
                Constraint::Length(REVIEW_INPUT),
                Constraint::Min(MIN_PANE),
            ])
            .areas(body);
            (input, Rect::default(), results)
        }
    };

    // Pane: 2 rows of borders; 2 columns of borders plus 1 for the scrollbar.
    let pane_visible_height = pane.height.saturating_sub(2) as usize;
    let pane_content_width = pane.width.saturating_sub(3) as usize;

    TabLayout {
        tabs,
        primary,
        secondary,
        pane,
        status,
        footer,
        pane_visible_height,
        pane_content_width,
    }
}
