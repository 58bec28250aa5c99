//! Shared test utilities for the app module.
//!
//! - `mock_app` / `scripted_app` - `App` instances over an isolated temp directory
//! - `wait_idle` - drives the runtime until a tab's job has been applied
//! - `render_app_to_terminal` / `screen_text` - render to a `TestBackend`
//! - Key event helpers (`char_key`, `ctrl_key`, `key`, `type_text`)

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::{Terminal, backend::TestBackend};
use tempfile::TempDir;

use crate::app::{App, Tab};
use crate::core::GenerationClient;
use crate::core::generation::tests::{Reply, ScriptedBackend, client_with};
use crate::fs::{Artifact, WorkspacePaths};

/// Terminal size used by tests that need a layout.
pub const TEST_AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 100,
    height: 30,
};

/// Creates a [`KeyEvent`] with the given code and modifiers.
pub fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Creates a [`KeyEvent`] for a key with no modifiers.
pub fn key(code: KeyCode) -> KeyEvent {
    key_with(code, KeyModifiers::NONE)
}

/// Creates a [`KeyEvent`] for a character key with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

/// Creates a [`KeyEvent`] for `Ctrl+<c>`.
pub fn ctrl_key(c: char) -> KeyEvent {
    key_with(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Types `text` into the focused field one key at a time.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(char_key(c));
    }
}

/// Creates an app in mock mode (no backend) over a fresh temp directory.
///
/// Must be called inside a tokio runtime.
pub fn mock_app() -> (App, TempDir) {
    let temp = TempDir::new().unwrap();
    let app = App::new(WorkspacePaths::new(temp.path()), GenerationClient::default()).unwrap();
    (app, temp)
}

/// Creates an app backed by a scripted backend over a fresh temp directory.
///
/// Must be called inside a tokio runtime.
pub fn scripted_app(
    replies: impl IntoIterator<Item = Reply>,
) -> (App, TempDir, Arc<ScriptedBackend>) {
    let temp = TempDir::new().unwrap();
    let backend = ScriptedBackend::new(replies);
    let app = App::new(WorkspacePaths::new(temp.path()), client_with(&backend)).unwrap();
    (app, temp, backend)
}

/// Writes an artifact into the app's data directory.
pub fn seed_artifact(app: &App, artifact: Artifact, content: &str) {
    app.paths().write_artifact(artifact, content).unwrap();
}

/// Processes events until `tab` is idle again.
///
/// Sleeps between polls so that spawned jobs make progress on the
/// current-thread test runtime.
pub async fn wait_idle(app: &mut App, tab: Tab) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        app.process_events();
        if !app.is_busy(tab) {
            return;
        }
        assert!(
            Instant::now() < deadline,
            "timed out waiting for {tab:?} to become idle"
        );
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

/// Renders the app to a `TestBackend` terminal.
///
/// Calls `update_layout()` first, as the main loop does.
///
/// # Errors
///
/// Returns an error if terminal creation or rendering fails.
pub fn render_app_to_terminal(
    app: &mut App,
    width: u16,
    height: u16,
) -> Result<Terminal<TestBackend>> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend)?;

    app.update_layout(Rect::new(0, 0, width, height));
    terminal.draw(|f| app.render(f))?;

    Ok(terminal)
}

/// Returns the rendered screen as text, one line per row.
pub fn screen_text(terminal: &Terminal<TestBackend>) -> String {
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
