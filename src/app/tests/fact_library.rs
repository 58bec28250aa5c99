//! Fact library tests.

use ratatui::crossterm::event::KeyCode;

use super::helpers::*;
use crate::app::*;
use crate::core::GenerationClient;
use crate::fs::{Artifact, WorkspacePaths};
use crate::tui::widgets::DialogKind;

fn open_tab(app: &mut App) {
    app.handle_key(key(KeyCode::F(3)));
    assert_eq!(app.active_tab(), Tab::FactLibrary);
}

#[tokio::test]
async fn startup_loads_saved_library_into_editor() {
    let temp = tempfile::TempDir::new().unwrap();
    let paths = WorkspacePaths::new(temp.path());
    paths
        .write_artifact(Artifact::FactLibrary, "Mars has two moons.\nPhobos is larger.")
        .unwrap();

    let app = App::new(paths, GenerationClient::default()).unwrap();

    assert_eq!(
        app.fact_library.editor.lines(),
        ["Mars has two moons.", "Phobos is larger."]
    );
}

#[tokio::test]
async fn startup_creates_data_directory() {
    let (app, _temp) = mock_app();
    assert!(app.paths().data_dir().is_dir());
    assert_eq!(state::text_of(&app.fact_library.editor), "");
}

#[tokio::test]
async fn saving_empty_editor_shows_info() {
    let (mut app, _temp) = mock_app();
    open_tab(&mut app);

    type_text(&mut app, "   ");
    app.handle_key(ctrl_key('s'));

    let dialog = app.dialog().unwrap();
    assert_eq!(dialog.kind, DialogKind::Info);
    assert_eq!(dialog.title, "Nothing to Save");
    assert_eq!(dialog.message, "Add some facts before saving.");
    assert!(!app.paths().has_artifact(Artifact::FactLibrary));
}

#[tokio::test]
async fn save_writes_trimmed_multiline_text() {
    let (mut app, _temp) = mock_app();
    open_tab(&mut app);

    type_text(&mut app, "  Mars has two moons.");
    app.handle_key(key(KeyCode::Enter));
    type_text(&mut app, "Phobos is larger.  ");
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(ctrl_key('s'));

    assert_eq!(
        app.paths().read_artifact(Artifact::FactLibrary).unwrap(),
        "Mars has two moons.\nPhobos is larger."
    );
    assert_eq!(app.status_message(), "Fact library saved");
    assert!(app.dialog().is_none());
}

#[tokio::test]
async fn reload_replaces_editor_with_disk_content() {
    let (mut app, _temp) = mock_app();
    open_tab(&mut app);

    type_text(&mut app, "draft");
    seed_artifact(&app, Artifact::FactLibrary, "Saved elsewhere.");
    app.handle_key(ctrl_key('l'));

    assert_eq!(app.fact_library.editor.lines(), ["Saved elsewhere."]);
    assert_eq!(app.status_message(), "Fact library reloaded");
}

#[tokio::test]
async fn reload_without_saved_library_keeps_editor() {
    let (mut app, _temp) = mock_app();
    open_tab(&mut app);

    type_text(&mut app, "draft");
    app.handle_key(ctrl_key('l'));

    assert_eq!(app.fact_library.editor.lines(), ["draft"]);
    assert_eq!(app.status_message(), "No saved fact library");
}

#[tokio::test]
async fn save_failure_shows_error_dialog() {
    let (mut app, _temp) = mock_app();
    open_tab(&mut app);

    // A regular file where the data directory should be.
    let data_dir = app.paths().data_dir().to_path_buf();
    std::fs::remove_dir_all(&data_dir).unwrap();
    std::fs::write(&data_dir, "not a directory").unwrap();

    type_text(&mut app, "Mars has two moons.");
    app.handle_key(ctrl_key('s'));

    let dialog = app.dialog().unwrap();
    assert_eq!(dialog.kind, DialogKind::Error);
    assert_eq!(dialog.title, "Fact Library Error");
    assert_eq!(app.status_message(), "Error saving fact library");
}
