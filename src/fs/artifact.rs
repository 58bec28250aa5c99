//! Persisted text artifacts shared between tabs.
//!
//! Each artifact is a single UTF-8 blob that is fully overwritten on save and
//! read verbatim by the tabs that depend on it.

use std::path::Path;

use anyhow::{Context, Result};

/// The three persisted artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    /// Report synthesized from the idea workshop conversation.
    IdeaReport,
    /// Style guide produced by the style builder.
    StyleProfile,
    /// Hand-maintained list of trusted facts.
    FactLibrary,
}

impl Artifact {
    /// Returns the file name of this artifact inside the data directory.
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::IdeaReport => "idea_workshop_report.txt",
            Self::StyleProfile => "style_profile.txt",
            Self::FactLibrary => "fact_library.txt",
        }
    }

    /// Returns a human-readable name for messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::IdeaReport => "idea workshop report",
            Self::StyleProfile => "style profile",
            Self::FactLibrary => "fact library",
        }
    }

    /// Returns all artifacts.
    #[must_use]
    pub const fn all() -> &'static [Artifact] {
        &[Self::IdeaReport, Self::StyleProfile, Self::FactLibrary]
    }
}

/// Returns true if the artifact file exists.
#[must_use]
pub fn artifact_exists(path: &Path) -> bool {
    path.is_file()
}

/// Reads the artifact at `path` verbatim.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_artifact(path: &Path, artifact: Artifact) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}: {}", artifact.label(), path.display()))
}

/// Writes `content` to the artifact at `path`, replacing previous contents.
///
/// The parent directory must exist (caller should ensure this).
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_artifact(path: &Path, artifact: Artifact, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {}: {}", artifact.label(), path.display()))?;
    tracing::info!(artifact = artifact.label(), path = %path.display(), bytes = content.len(), "artifact saved");
    Ok(())
}
