//! File system operations.

use std::path::{Path, PathBuf};

use anyhow::Context;

pub mod artifact;
pub mod credential;

pub use artifact::{Artifact, artifact_exists, read_artifact, write_artifact};
pub use credential::{PLACEHOLDER_CREDENTIALS, load_credential};

/// Default directory (relative to the working directory) holding the artifacts.
pub const DATA_DIR: &str = "data";

/// Default credential file (relative to the working directory).
pub const KEY_FILE: &str = "gemini_api_key.txt";

/// Name of the log file written inside the data directory.
pub const LOG_FILE: &str = "bookwright.log";

/// Holds all bookwright-related paths.
///
/// This struct enables dependency injection of filesystem paths, allowing
/// tests to use isolated temporary directories instead of the actual
/// working directory.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use bookwright::fs::{Artifact, WorkspacePaths};
///
/// let paths = WorkspacePaths::new(Path::new("/tmp/book"));
/// assert_eq!(
///     paths.artifact(Artifact::FactLibrary),
///     Path::new("/tmp/book/data/fact_library.txt")
/// );
/// assert_eq!(paths.key_file(), Path::new("/tmp/book/gemini_api_key.txt"));
/// ```
#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    data_dir: PathBuf,
    key_file: PathBuf,
}

impl WorkspacePaths {
    /// Creates paths rooted at the given base directory, using the default
    /// data directory and key file names.
    #[must_use]
    pub fn new(base: &Path) -> Self {
        Self {
            data_dir: base.join(DATA_DIR),
            key_file: base.join(KEY_FILE),
        }
    }

    /// Creates paths from explicit locations (as given on the command line).
    #[must_use]
    pub fn with_locations(data_dir: impl Into<PathBuf>, key_file: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            key_file: key_file.into(),
        }
    }

    /// Returns the data directory holding the artifacts.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the credential file path.
    #[must_use]
    pub fn key_file(&self) -> &Path {
        &self.key_file
    }

    /// Returns the display name of the credential file, used in mock notices.
    #[must_use]
    pub fn key_file_name(&self) -> String {
        self.key_file.file_name().map_or_else(
            || self.key_file.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }

    /// Returns the path of the given artifact.
    #[must_use]
    pub fn artifact(&self, artifact: Artifact) -> PathBuf {
        self.data_dir.join(artifact.file_name())
    }

    /// Returns the log file path (`<data_dir>/bookwright.log`).
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }

    /// Ensures the data directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_data_dir(&self) -> anyhow::Result<()> {
        if !self.data_dir.exists() {
            std::fs::create_dir_all(&self.data_dir).with_context(|| {
                format!("Failed to create directory: {}", self.data_dir.display())
            })?;
        }
        Ok(())
    }

    /// Loads the credential from the key file.
    #[must_use]
    pub fn load_credential(&self) -> Option<String> {
        load_credential(&self.key_file)
    }

    /// Returns true if the artifact file exists.
    #[must_use]
    pub fn has_artifact(&self, artifact: Artifact) -> bool {
        artifact_exists(&self.artifact(artifact))
    }

    /// Reads an artifact verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn read_artifact(&self, artifact: Artifact) -> anyhow::Result<String> {
        read_artifact(&self.artifact(artifact), artifact)
    }

    /// Overwrites an artifact with `content`, creating the data directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file cannot be written.
    pub fn write_artifact(&self, artifact: Artifact, content: &str) -> anyhow::Result<()> {
        self.ensure_data_dir()?;
        write_artifact(&self.artifact(artifact), artifact, content)
    }
}

impl Default for WorkspacePaths {
    fn default() -> Self {
        Self::with_locations(DATA_DIR, KEY_FILE)
    }
}
