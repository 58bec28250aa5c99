//! File logging.
//!
//! The terminal belongs to the TUI, so log output goes to a file inside the
//! data directory. The filter comes from `--log-level`, then the
//! `BOOKWRIGHT_LOG` environment variable, then defaults to `info`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "BOOKWRIGHT_LOG";

/// Filter used when neither an override nor the environment sets one.
const DEFAULT_FILTER: &str = "info";

/// Builds the log filter from an optional override.
///
/// An invalid override falls back to the environment and then the default.
#[must_use]
pub fn build_filter(level: Option<&str>) -> EnvFilter {
    level
        .and_then(|level| EnvFilter::try_new(level).ok())
        .or_else(|| EnvFilter::try_from_env(LOG_ENV).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs a global subscriber appending to `log_file`.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init(log_file: &Path, level: Option<&str>) -> Result<()> {
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file: {}", log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))?;

    tracing::debug!(path = %log_file.display(), "logging initialized");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn override_takes_precedence() {
        assert_eq!(build_filter(Some("debug")).to_string(), "debug");
        assert_eq!(
            build_filter(Some("bookwright=trace")).to_string(),
            "bookwright=trace"
        );
    }

    #[test]
    fn unopenable_log_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("data");
        std::fs::write(&blocker, "file, not a directory").unwrap();

        let err = init(&blocker.join("bookwright.log"), None).unwrap_err();
        assert!(err.to_string().contains("Failed to create log directory"));
    }
}
