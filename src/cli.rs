//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::core::DEFAULT_MODEL;
use crate::fs::{DATA_DIR, KEY_FILE, WorkspacePaths};

/// `Bookwright` - terminal writing companion
///
/// Develops story ideas with a coach, builds a style profile, keeps a fact
/// library and checks manuscript text against all three. Without a Gemini API
/// key every generation returns a mock response.
#[derive(Parser, Debug)]
#[command(name = "bookwright", version, about, long_about = None)]
pub struct Args {
    /// Directory holding the saved report, style profile, fact library and log
    #[arg(long, value_name = "DIR", default_value = DATA_DIR)]
    pub data_dir: PathBuf,

    /// File whose first line is the Gemini API key
    #[arg(long, value_name = "FILE", default_value = KEY_FILE)]
    pub key_file: PathBuf,

    /// Gemini model identifier
    #[arg(long, value_name = "ID", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Log filter, e.g. `debug` or `bookwright=trace` (overrides `BOOKWRIGHT_LOG`)
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Args {
    /// Returns the workspace paths selected on the command line.
    #[must_use]
    pub fn paths(&self) -> WorkspacePaths {
        WorkspacePaths::with_locations(&self.data_dir, &self.key_file)
    }
}
