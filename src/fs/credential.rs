//! Credential loading.
//!
//! The Gemini API key lives in a plain text file next to the working
//! directory. Missing files, blank files and the placeholder values shipped
//! in templates all resolve to "no credential", which puts the generation
//! client into mock mode.

use std::path::Path;

/// Values that are treated as if no credential were configured.
///
/// Compared case-insensitively against the trimmed first line.
pub const PLACEHOLDER_CREDENTIALS: &[&str] = &["YOUR_KEY_HERE", "MOCK", "MOCK_API_KEY"];

/// Loads the credential from `path`.
///
/// Returns `None` when the file is missing or unreadable, when it is blank,
/// or when its first line is one of [`PLACEHOLDER_CREDENTIALS`]. Never fails.
#[must_use]
pub fn load_credential(path: &Path) -> Option<String> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "no credential file");
            return None;
        }
    };
    parse_credential(&content)
}

/// Extracts the credential from raw file content.
fn parse_credential(content: &str) -> Option<String> {
    let value = content.trim().lines().next()?.trim();
    if value.is_empty() {
        return None;
    }
    if PLACEHOLDER_CREDENTIALS
        .iter()
        .any(|placeholder| value.eq_ignore_ascii_case(placeholder))
    {
        tracing::debug!("credential file holds a placeholder value");
        return None;
    }
    Some(value.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_absent() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load_credential(&temp.path().join("nope.txt")), None);
    }

    #[test]
    fn directory_instead_of_file_is_absent() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load_credential(temp.path()), None);
    }

    #[test]
    fn blank_content_is_absent() {
        for content in ["", "   ", "\n\n", "\t \r\n  "] {
            assert_eq!(parse_credential(content), None, "content {content:?}");
        }
    }

    #[test]
    fn placeholders_are_absent_in_any_case() {
        for content in [
            "YOUR_KEY_HERE",
            "your_key_here",
            "Mock",
            "mock\n",
            "  MOCK_API_KEY  ",
            "mock_api_key",
        ] {
            assert_eq!(parse_credential(content), None, "content {content:?}");
        }
    }

    #[test]
    fn real_key_is_trimmed() {
        assert_eq!(
            parse_credential("  AIzaSy-example \n").as_deref(),
            Some("AIzaSy-example")
        );
    }

    #[test]
    fn only_first_line_is_used() {
        assert_eq!(
            parse_credential("\nkey-one\nkey-two\n").as_deref(),
            Some("key-one")
        );
    }

    #[test]
    fn placeholder_lookalikes_are_kept() {
        assert_eq!(parse_credential("MOCKED").as_deref(), Some("MOCKED"));
    }

    #[test]
    fn reads_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("key.txt");
        std::fs::write(&path, "secret\n").unwrap();
        assert_eq!(load_credential(&path).as_deref(), Some("secret"));
    }
}
