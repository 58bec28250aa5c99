//! Generation client with offline mock fallback.
//!
//! Every tab talks to the backend through [`GenerationClient`]. When no
//! credential is configured the client answers every call with the same
//! mock result, so the whole application stays usable offline.

use std::sync::Arc;

use thiserror::Error;

use super::backend::{CompletionRequest, GeminiBackend, TextBackend};

/// Text returned by every call while no backend is available.
pub const MOCK_TEXT: &str = "[Mock response]\n\n\
The Gemini API key is missing or the SDK is unavailable. \
Populate gemini_api_key.txt to enable live generation.";

/// Errors raised by a generation backend.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The request failed or the response body could not be decoded.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with a non-success status code.
    #[error("Status error: {1} (Status {0})")]
    Status(reqwest::StatusCode, String),
    /// The backend answered with something unexpected.
    #[error("Invariant: {0}")]
    Invariant(String),
}

/// Outcome of one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    /// Generated text (possibly empty).
    pub text: String,
    /// True when the text is the offline mock rather than backend output.
    pub is_mock: bool,
}

impl GenerationResult {
    /// The fixed result returned while no backend is available.
    #[must_use]
    pub fn mock() -> Self {
        Self {
            text: MOCK_TEXT.to_string(),
            is_mock: true,
        }
    }

    /// Wraps live backend output.
    #[must_use]
    pub fn live(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_mock: false,
        }
    }
}

/// Client used by all tabs to generate text.
#[derive(Clone, Default)]
pub struct GenerationClient {
    backend: Option<Arc<dyn TextBackend>>,
}

impl std::fmt::Debug for GenerationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationClient")
            .field("model_id", &self.model_id())
            .finish()
    }
}

impl GenerationClient {
    /// Creates a client from an optional credential.
    ///
    /// A Gemini backend for `model_id` is built only when a credential is present.
    #[must_use]
    pub fn from_credential(credential: Option<String>, model_id: &str) -> Self {
        let backend = credential.map(|key| {
            Arc::new(GeminiBackend::new(model_id, key)) as Arc<dyn TextBackend>
        });
        Self { backend }
    }

    /// Creates a client around an explicit backend (or none, for mock mode).
    #[must_use]
    pub fn with_backend(backend: Option<Arc<dyn TextBackend>>) -> Self {
        Self { backend }
    }

    /// Returns true if a live backend is configured.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Returns the backend's model identifier, if any.
    #[must_use]
    pub fn model_id(&self) -> Option<&str> {
        self.backend.as_deref().map(TextBackend::model_id)
    }

    /// Generates text for `prompt`, prefixed by the optional system instruction.
    ///
    /// # Errors
    ///
    /// Returns the backend error unchanged.
    pub async fn generate(
        &self,
        prompt: &str,
        system: Option<&str>,
    ) -> Result<GenerationResult, GenerationError> {
        let Some(backend) = &self.backend else {
            return Ok(GenerationResult::mock());
        };

        let request = CompletionRequest::plain(full_prompt(prompt, system));
        let text = backend.complete(&request).await?;
        Ok(GenerationResult::live(text.unwrap_or_default()))
    }

    /// Like [`generate`](Self::generate), with web search augmentation.
    ///
    /// Any failure of the search-augmented call falls back to the plain path
    /// with the same arguments. Only a failure of that plain call is returned.
    ///
    /// # Errors
    ///
    /// Returns the error of the plain fallback call.
    pub async fn generate_with_search(
        &self,
        prompt: &str,
        system: Option<&str>,
    ) -> Result<GenerationResult, GenerationError> {
        let Some(backend) = &self.backend else {
            return Ok(GenerationResult::mock());
        };

        let request = CompletionRequest::with_search(full_prompt(prompt, system));
        match backend.complete(&request).await {
            Ok(text) => Ok(GenerationResult::live(text.unwrap_or_default())),
            Err(e) => {
                tracing::warn!(error = %e, "search-augmented generation failed, retrying without search");
                self.generate(prompt, system).await
            }
        }
    }
}

/// Prepends the system instruction, separated by a blank line. An empty
/// instruction is treated as absent.
fn full_prompt(prompt: &str, system: Option<&str>) -> String {
    match system {
        Some(system) if !system.is_empty() => format!("{system}\n\n{prompt}"),
        _ => prompt.to_string(),
    }
}
