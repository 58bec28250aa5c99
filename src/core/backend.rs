//! Text generation backends.
//!
//! Provides a trait-based abstraction over the service that turns a prompt
//! into text, plus the Gemini `generateContent` implementation.
//!
//! The Gemini wire types below cover only what a single-turn text request
//! needs: one user content with one text part, an optional Google Search
//! tool, and the candidate text parts of the response.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::generation::GenerationError;

/// Default Gemini model identifier.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// A single-turn completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// Full prompt, system instruction already prepended.
    pub prompt: String,
    /// Whether to enable web search augmentation for this call.
    pub search: bool,
}

impl CompletionRequest {
    /// Creates a plain request.
    #[must_use]
    pub fn plain(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            search: false,
        }
    }

    /// Creates a search-augmented request.
    #[must_use]
    pub fn with_search(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            search: true,
        }
    }
}

/// Trait for text generation backends.
///
/// Implement this trait to plug in another provider or a test double.
#[async_trait]
pub trait TextBackend: Send + Sync {
    /// Returns the model identifier chosen at construction.
    fn model_id(&self) -> &str;

    /// Sends one prompt and returns the generated text.
    ///
    /// `Ok(None)` means the backend answered without any text.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be read.
    async fn complete(&self, request: &CompletionRequest)
    -> Result<Option<String>, GenerationError>;
}

/// Google Gemini backend using the REST `generateContent` endpoint.
pub struct GeminiBackend {
    model_id: String,
    api_key: String,
    base_url: String,
    client: Client,
}

impl std::fmt::Debug for GeminiBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiBackend")
            .field("model_id", &self.model_id)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiBackend {
    /// Creates a backend for `model_id` authenticated with `api_key`.
    #[must_use]
    pub fn new(model_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    /// Overrides the REST endpoint (trailing slashes are ignored).
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Builds the `generateContent` URL for this model.
    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model_id, self.api_key
        )
    }
}

#[async_trait]
impl TextBackend for GeminiBackend {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<Option<String>, GenerationError> {
        let body = GenerateContentRequest::from(request);
        tracing::debug!(model = %self.model_id, search = request.search, "sending generateContent");

        let response = self.client.post(self.endpoint()).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::Status(
                status,
                response.text().await.unwrap_or_default(),
            ));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        Ok(parsed.text())
    }
}

// =============================================================================
// Wire format
// =============================================================================

/// Request body for `models/{model}:generateContent`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
}

impl From<&CompletionRequest> for GenerateContentRequest {
    fn from(request: &CompletionRequest) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: Some(vec![Part {
                    text: Some(request.prompt.clone()),
                    thought: None,
                }]),
            }],
            tools: request.search.then(|| {
                vec![Tool {
                    google_search: GoogleSearch {},
                }]
            }),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parts: Option<Vec<Part>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    /// Set on reasoning parts, which are not part of the answer.
    #[serde(skip_serializing_if = "Option::is_none")]
    thought: Option<bool>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
struct GoogleSearch {}

/// Response body of `generateContent`; unknown fields are ignored.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Joins the answer text of the first candidate.
    ///
    /// Returns `None` when there is no candidate or no text part.
    pub(crate) fn text(&self) -> Option<String> {
        let parts = self
            .candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_ref()?;

        let texts: Vec<&str> = parts
            .iter()
            .filter(|part| part.thought != Some(true))
            .filter_map(|part| part.text.as_deref())
            .collect();

        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    #[test]
    fn plain_request_has_no_tools() -> Result<()> {
        let body = GenerateContentRequest::from(&CompletionRequest::plain("Hello"));
        let value = serde_json::to_value(&body)?;

        assert_eq!(
            value,
            json!({
                "contents": [{"role": "user", "parts": [{"text": "Hello"}]}]
            })
        );
        Ok(())
    }

    #[test]
    fn search_request_enables_google_search() -> Result<()> {
        let body = GenerateContentRequest::from(&CompletionRequest::with_search("Verify"));
        let value = serde_json::to_value(&body)?;

        assert_eq!(value["tools"], json!([{"google_search": {}}]));
        assert_eq!(value["contents"][0]["parts"][0]["text"], "Verify");
        Ok(())
    }

    #[test]
    fn response_text_joins_parts_and_skips_thoughts() -> Result<()> {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        {"text": "thinking...", "thought": true},
                        {"text": "Hello, "},
                        {"text": "writer."}
                    ]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 3}
        }))?;

        assert_eq!(response.text().as_deref(), Some("Hello, writer."));
        Ok(())
    }

    #[test]
    fn response_without_candidates_has_no_text() -> Result<()> {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({"promptFeedback": {"blockReason": "SAFETY"}}))?;
        assert_eq!(response.text(), None);

        let response: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": [{"finishReason": "SAFETY"}]}))?;
        assert_eq!(response.text(), None);
        Ok(())
    }

    #[test]
    fn only_first_candidate_is_used() -> Result<()> {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"parts": [{"text": "first"}]}},
                {"content": {"parts": [{"text": "second"}]}}
            ]
        }))?;
        assert_eq!(response.text().as_deref(), Some("first"));
        Ok(())
    }

    #[test]
    fn endpoint_includes_model_and_key() {
        let backend =
            GeminiBackend::new("gemini-2.5-flash", "k3y").with_base_url("http://localhost:9/v1/");
        assert_eq!(
            backend.endpoint(),
            "http://localhost:9/v1/models/gemini-2.5-flash:generateContent?key=k3y"
        );
        assert_eq!(backend.model_id(), "gemini-2.5-flash");
    }

    #[test]
    fn debug_output_hides_api_key() {
        let backend = GeminiBackend::new(DEFAULT_MODEL, "super-secret");
        let debug = format!("{backend:?}");
        assert!(debug.contains("gemini-2.5-flash"));
        assert!(!debug.contains("super-secret"));
    }
}
