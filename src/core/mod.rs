//! Core logic: generation backend, task runner, prompts and the workshop conversation.

pub mod backend;
pub mod conversation;
pub mod generation;
pub mod prompts;
pub mod task;

pub use backend::{CompletionRequest, DEFAULT_MODEL, GeminiBackend, TextBackend};
pub use conversation::{Conversation, Speaker, Turn};
pub use generation::{GenerationClient, GenerationError, GenerationResult, MOCK_TEXT};
pub use prompts::Prompt;
pub use task::TaskRunner;
