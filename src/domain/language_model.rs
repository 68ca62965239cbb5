//! Language model abstraction used by the insight service.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a language model backend.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("language model API key is not configured")]
    MissingApiKey,

    #[error("network error: {0}")]
    Network(String),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed model response: {0}")]
    Parse(String),

    #[error("model returned no content")]
    EmptyResponse,
}

/// One chat completion call: a system instruction plus a user prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Ask the backend to constrain output to a JSON object.
    pub json_output: bool,
}

/// Text-in, text-out language model.
///
/// # Implementations
///
/// - [`crate::infrastructure::llm::OpenAiClient`] - OpenAI-compatible chat completions API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Returns the model's text for `request`.
    ///
    /// # Errors
    ///
    /// Any transport, quota or decoding failure. Callers treat every error the
    /// same way: the request degrades to a fallback response.
    async fn complete(&self, request: CompletionRequest) -> Result<String, ModelError>;
}
