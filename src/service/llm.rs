//! Shared LLM client and the model invocation seam
//!
//! Services depend on [`ModelInvoker`] only; the OpenAI-backed [`LlmClient`]
//! is one implementation, test stubs are another.

use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::openai;

/// Error type for a failed model call
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LlmError {
    #[error("Failed to create OpenAI client: {0}")]
    Client(String),

    #[error("Completion request failed: {0}")]
    Completion(String),
}

/// One prompt sent to a generative text endpoint
#[derive(Debug, Clone, Copy)]
pub struct ModelRequest<'a> {
    pub model: &'a str,
    pub preamble: &'a str,
    pub prompt: &'a str,
}

/// Sends a composed prompt to a model and returns its raw text
///
/// Implementations own transport, credentials and timeouts. They must not
/// retry: the caller decides whether a failed call is attempted again.
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    async fn complete(&self, request: ModelRequest<'_>) -> Result<String, LlmError>;
}

/// Shared LLM client wrapper
#[derive(Clone)]
pub struct LlmClient {
    client: openai::Client,
}

impl LlmClient {
    /// Create a new LLM client with the provided API key
    pub fn new(api_key: &str) -> Result<Self, LlmError> {
        let client = openai::Client::new(api_key);

        Ok(Self { client })
    }
}

#[async_trait]
impl ModelInvoker for LlmClient {
    async fn complete(&self, request: ModelRequest<'_>) -> Result<String, LlmError> {
        // temperature=0.0 and a fixed seed for reproducible outputs
        let agent = self
            .client
            .agent(request.model)
            .preamble(request.preamble)
            .additional_params(serde_json::json!({
                "temperature": 0.0,
                "seed": 42
            }))
            .build();

        agent
            .prompt(request.prompt)
            .await
            .map_err(|e| LlmError::Completion(e.to_string()))
    }
}
