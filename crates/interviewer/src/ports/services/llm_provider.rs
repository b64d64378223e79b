//! LLM Provider Port
//!
//! Abstract interface for chat-completion calls to a language-model provider,
//! plus the soft-failure policy that turns every outcome into display text.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{InterviewTask, Prompt};

/// Options for a chat completion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletionOptions {
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Temperature (0.0 - 2.0)
    pub temperature: f32,
}

impl CompletionOptions {
    pub fn for_task(task: InterviewTask) -> Self {
        Self {
            max_tokens: task.max_tokens(),
            temperature: task.temperature(),
        }
    }
}

/// Result of a successful (HTTP 200) completion call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// `choices[0].message.content`, if the provider returned one
    pub content: Option<String>,
}

impl Completion {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    pub fn empty() -> Self {
        Self { content: None }
    }

    /// Generated text, or `fallback` when the provider sent none
    pub fn text_or(self, fallback: &str) -> String {
        self.content.unwrap_or_else(|| fallback.to_string())
    }
}

/// Failure talking to the provider
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Provider answered with a non-200 status
    #[error("provider returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Connection, timeout, or other transport failure
    #[error("transport error: {0}")]
    Transport(String),

    /// A 200 response whose body was not valid JSON
    #[error("failed to decode provider response: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Message shown to the user in place of generated text
    pub fn soft_message(&self, provider: &str) -> String {
        match self {
            GatewayError::Upstream { status, .. } => {
                format!("Error: {provider} API returned {status}.")
            }
            GatewayError::Transport(_) | GatewayError::Decode(_) => {
                format!("Error: Failed to connect to {provider} API.")
            }
        }
    }
}

/// Collapse a completion outcome into the text relayed to the client.
///
/// Provider failures become ordinary content, never errors.
pub fn soft_text(
    result: Result<Completion, GatewayError>,
    task: InterviewTask,
    provider: &str,
) -> String {
    match result {
        Ok(completion) => completion.text_or(task.fallback_text()),
        Err(e) => e.soft_message(provider),
    }
}

/// Language-model provider interface
///
/// # Example
///
/// ```rust,ignore
/// use interviewer::ports::LlmProvider;
///
/// struct MyProvider { /* ... */ }
///
/// #[async_trait]
/// impl LlmProvider for MyProvider {
///     async fn complete(&self, prompt: &Prompt, options: &CompletionOptions)
///         -> Result<Completion, GatewayError> {
///         // POST to the chat-completion endpoint
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a prompt and extract the generated text
    async fn complete(
        &self,
        prompt: &Prompt,
        options: &CompletionOptions,
    ) -> Result<Completion, GatewayError>;

    /// Run one interview task, applying the soft-failure policy
    async fn complete_task(&self, prompt: &Prompt, task: InterviewTask) -> String {
        let result = self
            .complete(prompt, &CompletionOptions::for_task(task))
            .await;
        soft_text(result, task, self.display_name())
    }

    /// Provider name used in user-facing error text (e.g. "Mistral")
    fn display_name(&self) -> &str;

    /// Model ID being used
    fn model_id(&self) -> &str;
}
