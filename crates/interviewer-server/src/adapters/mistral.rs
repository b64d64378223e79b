//! Mistral chat-completion client
//!
//! Implements `LlmProvider` against an OpenAI-style `/chat/completions` endpoint.
//! No retries; the timeout is unset unless configured.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;

use interviewer::{ChatMessage, Completion, CompletionOptions, GatewayError, LlmProvider, Prompt};

pub const DEFAULT_ENDPOINT: &str = "https://api.mistral.ai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "mistral-medium";

/// Connection settings for the Mistral API
#[derive(Debug, Clone)]
pub struct MistralConfig {
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
    pub timeout: Option<Duration>,
}

impl MistralConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: None,
        }
    }
}

/// reqwest-backed LlmProvider
#[derive(Clone)]
pub struct MistralClient {
    client: Client,
    config: MistralConfig,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [&'a ChatMessage; 2],
    temperature: f32,
    max_tokens: u32,
}

impl MistralClient {
    pub fn new(config: MistralConfig) -> Result<Self, GatewayError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

/// Pull `choices[0].message.content` out of a completion body
fn extract_content(body: &serde_json::Value) -> Option<String> {
    body.get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
        .map(str::to_string)
}

#[async_trait]
impl LlmProvider for MistralClient {
    async fn complete(
        &self,
        prompt: &Prompt,
        options: &CompletionOptions,
    ) -> Result<Completion, GatewayError> {
        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: prompt.messages(),
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("❌ Mistral request failed: {}", e);
                GatewayError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::warn!("❌ Failed to read Mistral response: {}", e);
            GatewayError::Transport(e.to_string())
        })?;

        if status != StatusCode::OK {
            tracing::warn!("❌ Mistral API error: {}, response: {}", status.as_u16(), body);
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let json: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("❌ Mistral returned invalid JSON: {}", e);
            GatewayError::Decode(e.to_string())
        })?;

        Ok(Completion {
            content: extract_content(&json),
        })
    }

    fn display_name(&self) -> &str {
        "Mistral"
    }

    fn model_id(&self) -> &str {
        &self.config.model
    }
}
