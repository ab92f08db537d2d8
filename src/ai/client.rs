// OpenRouter chat-completion gateway

use super::AiError;
use crate::models::ChatMessage;
use serde_json::{json, Value};

/// Fixed OpenRouter chat completions endpoint
const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Fixed model identifier; not caller-configurable
const MODEL: &str = "x-ai/grok-4.1-fast:free";

/// Thin client around the OpenRouter chat completions API.
///
/// Holds the bearer credential resolved at startup; every invocation is a
/// single POST with no retry, backoff, caching, or deduplication.
pub struct OpenRouterClient {
    http: reqwest::Client,
    api_key: Option<String>,
    endpoint: String,
}

impl OpenRouterClient {
    /// Create a client against the fixed OpenRouter endpoint
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_endpoint(api_key, OPENROUTER_API_URL)
    }

    /// Create a client against a non-default endpoint. Tests point this at a
    /// local mock server; production code uses `new`.
    pub fn with_endpoint(api_key: Option<String>, endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            endpoint: endpoint.into(),
        }
    }

    /// Whether a credential is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Send one chat completion request and return the first choice's message.
    ///
    /// Fails with `AiError::Configuration` before any network I/O when no
    /// credential is configured.
    pub async fn invoke(
        &self,
        messages: &[ChatMessage],
        enable_reasoning: bool,
    ) -> Result<ChatMessage, AiError> {
        let api_key = self.api_key.as_deref().ok_or(AiError::Configuration)?;

        let mut request_body = json!({
            "model": MODEL,
            "messages": messages,
        });
        if enable_reasoning {
            request_body["reasoning"] = json!({ "enabled": true });
        }

        let response = self
            .http
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let status_text = status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string();
            // Prefer the provider's own error message when the body is parseable
            let message = match response.json::<Value>().await {
                Ok(error_body) => error_body["error"]["message"]
                    .as_str()
                    .map(|m| m.to_string())
                    .unwrap_or(status_text),
                Err(_) => status_text,
            };
            return Err(AiError::Upstream(message));
        }

        let result: Value = response.json().await?;
        let message = &result["choices"][0]["message"];

        Ok(ChatMessage {
            role: message["role"].as_str().unwrap_or("assistant").to_string(),
            content: message["content"].as_str().unwrap_or_default().to_string(),
            reasoning_details: message
                .get("reasoning_details")
                .filter(|details| !details.is_null())
                .cloned(),
        })
    }
}
