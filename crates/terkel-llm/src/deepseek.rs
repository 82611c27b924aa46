//! DeepSeek Provider Implementation
//!
//! Chat-completion client for the DeepSeek API. One call sends one system
//! instruction plus one user prompt and returns the reply text; there is no
//! streaming, no conversation state, and deliberately no retry loop (a
//! failed call is surfaced to the user, who decides whether to rerun).
//!
//! # Examples
//!
//! ```no_run
//! use terkel_llm::DeepSeekProvider;
//!
//! let provider = DeepSeekProvider::new("sk-...");
//! // provider.complete(...) is async; drive it from an async context.
//! ```

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use terkel_domain::ChatProvider;
use tracing::debug;

use crate::LlmError;

/// Default DeepSeek API base URL
pub const DEFAULT_ENDPOINT: &str = "https://api.deepseek.com/v1";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "deepseek-chat";

/// Sampling temperature; low, favoring deterministic replies
pub const TEMPERATURE: f64 = 0.3;

/// Generation-length cap per reply
pub const MAX_TOKENS: u32 = 2000;

/// Default timeout for one chat-completion call (120 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// DeepSeek chat-completion provider
///
/// Holds the session credential in memory only; nothing is ever written to
/// disk.
#[derive(Debug, Clone)]
pub struct DeepSeekProvider {
    api_key: String,
    endpoint: String,
    model: String,
    timeout: Duration,
}

/// Request body for the chat-completion API
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: u32,
}

/// One message in a chat-completion request
#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

/// Response body for the chat-completion API
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl DeepSeekProvider {
    /// Create a provider for the given API key with default settings.
    ///
    /// The key is validated for non-emptiness at call time, not here, so a
    /// provider can be constructed before the user has entered a
    /// credential.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Override the API base URL (mainly for tests)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the per-call timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The model identifier this provider sends
    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body(&self, system: &str, prompt: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt.to_string(),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }
}

#[async_trait]
impl ChatProvider for DeepSeekProvider {
    type Error = LlmError;

    /// Send one chat-completion call and return the reply text verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the API key is empty (checked before any socket is opened)
    /// - the request fails at transport level or times out
    /// - the endpoint answers a non-success status
    /// - the payload carries no choices
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, Self::Error> {
        if self.api_key.trim().is_empty() {
            return Err(LlmError::MissingApiKey);
        }

        let url = format!("{}/chat/completions", self.endpoint.trim_end_matches('/'));
        let body = self.request_body(system, prompt);
        debug!(
            "Requesting completion from {} (model {}, prompt {} chars)",
            url,
            self.model,
            prompt.chars().count()
        );

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| LlmError::Communication(format!("Failed to build HTTP client: {}", e)))?;

        let response = client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let payload: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let choice = payload
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse("No choices in response".to_string()))?;

        Ok(choice.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_creation() {
        let provider = DeepSeekProvider::new("sk-test");
        assert_eq!(provider.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(provider.model, DEFAULT_MODEL);
        assert_eq!(provider.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_provider_builders() {
        let provider = DeepSeekProvider::new("sk-test")
            .with_endpoint("http://localhost:8080/v1/")
            .with_model("deepseek-reasoner")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(provider.endpoint, "http://localhost:8080/v1/");
        assert_eq!(provider.model(), "deepseek-reasoner");
        assert_eq!(provider.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_request_body_shape() {
        let provider = DeepSeekProvider::new("sk-test");
        let body = provider.request_body("system text", "user prompt");
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["model"], "deepseek-chat");
        assert_eq!(value["temperature"], 0.3);
        assert_eq!(value["max_tokens"], 2000);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][0]["content"], "system text");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "user prompt");
    }

    #[tokio::test]
    async fn test_empty_api_key_rejected_before_request() {
        let provider = DeepSeekProvider::new("");
        let result = provider.complete("sys", "prompt").await;
        assert!(matches!(result.unwrap_err(), LlmError::MissingApiKey));

        let provider = DeepSeekProvider::new("   ");
        let result = provider.complete("sys", "prompt").await;
        assert!(matches!(result.unwrap_err(), LlmError::MissingApiKey));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_communication_error() {
        let provider = DeepSeekProvider::new("sk-test")
            .with_endpoint("http://localhost:99999")
            .with_timeout(Duration::from_secs(2));

        let result = provider.complete("sys", "prompt").await;
        match result {
            Err(LlmError::Communication(_)) => {}
            other => panic!("Expected Communication error, got {:?}", other.err()),
        }
    }
}
