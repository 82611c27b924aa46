//! Terkel Model Client Layer
//!
//! Chat-completion provider implementations behind the `ChatProvider` trait
//! from `terkel-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: deterministic mock for testing
//! - `DeepSeekProvider`: DeepSeek chat-completion API
//!
//! # Examples
//!
//! ```
//! use terkel_llm::MockProvider;
//! use terkel_domain::ChatProvider;
//!
//! # tokio_test::block_on(async {
//! let provider = MockProvider::new("问题 | 摘要 | 充分 | none");
//! let reply = provider.complete("system", "any prompt").await.unwrap();
//! assert_eq!(reply, "问题 | 摘要 | 充分 | none");
//! # });
//! ```

#![warn(missing_docs)]

pub mod deepseek;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use terkel_domain::ChatProvider;
use thiserror::Error;

pub use deepseek::DeepSeekProvider;

/// Errors that can occur during model-client operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// No credential was supplied for the session
    #[error("API key is missing")]
    MissingApiKey,

    /// Network or transport failure before a status line arrived
    #[error("Communication error: {0}")]
    Communication(String),

    /// The endpoint answered with a non-success status
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code of the failed call
        status: u16,
        /// Response body text, as far as it could be read
        message: String,
    },

    /// The endpoint answered success but the payload was unusable
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Mock chat provider for deterministic testing
///
/// Returns pre-configured replies without touching the network. Replies can
/// be keyed by prompt, a failure can be injected, and an artificial delay
/// makes timeout paths testable.
///
/// # Examples
///
/// ```
/// use terkel_llm::MockProvider;
/// use terkel_domain::ChatProvider;
///
/// # tokio_test::block_on(async {
/// let mut provider = MockProvider::new("default reply");
/// provider.add_reply("prompt-a", "reply-a");
///
/// assert_eq!(provider.complete("sys", "prompt-a").await.unwrap(), "reply-a");
/// assert_eq!(provider.complete("sys", "other").await.unwrap(), "default reply");
/// assert_eq!(provider.call_count(), 2);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_reply: String,
    replies: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
    delay: Option<Duration>,
    fail_all: bool,
}

const MOCK_ERROR_MARKER: &str = "ERROR";

impl MockProvider {
    /// Create a mock that answers every prompt with a fixed reply
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            default_reply: reply.into(),
            replies: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
            delay: None,
            fail_all: false,
        }
    }

    /// Create a mock that fails every call
    pub fn failing() -> Self {
        let mut provider = Self::new("");
        provider.fail_all = true;
        provider
    }

    /// Add a specific reply for a given prompt
    pub fn add_reply(&mut self, prompt: impl Into<String>, reply: impl Into<String>) {
        self.replies
            .lock()
            .unwrap()
            .insert(prompt.into(), reply.into());
    }

    /// Configure the mock to fail for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        self.replies
            .lock()
            .unwrap()
            .insert(prompt.into(), MOCK_ERROR_MARKER.to_string());
    }

    /// Sleep this long before answering each call
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of times `complete` was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call counter
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock reply")
    }
}

#[async_trait]
impl ChatProvider for MockProvider {
    type Error = LlmError;

    async fn complete(&self, _system: &str, prompt: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_all {
            return Err(LlmError::Communication("Mock error".to_string()));
        }

        let scripted = self.replies.lock().unwrap().get(prompt).cloned();
        match scripted {
            Some(reply) if reply == MOCK_ERROR_MARKER => {
                Err(LlmError::Communication("Mock error".to_string()))
            }
            Some(reply) => Ok(reply),
            None => Ok(self.default_reply.clone()),
        }
    }
}
