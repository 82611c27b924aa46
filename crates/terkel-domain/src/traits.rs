//! Trait definitions for external interactions
//!
//! These traits define the boundary between domain logic and infrastructure.
//! Implementations live in other crates.

use async_trait::async_trait;

/// Trait for chat-completion providers
///
/// Implemented by the infrastructure layer (terkel-llm). One call sends one
/// system instruction and one user prompt and yields the reply text; there
/// is no conversation state between calls.
#[async_trait]
pub trait ChatProvider {
    /// Error type for provider operations
    type Error: std::fmt::Display;

    /// Send a prompt under a system instruction and return the reply text.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, Self::Error>;
}
