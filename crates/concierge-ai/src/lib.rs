//! Conversation engine for the Market Connect concierge.
//!
//! Provides:
//! - `AiClient`, the text-in/text-out seam to a hosted model
//! - a Gemini implementation of that seam
//! - `SessionHistory`, the ordered transcript of Human/AI turns
//! - `PromptComposer`, the fixed persona template renderer
//! - `ChatSession`, which ties the three together per user turn

pub mod gemini;
pub mod history;
pub mod prompt;
pub mod session;
pub mod token_tracker;

use std::time::Duration;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig};
pub use history::{RetentionPolicy, SessionHistory, Speaker, Turn};
pub use prompt::{PromptComposer, PromptError, DEFAULT_TEMPLATE};
pub use session::ChatSession;
pub use token_tracker::TokenTracker;

/// A hosted model that turns a conversation into one reply.
#[async_trait]
pub trait AiClient: Send + Sync {
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError>;
}

/// A user-authored message sent to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Authentication failed: {0}")]
    Auth(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout after {0:?}")]
    Timeout(Duration),
}
