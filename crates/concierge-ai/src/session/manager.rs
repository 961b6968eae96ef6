//! ChatSession struct and construction.

use std::sync::Arc;
use std::time::Duration;

use crate::history::SessionHistory;
use crate::prompt::PromptComposer;
use crate::token_tracker::TokenTracker;
use crate::AiClient;

/// One customer conversation: transcript, persona, and the model behind it.
pub struct ChatSession {
    /// Transcript fed back into every prompt.
    pub(super) history: SessionHistory,
    /// Persona template renderer.
    pub(super) composer: PromptComposer,
    /// Remote model.
    pub(super) client: Arc<dyn AiClient>,
    /// Upper bound on a single model call.
    pub(super) request_timeout: Duration,
    pub(super) tracker: TokenTracker,
}

impl ChatSession {
    pub fn new(client: Arc<dyn AiClient>) -> Self {
        Self {
            history: SessionHistory::new(),
            composer: PromptComposer::default(),
            client,
            request_timeout: Duration::from_secs(120),
            tracker: TokenTracker::new(),
        }
    }

    pub fn with_history(mut self, history: SessionHistory) -> Self {
        self.history = history;
        self
    }

    pub fn with_composer(mut self, composer: PromptComposer) -> Self {
        self.composer = composer;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Get the conversation transcript.
    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    /// Get the token tracker.
    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }

    /// Number of turns currently in the transcript.
    pub fn turn_count(&self) -> usize {
        self.history.len()
    }
}
