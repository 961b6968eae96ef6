//! Async reply method for ChatSession.

use tracing::debug;

use crate::{AiError, Message};

use super::manager::ChatSession;

impl ChatSession {
    /// Answer one user input.
    ///
    /// The prompt is composed from the transcript as it stands before this
    /// turn. The Human and AI turns are appended only when the model call
    /// succeeds; on any error the transcript is left untouched.
    pub async fn respond(&mut self, input: &str) -> Result<String, AiError> {
        let prompt = self.composer.compose(&self.history.render(), input);
        let messages = [Message::user(prompt)];

        debug!(
            turns = self.history.len(),
            prompt_len = messages[0].content.len(),
            "sending turn to model"
        );

        let response = tokio::time::timeout(self.request_timeout, self.client.send_message(&messages))
            .await
            .map_err(|_| AiError::Timeout(self.request_timeout))??;

        self.tracker.record(&response.usage);
        self.history.record_exchange(input, response.content.clone());
        Ok(response.content)
    }
}
