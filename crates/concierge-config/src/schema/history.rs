use serde::{Deserialize, Serialize};

/// Conversation retention.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct HistoryConfig {
    /// Maximum number of turns kept for context. 0 keeps everything.
    pub max_turns: usize,
}

impl HistoryConfig {
    /// The retention bound, or `None` when history is unbounded.
    pub fn window(&self) -> Option<usize> {
        (self.max_turns > 0).then_some(self.max_turns)
    }
}
