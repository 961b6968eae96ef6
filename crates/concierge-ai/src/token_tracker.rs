//! Token usage tracking for one session.

use crate::TokenUsage;

/// Tracks cumulative token usage across the replies of a session.
#[derive(Debug, Default)]
pub struct TokenTracker {
    total: TokenUsage,
    call_count: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record token usage from a successful model call.
    pub fn record(&mut self, usage: &TokenUsage) {
        self.total.input_tokens = self.total.input_tokens.saturating_add(usage.input_tokens);
        self.total.output_tokens = self.total.output_tokens.saturating_add(usage.output_tokens);
        self.call_count += 1;
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    pub fn call_count(&self) -> u64 {
        self.call_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let tracker = TokenTracker::new();
        assert_eq!(tracker.call_count(), 0);
        assert_eq!(tracker.total_tokens(), 0);
    }

    #[test]
    fn accumulates_calls() {
        let mut tracker = TokenTracker::new();
        tracker.record(&TokenUsage {
            input_tokens: 100,
            output_tokens: 20,
        });
        tracker.record(&TokenUsage {
            input_tokens: 150,
            output_tokens: 30,
        });
        assert_eq!(tracker.call_count(), 2);
        assert_eq!(tracker.total().input_tokens, 250);
        assert_eq!(tracker.total().output_tokens, 50);
        assert_eq!(tracker.total_tokens(), 300);
    }
}
