//! Conversation transcript.
//!
//! `SessionHistory` is the ordered log of turns fed back to the model as
//! the `{history}` region of the prompt. Turns are appended in
//! chronological order and never edited.

use std::fmt;

/// Who said a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Human,
    Ai,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::Human => f.write_str("Human"),
            Speaker::Ai => f.write_str("AI"),
        }
    }
}

/// One utterance in the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    speaker: Speaker,
    text: String,
}

impl Turn {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
        }
    }

    pub fn human(text: impl Into<String>) -> Self {
        Self::new(Speaker::Human, text)
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Self::new(Speaker::Ai, text)
    }

    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.speaker, self.text)
    }
}

/// How many turns the transcript keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetentionPolicy {
    /// Keep every turn for the life of the session.
    #[default]
    Unbounded,
    /// Keep at most `max_turns` of the most recent turns.
    Window { max_turns: usize },
}

impl RetentionPolicy {
    /// Build from a configured bound, where `None` means unbounded.
    ///
    /// Windows are rounded up to a whole number of exchanges so the
    /// retained log always opens with a Human turn.
    pub fn from_max_turns(max_turns: Option<usize>) -> Self {
        match max_turns {
            None => RetentionPolicy::Unbounded,
            Some(n) => RetentionPolicy::Window {
                max_turns: n.max(2).div_ceil(2) * 2,
            },
        }
    }
}

/// Ordered, append-only transcript of one session.
#[derive(Debug, Clone, Default)]
pub struct SessionHistory {
    turns: Vec<Turn>,
    policy: RetentionPolicy,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: RetentionPolicy) -> Self {
        Self {
            turns: Vec::new(),
            policy,
        }
    }

    /// Append a turn, evicting the oldest exchanges if a window is set.
    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
        self.enforce_policy();
    }

    /// Append one completed Human/AI exchange.
    pub fn record_exchange(&mut self, input: impl Into<String>, reply: impl Into<String>) {
        self.turns.push(Turn::human(input));
        self.turns.push(Turn::ai(reply));
        self.enforce_policy();
    }

    /// Serialize as `"{speaker}: {text}"` lines in chronological order.
    pub fn render(&self) -> String {
        self.turns
            .iter()
            .map(Turn::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn policy(&self) -> RetentionPolicy {
        self.policy
    }

    fn enforce_policy(&mut self) {
        let RetentionPolicy::Window { max_turns } = self.policy else {
            return;
        };
        if self.turns.len() <= max_turns {
            return;
        }
        let mut excess = self.turns.len() - max_turns;
        // Evict whole exchanges from the front.
        if excess % 2 == 1 {
            excess += 1;
        }
        let excess = excess.min(self.turns.len());
        self.turns.drain(..excess);
        tracing::debug!(evicted = excess, kept = self.turns.len(), "history window applied");
    }
}
