use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use pretty_assertions::assert_eq;

use super::*;
use crate::history::{RetentionPolicy, SessionHistory, Speaker};
use crate::prompt::PromptComposer;
use crate::{AiClient, AiError, AiResponse, Message, TokenUsage};

/// Replays canned results and remembers every prompt it was sent.
struct ScriptedClient {
    replies: Mutex<VecDeque<Result<AiResponse, AiError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedClient {
    fn new(replies: Vec<Result<&str, AiError>>) -> Arc<Self> {
        let replies = replies
            .into_iter()
            .map(|r| {
                r.map(|text| AiResponse {
                    content: text.to_string(),
                    usage: TokenUsage {
                        input_tokens: 10,
                        output_tokens: 5,
                    },
                })
            })
            .collect();
        Arc::new(Self {
            replies: Mutex::new(replies),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiClient for ScriptedClient {
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError> {
        assert_eq!(messages.len(), 1);
        self.prompts.lock().unwrap().push(messages[0].content.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AiError::ApiError("script exhausted".into())))
    }
}

struct StalledClient;

#[async_trait]
impl AiClient for StalledClient {
    async fn send_message(&self, _messages: &[Message]) -> Result<AiResponse, AiError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Err(AiError::ApiError("unreachable".into()))
    }
}

/// Text between "Current conversation:\n" and "\nHuman: " in a rendered prompt.
fn history_region(prompt: &str) -> &str {
    let start = prompt.find("Current conversation:\n").unwrap() + "Current conversation:\n".len();
    let end = prompt.rfind("\nHuman: ").unwrap();
    &prompt[start..end]
}

#[tokio::test]
async fn first_turn_uses_empty_history() {
    let client = ScriptedClient::new(vec![Ok(
        "I'm sorry, I don't have access to order details directly...",
    )]);
    let mut session = ChatSession::new(client.clone());

    let reply = session.respond("Where is my order #1234?").await.unwrap();
    assert_eq!(
        reply,
        "I'm sorry, I don't have access to order details directly..."
    );

    let prompts = client.prompts();
    assert!(prompts[0].contains("Human: Where is my order #1234?"));
    assert_eq!(history_region(&prompts[0]), "");

    let turns = session.history().turns();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[1].speaker(), Speaker::Ai);
    assert_eq!(
        turns[1].text(),
        "I'm sorry, I don't have access to order details directly..."
    );
}

#[tokio::test]
async fn second_turn_sees_first_exchange() {
    let client = ScriptedClient::new(vec![Ok("Hello! How can I help?"), Ok("Returns take 5 days.")]);
    let mut session = ChatSession::new(client.clone());

    session.respond("Hi").await.unwrap();
    session.respond("How long do returns take?").await.unwrap();

    let prompts = client.prompts();
    assert_eq!(
        history_region(&prompts[1]),
        "Human: Hi\nAI: Hello! How can I help?"
    );
    assert!(prompts[1].ends_with("Human: How long do returns take?\nAI:\n"));
}

#[tokio::test]
async fn n_turns_produce_2n_alternating_entries() {
    let replies = (0..6).map(|_| Ok("ok")).collect();
    let client = ScriptedClient::new(replies);
    let mut session = ChatSession::new(client);

    for i in 0..6 {
        session.respond(&format!("question {i}")).await.unwrap();
        assert_eq!(session.turn_count(), 2 * (i + 1));
    }
    for (i, turn) in session.history().turns().iter().enumerate() {
        let expected = if i % 2 == 0 { Speaker::Human } else { Speaker::Ai };
        assert_eq!(turn.speaker(), expected);
    }
    assert_eq!(session.tracker().call_count(), 6);
    assert_eq!(session.tracker().total_tokens(), 90);
}

#[tokio::test]
async fn failed_call_leaves_history_unchanged() {
    let client = ScriptedClient::new(vec![
        Ok("first"),
        Err(AiError::NetworkError("connection reset".into())),
        Ok("third"),
    ]);
    let mut session = ChatSession::new(client.clone());

    session.respond("one").await.unwrap();
    let before = session.history().render();

    let err = session.respond("two").await.unwrap_err();
    assert!(matches!(err, AiError::NetworkError(_)));
    assert_eq!(session.history().render(), before);
    assert_eq!(session.tracker().call_count(), 1);

    session.respond("three").await.unwrap();
    assert_eq!(
        session.history().render(),
        "Human: one\nAI: first\nHuman: three\nAI: third"
    );
    assert_eq!(history_region(&client.prompts()[2]), "Human: one\nAI: first");
}

#[tokio::test]
async fn stalled_call_times_out_without_mutating_history() {
    let mut session =
        ChatSession::new(Arc::new(StalledClient)).with_request_timeout(Duration::from_millis(20));

    let err = session.respond("hello?").await.unwrap_err();
    assert!(matches!(err, AiError::Timeout(d) if d == Duration::from_millis(20)));
    assert_eq!(err.to_string(), "Timeout after 20ms");
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn windowed_history_bounds_prompt_context() {
    let replies = (0..3).map(|_| Ok("ok")).collect();
    let client = ScriptedClient::new(replies);
    let history = SessionHistory::with_policy(RetentionPolicy::Window { max_turns: 2 });
    let mut session = ChatSession::new(client.clone()).with_history(history);

    session.respond("a").await.unwrap();
    session.respond("b").await.unwrap();
    session.respond("c").await.unwrap();

    assert_eq!(session.turn_count(), 2);
    assert_eq!(history_region(&client.prompts()[2]), "Human: b\nAI: ok");
}

#[tokio::test]
async fn custom_composer_is_used() {
    let client = ScriptedClient::new(vec![Ok("fine")]);
    let composer = PromptComposer::new("[{history}] >> {input}").unwrap();
    let mut session = ChatSession::new(client.clone()).with_composer(composer);

    session.respond("status?").await.unwrap();
    assert_eq!(client.prompts()[0], "[] >> status?");
}
