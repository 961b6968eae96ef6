//! Persona prompt rendering.
//!
//! The template is parsed once into literal and placeholder segments, so
//! `compose` is a single pass: text substituted for `{history}` or
//! `{input}` is never itself expanded.

use std::sync::LazyLock;

/// The stock Market Connect customer-service persona.
pub const DEFAULT_TEMPLATE: &str = r#"
You are a highly efficient and polite customer service assistant for an online marketplace. Your purpose is to help customers with any questions they have related to their orders, products, shipping, returns, and account information. You must respond to customer queries clearly, concisely, and accurately based on the information provided.

You must remember the following:
- Be friendly, professional, and helpful at all times.
- If you cannot answer a question, politely state that you lack the information and suggest the customer contact a human representative.
- Do not make up information.
- Use a calm and reassuring tone.
- Avoid using any special formatting characters like asterisks (*) or dashes (-) in your responses.

Current conversation:
{history}
Human: {input}
AI:
"#;

const HISTORY: &str = "history";
const INPUT: &str = "input";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("template is missing the {{{0}}} placeholder")]
    MissingPlaceholder(&'static str),
    #[error("template uses unknown placeholder {{{0}}}")]
    UnknownPlaceholder(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    History,
    Input,
}

/// Renders the persona template with the transcript and the latest input.
#[derive(Debug, Clone)]
pub struct PromptComposer {
    segments: Vec<Segment>,
}

impl PromptComposer {
    /// Parse `template`, which must contain both `{history}` and `{input}`.
    ///
    /// Any other `{identifier}` is rejected. Braces that do not wrap an
    /// identifier are kept as literal text.
    pub fn new(template: &str) -> Result<Self, PromptError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            literal.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let placeholder = after
                .find('}')
                .map(|close| &after[..close])
                .filter(|name| is_identifier(name));

            match placeholder {
                Some(name) => {
                    let segment = match name {
                        HISTORY => Segment::History,
                        INPUT => Segment::Input,
                        other => return Err(PromptError::UnknownPlaceholder(other.to_string())),
                    };
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(segment);
                    rest = &after[name.len() + 1..];
                }
                None => {
                    literal.push('{');
                    rest = after;
                }
            }
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        if !segments.contains(&Segment::History) {
            return Err(PromptError::MissingPlaceholder(HISTORY));
        }
        if !segments.contains(&Segment::Input) {
            return Err(PromptError::MissingPlaceholder(INPUT));
        }

        Ok(Self { segments })
    }

    /// Substitute the rendered transcript and the user's input.
    pub fn compose(&self, history: &str, input: &str) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::History => out.push_str(history),
                Segment::Input => out.push_str(input),
            }
        }
        out
    }
}

static DEFAULT_COMPOSER: LazyLock<PromptComposer> = LazyLock::new(|| {
    PromptComposer::new(DEFAULT_TEMPLATE).expect("DEFAULT_TEMPLATE has both placeholders")
});

impl Default for PromptComposer {
    fn default() -> Self {
        DEFAULT_COMPOSER.clone()
    }
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
