//! Remote model configuration.

use serde::{Deserialize, Serialize};

/// Which model to call and how.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Gemini model identifier.
    pub name: String,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Maximum output tokens per reply (valid range: 1-65536).
    pub max_tokens: u32,
    /// Upper bound on a single model call, in seconds (valid range: 1-600).
    pub request_timeout_secs: u32,
    /// TCP connect timeout, in seconds (valid range: 1-600).
    pub connect_timeout_secs: u32,
    /// Override for the Generative Language API base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "gemini-2.5-flash".into(),
            temperature: 0.7,
            max_tokens: 4096,
            request_timeout_secs: 120,
            connect_timeout_secs: 10,
            base_url: None,
        }
    }
}
