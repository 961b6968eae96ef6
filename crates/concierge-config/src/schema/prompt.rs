use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Prompt template override.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PromptConfig {
    /// File containing a replacement template. Must contain the
    /// `{history}` and `{input}` placeholders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_path: Option<PathBuf>,
}
