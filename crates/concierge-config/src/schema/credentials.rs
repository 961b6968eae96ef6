use serde::{Deserialize, Serialize};

/// Where the API key comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GOOGLE_API_KEY".into(),
        }
    }
}
