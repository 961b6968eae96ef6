//! Configuration schema types for the concierge.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults that reproduce the stock
//! Market Connect assistant.

mod credentials;
mod history;
mod model;
mod prompt;
mod system;

pub use credentials::*;
pub use history::*;
pub use model::*;
pub use prompt::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the concierge.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ConciergeConfig {
    pub model: ModelConfig,
    pub credentials: CredentialsConfig,
    pub history: HistoryConfig,
    pub prompt: PromptConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
