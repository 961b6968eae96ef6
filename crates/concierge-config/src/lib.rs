//! Concierge configuration system.
//!
//! Provides TOML-based configuration with validation and credential
//! lookup. All config sections use defaults so partial configs work out
//! of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use concierge_config::{api_key_from_env, load_config};
//!
//! let config = load_config(None).expect("failed to load config");
//! let key = api_key_from_env(&config.credentials).expect("missing API key");
//! # let _ = key;
//! ```

pub mod credentials;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use credentials::{api_key_from_env, read_credential};
pub use schema::{ConciergeConfig, LogLevel, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use concierge_common::ConfigError;

/// Load config from `path` when given, otherwise from the platform default.
///
/// An explicit path must exist; the default location is created on first
/// run.
pub fn load_config(path: Option<&Path>) -> Result<ConciergeConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}
