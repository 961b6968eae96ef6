//! API key lookup.

use concierge_common::ConfigError;

use crate::schema::CredentialsConfig;

/// Read the API key from the environment variable named in the config.
///
/// A missing or empty variable is a fatal startup error.
pub fn api_key_from_env(credentials: &CredentialsConfig) -> Result<String, ConfigError> {
    read_credential(&credentials.api_key_env)
}

/// Read a credential from `var`, rejecting absent or blank values.
pub fn read_credential(var: &str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ConfigError::MissingCredential(var.to_string())),
    }
}
