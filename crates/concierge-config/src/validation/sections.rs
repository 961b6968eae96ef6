//! Validation for the model and credentials sections.

use crate::schema::ConciergeConfig;

use super::helpers::{validate_non_empty, validate_range, validate_range_f64};

/// Validate model constraints.
pub(crate) fn validate_model(errors: &mut Vec<String>, config: &ConciergeConfig) {
    let model = &config.model;
    validate_non_empty(errors, "model.name", &model.name);
    validate_range_f64(errors, "model.temperature", model.temperature, 0.0, 2.0);
    validate_range(errors, "model.max_tokens", model.max_tokens, 1, 65536);
    validate_range(
        errors,
        "model.request_timeout_secs",
        model.request_timeout_secs,
        1,
        600,
    );
    validate_range(
        errors,
        "model.connect_timeout_secs",
        model.connect_timeout_secs,
        1,
        600,
    );
    if let Some(ref url) = model.base_url {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            errors.push(format!("model.base_url = {url} must be an http(s) URL"));
        }
    }
}

/// Validate credential lookup constraints.
pub(crate) fn validate_credentials(errors: &mut Vec<String>, config: &ConciergeConfig) {
    let name = &config.credentials.api_key_env;
    validate_non_empty(errors, "credentials.api_key_env", name);
    if name.contains('=') || name.chars().any(char::is_whitespace) {
        errors.push(format!(
            "credentials.api_key_env = {name:?} is not a valid variable name"
        ));
    }
}
