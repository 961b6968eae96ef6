//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Market Connect concierge configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[model]
# name = "gemini-2.5-flash"
# temperature = 0.7          # 0.0-2.0
# max_tokens = 4096          # 1-65536
# request_timeout_secs = 120 # 1-600, upper bound on one reply
# connect_timeout_secs = 10  # 1-600
# base_url = "https://generativelanguage.googleapis.com/v1beta/models"

[credentials]
# api_key_env = "GOOGLE_API_KEY"

[history]
# max_turns = 0              # 0 keeps the whole conversation

[prompt]
# template_path = "/path/to/template.txt"  # must contain {history} and {input}

[logging]
# level = "WARNING"          # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
