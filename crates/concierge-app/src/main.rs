mod cli;
mod repl;

use std::sync::Arc;
use std::time::Duration;

use concierge_ai::{
    ChatSession, GeminiClient, GeminiConfig, PromptComposer, RetentionPolicy, SessionHistory,
};
use concierge_common::{ConciergeError, ConfigError};
use concierge_config::ConciergeConfig;
use tracing_subscriber::EnvFilter;

use crate::repl::SessionLoop;

/// Load variables from `.env` in the working directory or its parents.
///
/// Variables already set in the environment win.
fn load_dotenv() -> Option<std::path::PathBuf> {
    dotenvy::dotenv().ok()
}

fn init_logging(directive: &str) {
    let mut filter = EnvFilter::from_default_env();
    match directive.parse() {
        Ok(d) => filter = filter.add_directive(d),
        Err(e) => eprintln!("ignoring invalid log directive {directive:?}: {e}"),
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Build the persona composer, honoring a template override file.
fn load_composer(config: &ConciergeConfig) -> Result<PromptComposer, ConfigError> {
    let Some(ref path) = config.prompt.template_path else {
        return Ok(PromptComposer::default());
    };
    let template = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::TemplateError(format!("failed to read {}: {e}", path.display()))
    })?;
    let composer = PromptComposer::new(&template)
        .map_err(|e| ConfigError::TemplateError(format!("{}: {e}", path.display())))?;
    tracing::info!("using prompt template from {}", path.display());
    Ok(composer)
}

/// Resolve the credential and wire client, history, and composer together.
///
/// Fails before anything is printed when the API key is missing.
fn build_session(config: &ConciergeConfig) -> Result<ChatSession, ConciergeError> {
    let api_key = concierge_config::api_key_from_env(&config.credentials)?;
    let composer = load_composer(config)?;

    let mut gemini = GeminiConfig::new(api_key)
        .with_model(&config.model.name)
        .with_temperature(config.model.temperature)
        .with_max_tokens(config.model.max_tokens)
        .with_connect_timeout(Duration::from_secs(config.model.connect_timeout_secs.into()));
    if let Some(ref url) = config.model.base_url {
        gemini = gemini.with_base_url(url);
    }
    tracing::info!(model = %gemini.model, temperature = gemini.temperature, "model configured");

    let client = GeminiClient::new(gemini).map_err(|e| ConciergeError::Ai(e.to_string()))?;
    let history =
        SessionHistory::with_policy(RetentionPolicy::from_max_turns(config.history.window()));

    Ok(ChatSession::new(Arc::new(client))
        .with_history(history)
        .with_composer(composer)
        .with_request_timeout(Duration::from_secs(config.model.request_timeout_secs.into())))
}

async fn run(config: ConciergeConfig) -> Result<(), ConciergeError> {
    let session = build_session(&config)?;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut repl = SessionLoop::new(session, stdin, tokio::io::stdout());
    repl.run().await?;

    let tracker = repl.session().tracker();
    tracing::info!(
        calls = tracker.call_count(),
        input_tokens = tracker.total().input_tokens,
        output_tokens = tracker.total().output_tokens,
        "session ended"
    );
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env file before anything else
    let dotenv_path = load_dotenv();

    let args = cli::parse();

    let loaded = concierge_config::load_config(args.config.as_deref());
    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.level.directive().to_string(),
        (None, Err(_)) => concierge_config::LogLevel::default().directive().to_string(),
    };
    init_logging(&directive);

    tracing::info!("concierge v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(path) = dotenv_path {
        tracing::debug!("loaded environment from {}", path.display());
    }

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        ConciergeConfig::default()
    });

    if let Err(e) = run(config).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
