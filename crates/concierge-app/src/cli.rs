use std::path::PathBuf;

use clap::Parser;

/// Market Connect customer-service assistant for the terminal.
///
/// Both flags are optional operational overrides. Run with none, the
/// assistant behaves exactly as a flagless program: default config path,
/// default log level, straight into the chat loop.
#[derive(Parser, Debug)]
#[command(name = "concierge", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override, e.g. `concierge=debug`.
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
