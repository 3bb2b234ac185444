use clap::{command, Parser, Subcommand};

/// The model used for all completions.
pub const COMPLETION_MODEL: &str = "gpt-4o";
/// Sampling temperature for log triage.
pub const TRIAGE_TEMPERATURE: f32 = 0.2;
/// Sampling temperature for the naming exchange.
pub const NAMING_TEMPERATURE: f32 = 0.8;
/// The compose service whose logs are triaged.
pub const DEFAULT_SERVICE: &str = "app";
/// Maximum number of trailing log characters embedded into a prompt.
pub const LOG_TAIL_CHARS: usize = 2000;

/// CLI for `buddy`
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

/// Buddy subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetches the most recent `docker compose` logs for the app service
    /// and asks the model for a startup diagnosis.
    #[command(alias = "t")]
    Triage,
    /// Asks the assistant to confirm the short form of its name.
    #[command(alias = "n")]
    Naming,
}
