use std::path::PathBuf;

use clap::Parser;

/// Terminal chat panel for a conversational search assistant.
#[derive(Debug, Parser)]
#[command(name = "askpanel", version)]
pub struct Cli {
    /// Query to submit on start, as if it arrived through a deep link.
    pub query: Option<String>,

    /// Path to a RON config file (defaults to ./askpanel.ron when present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace.
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Log file path.
    #[arg(long, default_value = panel_logging::DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Also mirror logs to the terminal.
    #[arg(long)]
    pub log_to_terminal: bool,
}
