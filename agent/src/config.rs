use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Name of the directory holding the key file at a customer installation.
pub const SCRIPT_DIR_NAME: &str = "Kundenscripts";

#[derive(Parser, Debug, Clone)]
#[command(name = "heartbeat-agent", version, about = "Reports to the management portal")]
pub struct Cli {
    #[command(subcommand)]
    pub mode: Mode,

    #[command(flatten)]
    pub config: AgentConfig,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Send the newest log entry as heartbeat
    Heartbeat,
    /// Exchange the license key for its replacement
    License,
}

#[derive(Args, Debug, Clone)]
pub struct AgentConfig {
    /// Base URL of the management portal
    #[arg(long, env = "PORTAL_URL", default_value = "http://localhost:8000", global = true)]
    pub url: String,

    /// Script directory; skips the lookup
    #[arg(long, env = "AGENT_DIR", global = true)]
    pub dir: Option<PathBuf>,

    /// File in the script directory holding the license key
    #[arg(long, default_value = "config.txt", global = true)]
    pub key_file: String,

    /// File in the script directory holding the log
    #[arg(long, default_value = "LOG.txt", global = true)]
    pub log_file: String,

    /// File caching the script directory found by the lookup
    #[arg(long, default_value = "path.txt", global = true)]
    pub path_file: PathBuf,

    /// Directories searched for the script directory
    #[arg(long = "search-root", default_value = ".", global = true)]
    pub search_roots: Vec<PathBuf>,

    /// Maximum directory depth of the search
    #[arg(long, default_value_t = 8, global = true)]
    pub max_depth: usize,

    /// Seconds between two runs
    #[arg(long, default_value_t = 86_340, global = true)]
    pub interval_secs: u64,

    /// Upper bound of the random delay added to every interval, in seconds
    #[arg(long, default_value_t = 100, global = true)]
    pub jitter_secs: u64,

    /// Run once and exit
    #[arg(long, global = true)]
    pub once: bool,
}

impl AgentConfig {
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}
