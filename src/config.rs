use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How the final summary is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `Home 1 - Away 0` line per match
    Text,
    /// A JSON array of summary entries
    Json,
}

/// Replay a scoreboard command script and print the ranked summary
#[derive(Parser, Debug, Clone)]
#[command(name = "scoreboard", version, about)]
pub struct Config {
    /// Command script to replay (reads stdin when omitted)
    #[arg(long, env = "SCOREBOARD_SCRIPT")]
    pub script: Option<PathBuf>,

    /// Summary output format
    #[arg(long, env = "SCOREBOARD_FORMAT", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Abort on the first rejected command instead of logging and continuing
    #[arg(long, env = "SCOREBOARD_STRICT", default_value = "false")]
    pub strict: bool,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(path) = &self.script {
            if !path.is_file() {
                anyhow::bail!("script {} does not exist or is not a file", path.display());
            }
        }
        Ok(())
    }
}
