use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use tracing::{info, warn};

use live_scoreboard::board::{Board, SummaryEntry};
use live_scoreboard::config::{Config, OutputFormat};
use live_scoreboard::script::{parse_script, replay};

fn main() -> Result<()> {
    // Initialise tracing / logging (stderr, so stdout only carries summaries)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate()?;

    let source = match &config.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read script from stdin")?;
            buf
        }
    };

    let lines = parse_script(&source)?;
    info!("Replaying {} command(s)", lines.len());

    let mut board = Board::new();
    let outcome = replay(&lines, &mut board, config.strict)?;
    for entries in &outcome.summaries {
        print_summary(entries, config.format)?;
    }

    if outcome.rejected > 0 {
        warn!("{} command(s) rejected", outcome.rejected);
    }
    info!("Final board: {} active match(es)", board.len());
    print_summary(&board.summary(), config.format)
}

fn print_summary(entries: &[SummaryEntry], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (rank, entry) in entries.iter().enumerate() {
                println!("{}. {}", rank + 1, entry);
            }
            println!();
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(entries)?);
        }
    }
    Ok(())
}
