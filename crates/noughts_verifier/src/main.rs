//! Noughts - command-line harness for the board verifier.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use noughts_verifier::{Verifier, VerifierConfig};
use serde_json::Value;
use std::path::Path;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = VerifierConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Check { board, show } => run_check(&board, show, &config),
        Command::CheckFile { path } => run_check_file(&path, &config),
    }
}

/// Logs go to stderr; stdout only carries outcomes.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[instrument(skip(board, config))]
fn run_check(board: &str, show: bool, config: &VerifierConfig) -> Result<()> {
    let verifier = Verifier::from_json(board, *config.size())?;
    if show {
        eprintln!("{}\n", verifier.board());
    }
    println!("{}", verifier.check_winner());
    Ok(())
}

#[instrument(skip(config), fields(path = %path.display()))]
fn run_check_file(path: &Path, config: &VerifierConfig) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    let Some(boards) = value.as_array() else {
        bail!("{} must hold a JSON array of boards", path.display());
    };

    let mut invalid = 0usize;
    for (idx, board) in boards.iter().enumerate() {
        match Verifier::from_value(board, *config.size()) {
            Ok(verifier) => println!("{}", verifier.check_winner()),
            Err(e) => {
                warn!(board = idx, error = %e, "Invalid board");
                println!("error: {}", e);
                invalid += 1;
            }
        }
    }

    info!(total = boards.len(), invalid, "Checked boards");
    if invalid > 0 {
        bail!("{} of {} boards were invalid", invalid, boards.len());
    }
    Ok(())
}
