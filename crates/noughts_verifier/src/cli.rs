//! Command-line interface for noughts_verifier.

use clap::{Parser, Subcommand};

/// Noughts - judge noughts-and-crosses board snapshots
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Reports the winner of a noughts-and-crosses board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the verifier configuration (optional)
    #[arg(short, long, global = true, default_value = "noughts.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Judge one board given as JSON, e.g. '[["X","X","X"],["O","O",""],["","",""]]'
    Check {
        /// Board as a JSON array of three rows
        board: String,

        /// Print the board to stderr before the outcome
        #[arg(long)]
        show: bool,
    },

    /// Judge every board in a JSON file holding an array of boards
    CheckFile {
        /// Path to the JSON file
        path: std::path::PathBuf,
    },
}
