//! Command-line interface for tictactoe_timeline.

use clap::{Parser, Subcommand};

/// Tic-tac-toe timeline - headless replay of recorded sessions
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Replay tic-tac-toe UI events and inspect board rules", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file with session defaults
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply a JSON array of UI events and print the final view as JSON
    Replay {
        /// Path to the recorded events
        #[arg(short, long)]
        events: std::path::PathBuf,

        /// Stop at the first rejected event instead of skipping it
        #[arg(long)]
        strict: bool,
    },

    /// Print the candidate winning lines of an N×N board as JSON
    Lines {
        /// Side length (defaults to the configured board size)
        #[arg(short, long)]
        size: Option<i64>,
    },
}
