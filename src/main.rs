//! Tic-tac-toe timeline - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tictactoe_timeline::{GameSession, ReplayMode, TimelineConfig, UiEvent, replay};
use timeline_core::{BoardSize, winning_lines};
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => TimelineConfig::from_file(path)?,
        None => TimelineConfig::default(),
    };
    initialize_tracing(&config);

    match cli.command {
        Command::Replay { events, strict } => run_replay(&config, &events, strict),
        Command::Lines { size } => run_lines(&config, size),
    }
}

/// Installs the stderr subscriber, preferring `RUST_LOG` over the config.
fn initialize_tracing(config: &TimelineConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("Tracing initialized");
}

/// Replays recorded events and prints the report.
#[instrument(skip(config), fields(events = %events.display()))]
fn run_replay(config: &TimelineConfig, events: &Path, strict: bool) -> Result<()> {
    let content = std::fs::read_to_string(events)
        .with_context(|| format!("Failed to read events from {}", events.display()))?;
    let events: Vec<UiEvent> =
        serde_json::from_str(&content).context("Events file is not a JSON array of UI events")?;
    info!(count = events.len(), "Events loaded");

    let mode = if strict { ReplayMode::Strict } else { ReplayMode::Lenient };
    let mut session = GameSession::from_config(config);
    let report = replay(&mut session, &events, mode)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Prints the winning lines for a board size.
#[instrument(skip(config))]
fn run_lines(config: &TimelineConfig, size: Option<i64>) -> Result<()> {
    let size = match size {
        Some(value) => BoardSize::new(value)?,
        None => *config.board_size(),
    };

    let lines = winning_lines(size.get());
    info!(%size, count = lines.len(), "Lines generated");
    println!("{}", serde_json::to_string_pretty(&lines)?);
    Ok(())
}
