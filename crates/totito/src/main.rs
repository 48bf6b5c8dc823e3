//! Totito - terminal tic-tac-toe.
//!
//! `play` opens the terminal UI; `replay` runs a scripted game headlessly.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, OutputFormat};
use std::path::Path;
use totito::{TotitoConfig, parse_moves, replay, run_tui};
use totito_core::BoardSize;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            size,
            player_one,
            player_two,
        } => run_play(&cli.config, size, player_one, player_two),
        Command::Replay {
            moves,
            size,
            format,
        } => run_replay(&cli.config, &moves, size, format),
    }
}

/// Run the terminal UI
fn run_play(
    config_path: &Path,
    size: Option<BoardSize>,
    player_one: Option<String>,
    player_two: Option<String>,
) -> Result<()> {
    let config = TotitoConfig::load(config_path)?.with_overrides(size, player_one, player_two);
    run_tui(&config)
}

/// Replay a move script and print the report
#[instrument(skip(config_path, moves))]
fn run_replay(
    config_path: &Path,
    moves: &str,
    size: Option<BoardSize>,
    format: OutputFormat,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let size = match size {
        Some(size) => size,
        None => *TotitoConfig::load(config_path)?.board_size(),
    };
    let moves = parse_moves(moves)?;
    info!(size = %size, moves = moves.len(), "Replaying moves");

    let report = replay(size, &moves)?;
    match format {
        OutputFormat::Text => println!("{}", report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
