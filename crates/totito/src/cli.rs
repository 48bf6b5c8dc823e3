//! Command-line interface for totito.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use totito_core::BoardSize;

/// Totito - tic-tac-toe for two players on one keyboard
#[derive(Parser, Debug)]
#[command(name = "totito")]
#[command(about = "Terminal tic-tac-toe on 3x3, 4x4 and 5x5 boards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(long, global = true, default_value = "totito.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Board size to preselect (3, 4, 5 or 4x4 style)
        #[arg(short, long)]
        size: Option<BoardSize>,

        /// Name for player one (X)
        #[arg(long)]
        player_one: Option<String>,

        /// Name for player two (O)
        #[arg(long)]
        player_two: Option<String>,
    },

    /// Replay a scripted list of moves and print the result
    Replay {
        /// Moves as "row,col" pairs separated by spaces or ';'
        #[arg(short, long)]
        moves: String,

        /// Board size (falls back to the config file)
        #[arg(short, long)]
        size: Option<BoardSize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for `replay`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Board and status lines
    Text,
    /// Pretty-printed JSON report
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_defaults() {
        let cli = Cli::try_parse_from(["totito", "play"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("totito.toml"));
        match cli.command {
            Command::Play {
                size,
                player_one,
                player_two,
            } => {
                assert_eq!(size, None);
                assert_eq!(player_one, None);
                assert_eq!(player_two, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_play_overrides() {
        let cli = Cli::try_parse_from([
            "totito",
            "play",
            "--size",
            "5x5",
            "--player-one",
            "Ana",
            "--config",
            "other.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("other.toml"));
        match cli.command {
            Command::Play {
                size, player_one, ..
            } => {
                assert_eq!(size, Some(BoardSize::Five));
                assert_eq!(player_one.as_deref(), Some("Ana"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_replay_args() {
        let cli = Cli::try_parse_from([
            "totito", "replay", "--moves", "0,0 1,1", "--size", "4", "--format", "json",
        ])
        .unwrap();
        match cli.command {
            Command::Replay {
                moves,
                size,
                format,
            } => {
                assert_eq!(moves, "0,0 1,1");
                assert_eq!(size, Some(BoardSize::Four));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unsupported_size() {
        assert!(Cli::try_parse_from(["totito", "play", "--size", "6"]).is_err());
        assert!(Cli::try_parse_from(["totito", "replay"]).is_err());
    }
}
