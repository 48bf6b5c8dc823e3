//! Totito - terminal tic-tac-toe for two players on one keyboard.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for default board size, player names and log file
//! - **Tui**: start screen and game screen driven by a small screen state machine
//! - **Replay**: headless runner that plays a scripted move list and reports the result
//!
//! All game rules live in [`totito_core`]; this crate only presents them.
//!
//! # Example
//!
//! ```
//! use totito::{TotitoConfig, parse_moves, replay};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = TotitoConfig::default();
//! let moves = parse_moves("0,0 1,1 0,1 2,2 0,2")?;
//! let report = replay(*config.board_size(), &moves)?;
//! assert_eq!(report.winner(), &Some(totito_core::Player::One));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod replay;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, TotitoConfig};

// Crate-level exports - Headless replay
pub use replay::{ReplayError, ReplayReport, parse_moves, replay};

// Crate-level exports - Terminal UI
pub use tui::{
    Cursor, GameController, GameScreen, PlayerNames, Screen, ScreenTransition, StartScreen,
    run_tui,
};
