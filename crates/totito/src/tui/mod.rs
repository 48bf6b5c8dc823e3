//! Terminal UI for Totito.

mod controller;
mod input;
mod screen;
mod screens;
mod ui;

pub use controller::GameController;
pub use input::Cursor;
pub use screen::{PlayerNames, Screen, ScreenTransition};
pub use screens::{GameScreen, StartScreen};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

use crate::TotitoConfig;

/// Runs the terminal UI until the players quit.
///
/// Logs go to the configured log file so they do not interfere with the
/// terminal. The terminal is restored before any error is returned.
#[instrument(skip(config), fields(log_file = %config.log_file().display()))]
pub fn run_tui(config: &TotitoConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting Totito TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller = GameController::new(config);
    let res = controller.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    info!("Totito TUI exited");
    res
}
