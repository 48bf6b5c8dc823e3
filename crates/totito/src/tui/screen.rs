//! Screen trait and transition type for the TUI state machine.

use crossterm::event::KeyEvent;
use derive_getters::Getters;
use ratatui::Frame;
use totito_core::{BoardSize, Player};

/// Display names of both players.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PlayerNames {
    /// Name of player one (X).
    one: String,
    /// Name of player two (O).
    two: String,
}

impl PlayerNames {
    /// Creates a new pair of names.
    pub fn new(one: impl Into<String>, two: impl Into<String>) -> Self {
        Self {
            one: one.into(),
            two: two.into(),
        }
    }

    /// Returns the name of `player`.
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.one,
            Player::Two => &self.two,
        }
    }

    /// Returns `"<name> (<mark>)"`, e.g. `Ana (X)`.
    pub fn label(&self, player: Player) -> String {
        format!("{} ({})", self.name(player), player)
    }
}

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`GameController`](crate::GameController) state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Leave the start screen and begin a game.
    StartGame {
        /// Board size chosen on the start screen.
        size: BoardSize,
        /// Names entered on the start screen.
        names: PlayerNames,
    },
    /// Abandon the current game and go back to the start screen.
    BackToStart,
    /// Exit the application.
    Quit,
}

/// Trait implemented by each screen in the TUI state machine.
///
/// Each screen owns its own state, renders its UI, and handles key events.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;
}
