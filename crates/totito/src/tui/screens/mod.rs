//! Concrete screens of the terminal UI.

mod game;
mod start;

pub use game::GameScreen;
pub use start::StartScreen;
