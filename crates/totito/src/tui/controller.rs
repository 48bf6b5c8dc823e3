//! Controller - the state machine driving the two-screen TUI.

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal, backend::Backend};
use tracing::{debug, info, instrument};

use crate::TotitoConfig;
use crate::tui::screen::{PlayerNames, Screen, ScreenTransition};
use crate::tui::screens::{GameScreen, StartScreen};

/// Active screen in the state machine.
#[derive(Debug)]
enum ActiveScreen {
    Start(StartScreen),
    Game(GameScreen),
}

/// Controller that owns the active screen and applies transitions.
///
/// Call [`GameController::run`] to start the event loop.
#[derive(Debug)]
pub struct GameController {
    screen: ActiveScreen,
    should_quit: bool,
}

impl GameController {
    /// Creates a controller showing the start screen, prefilled from `config`.
    #[instrument(skip(config))]
    pub fn new(config: &TotitoConfig) -> Self {
        info!("Creating GameController");
        let names = PlayerNames::new(config.player_one().clone(), config.player_two().clone());
        Self {
            screen: ActiveScreen::Start(StartScreen::new(names, *config.board_size())),
            should_quit: false,
        }
    }

    /// True once a screen asked to quit.
    pub fn is_quitting(&self) -> bool {
        self.should_quit
    }

    /// The running game, if the game screen is active.
    pub fn active_game(&self) -> Option<&GameScreen> {
        match &self.screen {
            ActiveScreen::Game(game) => Some(game),
            ActiveScreen::Start(_) => None,
        }
    }

    /// Draws the active screen.
    pub fn render(&self, frame: &mut Frame) {
        match &self.screen {
            ActiveScreen::Start(s) => s.render(frame),
            ActiveScreen::Game(s) => s.render(frame),
        }
    }

    /// Routes a key press to the active screen and applies the resulting transition.
    #[instrument(skip(self, key), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        let transition = match &mut self.screen {
            ActiveScreen::Start(s) => s.handle_key(key),
            ActiveScreen::Game(s) => s.handle_key(key),
        };
        self.apply_transition(transition);
    }

    #[instrument(skip(self))]
    fn apply_transition(&mut self, transition: ScreenTransition) {
        debug!(transition = ?transition, "Applying screen transition");
        match transition {
            ScreenTransition::Stay => {}

            ScreenTransition::StartGame { size, names } => {
                info!(size = %size, "Navigating to Game");
                self.screen = ActiveScreen::Game(GameScreen::new(size, names));
            }

            ScreenTransition::BackToStart => {
                // The start screen comes back with the names and size just played.
                let ActiveScreen::Game(game) = &self.screen else {
                    return;
                };
                info!("Navigating to Start");
                let start = StartScreen::new(game.names().clone(), game.engine().size());
                self.screen = ActiveScreen::Start(start);
            }

            ScreenTransition::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Runs the event loop until a screen asks to quit.
    ///
    /// The game only changes on key presses, so the loop blocks on input
    /// between redraws.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");

        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if let Event::Key(key) = event::read()? {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                self.handle_key(key);
            }
        }

        info!("Event loop finished");
        Ok(())
    }
}
