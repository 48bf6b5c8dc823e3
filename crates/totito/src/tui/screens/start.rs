//! Start screen - player names and board size.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;
use totito_core::BoardSize;
use tracing::{debug, info, instrument};

use crate::tui::screen::{PlayerNames, Screen, ScreenTransition};
use crate::tui::ui::{draw_help, draw_title};

const MAX_NAME_LEN: usize = 20;

/// Focusable elements on the start screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
enum Field {
    PlayerOne,
    PlayerTwo,
    Size,
    Start,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Field::PlayerOne => Field::PlayerTwo,
            Field::PlayerTwo => Field::Size,
            Field::Size => Field::Start,
            Field::Start => Field::PlayerOne,
        }
    }

    fn previous(self) -> Self {
        match self {
            Field::PlayerOne => Field::Start,
            Field::PlayerTwo => Field::PlayerOne,
            Field::Size => Field::PlayerTwo,
            Field::Start => Field::Size,
        }
    }
}

/// State for the start screen.
#[derive(Debug)]
pub struct StartScreen {
    player_one: String,
    player_two: String,
    size: BoardSize,
    focus: Field,
    defaults: PlayerNames,
}

impl StartScreen {
    /// Creates a start screen with the name inputs prefilled from `defaults`.
    ///
    /// A name input left blank falls back to its default when the game starts.
    #[instrument(skip(defaults))]
    pub fn new(defaults: PlayerNames, size: BoardSize) -> Self {
        debug!("Initializing StartScreen");
        Self {
            player_one: defaults.one().clone(),
            player_two: defaults.two().clone(),
            size,
            focus: Field::PlayerOne,
            defaults,
        }
    }

    /// Currently selected board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Names the game would start with, blanks replaced by the defaults.
    pub fn names(&self) -> PlayerNames {
        let pick = |input: &str, fallback: &str| {
            let trimmed = input.trim();
            if trimmed.is_empty() {
                fallback.to_string()
            } else {
                trimmed.to_string()
            }
        };
        PlayerNames::new(
            pick(&self.player_one, self.defaults.one()),
            pick(&self.player_two, self.defaults.two()),
        )
    }

    fn focused_input(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::PlayerOne => Some(&mut self.player_one),
            Field::PlayerTwo => Some(&mut self.player_two),
            Field::Size | Field::Start => None,
        }
    }

    #[instrument(skip(self))]
    fn start(&self) -> ScreenTransition {
        let names = self.names();
        info!(
            size = %self.size,
            player_one = %names.one(),
            player_two = %names.two(),
            "Starting game"
        );
        ScreenTransition::StartGame {
            size: self.size,
            names,
        }
    }

    fn input_block<'a>(&self, field: Field, title: &'a str) -> Block<'a> {
        let style = if self.focus == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(title)
    }
}

impl Screen for StartScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        draw_title(frame, chunks[0], "Welcome to Totito");

        let one = Paragraph::new(self.player_one.as_str())
            .block(self.input_block(Field::PlayerOne, "Player 1 (X)"));
        frame.render_widget(one, chunks[1]);

        let two = Paragraph::new(self.player_two.as_str())
            .block(self.input_block(Field::PlayerTwo, "Player 2 (O)"));
        frame.render_widget(two, chunks[2]);

        let mut spans = Vec::new();
        for size in BoardSize::iter() {
            let style = if size == self.size {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let label = if size == self.size {
                format!("[{}]", size.label())
            } else {
                format!(" {} ", size.label())
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw("  "));
        }
        let sizes = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(self.input_block(Field::Size, "Board size"));
        frame.render_widget(sizes, chunks[3]);

        let start_style = if self.focus == Field::Start {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green)
        };
        let start = Paragraph::new("Start game")
            .style(start_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(start, chunks[4]);

        draw_help(
            frame,
            chunks[6],
            "Tab/↑↓: Move | ←→: Board size | Enter: Start | Esc: Quit",
        );
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Esc => ScreenTransition::Quit,
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                ScreenTransition::Stay
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.previous();
                ScreenTransition::Stay
            }
            KeyCode::Enter => self.start(),
            KeyCode::Left if self.focus == Field::Size => {
                self.size = self.size.previous();
                debug!(size = %self.size, "Board size changed");
                ScreenTransition::Stay
            }
            KeyCode::Right if self.focus == Field::Size => {
                self.size = self.size.next();
                debug!(size = %self.size, "Board size changed");
                ScreenTransition::Stay
            }
            KeyCode::Char(' ') if self.focus == Field::Start => self.start(),
            KeyCode::Char(c) => {
                if let Some(input) = self.focused_input()
                    && input.chars().count() < MAX_NAME_LEN
                {
                    input.push(c);
                }
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                if let Some(input) = self.focused_input() {
                    input.pop();
                }
                ScreenTransition::Stay
            }
            _ => ScreenTransition::Stay,
        }
    }
}
