//! Game screen - the board, whose turn it is, and the winner banner.
//!
//! Everything shown about the game is read from the [`GameEngine`] at render
//! time. The screen itself only adds the cursor and the player names.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use totito_core::{BoardSize, Cell, GameEngine, Player, create_game};
use tracing::{debug, info, instrument};

use crate::tui::input::{Cursor, move_cursor};
use crate::tui::screen::{PlayerNames, Screen, ScreenTransition};
use crate::tui::ui::{center_rect, draw_help, draw_title};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// State for the game screen.
#[derive(Debug, Getters)]
pub struct GameScreen {
    engine: GameEngine,
    names: PlayerNames,
    cursor: Cursor,
}

impl GameScreen {
    /// Creates a game screen with a fresh game of the given size.
    #[instrument(skip(names))]
    pub fn new(size: BoardSize, names: PlayerNames) -> Self {
        debug!("Initializing GameScreen");
        Self {
            engine: create_game(size),
            names,
            cursor: Cursor::default(),
        }
    }

    /// Status line for the current engine state.
    pub fn status(&self) -> String {
        match self.engine.check_winner() {
            Some(winner) => format!("{} wins! Press r to play again", self.names.label(winner)),
            None => format!("Turn: {}", self.names.label(self.engine.current_turn())),
        }
    }

    /// Plays the cell under the cursor.
    ///
    /// Ignored once the game has a winner; the board stays locked until reset.
    #[instrument(skip(self), fields(row = self.cursor.row, col = self.cursor.col))]
    fn play_at_cursor(&mut self) {
        if self.engine.check_winner().is_some() {
            debug!("Game already won, ignoring move");
            return;
        }

        let player = self.engine.current_turn();
        if !self.engine.apply_move(self.cursor.row, self.cursor.col) {
            debug!("Cell occupied, nothing to do");
            return;
        }

        if let Some(winner) = self.engine.check_winner() {
            info!(
                winner = %self.names.label(winner),
                line = ?self.engine.winning_line(),
                "Game won"
            );
        } else {
            debug!(player = %player, "Move played");
        }
    }

    #[instrument(skip(self))]
    fn reset(&mut self) {
        info!("Resetting game");
        self.engine.reset();
    }

    fn draw_board(&self, frame: &mut Frame, area: Rect) {
        let n = self.engine.size().get();
        let width = n as u16 * CELL_WIDTH + (n as u16 - 1);
        let height = n as u16 * CELL_HEIGHT + (n as u16 - 1);
        let board_area = center_rect(area, width, height);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(separated(n, CELL_HEIGHT))
            .split(board_area);

        for row in 0..n {
            if row > 0 {
                draw_separator(frame, rows[row * 2 - 1]);
            }
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(separated(n, CELL_WIDTH))
                .split(rows[row * 2]);

            for col in 0..n {
                if col > 0 {
                    draw_separator_vertical(frame, cols[col * 2 - 1]);
                }
                self.draw_cell(frame, cols[col * 2], row, col);
            }
        }
    }

    fn draw_cell(&self, frame: &mut Frame, area: Rect, row: usize, col: usize) {
        let board = self.engine.board();
        let n = board.dimension();

        let (symbol, base_style) = match board.get(row, col) {
            Some(Cell::Occupied(Player::One)) => (
                "X",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Some(Cell::Occupied(Player::Two)) => (
                "O",
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            _ => ("·", Style::default().fg(Color::DarkGray)),
        };

        let on_winning_line = self
            .engine
            .winning_line()
            .is_some_and(|line| line.contains(row, col, n));

        let style = if self.cursor == Cursor::new(row, col) {
            base_style.bg(Color::White).fg(Color::Black)
        } else if on_winning_line {
            base_style.bg(Color::Green)
        } else {
            base_style
        };

        let paragraph = Paragraph::new(vec![Line::from(""), Line::from(symbol)])
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

/// Constraints for `n` cells of `len` with one-cell separators between them.
fn separated(n: usize, len: u16) -> Vec<Constraint> {
    (0..n * 2 - 1)
        .map(|i| {
            if i % 2 == 0 {
                Constraint::Length(len)
            } else {
                Constraint::Length(1)
            }
        })
        .collect()
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

impl Screen for GameScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(9),
                Constraint::Length(3),
            ])
            .split(area);

        draw_title(
            frame,
            chunks[0],
            &format!("Totito {}", self.engine.size().label()),
        );

        let status_style = if self.engine.check_winner().is_some() {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let status = Paragraph::new(self.status())
            .style(status_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[1]);

        self.draw_board(frame, chunks[2]);

        draw_help(
            frame,
            chunks[3],
            "Arrows: Move | Enter/Space: Play | r: Restart | Esc: Menu | q: Quit",
        );
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code, self.engine.size().get());
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play_at_cursor();
                ScreenTransition::Stay
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.reset();
                ScreenTransition::Stay
            }
            KeyCode::Esc => {
                info!("Leaving game");
                ScreenTransition::BackToStart
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
