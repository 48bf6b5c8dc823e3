//! Core domain types for Totito.

use crate::error::BoardSizeError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// First player, plays `X` and always opens.
    #[display("X")]
    One,
    /// Second player, plays `O`.
    #[display("O")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the mark this player places on the board.
    pub fn mark(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

/// Alias for clarity when talking about whose move it is.
pub type Turn = Player;

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell marked by a player.
    Occupied(Player),
}

impl Cell {
    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the player owning this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Text symbol for this cell (`.` when empty).
    pub fn symbol(self) -> char {
        self.owner().map_or('.', Player::mark)
    }
}

/// Supported board dimensions.
///
/// Serialized as the plain side length so it reads naturally in config files
/// (`board_size = 4`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[serde(try_from = "usize", into = "usize")]
pub enum BoardSize {
    /// Classic 3x3 board.
    #[default]
    Three,
    /// 4x4 board.
    Four,
    /// 5x5 board.
    Five,
}

impl BoardSize {
    /// Side length of the board.
    pub fn get(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Four => 4,
            BoardSize::Five => 5,
        }
    }

    /// Label for display, e.g. `4x4`.
    pub fn label(self) -> &'static str {
        match self {
            BoardSize::Three => "3x3",
            BoardSize::Four => "4x4",
            BoardSize::Five => "5x5",
        }
    }

    /// Next larger size, wrapping around to 3x3.
    pub fn next(self) -> Self {
        match self {
            BoardSize::Three => BoardSize::Four,
            BoardSize::Four => BoardSize::Five,
            BoardSize::Five => BoardSize::Three,
        }
    }

    /// Next smaller size, wrapping around to 5x5.
    pub fn previous(self) -> Self {
        match self {
            BoardSize::Three => BoardSize::Five,
            BoardSize::Four => BoardSize::Three,
            BoardSize::Five => BoardSize::Four,
        }
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardSizeError;

    fn try_from(side: usize) -> Result<Self, Self::Error> {
        match side {
            3 => Ok(BoardSize::Three),
            4 => Ok(BoardSize::Four),
            5 => Ok(BoardSize::Five),
            other => Err(BoardSizeError::Unsupported(other)),
        }
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.get()
    }
}

impl FromStr for BoardSize {
    type Err = BoardSizeError;

    /// Accepts either the side length (`"4"`) or a square label (`"4x4"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let side = match normalized.split_once('x') {
            Some((rows, cols)) if rows == cols => rows,
            Some(_) => return Err(BoardSizeError::Unparseable(s.to_string())),
            None => normalized.as_str(),
        };
        let side: usize = side
            .parse()
            .map_err(|_| BoardSizeError::Unparseable(s.to_string()))?;
        Self::try_from(side)
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Square Totito board.
///
/// A `Board` handed out by the engine is an owned snapshot: changing it has no
/// effect on the game it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: BoardSize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a new empty board.
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.get() * size.get()],
        }
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Side length of the board.
    pub fn dimension(&self) -> usize {
        self.size.get()
    }

    /// Gets the cell at the given coordinates, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Checks if the cell at the given coordinates exists and is empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> std::slice::Chunks<'_, Cell> {
        self.cells.chunks(self.dimension())
    }

    /// Counts the cells marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.owner() == Some(player))
            .count()
    }

    /// Counts all marked cells.
    pub fn marked(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Sets the cell at the given coordinates.
    ///
    /// Callers are responsible for bounds checking.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let n = self.dimension();
        self.cells[row * n + col] = cell;
    }

    /// Empties every cell.
    pub(crate) fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        let n = self.dimension();
        (row < n && col < n).then_some(row * n + col)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
