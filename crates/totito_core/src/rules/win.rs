//! Line completion logic for Totito.

use crate::types::{Board, Cell};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A line that can win the game when fully marked by one player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Line {
    /// Row with the given index (0 is the top row).
    #[display("row {}", _0)]
    Row(usize),
    /// Column with the given index (0 is the leftmost column).
    #[display("column {}", _0)]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// Coordinates `(row, col)` covered by this line on a board of side `n`.
    pub fn cells(self, n: usize) -> Vec<(usize, usize)> {
        match self {
            Line::Row(row) => (0..n).map(|col| (row, col)).collect(),
            Line::Column(col) => (0..n).map(|row| (row, col)).collect(),
            Line::MainDiagonal => (0..n).map(|i| (i, i)).collect(),
            Line::AntiDiagonal => (0..n).map(|i| (i, n - 1 - i)).collect(),
        }
    }

    /// Checks whether `(row, col)` lies on this line on a board of side `n`.
    pub fn contains(self, row: usize, col: usize, n: usize) -> bool {
        match self {
            Line::Row(r) => row == r && col < n,
            Line::Column(c) => col == c && row < n,
            Line::MainDiagonal => row == col && row < n,
            Line::AntiDiagonal => row < n && col < n && row + col == n - 1,
        }
    }
}

/// Finds the first complete line on the board.
///
/// Rows are scanned first, then columns, then the main diagonal and finally
/// the anti-diagonal. A line is complete when every cell holds the same
/// non-empty mark, so an empty board never has one.
#[instrument(skip(board), fields(size = %board.size()))]
pub fn winning_line(board: &Board) -> Option<Line> {
    let n = board.dimension();
    (0..n)
        .map(Line::Row)
        .chain((0..n).map(Line::Column))
        .chain([Line::MainDiagonal, Line::AntiDiagonal])
        .find(|line| is_complete(board, *line))
}

fn is_complete(board: &Board, line: Line) -> bool {
    let mut cells = line
        .cells(board.dimension())
        .into_iter()
        .map(|(row, col)| board.get(row, col));

    match cells.next() {
        Some(Some(first @ Cell::Occupied(_))) => cells.all(|cell| cell == Some(first)),
        _ => false,
    }
}
