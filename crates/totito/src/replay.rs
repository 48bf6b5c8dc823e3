//! Headless replay of a scripted move list.
//!
//! Scripts are user input, so coordinates are validated here and reported as
//! [`ReplayError`]s instead of reaching the engine's bounds assertion.

use derive_getters::Getters;
use serde::Serialize;
use totito_core::{BoardSize, Line, Player, create_game};
use tracing::{debug, info, instrument};

/// Error raised while reading or validating a move script.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ReplayError {
    /// A token that is not of the form `row,col`.
    #[display("Invalid move {:?} (expected row,col)", _0)]
    InvalidMove(String),

    /// Coordinates outside the board.
    #[display("Move ({}, {}) is outside the {} board", row, col, size)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board the move was meant for.
        size: BoardSize,
    },
}

impl std::error::Error for ReplayError {}

/// Parses a move script such as `"0,0 1,1 0,1"`.
///
/// Moves are separated by whitespace or `;`.
#[instrument]
pub fn parse_moves(input: &str) -> Result<Vec<(usize, usize)>, ReplayError> {
    input
        .split(|c: char| c.is_whitespace() || c == ';')
        .filter(|token| !token.is_empty())
        .map(parse_move)
        .collect()
}

fn parse_move(token: &str) -> Result<(usize, usize), ReplayError> {
    let invalid = || ReplayError::InvalidMove(token.to_string());
    let (row, col) = token.split_once(',').ok_or_else(invalid)?;
    let row = row.trim().parse().map_err(|_| invalid())?;
    let col = col.trim().parse().map_err(|_| invalid())?;
    Ok((row, col))
}

/// Outcome of a replayed game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct ReplayReport {
    /// Board size played on.
    size: BoardSize,
    /// Final board, one string per row (`X`, `O`, `.`).
    rows: Vec<String>,
    /// Moves that marked a cell.
    applied: usize,
    /// Moves aimed at an occupied cell.
    rejected: Vec<(usize, usize)>,
    /// Moves left unplayed because the game was already won.
    skipped_after_win: usize,
    /// Player to move after the last applied move.
    current_turn: Player,
    /// Winner as reported by the engine.
    winner: Option<Player>,
    /// The completed line, if any.
    winning_line: Option<Line>,
}

/// Plays `moves` on a fresh board of the given size.
///
/// The whole script is validated before the first move is played. Once a
/// line is complete the remaining moves are counted but not played, which
/// matches how the terminal UI locks the board after a win.
#[instrument(skip(moves), fields(size = %size, moves = moves.len()))]
pub fn replay(size: BoardSize, moves: &[(usize, usize)]) -> Result<ReplayReport, ReplayError> {
    let n = size.get();
    if let Some(&(row, col)) = moves.iter().find(|(row, col)| *row >= n || *col >= n) {
        return Err(ReplayError::OutOfBounds { row, col, size });
    }

    let mut game = create_game(size);
    let mut applied = 0;
    let mut rejected = Vec::new();
    let mut skipped_after_win = 0;

    for &(row, col) in moves {
        if game.check_winner().is_some() {
            skipped_after_win += 1;
            continue;
        }
        if game.apply_move(row, col) {
            applied += 1;
        } else {
            debug!(row, col, "Replayed move hit an occupied cell");
            rejected.push((row, col));
        }
    }

    let winner = game.check_winner();
    info!(applied, rejected = rejected.len(), ?winner, "Replay finished");

    Ok(ReplayReport {
        size,
        rows: game
            .board()
            .rows()
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect(),
        applied,
        rejected,
        skipped_after_win,
        current_turn: game.current_turn(),
        winner,
        winning_line: game.winning_line(),
    })
}

impl std::fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        writeln!(f)?;
        writeln!(f, "Turn: {}", self.current_turn)?;
        match (self.winner, self.winning_line) {
            (Some(winner), Some(line)) => writeln!(f, "Winner: {} ({})", winner, line)?,
            _ => writeln!(f, "Winner: none")?,
        }
        write!(f, "Applied: {}", self.applied)?;
        if !self.rejected.is_empty() {
            let rejected: Vec<String> = self
                .rejected
                .iter()
                .map(|(row, col)| format!("{},{}", row, col))
                .collect();
            write!(f, "\nRejected: {}", rejected.join(" "))?;
        }
        if self.skipped_after_win > 0 {
            write!(f, "\nSkipped after win: {}", self.skipped_after_win)?;
        }
        Ok(())
    }
}
