//! Game engine for Totito.
//!
//! The engine owns the board and the turn. Moves are validated against the
//! board, a successful move flips the turn, and the winner is reported from
//! the board contents after the fact.

use crate::invariants::{EngineInvariants, InvariantSet, InvariantViolation};
use crate::rules::{Line, winning_line};
use crate::types::{Board, BoardSize, Cell, Player, Turn};
use tracing::{debug, info, instrument};

/// Totito game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    turn: Turn,
}

/// Creates a new game on an empty board of the given size.
pub fn create_game(size: BoardSize) -> GameEngine {
    GameEngine::new(size)
}

impl GameEngine {
    /// Creates a new game. Player one moves first.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        info!("Creating new game");
        Self {
            board: Board::new(size),
            turn: Player::One,
        }
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.board.size()
    }

    /// Marks `(row, col)` for the player to move.
    ///
    /// Returns `true` and passes the turn when the cell was empty. Returns
    /// `false` and leaves the game untouched when the cell is already marked.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the board. Coordinates come from
    /// the UI layer, which only ever offers cells that exist.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> bool {
        let n = self.board.dimension();
        assert!(
            row < n && col < n,
            "move ({row}, {col}) is out of bounds for a {n}x{n} board"
        );

        if !self.board.is_empty(row, col) {
            debug!("Cell already occupied, move rejected");
            return false;
        }

        self.board.set(row, col, Cell::Occupied(self.turn));
        self.turn = self.turn.opponent();
        debug!(next = %self.turn, "Move applied");

        debug_assert!(
            self.check_invariants().is_ok(),
            "engine invariants violated after move ({row}, {col})"
        );
        true
    }

    /// Returns the player to move.
    pub fn current_turn(&self) -> Turn {
        self.turn
    }

    /// Reports the winner, if any line is complete.
    ///
    /// The winner is taken to be the player who made the last move, which is
    /// the opponent of [`current_turn`](Self::current_turn) because
    /// [`apply_move`](Self::apply_move) has already passed the turn. Call this
    /// after a move, not before.
    ///
    /// A full board with no complete line also yields `None`.
    #[instrument(skip(self))]
    pub fn check_winner(&self) -> Option<Turn> {
        self.winning_line().map(|line| {
            let winner = self.turn.opponent();
            debug!(?line, %winner, "Complete line found");
            winner
        })
    }

    /// Returns the first complete line on the board.
    pub fn winning_line(&self) -> Option<Line> {
        winning_line(&self.board)
    }

    /// Clears the board and gives the first move back to player one.
    #[instrument(skip(self), fields(size = %self.board.size()))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = Player::One;
        info!("Game reset");
    }

    /// Returns an owned copy of the board.
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Checks every engine invariant against the current state.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        EngineInvariants::check_all(self)
    }

    /// Writes a mark directly, bypassing turn handling.
    #[cfg(test)]
    pub(crate) fn place_unchecked(&mut self, row: usize, col: usize, player: Player) {
        self.board.set(row, col, Cell::Occupied(player));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_new_game_is_empty() {
        for size in BoardSize::iter() {
            let game = create_game(size);
            assert_eq!(game.size(), size);
            assert_eq!(game.current_turn(), Player::One);
            assert_eq!(game.snapshot(), Board::new(size));
            assert_eq!(game.check_winner(), None);
        }
    }

    #[test]
    fn test_apply_move_marks_and_flips() {
        let mut game = create_game(BoardSize::Three);
        assert!(game.apply_move(1, 2));

        let board = game.snapshot();
        assert_eq!(board.get(1, 2), Some(Cell::Occupied(Player::One)));
        assert_eq!(board.marked(), 1);
        assert_eq!(game.current_turn(), Player::Two);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = create_game(BoardSize::Four);
        assert!(game.apply_move(3, 3));
        let before = game.clone();

        assert!(!game.apply_move(3, 3));
        assert_eq!(game, before);
        assert_eq!(game.current_turn(), Player::Two);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_out_of_bounds_row_panics() {
        let mut game = create_game(BoardSize::Three);
        game.apply_move(3, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds for a 5x5 board")]
    fn test_out_of_bounds_col_panics() {
        let mut game = create_game(BoardSize::Five);
        game.apply_move(0, 5);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut game = create_game(BoardSize::Three);
        let snapshot = game.snapshot();
        game.apply_move(0, 0);
        assert!(snapshot.is_empty(0, 0));
        assert!(!game.board().is_empty(0, 0));
    }

    #[test]
    fn test_row_win_attributed_to_previous_mover() {
        // Player two filled the row, then the turn moved on to player one.
        let mut game = create_game(BoardSize::Three);
        for col in 0..3 {
            game.place_unchecked(0, col, Player::Two);
        }
        game.turn = Player::One;
        assert_eq!(game.check_winner(), Some(Player::Two));
    }

    #[test]
    fn test_column_win() {
        let mut game = create_game(BoardSize::Four);
        for row in 0..4 {
            game.place_unchecked(row, 1, Player::One);
        }
        game.turn = Player::Two;
        assert_eq!(game.winning_line(), Some(Line::Column(1)));
        assert_eq!(game.check_winner(), Some(Player::One));
    }

    #[test]
    fn test_diagonal_wins() {
        let mut game = create_game(BoardSize::Five);
        for i in 0..5 {
            game.place_unchecked(i, i, Player::One);
        }
        game.turn = Player::Two;
        assert_eq!(game.check_winner(), Some(Player::One));

        let mut game = create_game(BoardSize::Five);
        for i in 0..5 {
            game.place_unchecked(i, 4 - i, Player::Two);
        }
        game.turn = Player::One;
        assert_eq!(game.check_winner(), Some(Player::Two));
    }

    #[test]
    fn test_attribution_follows_turn_not_marks() {
        // The line belongs to player one, but the turn says player one just
        // moved only if it is now player two's turn.
        let mut game = create_game(BoardSize::Three);
        for col in 0..3 {
            game.place_unchecked(2, col, Player::One);
        }
        assert_eq!(game.current_turn(), Player::One);
        assert_eq!(game.check_winner(), Some(Player::Two));
    }

    #[test]
    fn test_concrete_scenario_row_zero() {
        let mut game = create_game(BoardSize::Three);
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
            assert!(game.apply_move(row, col));
            assert_eq!(game.check_winner(), None);
        }
        assert!(game.apply_move(0, 2));
        assert_eq!(game.winning_line(), Some(Line::Row(0)));
        assert_eq!(game.check_winner(), Some(Player::One));
    }

    #[test]
    fn test_full_board_without_line_has_no_winner() {
        // X O X / X O O / O X X
        let mut game = create_game(BoardSize::Three);
        for (row, col) in [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ] {
            assert!(game.apply_move(row, col));
        }
        assert_eq!(game.board().marked(), 9);
        assert_eq!(game.check_winner(), None);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut game = create_game(BoardSize::Four);
        for (row, col) in [(0, 0), (1, 1), (2, 2)] {
            game.apply_move(row, col);
        }
        game.reset();
        assert_eq!(game, create_game(BoardSize::Four));
        assert!(game.apply_move(0, 0));
    }
}
