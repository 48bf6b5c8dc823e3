//! Turn parity invariant: the turn follows from how many cells are marked.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::Player;

/// Invariant: player one is to move exactly when an even number of cells is marked.
pub struct TurnParityInvariant;

impl Invariant<GameEngine> for TurnParityInvariant {
    fn holds(game: &GameEngine) -> bool {
        let expected = if game.board().marked() % 2 == 0 {
            Player::One
        } else {
            Player::Two
        };
        game.current_turn() == expected
    }

    fn description() -> &'static str {
        "Turn matches the parity of marked cells (even: player one, odd: player two)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardSize, create_game};

    #[test]
    fn test_turn_tracks_parity() {
        let mut game = create_game(BoardSize::Three);
        assert!(TurnParityInvariant::holds(&game));

        game.apply_move(1, 1);
        assert_eq!(game.current_turn(), Player::Two);
        assert!(TurnParityInvariant::holds(&game));

        // Rejected moves leave both the board and the turn alone.
        game.apply_move(1, 1);
        assert!(TurnParityInvariant::holds(&game));
    }

    #[test]
    fn test_mark_without_turn_change_violates() {
        let mut game = create_game(BoardSize::Five);
        game.place_unchecked(4, 0, Player::One);
        assert!(!TurnParityInvariant::holds(&game));
    }
}
