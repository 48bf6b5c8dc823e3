//! Mark balance invariant: player one is never behind, and never more than one ahead.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::Player;

/// Invariant: marks on the board come from strictly alternating moves.
///
/// Player one opens, so the board holds either as many `X` as `O`, or
/// exactly one more `X`.
pub struct MarkBalanceInvariant;

impl Invariant<GameEngine> for MarkBalanceInvariant {
    fn holds(game: &GameEngine) -> bool {
        let board = game.board();
        let ones = board.count(Player::One);
        let twos = board.count(Player::Two);
        ones == twos || ones == twos + 1
    }

    fn description() -> &'static str {
        "Player one has as many marks as player two, or exactly one more"
    }
}
