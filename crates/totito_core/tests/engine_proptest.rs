//! Property tests for the engine over random move sequences.

use proptest::prelude::*;
use totito_core::{BoardSize, Cell, Player, create_game};

fn moves() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..5, 0usize..5), 0..60)
}

proptest! {
    #[test]
    fn turn_follows_successful_move_count(side in 3usize..=5, moves in moves()) {
        let size = BoardSize::try_from(side).unwrap();
        let mut game = create_game(size);
        let mut successes = 0usize;

        for (row, col) in moves {
            let (row, col) = (row % side, col % side);
            let mover = game.current_turn();
            let was_empty = game.board().is_empty(row, col);
            let before = game.snapshot();

            let applied = game.apply_move(row, col);
            prop_assert_eq!(applied, was_empty);

            if applied {
                successes += 1;
                prop_assert_eq!(game.board().get(row, col), Some(Cell::Occupied(mover)));
                prop_assert_eq!(game.board().marked(), before.marked() + 1);
            } else {
                prop_assert_eq!(game.snapshot(), before);
            }

            let expected = if successes % 2 == 0 { Player::One } else { Player::Two };
            prop_assert_eq!(game.current_turn(), expected);
            prop_assert!(game.check_invariants().is_ok());
        }
    }

    #[test]
    fn marks_never_disappear_before_reset(side in 3usize..=5, moves in moves()) {
        let size = BoardSize::try_from(side).unwrap();
        let mut game = create_game(size);

        for (row, col) in moves {
            let before = game.snapshot();
            game.apply_move(row % side, col % side);
            let after = game.snapshot();
            for (old, new) in before.rows().flatten().zip(after.rows().flatten()) {
                if !old.is_empty() {
                    prop_assert_eq!(old, new);
                }
            }
        }

        game.reset();
        prop_assert_eq!(game.board().marked(), 0);
        prop_assert_eq!(game.current_turn(), Player::One);
    }

    #[test]
    fn winner_is_always_the_previous_mover(side in 3usize..=5, moves in moves()) {
        let size = BoardSize::try_from(side).unwrap();
        let mut game = create_game(size);

        for (row, col) in moves {
            if game.apply_move(row % side, col % side) {
                if let Some(winner) = game.check_winner() {
                    prop_assert_eq!(winner, game.current_turn().opponent());
                }
            }
        }
    }
}
