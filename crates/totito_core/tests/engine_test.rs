//! Tests for the public engine API across all board sizes.

use strum::IntoEnumIterator;
use totito_core::{Board, BoardSize, Cell, Line, Player, create_game};

#[test]
fn test_fresh_game_for_every_size() {
    for size in BoardSize::iter() {
        let game = create_game(size);
        let snapshot = game.snapshot();
        assert_eq!(snapshot.dimension(), size.get());
        assert!(snapshot.rows().flatten().all(|cell| *cell == Cell::Empty));
        assert_eq!(game.current_turn(), Player::One);
    }
}

#[test]
fn test_move_mutates_exactly_one_cell() {
    let mut game = create_game(BoardSize::Four);
    let before = game.snapshot();
    assert!(game.apply_move(2, 3));
    let after = game.snapshot();

    for row in 0..4 {
        for col in 0..4 {
            if (row, col) == (2, 3) {
                assert_eq!(after.get(row, col), Some(Cell::Occupied(Player::One)));
            } else {
                assert_eq!(after.get(row, col), before.get(row, col));
            }
        }
    }
}

#[test]
fn test_repeat_move_changes_nothing() {
    let mut game = create_game(BoardSize::Three);
    assert!(game.apply_move(0, 0));
    let snapshot = game.snapshot();
    let turn = game.current_turn();

    assert!(!game.apply_move(0, 0));
    assert_eq!(game.snapshot(), snapshot);
    assert_eq!(game.current_turn(), turn);
}

#[test]
fn test_turn_alternates_with_successful_moves() {
    let mut game = create_game(BoardSize::Five);
    let mut successes = 0;
    for (row, col) in [(0, 0), (0, 0), (1, 1), (2, 2), (1, 1), (3, 3)] {
        if game.apply_move(row, col) {
            successes += 1;
        }
        let expected = if successes % 2 == 0 {
            Player::One
        } else {
            Player::Two
        };
        assert_eq!(game.current_turn(), expected);
    }
    assert_eq!(successes, 4);
}

#[test]
fn test_concrete_three_by_three_scenario() {
    let mut game = create_game(BoardSize::Three);
    for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
        assert!(game.apply_move(row, col));
    }
    assert_eq!(game.snapshot().to_string(), "XXX\n.O.\n..O");
    assert_eq!(game.current_turn(), Player::Two);
    assert_eq!(game.check_winner(), Some(Player::One));
}

#[test]
fn test_player_two_column_win_on_four() {
    let mut game = create_game(BoardSize::Four);
    // X scatters, O fills column 3.
    for (row, col) in [
        (0, 0),
        (0, 3),
        (1, 0),
        (1, 3),
        (2, 1),
        (2, 3),
        (3, 1),
    ] {
        assert!(game.apply_move(row, col));
        assert_eq!(game.check_winner(), None);
    }
    assert!(game.apply_move(3, 3));
    assert_eq!(game.winning_line(), Some(Line::Column(3)));
    assert_eq!(game.check_winner(), Some(Player::Two));
}

#[test]
fn test_anti_diagonal_win_on_five() {
    let mut game = create_game(BoardSize::Five);
    for (row, col) in [
        (0, 4),
        (0, 0),
        (1, 3),
        (1, 0),
        (2, 2),
        (2, 0),
        (3, 1),
        (4, 1),
    ] {
        assert!(game.apply_move(row, col));
    }
    assert_eq!(game.check_winner(), None);
    assert!(game.apply_move(4, 0));
    assert_eq!(game.winning_line(), Some(Line::AntiDiagonal));
    assert_eq!(game.check_winner(), Some(Player::One));
}

#[test]
fn test_reset_after_win() {
    let mut game = create_game(BoardSize::Three);
    for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
        game.apply_move(row, col);
    }
    assert!(game.check_winner().is_some());

    game.reset();
    assert_eq!(game.snapshot(), Board::new(BoardSize::Three));
    assert_eq!(game.current_turn(), Player::One);
    assert_eq!(game.check_winner(), None);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_out_of_range_move_fails_fast() {
    let mut game = create_game(BoardSize::Four);
    game.apply_move(4, 4);
}
