//! Totito core - pure game logic for tic-tac-toe on 3x3, 4x4 and 5x5 boards.
//!
//! # Architecture
//!
//! - **Types**: players, cells, board sizes and the board grid
//! - **Rules**: line completion checks, independent of who is to move
//! - **Engine**: the [`GameEngine`] that owns the board and the turn
//! - **Invariants**: logical properties every reachable engine state satisfies
//!
//! # Example
//!
//! ```
//! use totito_core::{BoardSize, Player, create_game};
//!
//! let mut game = create_game(BoardSize::Three);
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     assert!(game.apply_move(row, col));
//! }
//! assert_eq!(game.check_winner(), Some(Player::One));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod invariants;
mod rules;
mod types;

// Crate-level exports - Engine
pub use engine::{GameEngine, create_game};

// Crate-level exports - Errors
pub use error::BoardSizeError;

// Crate-level exports - Invariants
pub use invariants::{
    EngineInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    TurnParityInvariant,
};

// Crate-level exports - Rules
pub use rules::{Line, winning_line};

// Crate-level exports - Domain types
pub use types::{Board, BoardSize, Cell, Player, Turn};
