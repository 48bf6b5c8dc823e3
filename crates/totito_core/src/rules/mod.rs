//! Game rules for Totito.
//!
//! Pure functions over a [`Board`](crate::Board). They know nothing about
//! whose turn it is; attributing a completed line to a player is the engine's
//! job.

pub mod win;

pub use win::{Line, winning_line};
