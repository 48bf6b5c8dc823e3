//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Highlighted cell on the game board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Cursor {
    /// Creates a cursor at the given cell.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Moves the cursor based on arrow keys, staying inside an `n`x`n` board.
pub fn move_cursor(cursor: Cursor, key: KeyCode, n: usize) -> Cursor {
    let last = n.saturating_sub(1);
    match key {
        KeyCode::Up => Cursor::new(cursor.row.saturating_sub(1), cursor.col),
        KeyCode::Down => Cursor::new((cursor.row + 1).min(last), cursor.col),
        KeyCode::Left => Cursor::new(cursor.row, cursor.col.saturating_sub(1)),
        KeyCode::Right => Cursor::new(cursor.row, (cursor.col + 1).min(last)),
        // No change for other keys
        _ => cursor,
    }
}
