//! Error types for the core crate.

/// A board size outside the supported 3x3, 4x4 and 5x5 range.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardSizeError {
    /// The size is a number, but not one of 3, 4 or 5.
    #[display("Unsupported board size {} (expected 3, 4 or 5)", _0)]
    Unsupported(usize),

    /// The input could not be read as a board size at all.
    #[display("Cannot parse board size from {:?}", _0)]
    Unparseable(String),
}

impl std::error::Error for BoardSizeError {}
