//! Error types for board construction and move application.

use thiserror::Error;

/// Errors raised by the board model.
///
/// The search engine introduces no error kinds of its own; it propagates
/// these unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The targeted cell is already occupied.
    #[error("invalid action: cell ({row}, {col}) is already occupied")]
    InvalidAction { row: usize, col: usize },

    /// The grid is malformed (wrong shape, bad symbol, or impossible mark counts).
    #[error("invalid board: {0}")]
    InvalidBoard(String),
}

/// Result type alias for board and search operations.
pub type Result<T> = std::result::Result<T, Error>;
