//! Error types for board mutations
//!
//! Queries are infallible; only the move command can fail. A failed move
//! leaves the board untouched, so callers may retry or ignore freely.

use crate::types::Square;

/// Errors that can occur when executing a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Move requested from a cell with no figure on it
    #[error("no figure on {square}")]
    PieceNotFound { square: Square },

    /// The occupant of `from` cannot legally reach `to`
    #[error("illegal move: {from} -> {to}")]
    IllegalMove { from: Square, to: Square },
}

/// Result type alias for board mutations
pub type GameResult<T> = Result<T, GameError>;
