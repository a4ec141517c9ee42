//! Errors reported by list and cursor operations.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = StoutError> = std::result::Result<T, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoutError {
    /// Node capacity must be positive and even.
    #[error("node size must be a positive even number, got {0}")]
    InvalidNodeSize(usize),
    /// Position outside the range the operation accepts.
    #[error("position {pos} out of range for list of length {len}")]
    IndexOutOfRange { pos: usize, len: usize },
    /// `set` or `remove` on a cursor with nothing returned since the last edit.
    #[error("cursor has no pending element to edit")]
    NoPendingElement,
    /// `next` at the end or `previous` at the start.
    #[error("cursor has no further elements in that direction")]
    Exhausted,
}
