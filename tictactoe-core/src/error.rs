//! Error types for operations that require a legal board.

use thiserror::Error;

use crate::{Board, Classification};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The board is not reachable by play, so it has no neighbors or result.
    #[error("board {} ({board}) is not legal: {classification}", .board.0)]
    InvalidBoard {
        board: Board,
        classification: Classification,
    },

    /// Text could not be read as a board.
    #[error("cannot parse board {input:?}: {reason}")]
    ParseBoard { input: String, reason: &'static str },
}
