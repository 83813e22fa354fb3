//! One-move neighbors of a legal board, forward and backward in time.

use crate::{classify, Board, Classification, Error, Player};

/// Fail with [`Error::InvalidBoard`] unless `board` is legal.
fn require_legal(board: Board) -> Result<Classification, Error> {
    let classification = classify(board);
    if classification.is_legal() {
        Ok(classification)
    } else {
        Err(Error::InvalidBoard {
            board,
            classification,
        })
    }
}

/// Boards reachable by one more move.
///
/// The mover's mark is placed on each empty cell in ascending order and
/// illegal results are dropped. Finished games have no successors.
pub fn forward_neighbors(board: Board) -> Result<Vec<Board>, Error> {
    let Some(mover) = require_legal(board)?.mover() else {
        return Ok(Vec::new());
    };

    Ok(board
        .empty_cells()
        .map(|cell| board.toggle_mark(mover, cell))
        .filter(|&next| classify(next).is_legal())
        .collect())
}

/// Legal boards one move earlier, each tagged with the player who moved.
///
/// The last mover is implied by the classification: first after a first
/// win, a draw or with second to move; second otherwise.
pub fn backward_neighbors(board: Board) -> Result<Vec<(Board, Player)>, Error> {
    let classification = require_legal(board)?;
    let Some(mover) = classification.last_mover() else {
        return Ok(Vec::new());
    };
    if board.count_marks(mover) == 0 {
        return Ok(Vec::new());
    }

    Ok(board
        .marks(mover)
        .map(|cell| board.toggle_mark(mover, cell))
        .filter(|&prev| classify(prev).is_legal())
        .map(|prev| (prev, mover))
        .collect())
}
