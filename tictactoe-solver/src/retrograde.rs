//! Retrograde analysis: propagate decided results backwards from the
//! finished games until nothing more can be decided.
//!
//! Every legal board starts as a draw. Boards won or lost outright seed a
//! FIFO queue. When a decided board is popped, each predecessor either
//! takes the result immediately (the player who moved into the board wants
//! exactly that result) or has one fewer undecided successor; once a
//! predecessor has no successors left it inherits the popped result, which
//! must then be the best it could reach. Whatever is never decided stays a
//! draw.

use std::collections::VecDeque;

use tictactoe_core::{backward_neighbors, classify, forward_neighbors, Board, Error, ENCODING_COUNT};
use tracing::{debug, info};

use crate::solver::Outcome;
use crate::table::OutcomeTable;

/// Run retrograde analysis over every legal encoding.
pub fn analyze() -> Result<OutcomeTable, Error> {
    let size = ENCODING_COUNT as usize;
    let mut table = OutcomeTable::new();
    let mut remaining = vec![0u8; size];
    let mut decided = vec![false; size];
    let mut queue = VecDeque::new();

    for board in Board::all() {
        let classification = classify(board);
        if !classification.is_legal() {
            continue;
        }
        let idx = board.0 as usize;
        remaining[idx] = forward_neighbors(board)?.len() as u8;

        match Outcome::from_terminal(classification) {
            Some(Outcome::Draw) => {
                decided[idx] = true;
                table.insert(board, Outcome::Draw);
            }
            Some(outcome) => {
                decided[idx] = true;
                table.insert(board, outcome);
                queue.push_back(board);
            }
            None => table.insert(board, Outcome::Draw),
        }
    }
    info!(legal = table.len(), seeds = queue.len(), "retrograde seeded");

    let mut popped = 0u64;
    while let Some(board) = queue.pop_front() {
        popped += 1;
        let Some(outcome) = table.get(board) else {
            continue;
        };

        for (prev, mover) in backward_neighbors(board)? {
            let idx = prev.0 as usize;
            if decided[idx] {
                continue;
            }
            remaining[idx] -= 1;
            if outcome == Outcome::best_for(mover) || remaining[idx] == 0 {
                decided[idx] = true;
                table.insert(prev, outcome);
                queue.push_back(prev);
            }
        }
    }

    let undecided = decided
        .iter()
        .enumerate()
        .filter(|&(i, &d)| !d && table.get(Board(i as u32)).is_some())
        .count();
    debug!(popped, "retrograde queue drained");
    info!(
        solved = table.len(),
        draws_by_default = undecided,
        "retrograde analysis complete"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_draw() {
        let table = analyze().unwrap();
        assert_eq!(table.get(Board::EMPTY), Some(Outcome::Draw));
        assert_eq!(table.len(), 5478);
    }

    #[test]
    fn test_terminals_keep_their_result() {
        let table = analyze().unwrap();
        let win = Board::from_cells(&[0, 1, 2], &[4, 8]);
        let loss = Board::from_cells(&[0, 1, 8], &[3, 4, 5]);
        let draw = Board::from_cells(&[0, 2, 3, 7, 8], &[1, 4, 5, 6]);
        assert_eq!(table.get(win), Some(Outcome::FirstWins));
        assert_eq!(table.get(loss), Some(Outcome::FirstLoses));
        assert_eq!(table.get(draw), Some(Outcome::Draw));
    }

    #[test]
    fn test_illegal_boards_absent() {
        let table = analyze().unwrap();
        assert_eq!(table.get(Board::from_cells(&[0, 1, 2, 3, 4, 5], &[6, 7])), None);
        assert_eq!(table.get(Board(0b000_000_001_000_000_001)), None);
    }

    #[test]
    fn test_forced_results() {
        let table = analyze().unwrap();
        // Second to move against two open first lines
        let board = Board::from_cells(&[0, 2, 4], &[1, 7]);
        assert_eq!(table.get(board), Some(Outcome::FirstWins));
        // First to move against two open second lines
        let board = Board::from_cells(&[1, 3, 7], &[0, 2, 4]);
        assert_eq!(table.get(board), Some(Outcome::FirstLoses));
    }
}
