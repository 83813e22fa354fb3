//! Iterative memoized minimax over the forward neighbor relation.

use std::collections::HashMap;
use std::fmt;
use std::ops::Range;

use rayon::prelude::*;
use tictactoe_core::{classify, forward_neighbors, Board, Classification, Error, Player};
use tracing::{debug, info};

use crate::stats::SolverStats;
use crate::table::OutcomeTable;

/// Frames on the search stack never exceed the root plus one per empty cell.
pub const MAX_DEPTH: usize = 10;

/// Perfect-play result, from the first player's point of view.
///
/// Ordered so the first player maximizes and the second minimizes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Outcome {
    FirstLoses,
    Draw,
    FirstWins,
}

impl Outcome {
    /// Result of a finished game, or `None` if the board is not terminal.
    #[inline]
    pub fn from_terminal(classification: Classification) -> Option<Outcome> {
        match classification {
            Classification::FirstWins => Some(Outcome::FirstWins),
            Classification::FirstLoses => Some(Outcome::FirstLoses),
            Classification::Draw => Some(Outcome::Draw),
            _ => None,
        }
    }

    /// Best result `player` can hope for.
    #[inline]
    pub fn best_for(player: Player) -> Outcome {
        match player {
            Player::First => Outcome::FirstWins,
            Player::Second => Outcome::FirstLoses,
        }
    }

    /// Worst result `player` can suffer.
    #[inline]
    pub fn worst_for(player: Player) -> Outcome {
        Outcome::best_for(player.opponent())
    }

    /// Signed value: 1 first wins, 0 draw, -1 first loses.
    #[inline]
    pub fn value(self) -> i8 {
        match self {
            Outcome::FirstWins => 1,
            Outcome::Draw => 0,
            Outcome::FirstLoses => -1,
        }
    }

    /// Stable snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            Outcome::FirstWins => "first_wins",
            Outcome::Draw => "draw",
            Outcome::FirstLoses => "first_loses",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stack frame for iterative minimax.
struct Frame {
    board: Board,
    /// Player choosing among the children
    mover: Player,
    /// Legal successors, in ascending cell order
    children: Vec<Board>,
    /// Index into children
    child_idx: usize,
    /// Best outcome found so far for the mover
    best: Outcome,
}

impl Frame {
    fn new(board: Board, mover: Player) -> Result<Frame, Error> {
        Ok(Frame {
            board,
            mover,
            children: forward_neighbors(board)?,
            child_idx: 0,
            best: Outcome::worst_for(mover),
        })
    }

    #[inline]
    fn next_child(&mut self) -> Option<Board> {
        let child = self.children.get(self.child_idx).copied();
        self.child_idx += 1;
        child
    }

    /// Fold a child's result into this frame's best outcome.
    #[inline]
    fn update(&mut self, child: Outcome) {
        self.best = match self.mover {
            Player::First => self.best.max(child),
            Player::Second => self.best.min(child),
        };
    }
}

/// A board whose result is already known, or one that must be searched.
enum Node {
    Known(Outcome),
    Open(Frame),
}

/// Minimax solver with a memo table keyed by encoding.
pub struct Solver {
    /// Memo table: board -> perfect-play outcome
    pub table: HashMap<Board, Outcome>,
    /// Solver statistics
    pub stats: SolverStats,
}

impl Solver {
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
            stats: SolverStats::new(),
        }
    }

    /// Look up, resolve or open a board for search.
    fn expand(&mut self, board: Board) -> Result<Node, Error> {
        if let Some(&outcome) = self.table.get(&board) {
            self.stats.cache_hits += 1;
            return Ok(Node::Known(outcome));
        }

        let classification = classify(board);
        if let Some(mover) = classification.mover() {
            return Ok(Node::Open(Frame::new(board, mover)?));
        }

        let outcome = Outcome::from_terminal(classification).ok_or(Error::InvalidBoard {
            board,
            classification,
        })?;
        self.table.insert(board, outcome);
        self.stats.record_terminal(outcome);
        Ok(Node::Known(outcome))
    }

    /// Solve `board` under perfect play by both sides.
    ///
    /// Fails with [`Error::InvalidBoard`] when the board is not legal.
    pub fn solve(&mut self, board: Board) -> Result<Outcome, Error> {
        let root = match self.expand(board)? {
            Node::Known(outcome) => return Ok(outcome),
            Node::Open(frame) => frame,
        };

        let mut stack: Vec<Frame> = Vec::with_capacity(MAX_DEPTH);
        stack.push(root);
        self.stats.max_depth = self.stats.max_depth.max(1);

        while let Some(frame) = stack.last_mut() {
            if let Some(child) = frame.next_child() {
                match self.expand(child)? {
                    Node::Known(outcome) => frame.update(outcome),
                    Node::Open(child_frame) => {
                        assert!(
                            stack.len() < MAX_DEPTH,
                            "search deeper than {MAX_DEPTH} frames at board {}",
                            child.0
                        );
                        stack.push(child_frame);
                        self.stats.max_depth = self.stats.max_depth.max(stack.len() as u64);
                    }
                }
            } else {
                let outcome = frame.best;
                let done = frame.board;
                stack.pop();

                self.table.insert(done, outcome);
                self.stats.positions_evaluated += 1;

                if let Some(parent) = stack.last_mut() {
                    parent.update(outcome);
                }
            }
        }

        Ok(self.table[&board])
    }

    /// Solve every legal encoding in `range`, returning them in numeric order.
    pub fn solve_range(&mut self, range: Range<u32>) -> Vec<(Board, Outcome)> {
        let mut solved = Vec::new();
        for board in range.map(Board::from_u32) {
            // Illegal encodings have no result and are skipped
            if let Ok(outcome) = self.solve(board) {
                solved.push((board, outcome));
            }
        }
        solved
    }

    /// Solve every legal encoding.
    pub fn solve_all(&mut self) -> OutcomeTable {
        let mut table = OutcomeTable::new();
        for (board, outcome) in self.solve_range(0..tictactoe_core::ENCODING_COUNT) {
            table.insert(board, outcome);
        }
        info!(solved = table.len(), memo = self.table.len(), "solved all legal boards");
        table
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

/// Solve every legal encoding with one solver per contiguous partition.
///
/// Each partition owns its memo table; results are merged afterwards. The
/// merged statistics are returned alongside the table.
pub fn solve_all_parallel(partitions: usize) -> (OutcomeTable, SolverStats) {
    let partitions = partitions.max(1) as u32;
    let total = tictactoe_core::ENCODING_COUNT;
    let chunk = total.div_ceil(partitions);

    let results: Vec<(Vec<(Board, Outcome)>, SolverStats)> = (0..partitions)
        .into_par_iter()
        .map(|p| {
            let start = (p * chunk).min(total);
            let end = (start + chunk).min(total);
            let mut solver = Solver::new();
            let solved = solver.solve_range(start..end);
            debug!(partition = p, start, end, solved = solved.len(), "partition done");
            (solved, solver.stats)
        })
        .collect();

    let mut table = OutcomeTable::new();
    let mut stats = SolverStats::new();
    for (solved, partition_stats) in results {
        for (board, outcome) in solved {
            table.insert(board, outcome);
        }
        stats.merge(&partition_stats);
    }
    info!(solved = table.len(), partitions, "solved all legal boards in parallel");
    (table, stats)
}
