//! Tic-tac-toe solver
//!
//! Labels every legal board with its perfect-play result, either by
//! memoized depth-first minimax ([`Solver`]) or by retrograde analysis
//! ([`retrograde::analyze`]), and produces the census, report, CSV and
//! text renders used by the `tictactoe` binary.

pub mod census;
pub mod env_config;
pub mod export;
pub mod render;
pub mod report;
pub mod retrograde;
pub mod solver;
pub mod stats;
pub mod table;

pub use solver::{solve_all_parallel, Outcome, Solver, MAX_DEPTH};
pub use stats::SolverStats;
pub use table::OutcomeTable;
