//! The three ways of filling the outcome table must agree everywhere.

use tictactoe_core::{classify, forward_neighbors, Board, Player};
use tictactoe_solver::report::{MarkRow, OutcomeReport};
use tictactoe_solver::{retrograde, solve_all_parallel, Outcome, OutcomeTable, Solver};

fn dfs_table() -> OutcomeTable {
    Solver::new().solve_all()
}

#[test]
fn test_dfs_covers_every_legal_board() {
    let table = dfs_table();
    assert_eq!(table.len(), 5478);
    for board in Board::all() {
        assert_eq!(table.get(board).is_some(), classify(board).is_legal(), "{}", board);
    }
    assert_eq!(table.get(Board::EMPTY), Some(Outcome::Draw));
}

#[test]
fn test_retrograde_matches_dfs() {
    let dfs = dfs_table();
    let retro = retrograde::analyze().unwrap();
    let mismatches = dfs.mismatches(&retro);
    assert!(mismatches.is_empty(), "first mismatches: {:?}", &mismatches[..mismatches.len().min(5)]);
}

#[test]
fn test_parallel_matches_serial() {
    let dfs = dfs_table();
    for partitions in [1, 3, 16] {
        let (parallel, stats) = solve_all_parallel(partitions);
        assert!(dfs.mismatches(&parallel).is_empty(), "{partitions} partitions");
        assert!(stats.positions_evaluated > 0);
    }
}

#[test]
fn test_results_are_minimax_over_successors() {
    let table = dfs_table();
    for (board, outcome) in table.iter() {
        let Some(mover) = classify(board).mover() else {
            continue;
        };
        let children = forward_neighbors(board).unwrap().into_iter().map(|c| table.get(c).unwrap());
        let expected = match mover {
            Player::First => children.max(),
            Player::Second => children.min(),
        };
        assert_eq!(Some(outcome), expected, "{}", board);
    }
}

#[test]
fn test_report_rows() {
    let report = OutcomeReport::from_table(&dfs_table());
    let sums: Vec<u32> = (0..10).map(|m| report.row(m).sum()).collect();
    assert_eq!(sums, vec![1, 9, 72, 252, 756, 1260, 1520, 1140, 390, 78]);
    assert_eq!(report.row(0), MarkRow { wins: 0, draws: 1, losses: 0 });
    // No single opening mark can be forced to a win
    assert_eq!(report.row(1), MarkRow { wins: 0, draws: 9, losses: 0 });
    // Full boards are wins for the first player or draws
    assert_eq!(report.row(9), MarkRow { wins: 62, draws: 16, losses: 0 });
}
