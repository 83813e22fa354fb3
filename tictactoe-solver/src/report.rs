//! Perfect-play results broken down by number of marks on the board.

use std::fmt;

use crate::solver::Outcome;
use crate::table::OutcomeTable;

/// One row per mark count (0 through 9).
pub const ROWS: usize = 10;

/// Wins, draws and losses (first player's view) for each mark count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeReport {
    rows: [MarkRow; ROWS],
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkRow {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl MarkRow {
    pub fn sum(&self) -> u32 {
        self.wins + self.draws + self.losses
    }
}

impl OutcomeReport {
    pub fn from_table(table: &OutcomeTable) -> OutcomeReport {
        let mut report = OutcomeReport::default();
        for (board, outcome) in table.iter() {
            let row = &mut report.rows[board.mark_count() as usize];
            match outcome {
                Outcome::FirstWins => row.wins += 1,
                Outcome::Draw => row.draws += 1,
                Outcome::FirstLoses => row.losses += 1,
            }
        }
        report
    }

    pub fn row(&self, marks: usize) -> MarkRow {
        self.rows[marks]
    }

    pub fn total(&self) -> MarkRow {
        self.rows.iter().fold(MarkRow::default(), |acc, r| MarkRow {
            wins: acc.wins + r.wins,
            draws: acc.draws + r.draws,
            losses: acc.losses + r.losses,
        })
    }
}

impl fmt::Display for OutcomeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>5} {:>7} {:>7} {:>7} {:>7}", "marks", "wins", "draws", "losses", "sum")?;
        for (marks, row) in self.rows.iter().enumerate() {
            writeln!(
                f,
                "{:>5} {:>7} {:>7} {:>7} {:>7}",
                marks,
                row.wins,
                row.draws,
                row.losses,
                row.sum()
            )?;
        }
        let total = self.total();
        write!(
            f,
            "{:>5} {:>7} {:>7} {:>7} {:>7}",
            "all",
            total.wins,
            total.draws,
            total.losses,
            total.sum()
        )
    }
}
