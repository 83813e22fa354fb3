//! CSV export of solved boards.
//!
//! Each record is the nine cells in row-major order followed by the result:
//!
//! ```text
//! obxbobbbx,o
//! ```
//!
//! Cells are `o` (first player), `x` (second player) or `b` (empty); the
//! result is `o` (first wins), `x` (first loses) or `d` (draw). Records are
//! grouped by number of marks, numeric encoding order within a group, and
//! separated by `\n` with no trailing newline.

use std::io::{self, BufWriter, Write};

use tictactoe_core::{Board, Cell, Player};

use crate::solver::Outcome;
use crate::table::OutcomeTable;

/// Character for one cell of a legal board.
pub fn cell_char(board: Board, cell: Cell) -> char {
    match board.cell_owner(cell) {
        Some(Player::First) => 'o',
        Some(Player::Second) => 'x',
        None => 'b',
    }
}

pub fn outcome_char(outcome: Outcome) -> char {
    match outcome {
        Outcome::FirstWins => 'o',
        Outcome::FirstLoses => 'x',
        Outcome::Draw => 'd',
    }
}

/// Format one record.
pub fn record(board: Board, outcome: Outcome) -> String {
    let mut line: String = Cell::all().map(|cell| cell_char(board, cell)).collect();
    line.push(',');
    line.push(outcome_char(outcome));
    line
}

/// Boards in export order.
pub fn export_order(table: &OutcomeTable) -> Vec<(Board, Outcome)> {
    let mut entries: Vec<(Board, Outcome)> = table.iter().collect();
    // Stable sort keeps numeric order inside each group
    entries.sort_by_key(|(board, _)| board.mark_count());
    entries
}

/// Write every record in `table`. Returns the number of records written.
pub fn write_csv<W: Write>(table: &OutcomeTable, writer: W) -> io::Result<usize> {
    let mut writer = BufWriter::new(writer);
    let entries = export_order(table);
    for (i, &(board, outcome)) in entries.iter().enumerate() {
        if i > 0 {
            writer.write_all(b"\n")?;
        }
        writer.write_all(record(board, outcome).as_bytes())?;
    }
    writer.flush()?;
    Ok(entries.len())
}
