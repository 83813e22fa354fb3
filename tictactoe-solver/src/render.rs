//! Plain-text board rendering.
//!
//! The first line is the classification; the three rows follow. Boards
//! with a cell marked by both players show each player's layer separately:
//!
//! ```text
//! illegal_overlap
//! o.. x..
//! ... .x.
//! ... ...
//! ```

use tictactoe_core::{classify, Board, Cell, Classification, Player};

/// Spaces between panels in [`side_by_side`].
const PANEL_GAP: usize = 3;

fn cell_char(board: Board, cell: Cell) -> char {
    match board.cell_owner(cell) {
        Some(Player::First) => 'o',
        Some(Player::Second) => 'x',
        None => '.',
    }
}

fn layer_char(board: Board, player: Player, cell: Cell) -> char {
    match (board.cell_mark(player, cell), player) {
        (true, Player::First) => 'o',
        (true, Player::Second) => 'x',
        (false, _) => '.',
    }
}

fn row_cells(row: u8) -> impl Iterator<Item = Cell> {
    (0..3).map(move |col| Cell::from_row_col(row, col))
}

/// Render a board under its classification name.
pub fn render(board: Board) -> String {
    let classification = classify(board);
    let mut out = String::from(classification.name());
    for row in 0..3 {
        out.push('\n');
        if classification == Classification::IllegalOverlap {
            out.extend(row_cells(row).map(|c| layer_char(board, Player::First, c)));
            out.push(' ');
            out.extend(row_cells(row).map(|c| layer_char(board, Player::Second, c)));
        } else {
            out.extend(row_cells(row).map(|c| cell_char(board, c)));
        }
    }
    out
}

/// Lay multi-line panels out left to right, top aligned.
pub fn side_by_side(panels: &[String]) -> String {
    let columns: Vec<Vec<&str>> = panels.iter().map(|p| p.lines().collect()).collect();
    let widths: Vec<usize> = columns
        .iter()
        .map(|lines| lines.iter().map(|l| l.chars().count()).max().unwrap_or(0))
        .collect();
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);

    let mut rows = Vec::with_capacity(height);
    for i in 0..height {
        let mut line = String::new();
        for (lines, &width) in columns.iter().zip(&widths) {
            let text = lines.get(i).copied().unwrap_or("");
            line.push_str(&format!("{:<width$}{:gap$}", text, "", gap = PANEL_GAP));
        }
        rows.push(line.trim_end().to_string());
    }
    rows.join("\n")
}
