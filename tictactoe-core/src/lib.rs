//! Tic-tac-toe board classification with an 18-bit board encoding.
//!
//! # Board Encoding (18-bit)
//!
//! ```text
//! Bits 0-8:   First player's marks (bit i set = mark in cell i)
//! Bits 9-17:  Second player's marks (bit 9+i set = mark in cell i)
//! Bits 18-31: Unused (always zero)
//!
//! Cell indices (row-major order):
//!   (0,0)=0  (0,1)=1  (0,2)=2
//!   (1,0)=3  (1,1)=4  (1,2)=5
//!   (2,0)=6  (2,1)=7  (2,2)=8
//! ```
//!
//! The encoding can represent impossible boards (both bits of a cell set,
//! too many marks, frozen winning lines). [`classify`] tells them apart from
//! boards reachable by play from the empty board.
//!
//! # Example
//!
//! ```text
//! 0b010010010_001100100
//!   ^ second    ^ first
//!
//!   .xo
//!   .xo
//!   ox.
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod classify;
pub mod error;
pub mod neighbors;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use classify::{classify, Classification};
pub use error::Error;
pub use neighbors::{backward_neighbors, forward_neighbors};

/// Number of cells on the board.
pub const CELLS: u8 = 9;

/// Number of meaningful bits in a board encoding.
pub const ENCODING_BITS: u32 = 18;

/// Number of distinct board encodings (2^18).
pub const ENCODING_COUNT: u32 = 1 << ENCODING_BITS;

/// Mask for one player's 9-bit field.
const FIELD_MASK: u32 = (1 << CELLS) - 1;

/// Player identifier.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Player {
    First = 0,
    Second = 1,
}

impl Player {
    /// Get the opponent player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Index of this player's field (0 or 1).
    #[inline]
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Bit offset of this player's field within the encoding.
    #[inline]
    pub fn shift(self) -> u32 {
        self.index() * CELLS as u32
    }

    /// Both players, first one first.
    pub fn all() -> impl Iterator<Item = Player> {
        [Player::First, Player::Second].into_iter()
    }
}

/// Cell on the 3x3 board (0-8).
///
/// Layout:
/// ```text
///   0 1 2
///   3 4 5
///   6 7 8
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct Cell(pub u8);

impl Cell {
    /// Create a cell from row and column (0-2 each).
    #[inline]
    pub fn from_row_col(row: u8, col: u8) -> Cell {
        debug_assert!(row < 3 && col < 3);
        Cell(row * 3 + col)
    }

    /// Get the row (0-2).
    #[inline]
    pub fn row(self) -> u8 {
        self.0 / 3
    }

    /// Get the column (0-2).
    #[inline]
    pub fn col(self) -> u8 {
        self.0 % 3
    }

    /// Check if this is a valid cell (0-8).
    #[inline]
    pub fn is_valid(self) -> bool {
        self.0 < CELLS
    }

    /// Iterate over all 9 cells.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELLS).map(Cell)
    }
}

// ============================================================================
// BIT COUNTER
// ============================================================================

/// Count set bits by summing adjacent bit groups in parallel.
///
/// Each step adds neighbouring fields of doubling width (1, 2, 4, 8, 16, 32
/// bits) until a single 64-bit sum remains.
#[inline]
pub const fn popcount(bits: u64) -> u32 {
    let mut c = (bits & 0x5555_5555_5555_5555) + ((bits >> 1) & 0x5555_5555_5555_5555);
    c = (c & 0x3333_3333_3333_3333) + ((c >> 2) & 0x3333_3333_3333_3333);
    c = (c & 0x0f0f_0f0f_0f0f_0f0f) + ((c >> 4) & 0x0f0f_0f0f_0f0f_0f0f);
    c = (c & 0x00ff_00ff_00ff_00ff) + ((c >> 8) & 0x00ff_00ff_00ff_00ff);
    c = (c & 0x0000_ffff_0000_ffff) + ((c >> 16) & 0x0000_ffff_0000_ffff);
    c = (c & 0x0000_0000_ffff_ffff) + ((c >> 32) & 0x0000_0000_ffff_ffff);
    c as u32
}

// ============================================================================
// BOARD CODEC
// ============================================================================

/// Compact board state - fits in the low 18 bits of a u32.
///
/// See module documentation for encoding details.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Board(pub u32);

impl Board {
    /// The empty board.
    pub const EMPTY: Board = Board(0);

    /// Bitmasks for the 8 winning lines within one player's field.
    pub const WIN_MASKS: [u16; 8] = [
        0b000_000_111, // Row 0: cells 0,1,2
        0b000_111_000, // Row 1: cells 3,4,5
        0b111_000_000, // Row 2: cells 6,7,8
        0b001_001_001, // Col 0: cells 0,3,6
        0b010_010_010, // Col 1: cells 1,4,7
        0b100_100_100, // Col 2: cells 2,5,8
        0b100_010_001, // Main diagonal: cells 0,4,8
        0b001_010_100, // Anti-diagonal: cells 2,4,6
    ];

    /// Create a board from a raw encoding.
    #[inline]
    pub fn from_u32(bits: u32) -> Board {
        debug_assert!(bits < ENCODING_COUNT, "encoding {bits} exceeds 18 bits");
        Board(bits)
    }

    /// Create a board from a raw encoding, rejecting values above 18 bits.
    #[inline]
    pub fn checked(bits: u32) -> Option<Board> {
        (bits < ENCODING_COUNT).then_some(Board(bits))
    }

    /// Build a board from one 9-bit field per player.
    #[inline]
    pub fn from_fields(first: u16, second: u16) -> Board {
        Board((first as u32 & FIELD_MASK) | ((second as u32 & FIELD_MASK) << CELLS))
    }

    /// Build a board from lists of occupied cells.
    pub fn from_cells(first: &[u8], second: &[u8]) -> Board {
        let mut board = Board::EMPTY;
        for &c in first {
            board = board.with_mark(Player::First, Cell(c));
        }
        for &c in second {
            board = board.with_mark(Player::Second, Cell(c));
        }
        board
    }

    /// Get the raw encoding.
    #[inline]
    pub fn to_u32(self) -> u32 {
        self.0
    }

    /// Iterate over all 2^18 encodings in numeric order.
    pub fn all() -> impl Iterator<Item = Board> {
        (0..ENCODING_COUNT).map(Board)
    }

    /// Get one player's 9-bit field.
    #[inline]
    pub fn field(self, player: Player) -> u16 {
        ((self.0 >> player.shift()) & FIELD_MASK) as u16
    }

    /// Check whether `player` has a mark in `cell`.
    #[inline]
    pub fn cell_mark(self, player: Player, cell: Cell) -> bool {
        (self.0 >> (cell.0 as u32 + player.shift())) & 1 == 1
    }

    /// Number of marks `player` has on the board.
    #[inline]
    pub fn count_marks(self, player: Player) -> u32 {
        popcount(self.field(player) as u64)
    }

    /// Total number of marks of both players.
    #[inline]
    pub fn mark_count(self) -> u32 {
        popcount(self.0 as u64)
    }

    /// Flip `player`'s bit for `cell`, adding or removing a mark.
    #[inline]
    pub fn toggle_mark(self, player: Player, cell: Cell) -> Board {
        debug_assert!(cell.is_valid());
        Board(self.0 ^ (1 << (cell.0 as u32 + player.shift())))
    }

    /// Set `player`'s bit for `cell`.
    #[inline]
    pub fn with_mark(self, player: Player, cell: Cell) -> Board {
        debug_assert!(cell.is_valid());
        Board(self.0 | (1 << (cell.0 as u32 + player.shift())))
    }

    /// Mask of cells marked by both players.
    #[inline]
    pub fn overlap(self) -> u16 {
        self.field(Player::First) & self.field(Player::Second)
    }

    /// Check if no player has a mark in `cell`.
    #[inline]
    pub fn is_empty(self, cell: Cell) -> bool {
        !self.cell_mark(Player::First, cell) && !self.cell_mark(Player::Second, cell)
    }

    /// Owner of `cell`, preferring the first player when both bits are set.
    #[inline]
    pub fn cell_owner(self, cell: Cell) -> Option<Player> {
        if self.cell_mark(Player::First, cell) {
            Some(Player::First)
        } else if self.cell_mark(Player::Second, cell) {
            Some(Player::Second)
        } else {
            None
        }
    }

    /// Cells holding one of `player`'s marks, in ascending order.
    pub fn marks(self, player: Player) -> impl Iterator<Item = Cell> {
        Cell::all().filter(move |&c| self.cell_mark(player, c))
    }

    /// Cells holding no mark, in ascending order.
    pub fn empty_cells(self) -> impl Iterator<Item = Cell> {
        Cell::all().filter(move |&c| self.is_empty(c))
    }

    /// Number of winning lines fully covered by `player`'s marks.
    #[inline]
    pub fn win_lines(self, player: Player) -> u32 {
        let field = self.field(player);
        Self::WIN_MASKS
            .iter()
            .filter(|&&mask| field & mask == mask)
            .count() as u32
    }

    /// Get the first winning line covered by `player`, if any.
    pub fn winning_line(self, player: Player) -> Option<[Cell; 3]> {
        let field = self.field(player);
        Self::WIN_MASKS
            .iter()
            .find(|&&mask| field & mask == mask)
            .map(|&mask| {
                let mut line = [Cell(0); 3];
                for (slot, cell) in line
                    .iter_mut()
                    .zip(Cell::all().filter(|c| mask >> c.0 & 1 == 1))
                {
                    *slot = cell;
                }
                line
            })
    }
}

impl fmt::Display for Board {
    /// Nine cell characters: `o` first, `x` second, `.` empty, `#` both.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in Cell::all() {
            let ch = match (
                self.cell_mark(Player::First, cell),
                self.cell_mark(Player::Second, cell),
            ) {
                (true, true) => '#',
                (true, false) => 'o',
                (false, true) => 'x',
                (false, false) => '.',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse a decimal encoding, a `0b`/`0x` literal, or nine cell
    /// characters (`o`, `x`, and `.`, `b` or `-` for empty).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let parse_err = |reason: &'static str| Error::ParseBoard {
            input: input.to_string(),
            reason,
        };

        let bits = if let Some(bin) = input.strip_prefix("0b") {
            u32::from_str_radix(&bin.replace('_', ""), 2).ok()
        } else if let Some(hex) = input.strip_prefix("0x") {
            u32::from_str_radix(&hex.replace('_', ""), 16).ok()
        } else if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
            input.parse::<u32>().ok()
        } else {
            None
        };

        if let Some(bits) = bits {
            return Board::checked(bits).ok_or_else(|| parse_err("encoding exceeds 18 bits"));
        }

        let chars: Vec<char> = input.chars().filter(|c| !c.is_whitespace() && *c != '/').collect();
        if chars.len() != CELLS as usize {
            return Err(parse_err("expected an integer or 9 cell characters"));
        }
        let mut board = Board::EMPTY;
        for (i, ch) in chars.into_iter().enumerate() {
            let cell = Cell(i as u8);
            board = match ch.to_ascii_lowercase() {
                'o' => board.with_mark(Player::First, cell),
                'x' => board.with_mark(Player::Second, cell),
                '.' | 'b' | '-' => board,
                _ => return Err(parse_err("cell characters must be one of o x . b -")),
            };
        }
        Ok(board)
    }
}
