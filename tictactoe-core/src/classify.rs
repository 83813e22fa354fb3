//! Legality and outcome classification of raw board encodings.
//!
//! A raw 18-bit value can describe boards no game could produce: marks on
//! top of each other, too many marks for one side, a line completed several
//! moves ago, or both players holding a line. [`classify`] decides whether a
//! forward play sequence from the empty board can end in exactly this
//! encoding, and if so whose turn it is or how the game ended.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Board, Player};

/// Classification of a board encoding.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// The first player completed a line.
    FirstWins,
    /// The second player completed a line.
    FirstLoses,
    /// Full board, no line.
    Draw,
    /// Ongoing, equal mark counts.
    FirstToMove,
    /// Ongoing, first player has one extra mark.
    SecondToMove,
    /// Some cell carries both players' marks.
    IllegalOverlap,
    /// Mark counts no alternating game can produce.
    IllegalCount,
    /// A single completed line, but its owner is also the player to move.
    IllegalWinQuantity,
    /// Both players hold a line, or several lines no single last move explains.
    IllegalDoubleWin,
}

impl Classification {
    /// All classifications in declaration order.
    pub const ALL: [Classification; 9] = [
        Classification::FirstWins,
        Classification::FirstLoses,
        Classification::Draw,
        Classification::FirstToMove,
        Classification::SecondToMove,
        Classification::IllegalOverlap,
        Classification::IllegalCount,
        Classification::IllegalWinQuantity,
        Classification::IllegalDoubleWin,
    ];

    /// Position of this classification in [`Classification::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Check if the board could occur in a real game.
    #[inline]
    pub fn is_legal(self) -> bool {
        !matches!(
            self,
            Classification::IllegalOverlap
                | Classification::IllegalCount
                | Classification::IllegalWinQuantity
                | Classification::IllegalDoubleWin
        )
    }

    /// Check if the game is over (win, loss or draw).
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Classification::FirstWins | Classification::FirstLoses | Classification::Draw
        )
    }

    /// Player to move, for ongoing boards.
    #[inline]
    pub fn mover(self) -> Option<Player> {
        match self {
            Classification::FirstToMove => Some(Player::First),
            Classification::SecondToMove => Some(Player::Second),
            _ => None,
        }
    }

    /// Player who made the last move on a legal board.
    ///
    /// Returns `None` for illegal boards.
    #[inline]
    pub fn last_mover(self) -> Option<Player> {
        match self {
            Classification::FirstWins | Classification::Draw | Classification::SecondToMove => {
                Some(Player::First)
            }
            Classification::FirstToMove | Classification::FirstLoses => Some(Player::Second),
            _ => None,
        }
    }

    /// Stable snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            Classification::FirstWins => "first_wins",
            Classification::FirstLoses => "first_loses",
            Classification::Draw => "draw",
            Classification::FirstToMove => "first_to_move",
            Classification::SecondToMove => "second_to_move",
            Classification::IllegalOverlap => "illegal_overlap",
            Classification::IllegalCount => "illegal_count",
            Classification::IllegalWinQuantity => "illegal_win_quantity",
            Classification::IllegalDoubleWin => "illegal_double_win",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tentative turn derived from mark counts.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Turn {
    First,
    Second,
}

/// Classify a board encoding.
///
/// Total over all 2^18 encodings; illegality is a returned value.
pub fn classify(board: Board) -> Classification {
    if board.overlap() != 0 {
        return Classification::IllegalOverlap;
    }

    let first_count = board.count_marks(Player::First);
    let second_count = board.count_marks(Player::Second);
    let full = first_count == 5 && second_count == 4;
    let turn = if first_count == second_count {
        Turn::First
    } else if second_count + 1 == first_count {
        Turn::Second
    } else {
        return Classification::IllegalCount;
    };

    let first_lines = board.win_lines(Player::First);
    let second_lines = board.win_lines(Player::Second);

    if first_lines >= 1 && second_lines >= 1 {
        return Classification::IllegalDoubleWin;
    }

    if first_lines == 1 {
        return match turn {
            Turn::First => Classification::IllegalWinQuantity,
            Turn::Second => Classification::FirstWins,
        };
    }
    if second_lines == 1 {
        return match turn {
            Turn::Second => Classification::IllegalWinQuantity,
            Turn::First => Classification::FirstLoses,
        };
    }

    // Several lines are only legal when one last mark completed all of them.
    if first_lines >= 2 {
        return if one_move_explains_lines(board, Player::First) {
            Classification::FirstWins
        } else {
            Classification::IllegalDoubleWin
        };
    }
    if second_lines >= 2 {
        return if one_move_explains_lines(board, Player::Second) {
            Classification::FirstLoses
        } else {
            Classification::IllegalDoubleWin
        };
    }

    if full {
        return Classification::Draw;
    }
    match turn {
        Turn::First => Classification::FirstToMove,
        Turn::Second => Classification::SecondToMove,
    }
}

/// Check whether removing a single mark of `player` leaves them no line.
fn one_move_explains_lines(board: Board, player: Player) -> bool {
    board
        .marks(player)
        .any(|cell| board.toggle_mark(player, cell).win_lines(player) == 0)
}
