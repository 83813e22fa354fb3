//! WASM bindings for tictactoe-core
//!
//! Provides a JavaScript-friendly API for board classification.

use wasm_bindgen::prelude::*;
use crate::{backward_neighbors, classify, forward_neighbors, Board, Cell, Player};

/// WASM-friendly wrapper around Board
#[wasm_bindgen]
pub struct WasmBoard {
    inner: Board,
}

#[wasm_bindgen]
impl WasmBoard {
    /// Create a new empty board
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmBoard {
        WasmBoard { inner: Board::EMPTY }
    }

    /// Create board from 18-bit encoding. Higher bits are rejected.
    #[wasm_bindgen(js_name = fromBits)]
    pub fn from_bits(bits: u32) -> Result<WasmBoard, JsError> {
        Board::checked(bits)
            .map(|inner| WasmBoard { inner })
            .ok_or_else(|| JsError::new("encoding exceeds 18 bits"))
    }

    /// Parse a board from text (integer or 9 cell characters)
    pub fn parse(text: &str) -> Result<WasmBoard, JsError> {
        let inner: Board = text.parse()?;
        Ok(WasmBoard { inner })
    }

    /// Get 18-bit encoding of board
    #[wasm_bindgen(js_name = toBits)]
    pub fn to_bits(&self) -> u32 {
        self.inner.to_u32()
    }

    /// Classification name, e.g. "first_to_move"
    pub fn classification(&self) -> String {
        classify(self.inner).name().to_string()
    }

    /// Whether the board is reachable by play
    #[wasm_bindgen(js_name = isLegal)]
    pub fn is_legal(&self) -> bool {
        classify(self.inner).is_legal()
    }

    /// Cell contents, row-major: 0 empty, 1 first, 2 second, 3 both
    pub fn cells(&self) -> Vec<u8> {
        Cell::all()
            .map(|cell| {
                self.inner.cell_mark(Player::First, cell) as u8
                    | (self.inner.cell_mark(Player::Second, cell) as u8) << 1
            })
            .collect()
    }

    /// Get winning line as array of positions [row, col, row, col, row, col]
    /// Returns empty array if no line is complete
    #[wasm_bindgen(js_name = winningLine)]
    pub fn winning_line(&self) -> Vec<u8> {
        Player::all()
            .find_map(|player| self.inner.winning_line(player))
            .map(|line| line.iter().flat_map(|cell| [cell.row(), cell.col()]).collect())
            .unwrap_or_default()
    }

    /// Encodings reachable by one more move
    #[wasm_bindgen(js_name = forwardNeighbors)]
    pub fn forward_neighbors(&self) -> Result<Vec<u32>, JsError> {
        Ok(forward_neighbors(self.inner)?
            .into_iter()
            .map(Board::to_u32)
            .collect())
    }

    /// Predecessors as JSON array of { board, player }
    #[wasm_bindgen(js_name = backwardNeighbors)]
    pub fn backward_neighbors(&self) -> Result<JsValue, JsError> {
        let prev: Vec<WasmPredecessor> = backward_neighbors(self.inner)?
            .into_iter()
            .map(|(board, player)| WasmPredecessor {
                board: board.to_u32(),
                player: player as u8 + 1,
            })
            .collect();
        Ok(serde_wasm_bindgen::to_value(&prev)?)
    }
}

impl Default for WasmBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable predecessor for JavaScript
#[derive(serde::Serialize)]
struct WasmPredecessor {
    board: u32,
    /// 1 = first player, 2 = second player
    player: u8,
}
