use serde::Serialize;

/// A board coordinate. `row` grows downward, `col` rightward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub rows: u8,
    pub cols: u8,
    /// Row-major cells, `rows * cols` entries.
    /// Contract:
    /// - 0 = empty
    /// - 1/2/3 = white PO/Dev/Des
    /// - 4/5/6 = black PO/Dev/Des
    pub board: Vec<u8>,
    /// 1 = white, 2 = black.
    pub turn: u8,
    /// Contract:
    /// - `Some` while a destination pick is pending.
    /// - `None` otherwise, including after game over.
    pub selected: Option<Position>,
    /// Contract:
    /// - Destination phase: the exact legal set for `selected`.
    /// - Otherwise: must be an empty list.
    pub legal_moves: Vec<Position>,
    /// 0 while the game is live, otherwise 1 = white, 2 = black.
    pub winner: u8,
    /// Status line after the last operation. Empty right after a
    /// completed non-winning move or a restart.
    pub message: String,
}
