//! WASM bindings for the game core.
//!
//! Also plays the setup collaborator's role: board sizes are validated
//! here, never in the core itself.

use wasm_bindgen::prelude::*;

use crate::board::{Board, Color};
use crate::game::Game;
use crate::types::Position;

const MIN_SIZE: u8 = 6;
const MAX_SIZE: u8 = 12;

fn checked_start_board(rows: u8, cols: u8) -> Result<Board, JsValue> {
    let size_ok = (MIN_SIZE..=MAX_SIZE).contains(&rows) && (MIN_SIZE..=MAX_SIZE).contains(&cols);
    if !size_ok {
        return Err(JsValue::from_str(&format!(
            "board size must be between {MIN_SIZE} and {MAX_SIZE}, got {rows}x{cols}"
        )));
    }
    Ok(Board::with_start_position(rows as usize, cols as usize))
}

/// One match, owned by the JS frontend.
#[wasm_bindgen]
pub struct WasmGame {
    inner: Game,
}

#[wasm_bindgen]
impl WasmGame {
    /// Creates a match on a standard starting board. Fails for board
    /// sizes outside 6..=12 per dimension.
    #[wasm_bindgen(constructor)]
    pub fn new(rows: u8, cols: u8) -> Result<WasmGame, JsValue> {
        Ok(WasmGame {
            inner: Game::new(checked_start_board(rows, cols)?),
        })
    }

    /// Handles a cell click and returns the refreshed game state.
    #[wasm_bindgen(js_name = selectCell)]
    pub fn select_cell(&mut self, row: u8, col: u8) -> JsValue {
        self.inner.select_cell(Position::new(row, col));
        self.state()
    }

    /// Cancels a pending destination pick and returns the refreshed
    /// game state.
    #[wasm_bindgen(js_name = cancelSelection)]
    pub fn cancel_selection(&mut self) -> JsValue {
        self.inner.cancel_selection();
        self.state()
    }

    /// Restarts on a fresh standard board of the given size.
    pub fn restart(&mut self, rows: u8, cols: u8) -> Result<JsValue, JsValue> {
        self.inner.restart(checked_start_board(rows, cols)?);
        Ok(self.state())
    }

    /// Current game state as a plain JS object.
    pub fn state(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.to_game_state()).unwrap()
    }

    /// 1 = white, 2 = black.
    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> u8 {
        self.inner.turn().code()
    }

    /// 0 while the game is live, otherwise 1 = white, 2 = black.
    pub fn winner(&self) -> u8 {
        self.inner.winner().map_or(0, Color::code)
    }

    /// Status line after the last operation.
    pub fn message(&self) -> String {
        self.inner.message().to_string()
    }
}
