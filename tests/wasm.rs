#![cfg(target_arch = "wasm32")]

use po_chess::wasm::WasmGame;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn rejects_out_of_range_board_sizes() {
    assert!(WasmGame::new(5, 8).is_err());
    assert!(WasmGame::new(8, 13).is_err());
    assert!(WasmGame::new(6, 12).is_ok());
}

#[wasm_bindgen_test]
fn full_capture_game_over_the_boundary() {
    let mut game = WasmGame::new(6, 6).unwrap();
    assert_eq!(game.current_player(), 1);
    assert_eq!(game.winner(), 0);

    // White PO (5,0) -> (4,1).
    game.select_cell(5, 0);
    game.select_cell(4, 1);
    assert_eq!(game.current_player(), 2);

    // Black Dev (0,4) slides down the open file.
    game.select_cell(0, 4);
    game.select_cell(3, 4);
    assert_eq!(game.current_player(), 1);

    game.restart(6, 6).unwrap();
    assert_eq!(game.current_player(), 1);
    assert_eq!(game.winner(), 0);
    assert_eq!(game.message(), "");
}

#[wasm_bindgen_test]
fn rejection_reports_status_message() {
    let mut game = WasmGame::new(6, 6).unwrap();

    game.select_cell(3, 3);

    assert_eq!(game.message(), "Select one of your own pieces.");
    assert_eq!(game.current_player(), 1);
}
