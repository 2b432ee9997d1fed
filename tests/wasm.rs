#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Reflect};
use pawn_chess::wasm::PawnChess;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn field(value: &JsValue, key: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(key)).unwrap()
}

#[wasm_bindgen_test]
fn initial_state_serializes_board_and_turn() {
    let game = PawnChess::new(JsValue::UNDEFINED).unwrap();
    let state = game.state().unwrap();

    let board = Array::from(&field(&state, "board"));
    assert_eq!(board.length(), 64);
    assert_eq!(board.get(8).as_f64(), Some(2.0));
    assert_eq!(board.get(48).as_f64(), Some(1.0));
    assert_eq!(field(&state, "side_to_move").as_string().as_deref(), Some("A"));
    assert_eq!(field(&state, "is_game_over").as_bool(), Some(false));
}

#[wasm_bindgen_test]
fn moves_from_lists_destinations() {
    let game = PawnChess::multiplayer();

    let moves = Array::from(&game.moves_from(6, 2).unwrap());

    assert_eq!(moves.length(), 2);
    assert_eq!(field(&moves.get(1), "row").as_f64(), Some(4.0));
}

#[wasm_bindgen_test]
fn human_move_then_ai_reply() {
    let mut game = PawnChess::versus_ai(1);

    game.play(6, 3, 4, 3).unwrap();
    assert!(game.is_ai_turn());
    assert!(game.play(1, 0, 2, 0).is_err());

    let state = game.ai_move().unwrap();
    assert_eq!(field(&state, "side_to_move").as_string().as_deref(), Some("A"));
    assert!(!field(&state, "last_move").is_null());
}
