use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod types;
pub mod wasm;

pub use board::{Board, MoveEffect};
pub use config::{GameConfig, GameMode, SearchConfig};
pub use error::GameError;
pub use game::{GameState, MoveRecord, Status};
pub use types::{Cell, Move, Position, Score, Side};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
