use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::{AlphaBetaSelector, GameState, MoveRecord};
use crate::types::{Move, Position, Side};

#[wasm_bindgen]
pub struct PawnChess {
    game: GameState,
    config: GameConfig,
}

#[wasm_bindgen]
impl PawnChess {
    /// Accepts a serialized [`GameConfig`]; `undefined` or `null` selects the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<PawnChess, JsError> {
        let config = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(|err| JsError::new(&err.to_string()))?
        };
        Ok(Self::with_config(config))
    }

    pub fn multiplayer() -> PawnChess {
        Self::with_config(GameConfig::multiplayer())
    }

    #[wasm_bindgen(js_name = versusAi)]
    pub fn versus_ai(depth: u8) -> PawnChess {
        Self::with_config(GameConfig::versus_ai(Side::B, depth))
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js(&self.game.to_snapshot())
    }

    /// Destinations reachable from `(row, col)` for the side to move.
    #[wasm_bindgen(js_name = movesFrom)]
    pub fn moves_from(&self, row: u8, col: u8) -> Result<JsValue, JsError> {
        to_js(&self.destinations(Position::new(row, col)))
    }

    #[wasm_bindgen(js_name = isAiTurn)]
    pub fn is_ai_turn(&self) -> bool {
        !self.game.is_terminal() && self.config.is_ai(self.game.side_to_move())
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.game.is_terminal()
    }

    /// Winner's display name once the game is over.
    pub fn winner(&self) -> Option<String> {
        self.game.winner().map(|side| side.name().to_string())
    }

    pub fn play(
        &mut self,
        from_row: u8,
        from_col: u8,
        to_row: u8,
        to_col: u8,
    ) -> Result<JsValue, JsError> {
        let mv = Move::new(
            Position::new(from_row, from_col),
            Position::new(to_row, to_col),
        );
        self.play_move(mv)?;
        self.state()
    }

    #[wasm_bindgen(js_name = aiMove)]
    pub fn ai_move(&mut self) -> Result<JsValue, JsError> {
        self.play_ai()?;
        self.state()
    }

    /// Starts a rematch with the same configuration.
    pub fn reset(&mut self) {
        self.game.reset();
    }
}

impl PawnChess {
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            game: GameState::new(),
            config,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn destinations(&self, from: Position) -> Vec<Position> {
        self.game
            .moves_from(from)
            .into_iter()
            .map(|mv| mv.to)
            .collect()
    }

    /// Plays a human move; refused while the computer is to move.
    pub fn play_move(&mut self, mv: Move) -> Result<MoveRecord, GameError> {
        if self.is_ai_turn() {
            return Err(GameError::NotPlayersTurn);
        }
        self.game.try_move(mv)
    }

    pub fn play_ai(&mut self) -> Result<Option<MoveRecord>, GameError> {
        if self.game.is_terminal() {
            return Err(GameError::GameOver);
        }
        if !self.is_ai_turn() {
            return Err(GameError::NotAiTurn);
        }
        self.game.play_ai_turn(&AlphaBetaSelector, &self.config.search)
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsError::new(&err.to_string()))
}
