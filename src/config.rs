use serde::{Deserialize, Serialize};

use crate::ai::search::DEFAULT_DEPTH;
use crate::types::Side;

/// Search parameters for the computer-controlled side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched before evaluating. 0 behaves like 1 at the root.
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }
}

impl SearchConfig {
    pub fn new(depth: u8) -> Self {
        Self { depth }
    }
}

/// Who controls each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameMode {
    /// Two humans share the board.
    Multiplayer,
    /// `ai_side` is played by the search engine.
    VersusAi { ai_side: Side },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::VersusAi { ai_side: Side::B }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    pub search: SearchConfig,
}

impl GameConfig {
    pub fn multiplayer() -> Self {
        Self {
            mode: GameMode::Multiplayer,
            search: SearchConfig::default(),
        }
    }

    pub fn versus_ai(ai_side: Side, depth: u8) -> Self {
        Self {
            mode: GameMode::VersusAi { ai_side },
            search: SearchConfig::new(depth),
        }
    }

    pub fn ai_side(&self) -> Option<Side> {
        match self.mode {
            GameMode::Multiplayer => None,
            GameMode::VersusAi { ai_side } => Some(ai_side),
        }
    }

    /// Whether `side` is moved by the search engine.
    pub fn is_ai(&self, side: Side) -> bool {
        self.ai_side() == Some(side)
    }
}
