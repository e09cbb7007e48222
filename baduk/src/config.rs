use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::GoError;
use crate::game::GameState;
use crate::zobrist::MAX_BOARD_SIZE;

/// Settings for starting a game. Missing JSON fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: u8,
    pub komi: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: MAX_BOARD_SIZE,
            komi: 0.0,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, GoError> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| GoError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GoError> {
        if !(1..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(GoError::InvalidConfig(format!(
                "board size {} outside 1..={MAX_BOARD_SIZE}",
                self.board_size
            )));
        }
        if !self.komi.is_finite() {
            return Err(GoError::InvalidConfig(format!("komi {} is not finite", self.komi)));
        }
        Ok(())
    }

    pub fn new_game(&self) -> Result<Arc<GameState>, GoError> {
        self.validate()?;
        GameState::new_game(self.board_size, self.komi)
    }
}
