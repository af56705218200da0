use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Match size for the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GameConfig {
    /// Field players per side, goalkeeper not included.
    pub players_per_side: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { players_per_side: 8 }
    }
}

impl GameConfig {
    pub fn new(players_per_side: u32) -> Result<Self, ConfigError> {
        let config = Self { players_per_side };
        config.validate()?;
        Ok(config)
    }

    /// Field players needed across both sides.
    pub fn field_capacity(&self) -> usize {
        self.players_per_side as usize * 2
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players_per_side == 0 {
            return Err(ConfigError::Invalid("players_per_side must be positive".to_string()));
        }
        Ok(())
    }
}
