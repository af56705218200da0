//! # Engine Configuration
//!
//! Every tunable of the ranking, selection and dues rules in one place.
//! All sections default, so an empty YAML document is a valid configuration.
//!
//! ```rust
//! use pelada_core::config::EngineConfig;
//!
//! let config = EngineConfig::from_yaml_str("game:\n  players_per_side: 6\n").unwrap();
//! assert_eq!(config.game.field_capacity(), 12);
//! assert_eq!(config.scoring.window_size, 4);
//! ```

mod dues_config;
mod game_config;
mod scoring_config;

pub use dues_config::DuesConfig;
pub use game_config::GameConfig;
pub use scoring_config::ScoringConfig;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct EngineConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub dues: DuesConfig,
}

impl EngineConfig {
    /// Small-sided weekday game (5 a side).
    pub fn five_a_side() -> Self {
        let mut cfg = Self::default();
        cfg.game.players_per_side = 5;
        cfg
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        // serde_yaml reads an empty document as null
        let config: Self = if source.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game.validate()?;

        if self.scoring.window_size == 0 {
            return Err(ConfigError::Invalid("scoring.window_size must be positive".to_string()));
        }

        let DuesConfig { first_billed_month, last_billed_month } = self.dues;
        if !(1..=12).contains(&first_billed_month) || !(1..=12).contains(&last_billed_month) {
            return Err(ConfigError::Invalid(format!(
                "billed months must be within 1..=12, got {}..={}",
                first_billed_month, last_billed_month
            )));
        }
        if first_billed_month > last_billed_month {
            return Err(ConfigError::Invalid(format!(
                "first billed month {} is after last billed month {}",
                first_billed_month, last_billed_month
            )));
        }
        Ok(())
    }
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_default_config() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.scoring.match_day, Weekday::Wed);
        assert_eq!(cfg.scoring.window_size, 4);
        assert_eq!(cfg.game.field_capacity(), 16);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_yaml_partial_override() {
        let cfg = EngineConfig::from_yaml_str(
            "scoring:\n  match_day: Thu\n  window_size: 3\ndues:\n  first_billed_month: 2\n",
        )
        .unwrap();
        assert_eq!(cfg.scoring.match_day, Weekday::Thu);
        assert_eq!(cfg.scoring.window_size, 3);
        assert_eq!(cfg.scoring.points_played, 2);
        assert_eq!(cfg.dues.first_billed_month, 2);
        assert_eq!(cfg.dues.last_billed_month, 12);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let cfg = EngineConfig::from_yaml_str("").unwrap();
        assert_eq!(cfg.game, GameConfig::default());
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(GameConfig::new(0).is_err());
        assert!(EngineConfig::from_json_str(r#"{"scoring":{"window_size":0}}"#).is_err());
        assert!(EngineConfig::from_json_str(
            r#"{"dues":{"first_billed_month":9,"last_billed_month":4}}"#
        )
        .is_err());
        assert!(EngineConfig::from_yaml_str("game: [").is_err());
    }

    #[test]
    fn test_five_a_side() {
        assert_eq!(EngineConfig::five_a_side().game.field_capacity(), 10);
    }
}
