use chrono::Weekday;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Season ranking weights.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// Recurring match day; only rounds on this weekday enter the scoring window.
    #[schemars(with = "String")]
    pub match_day: Weekday,
    /// Number of most recent match days in the short-term window.
    pub window_size: usize,
    pub points_played: u32,
    pub points_dined: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            match_day: Weekday::Wed,
            window_size: 4,
            points_played: 2,
            points_dined: 1,
        }
    }
}
