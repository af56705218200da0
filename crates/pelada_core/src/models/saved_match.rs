use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::player::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Goal {
    pub player_id: PlayerId,
    #[serde(default)]
    pub minute: Option<u32>,
}

/// A played match as the organiser saved it: line-ups, score and goal list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SavedMatch {
    pub id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub team_a: Vec<PlayerId>,
    #[serde(default)]
    pub team_b: Vec<PlayerId>,
    #[serde(default)]
    pub reserves: Vec<PlayerId>,
    #[serde(default)]
    pub score_a: Option<u32>,
    #[serde(default)]
    pub score_b: Option<u32>,
    /// One entry per goal, in the order they were logged.
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl SavedMatch {
    pub fn new(id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            date,
            team_a: Vec::new(),
            team_b: Vec::new(),
            reserves: Vec::new(),
            score_a: None,
            score_b: None,
            goals: Vec::new(),
        }
    }

    pub fn with_goal(mut self, scorer: impl Into<PlayerId>, minute: Option<u32>) -> Self {
        self.goals.push(Goal {
            player_id: scorer.into(),
            minute,
        });
        self
    }

    pub fn goals_by(&self, player: &PlayerId) -> usize {
        self.goals.iter().filter(|g| &g.player_id == player).count()
    }
}
