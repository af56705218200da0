use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::SeasonError;

pub const MIN_SKILL_RATING: u8 = 1;
pub const MAX_SKILL_RATING: u8 = 10;

/// Opaque player identity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random id for a newly registered player.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Goalkeeper,
    Defender,
    FullBack,
    DefensiveMidfielder,
    Midfielder,
    Forward,
    /// Member who comes for the company and the dinner, never selected to play.
    Social,
}

impl Position {
    pub fn is_goalkeeper(self) -> bool {
        matches!(self, Position::Goalkeeper)
    }

    /// Field players are the only ones that get a rank number.
    pub fn is_field(self) -> bool {
        !matches!(self, Position::Goalkeeper | Position::Social)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BirthDay {
    pub day: u32,
    pub month: u32,
}

impl BirthDay {
    pub fn new(day: u32, month: u32) -> Self {
        Self { day, month }
    }

    /// The birthday placed in `year`, `None` when that date does not exist (29/02).
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }

    fn is_possible(&self) -> bool {
        // 2000 is a leap year, so 29/02 is accepted here
        self.in_year(2000).is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    pub skill_rating: u8,
    /// Points carried over from previous seasons.
    #[serde(default)]
    pub base_points: u32,
    #[serde(default)]
    pub is_fee_exempt: bool,
    #[serde(default)]
    pub birthday: Option<BirthDay>,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, position: Position, skill_rating: u8) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
            skill_rating,
            base_points: 0,
            is_fee_exempt: false,
            birthday: None,
        }
    }

    pub fn with_base_points(mut self, base_points: u32) -> Self {
        self.base_points = base_points;
        self
    }

    pub fn fee_exempt(mut self) -> Self {
        self.is_fee_exempt = true;
        self
    }

    pub fn with_birthday(mut self, day: u32, month: u32) -> Self {
        self.birthday = Some(BirthDay::new(day, month));
        self
    }

    pub fn skill(&self) -> u32 {
        u32::from(self.skill_rating)
    }

    pub fn validate(&self) -> Result<(), SeasonError> {
        let invalid = |reason: &str| SeasonError::InvalidPlayer {
            id: self.id.clone(),
            reason: reason.to_string(),
        };

        if self.id.as_str().trim().is_empty() {
            return Err(invalid("id must not be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(invalid("name must not be empty"));
        }
        if !(MIN_SKILL_RATING..=MAX_SKILL_RATING).contains(&self.skill_rating) {
            return Err(invalid(&format!(
                "skill rating {} outside {}..={}",
                self.skill_rating, MIN_SKILL_RATING, MAX_SKILL_RATING
            )));
        }
        if let Some(birthday) = self.birthday {
            if !birthday.is_possible() {
                return Err(invalid(&format!("no such birthday {}/{}", birthday.day, birthday.month)));
            }
        }
        Ok(())
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
