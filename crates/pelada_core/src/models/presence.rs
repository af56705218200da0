use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::player::{Player, PlayerId};

/// Declared presence for the upcoming match day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PresenceStatus {
    Full,
    FirstHalf,
    SecondHalf,
    DinnerOnly,
    #[default]
    Absent,
}

impl PresenceStatus {
    /// Can be picked as a starter.
    pub fn can_start(self) -> bool {
        matches!(self, PresenceStatus::Full | PresenceStatus::FirstHalf)
    }

    pub fn stays_for_dinner(self) -> bool {
        !matches!(self, PresenceStatus::Absent)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PresenceCounts {
    pub full: usize,
    pub first_half: usize,
    pub second_half: usize,
    pub dinner_only: usize,
    pub absent: usize,
}

impl PresenceCounts {
    /// Everyone who shows up eats.
    pub fn dinner_total(&self) -> usize {
        self.full + self.first_half + self.second_half + self.dinner_only
    }
}

/// Presence snapshot keyed by player. Unknown players read as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Presence {
    statuses: BTreeMap<PlayerId, PresenceStatus>,
}

impl Presence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, player: impl Into<PlayerId>, status: PresenceStatus) -> Self {
        self.statuses.insert(player.into(), status);
        self
    }

    pub fn status_of(&self, player: &PlayerId) -> PresenceStatus {
        self.statuses.get(player).copied().unwrap_or_default()
    }

    /// Adds an explicit `Absent` entry for every roster player missing from the snapshot.
    pub fn with_roster(mut self, players: &[Player]) -> Self {
        for player in players {
            self.statuses.entry(player.id.clone()).or_default();
        }
        self
    }

    pub fn counts(&self) -> PresenceCounts {
        self.statuses
            .values()
            .fold(PresenceCounts::default(), |mut acc, status| {
                match status {
                    PresenceStatus::Full => acc.full += 1,
                    PresenceStatus::FirstHalf => acc.first_half += 1,
                    PresenceStatus::SecondHalf => acc.second_half += 1,
                    PresenceStatus::DinnerOnly => acc.dinner_only += 1,
                    PresenceStatus::Absent => acc.absent += 1,
                }
                acc
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayerId, PresenceStatus)> {
        self.statuses.iter().map(|(id, status)| (id, *status))
    }
}

impl FromIterator<(PlayerId, PresenceStatus)> for Presence {
    fn from_iter<I: IntoIterator<Item = (PlayerId, PresenceStatus)>>(iter: I) -> Self {
        Self {
            statuses: iter.into_iter().collect(),
        }
    }
}
