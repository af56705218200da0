use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use super::player::{Player, PlayerId};
use crate::config::ScoringConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceTag {
    Played,
    Dined,
    Absent,
}

/// What a player did on a round. `Absent` cannot be combined with anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<AttendanceTag>", into = "Vec<AttendanceTag>")]
pub enum Attendance {
    Absent,
    Marked { played: bool, dined: bool },
}

impl Default for Attendance {
    fn default() -> Self {
        Attendance::Marked { played: false, dined: false }
    }
}

impl Attendance {
    pub const PLAYED: Attendance = Attendance::Marked { played: true, dined: false };
    pub const DINED: Attendance = Attendance::Marked { played: false, dined: true };
    pub const PLAYED_AND_DINED: Attendance = Attendance::Marked { played: true, dined: true };

    pub fn played(&self) -> bool {
        matches!(self, Attendance::Marked { played: true, .. })
    }

    pub fn dined(&self) -> bool {
        matches!(self, Attendance::Marked { dined: true, .. })
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Attendance::Absent)
    }

    /// Played or dined.
    pub fn attended(&self) -> bool {
        self.played() || self.dined()
    }

    /// Nothing recorded yet.
    pub fn is_empty(&self) -> bool {
        matches!(self, Attendance::Marked { played: false, dined: false })
    }

    pub fn points(&self, scoring: &ScoringConfig) -> u32 {
        let mut points = 0;
        if self.played() {
            points += scoring.points_played;
        }
        if self.dined() {
            points += scoring.points_dined;
        }
        points
    }

    /// Attendance-sheet toggle: `absent` wipes the other tags, the other tags wipe `absent`.
    pub fn toggle(self, tag: AttendanceTag) -> Attendance {
        match (tag, self) {
            (AttendanceTag::Absent, Attendance::Absent) => Attendance::default(),
            (AttendanceTag::Absent, Attendance::Marked { .. }) => Attendance::Absent,
            (AttendanceTag::Played, Attendance::Absent) => Attendance::PLAYED,
            (AttendanceTag::Played, Attendance::Marked { played, dined }) => {
                Attendance::Marked { played: !played, dined }
            }
            (AttendanceTag::Dined, Attendance::Absent) => Attendance::DINED,
            (AttendanceTag::Dined, Attendance::Marked { played, dined }) => {
                Attendance::Marked { played, dined: !dined }
            }
        }
    }

    pub fn tags(&self) -> Vec<AttendanceTag> {
        match self {
            Attendance::Absent => vec![AttendanceTag::Absent],
            Attendance::Marked { played, dined } => {
                let mut tags = Vec::with_capacity(2);
                if *played {
                    tags.push(AttendanceTag::Played);
                }
                if *dined {
                    tags.push(AttendanceTag::Dined);
                }
                tags
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("\"absent\" cannot be combined with other attendance tags")]
pub struct ExclusiveAbsence;

impl TryFrom<Vec<AttendanceTag>> for Attendance {
    type Error = ExclusiveAbsence;

    fn try_from(tags: Vec<AttendanceTag>) -> Result<Self, Self::Error> {
        let absent = tags.contains(&AttendanceTag::Absent);
        let played = tags.contains(&AttendanceTag::Played);
        let dined = tags.contains(&AttendanceTag::Dined);
        match (absent, played || dined) {
            (true, true) => Err(ExclusiveAbsence),
            (true, false) => Ok(Attendance::Absent),
            (false, _) => Ok(Attendance::Marked { played, dined }),
        }
    }
}

impl From<Attendance> for Vec<AttendanceTag> {
    fn from(attendance: Attendance) -> Self {
        attendance.tags()
    }
}

impl JsonSchema for Attendance {
    fn schema_name() -> String {
        "Attendance".to_owned()
    }

    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        <Vec<AttendanceTag>>::json_schema(gen)
    }
}

/// One saved match day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Round {
    pub id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub attendance: BTreeMap<PlayerId, Attendance>,
}

impl Round {
    pub fn new(id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            date,
            attendance: BTreeMap::new(),
        }
    }

    pub fn with(mut self, player: impl Into<PlayerId>, attendance: Attendance) -> Self {
        self.attendance.insert(player.into(), attendance);
        self
    }

    /// Builds the round saved at the end of a match day. Social members are left out,
    /// every other player without a mark is recorded as absent. The caller picks the id,
    /// so the same inputs always give the same round.
    pub fn record(
        id: impl Into<String>,
        date: NaiveDate,
        players: &[Player],
        marks: &BTreeMap<PlayerId, Attendance>,
    ) -> Self {
        let attendance = players
            .iter()
            .filter(|p| p.position != super::Position::Social)
            .map(|p| {
                let mark = marks
                    .get(&p.id)
                    .copied()
                    .filter(|m| !m.is_empty())
                    .unwrap_or(Attendance::Absent);
                (p.id.clone(), mark)
            })
            .collect();

        Self {
            id: id.into(),
            date,
            attendance,
        }
    }

    pub fn attendance_of(&self, player: &PlayerId) -> Option<Attendance> {
        self.attendance.get(player).copied()
    }
}
