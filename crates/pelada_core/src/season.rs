//! Roster and round history of one season.
//!
//! `Season` is a value: every edit returns a new season and leaves the old one intact.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::ScoringConfig;
use crate::error::SeasonError;
use crate::models::{Player, PlayerId, Round};
use crate::ranking::{rank_players, Ranking};
use crate::stats::{compute_stats, SeasonStats};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Season {
    pub year: i32,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub rounds: Vec<Round>,
}

impl Season {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            players: Vec::new(),
            rounds: Vec::new(),
        }
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn add_player(&self, player: Player) -> Result<Self, SeasonError> {
        player.validate()?;
        if self.player(&player.id).is_some() {
            return Err(SeasonError::DuplicatePlayer(player.id));
        }
        let mut next = self.clone();
        next.players.push(player);
        Ok(next)
    }

    pub fn update_player(&self, player: Player) -> Result<Self, SeasonError> {
        player.validate()?;
        let mut next = self.clone();
        let slot = next
            .players
            .iter_mut()
            .find(|p| p.id == player.id)
            .ok_or_else(|| SeasonError::PlayerNotFound(player.id.clone()))?;
        *slot = player;
        Ok(next)
    }

    /// Removes the player and every attendance record that references them.
    pub fn delete_player(&self, id: &PlayerId) -> Result<Self, SeasonError> {
        if self.player(id).is_none() {
            return Err(SeasonError::PlayerNotFound(id.clone()));
        }
        let mut next = self.clone();
        next.players.retain(|p| &p.id != id);
        for round in &mut next.rounds {
            round.attendance.remove(id);
        }
        info!(player = %id, "player deleted");
        Ok(next)
    }

    pub fn record_round(&self, round: Round) -> Result<Self, SeasonError> {
        if self.rounds.iter().any(|r| r.id == round.id) {
            return Err(SeasonError::DuplicateRound(round.id));
        }
        let mut next = self.clone();
        next.rounds.push(round);
        Ok(next)
    }

    pub fn replace_round(&self, round: Round) -> Result<Self, SeasonError> {
        let mut next = self.clone();
        let slot = next
            .rounds
            .iter_mut()
            .find(|r| r.id == round.id)
            .ok_or_else(|| SeasonError::RoundNotFound(round.id.clone()))?;
        *slot = round;
        Ok(next)
    }

    pub fn delete_round(&self, round_id: &str) -> Result<Self, SeasonError> {
        if !self.rounds.iter().any(|r| r.id == round_id) {
            return Err(SeasonError::RoundNotFound(round_id.to_string()));
        }
        let mut next = self.clone();
        next.rounds.retain(|r| r.id != round_id);
        Ok(next)
    }

    pub fn rounds_newest_first(&self) -> Vec<&Round> {
        let mut rounds: Vec<&Round> = self.rounds.iter().collect();
        rounds.sort_by(|a, b| b.date.cmp(&a.date));
        rounds
    }

    pub fn stats(&self, scoring: &ScoringConfig) -> SeasonStats {
        compute_stats(&self.players, &self.rounds, self.year, scoring)
    }

    pub fn ranking(&self, scoring: &ScoringConfig) -> Ranking {
        rank_players(&self.players, &self.stats(scoring))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Attendance, Position};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn season() -> Season {
        Season::new(2024)
            .add_player(Player::new("a", "Ana", Position::Forward, 7))
            .and_then(|s| s.add_player(Player::new("b", "Bia", Position::Defender, 6)))
            .and_then(|s| {
                s.record_round(
                    Round::new("r1", date(2024, 5, 1))
                        .with("a", Attendance::PLAYED)
                        .with("b", Attendance::DINED),
                )
            })
            .unwrap()
    }

    #[test]
    fn test_add_rejects_duplicates_and_invalid() {
        let s = season();
        assert_eq!(
            s.add_player(Player::new("a", "Again", Position::Forward, 5)).unwrap_err(),
            SeasonError::DuplicatePlayer("a".into())
        );
        assert!(matches!(
            s.add_player(Player::new("c", "Caio", Position::Forward, 0)),
            Err(SeasonError::InvalidPlayer { .. })
        ));
    }

    #[test]
    fn test_delete_player_purges_attendance() {
        let before = season();
        let after = before.delete_player(&"b".into()).unwrap();

        assert!(after.player(&"b".into()).is_none());
        assert_eq!(after.rounds[0].attendance.len(), 1);
        // the original value is untouched
        assert_eq!(before.rounds[0].attendance.len(), 2);
        assert!(after.delete_player(&"b".into()).is_err());
    }

    #[test]
    fn test_update_player() {
        let s = season();
        let updated = s
            .update_player(Player::new("a", "Ana Paula", Position::Midfielder, 8))
            .unwrap();
        assert_eq!(updated.player(&"a".into()).map(|p| p.skill_rating), Some(8));
        assert!(s.update_player(Player::new("z", "Zé", Position::Forward, 5)).is_err());
    }

    #[test]
    fn test_round_edits() {
        let s = season()
            .record_round(Round::new("r2", date(2024, 5, 8)))
            .unwrap();
        assert_eq!(s.rounds_newest_first()[0].id, "r2");
        assert!(s.record_round(Round::new("r2", date(2024, 5, 8))).is_err());

        let s = s
            .replace_round(Round::new("r2", date(2024, 5, 8)).with("a", Attendance::PLAYED))
            .unwrap();
        assert_eq!(s.ranking(&ScoringConfig::default()).order()[0].as_str(), "a");

        let s = s.delete_round("r1").unwrap();
        assert_eq!(s.rounds.len(), 1);
        assert!(s.delete_round("r1").is_err());
    }
}
