//! Season statistics derived from round history.
//!
//! Every round of the season contributes to the yearly total. Rounds that fall on one of
//! the last `window_size` match days additionally feed the short-term window score, which
//! is the primary ranking key.

use chrono::{Datelike, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::config::ScoringConfig;
use crate::models::{Player, PlayerId, Round};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PlayerStats {
    /// Base points plus everything earned this season.
    pub total_points_year: u32,
    /// Points earned on the match days of the scoring window.
    pub window_points: u32,
    /// Played or dined on the most recent match day.
    pub attended_most_recent: bool,
    pub games_played: u32,
    pub dinners_attended: u32,
    pub absences: u32,
}

pub type SeasonStats = BTreeMap<PlayerId, PlayerStats>;

/// The most recent distinct match days of a season, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoringWindow {
    dates: Vec<NaiveDate>,
}

impl ScoringWindow {
    pub fn for_season(rounds: &[Round], year: i32, scoring: &ScoringConfig) -> Self {
        let mut dates: Vec<NaiveDate> = rounds
            .iter()
            .map(|r| r.date)
            .filter(|d| d.year() == year && d.weekday() == scoring.match_day)
            .collect();
        dates.sort_unstable_by(|a, b| b.cmp(a));
        dates.dedup();
        dates.truncate(scoring.window_size);
        Self { dates }
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Reference date for `attended_most_recent`.
    pub fn most_recent(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }
}

/// Aggregates a season. Attendance for ids outside `players` is ignored.
pub fn compute_stats(
    players: &[Player],
    rounds: &[Round],
    year: i32,
    scoring: &ScoringConfig,
) -> SeasonStats {
    let window = ScoringWindow::for_season(rounds, year, scoring);
    debug!(year, window = ?window.dates(), "scoring window");

    let mut stats: SeasonStats = players
        .iter()
        .map(|p| {
            let seed = PlayerStats {
                total_points_year: p.base_points,
                ..PlayerStats::default()
            };
            (p.id.clone(), seed)
        })
        .collect();

    let mut stale = 0usize;
    for round in rounds.iter().filter(|r| r.date.year() == year) {
        let in_window = window.contains(round.date);
        let is_most_recent = window.most_recent() == Some(round.date);

        for (player_id, attendance) in &round.attendance {
            let Some(entry) = stats.get_mut(player_id) else {
                stale += 1;
                continue;
            };

            if attendance.played() {
                entry.games_played += 1;
            }
            if attendance.dined() {
                entry.dinners_attended += 1;
            }
            if attendance.is_absent() {
                entry.absences += 1;
            }

            let points = attendance.points(scoring);
            entry.total_points_year += points;
            if in_window {
                entry.window_points += points;
            }
            if is_most_recent && attendance.attended() {
                entry.attended_most_recent = true;
            }
        }
    }

    if stale > 0 {
        debug!(stale, "ignored attendance records of removed players");
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Attendance, Position};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Wednesdays of May 2024
    const WEDNESDAYS: [u32; 5] = [1, 8, 15, 22, 29];

    #[test]
    fn test_window_takes_last_four_match_days() {
        let mut rounds: Vec<Round> = WEDNESDAYS
            .iter()
            .map(|d| Round::new(format!("r{d}"), date(2024, 5, *d)))
            .collect();
        // a Saturday friendly and a duplicate Wednesday
        rounds.push(Round::new("sat", date(2024, 5, 25)));
        rounds.push(Round::new("dup", date(2024, 5, 29)));
        rounds.push(Round::new("old", date(2023, 12, 27)));

        let window = ScoringWindow::for_season(&rounds, 2024, &ScoringConfig::default());
        assert_eq!(
            window.dates(),
            &[date(2024, 5, 29), date(2024, 5, 22), date(2024, 5, 15), date(2024, 5, 8)]
        );
        assert_eq!(window.most_recent(), Some(date(2024, 5, 29)));
        assert!(!window.contains(date(2024, 5, 25)));
    }

    #[test]
    fn test_base_points_and_window_points() {
        let players = vec![Player::new("p", "Paulo", Position::Forward, 6).with_base_points(10)];
        // played in 3 of the last 4 Wednesdays, absent in the other
        let rounds = vec![
            Round::new("r1", date(2024, 5, 1)).with("p", Attendance::PLAYED),
            Round::new("r2", date(2024, 5, 8)).with("p", Attendance::PLAYED),
            Round::new("r3", date(2024, 5, 15)).with("p", Attendance::Absent),
            Round::new("r4", date(2024, 5, 22)).with("p", Attendance::PLAYED),
            Round::new("r5", date(2024, 5, 29)).with("p", Attendance::PLAYED),
        ];

        let stats = compute_stats(&players, &rounds, 2024, &ScoringConfig::default());
        let s = stats[&PlayerId::from("p")];
        assert_eq!(s.window_points, 6);
        assert_eq!(s.total_points_year, 18);
        assert!(s.total_points_year >= 16);
        assert_eq!(s.games_played, 4);
        assert_eq!(s.absences, 1);
        assert!(s.attended_most_recent);
    }

    #[test]
    fn test_dinner_counts_toward_most_recent() {
        let players = vec![
            Player::new("a", "Ana", Position::Forward, 6),
            Player::new("b", "Bia", Position::Forward, 6),
        ];
        let rounds = vec![Round::new("r", date(2024, 5, 29))
            .with("a", Attendance::DINED)
            .with("b", Attendance::Absent)];

        let stats = compute_stats(&players, &rounds, 2024, &ScoringConfig::default());
        assert!(stats[&PlayerId::from("a")].attended_most_recent);
        assert_eq!(stats[&PlayerId::from("a")].window_points, 1);
        assert_eq!(stats[&PlayerId::from("a")].dinners_attended, 1);
        assert!(!stats[&PlayerId::from("b")].attended_most_recent);
    }

    #[test]
    fn test_non_match_day_rounds_count_for_year_only() {
        let players = vec![Player::new("a", "Ana", Position::Forward, 6)];
        let rounds = vec![Round::new("sat", date(2024, 5, 25)).with("a", Attendance::PLAYED_AND_DINED)];

        let stats = compute_stats(&players, &rounds, 2024, &ScoringConfig::default());
        let s = stats[&PlayerId::from("a")];
        assert_eq!(s.total_points_year, 3);
        assert_eq!(s.window_points, 0);
        assert!(!s.attended_most_recent);
    }

    #[test]
    fn test_stale_and_other_year_records_ignored() {
        let players = vec![Player::new("a", "Ana", Position::Forward, 6)];
        let rounds = vec![
            Round::new("r", date(2024, 5, 29))
                .with("ghost", Attendance::PLAYED)
                .with("a", Attendance::PLAYED),
            Round::new("old", date(2023, 5, 31)).with("a", Attendance::PLAYED),
        ];

        let stats = compute_stats(&players, &rounds, 2024, &ScoringConfig::default());
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[&PlayerId::from("a")].total_points_year, 2);
    }

    #[test]
    fn test_player_without_rounds_is_zero() {
        let players = vec![Player::new("a", "Ana", Position::Forward, 6)];
        let stats = compute_stats(&players, &[], 2024, &ScoringConfig::default());
        assert_eq!(stats[&PlayerId::from("a")], PlayerStats::default());
    }
}
