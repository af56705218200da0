//! # pelada_core - Match-Day Engine for a Weekly Football Group
//!
//! Turns a season snapshot (roster, round history, presence list, game size) into the
//! things the organiser needs on match day.
//!
//! ## Pipeline
//! - [`stats::compute_stats`]: season points and the short-term scoring window
//! - [`ranking::rank_players`]: ranking order and field-player rank numbers
//! - [`roster::select_roster`]: starters and reserves under the goalkeeper and capacity rules
//! - [`balance::balance_teams`]: greedy skill-balanced split into two teams
//! - [`substitution::plan_substitutions`]: which reserve replaces which starter
//!
//! Season reports sit beside the pipeline: [`scorers::top_scorers`], [`dues`] and
//! [`calendar`].
//!
//! Every stage is a pure function of its inputs: same snapshot, same output.

pub mod api;
pub mod balance;
pub mod calendar;
pub mod config;
pub mod dues;
pub mod error;
pub mod matchday;
pub mod models;
pub mod ranking;
pub mod roster;
pub mod scorers;
pub mod season;
pub mod stats;
pub mod substitution;


pub use api::{
    plan_match_day, plan_match_day_json, season_ranking, season_ranking_json, season_top_scorers,
    snapshot_schema, top_scorers_json, MatchDayPlan, RankingRow, SeasonSnapshot,
};
pub use balance::balance_teams;
pub use config::{DuesConfig, EngineConfig, GameConfig, ScoringConfig};
pub use error::{BalanceError, ConfigError, EngineError, MatchDayError, Result, SeasonError, SelectionError};
pub use matchday::MatchDay;
pub use models::{
    Attendance, AttendanceTag, Goal, Player, PlayerId, Position, Presence, PresenceStatus, Round,
    SavedMatch, TeamAssignment, TeamSide,
};
pub use ranking::{rank_players, Ranking};
pub use roster::{select_roster, RosterResult};
pub use scorers::{top_scorers, ScorerRow, DEFAULT_TOP_SCORERS};
pub use season::Season;
pub use stats::{compute_stats, PlayerStats, SeasonStats};
pub use substitution::{plan_substitutions, Substitution, SubstitutionMap};
