//! String-in, string-out entry points for embedders.
//!
//! The input is always a [`SeasonSnapshot`]; outputs are plain JSON documents. Failures
//! come back as a serialized [`ApiError`] so the caller can show `message` and branch on
//! `code`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use tracing::{info, warn};

use crate::balance::balance_teams;
use crate::config::EngineConfig;
use crate::dues::PaymentLedger;
use crate::error::{EngineError, Result};
use crate::models::{
    Player, PlayerId, Position, Presence, PresenceCounts, Round, SavedMatch, TeamAssignment, TeamSide,
};
use crate::ranking::{rank_players, Ranking};
use crate::roster::select_roster;
use crate::scorers::{top_scorers, ScorerRow};
use crate::stats::{compute_stats, PlayerStats, SeasonStats};
use crate::substitution::{plan_for_assignment, SubstitutionMap};

pub const SCHEMA_VERSION: u8 = 1;

/// Everything the engine needs for one computation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SeasonSnapshot {
    pub schema_version: u8,
    /// Season being ranked.
    pub year: i32,
    pub players: Vec<Player>,
    #[serde(default)]
    pub rounds: Vec<Round>,
    /// Saved matches with their goal lists.
    #[serde(default)]
    pub matches: Vec<SavedMatch>,
    #[serde(default)]
    pub presence: Presence,
    /// Players with overdue fees, as reported by the payments side.
    #[serde(default)]
    pub overdue: BTreeSet<PlayerId>,
    /// Paid months per player; absent when the payments side did not send a ledger.
    #[serde(default)]
    pub payments: Option<PaymentLedger>,
    #[serde(default)]
    pub config: EngineConfig,
}

impl SeasonSnapshot {
    pub fn from_json(source: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(source)?;
        snapshot.check()?;
        Ok(snapshot)
    }

    pub fn check(&self) -> Result<()> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(EngineError::SchemaVersion {
                found: self.schema_version,
                expected: SCHEMA_VERSION,
            });
        }
        self.config.validate()?;
        Ok(())
    }

    pub fn stats(&self) -> SeasonStats {
        compute_stats(&self.players, &self.rounds, self.year, &self.config.scoring)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl From<&EngineError> for ApiError {
    fn from(err: &EngineError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RankingRow {
    pub rank: Option<u32>,
    pub player_id: PlayerId,
    pub name: String,
    pub position: Position,
    pub stats: PlayerStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SkillSums {
    pub team_a: u32,
    pub team_b: u32,
    pub imbalance: u32,
}

impl From<&TeamAssignment> for SkillSums {
    fn from(teams: &TeamAssignment) -> Self {
        Self {
            team_a: teams.skill_sum(TeamSide::A),
            team_b: teams.skill_sum(TeamSide::B),
            imbalance: teams.imbalance(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlanBody {
    pub starters: Vec<PlayerId>,
    pub reserves: Vec<PlayerId>,
    pub teams: TeamAssignment,
    pub skill_sums: SkillSums,
    pub substitutions: SubstitutionMap,
    pub presence: PresenceCounts,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MatchDayPlan {
    #[serde(flatten)]
    pub body: PlanBody,
    /// SHA-256 of the canonical JSON of `body`.
    pub digest: String,
}

pub fn ranking_table(players: &[Player], stats: &SeasonStats, ranking: &Ranking) -> Vec<RankingRow> {
    ranking
        .order()
        .iter()
        .filter_map(|id| players.iter().find(|p| &p.id == id))
        .map(|p| RankingRow {
            rank: ranking.rank_of(&p.id),
            player_id: p.id.clone(),
            name: p.name.clone(),
            position: p.position,
            stats: stats.get(&p.id).copied().unwrap_or_default(),
        })
        .collect()
}

pub fn season_ranking(snapshot: &SeasonSnapshot) -> Vec<RankingRow> {
    let stats = snapshot.stats();
    let ranking = rank_players(&snapshot.players, &stats);
    ranking_table(&snapshot.players, &stats, &ranking)
}

pub fn season_top_scorers(snapshot: &SeasonSnapshot, limit: usize) -> Vec<ScorerRow> {
    top_scorers(&snapshot.matches, &snapshot.players, snapshot.year, limit)
}

/// Full pipeline: stats, ranking, roster, teams, substitutions.
pub fn plan_match_day(snapshot: &SeasonSnapshot) -> Result<MatchDayPlan> {
    let stats = snapshot.stats();
    let ranking = rank_players(&snapshot.players, &stats);
    let presence = snapshot.presence.clone().with_roster(&snapshot.players);

    let roster = select_roster(
        &snapshot.players,
        &presence,
        &ranking,
        &snapshot.overdue,
        &snapshot.config.game,
    )?;
    let teams = balance_teams(&roster.starters)?;
    let substitutions = plan_for_assignment(&teams, &roster.reserves, &presence, &ranking);

    let body = PlanBody {
        starters: roster.starters.iter().map(|p| p.id.clone()).collect(),
        reserves: roster.reserves.iter().map(|p| p.id.clone()).collect(),
        skill_sums: SkillSums::from(&teams),
        teams,
        substitutions,
        presence: presence.counts(),
    };
    let digest = digest(&body)?;
    info!(
        starters = body.starters.len(),
        reserves = body.reserves.len(),
        imbalance = body.skill_sums.imbalance,
        %digest,
        "match day planned"
    );

    Ok(MatchDayPlan { body, digest })
}

fn digest(body: &PlanBody) -> Result<String> {
    let bytes = serde_json::to_vec(body)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}

pub fn season_ranking_json(snapshot_json: &str) -> std::result::Result<String, String> {
    let snapshot = SeasonSnapshot::from_json(snapshot_json).map_err(|e| error_json(&e))?;
    let rows = season_ranking(&snapshot);
    serde_json::to_string(&rows).map_err(|e| error_json(&e.into()))
}

pub fn top_scorers_json(snapshot_json: &str, limit: usize) -> std::result::Result<String, String> {
    let snapshot = SeasonSnapshot::from_json(snapshot_json).map_err(|e| error_json(&e))?;
    let rows = season_top_scorers(&snapshot, limit);
    serde_json::to_string(&rows).map_err(|e| error_json(&e.into()))
}

pub fn plan_match_day_json(snapshot_json: &str) -> std::result::Result<String, String> {
    let snapshot = SeasonSnapshot::from_json(snapshot_json).map_err(|e| error_json(&e))?;
    let plan = plan_match_day(&snapshot).map_err(|e| {
        warn!(error = %e, "match day plan rejected");
        error_json(&e)
    })?;
    serde_json::to_string(&plan).map_err(|e| error_json(&e.into()))
}

/// JSON Schema of [`SeasonSnapshot`].
pub fn snapshot_schema() -> serde_json::Value {
    let schema = schemars::schema_for!(SeasonSnapshot);
    serde_json::to_value(schema).unwrap_or_default()
}

fn error_json(err: &EngineError) -> String {
    let api_error = ApiError::from(err);
    serde_json::to_string(&api_error).unwrap_or_else(|_| api_error.message.clone())
}
