//! Starter/reserve selection for a match day.
//!
//! Rules:
//! - `Full` and `FirstHalf` players are starting candidates, `SecondHalf` players always
//!   go to the reserves.
//! - Exactly two candidates must be goalkeepers.
//! - Field candidates are taken in ranking order, fee-current players first; overdue
//!   players never start, whatever their rank.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::error::SelectionError;
use crate::models::{Player, PlayerId, Presence, PresenceStatus};
use crate::ranking::Ranking;

pub const REQUIRED_GOALKEEPERS: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RosterResult {
    /// Both goalkeepers first, then field starters best rank first.
    pub starters: Vec<Player>,
    /// Best rank first; unranked players at the end.
    pub reserves: Vec<Player>,
}

impl RosterResult {
    pub fn goalkeepers(&self) -> impl Iterator<Item = &Player> {
        self.starters.iter().filter(|p| p.position.is_goalkeeper())
    }

    pub fn field_starters(&self) -> impl Iterator<Item = &Player> {
        self.starters.iter().filter(|p| !p.position.is_goalkeeper())
    }

    pub fn contains(&self, id: &PlayerId) -> bool {
        self.starters.iter().chain(&self.reserves).any(|p| &p.id == id)
    }
}

pub fn select_roster(
    players: &[Player],
    presence: &Presence,
    ranking: &Ranking,
    overdue: &BTreeSet<PlayerId>,
    game: &GameConfig,
) -> Result<RosterResult, SelectionError> {
    let candidates: Vec<&Player> = players
        .iter()
        .filter(|p| presence.status_of(&p.id).can_start())
        .collect();

    let goalkeepers: Vec<Player> = candidates
        .iter()
        .filter(|p| p.position.is_goalkeeper())
        .map(|p| (*p).clone())
        .collect();
    if goalkeepers.len() != REQUIRED_GOALKEEPERS {
        warn!(found = goalkeepers.len(), "roster rejected: wrong goalkeeper count");
        return Err(SelectionError::WrongGoalkeeperCount { found: goalkeepers.len() });
    }

    let required = game.field_capacity();
    let mut field: Vec<Player> = candidates
        .iter()
        .filter(|p| p.position.is_field())
        .map(|p| (*p).clone())
        .collect();
    if field.len() < required {
        warn!(required, found = field.len(), "roster rejected: not enough field players");
        return Err(SelectionError::InsufficientFieldPlayers { required, found: field.len() });
    }

    field.sort_by_key(|p| ranking.position_of(&p.id));
    let (mut paid, overdue_field): (Vec<Player>, Vec<Player>) =
        field.into_iter().partition(|p| !overdue.contains(&p.id));

    let bench_paid = if paid.len() > required { paid.split_off(required) } else { Vec::new() };
    let field_starters = paid;
    if field_starters.len() < required {
        warn!(
            required,
            selected = field_starters.len(),
            overdue = overdue_field.len(),
            "overdue players left starting slots empty"
        );
    }

    let mut reserves: Vec<Player> = players
        .iter()
        .filter(|p| presence.status_of(&p.id) == PresenceStatus::SecondHalf)
        .cloned()
        .collect();
    reserves.extend(bench_paid);
    reserves.extend(overdue_field);
    ranking.sort_best_first(&mut reserves);

    let mut starters = goalkeepers;
    starters.extend(field_starters);

    debug_assert!({
        let mut seen = HashSet::new();
        starters.iter().chain(&reserves).all(|p| seen.insert(p.id.clone()))
    });
    debug!(
        starters = ?starters.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
        reserves = ?reserves.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
        "roster selected"
    );
    info!(starters = starters.len(), reserves = reserves.len(), "roster confirmed");

    Ok(RosterResult { starters, reserves })
}
