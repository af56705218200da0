//! Season top-scorers table from saved matches.

use chrono::Datelike;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeMap;
use tracing::debug;

use crate::models::{Player, PlayerId, SavedMatch};

/// Rows shown on the season overview.
pub const DEFAULT_TOP_SCORERS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScorerRow {
    pub player_id: PlayerId,
    pub name: String,
    pub goals: u32,
}

/// Goals per player over the matches of `year`, most goals first, at most `limit` rows.
/// Goals credited to ids missing from `players` are dropped. Equal tallies keep the order
/// in which each scorer first appears in `matches`.
pub fn top_scorers(matches: &[SavedMatch], players: &[Player], year: i32, limit: usize) -> Vec<ScorerRow> {
    // id -> (first appearance, goals)
    let mut tally: BTreeMap<&PlayerId, (usize, u32)> = BTreeMap::new();
    let goals = matches
        .iter()
        .filter(|m| m.date.year() == year)
        .flat_map(|m| &m.goals);
    for goal in goals {
        let seen = tally.len();
        tally.entry(&goal.player_id).or_insert((seen, 0)).1 += 1;
    }

    let mut rows: Vec<(usize, ScorerRow)> = tally
        .into_iter()
        .filter_map(|(id, (first, goals))| {
            let player = players.iter().find(|p| &p.id == id)?;
            Some((
                first,
                ScorerRow {
                    player_id: id.clone(),
                    name: player.name.clone(),
                    goals,
                },
            ))
        })
        .collect();
    rows.sort_by_key(|(first, row)| (Reverse(row.goals), *first));
    rows.truncate(limit);

    debug!(year, scorers = rows.len(), "top scorers computed");
    rows.into_iter().map(|(_, row)| row).collect()
}
