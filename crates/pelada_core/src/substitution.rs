//! Reserve → starter replacement plan.
//!
//! First-half-only starters always leave. When there are more reserves than those, the
//! lowest-ranked remaining field starters leave too, so every reserve gets a turn.
//! Reserves enter best rank first, each one taking the side whose resulting skill sums
//! end up closest. Goalkeepers are never planned out.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Player, PlayerId, Presence, PresenceStatus, TeamAssignment, TeamSide};
use crate::ranking::Ranking;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Substitution {
    pub incoming: PlayerId,
    pub outgoing: PlayerId,
    pub side: TeamSide,
}

/// Ordered plan, in the order reserves enter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct SubstitutionMap {
    entries: Vec<Substitution>,
}

impl SubstitutionMap {
    /// Starter replaced by `incoming`, if that reserve enters.
    pub fn replaced_by(&self, incoming: &PlayerId) -> Option<&PlayerId> {
        self.entries
            .iter()
            .find(|s| &s.incoming == incoming)
            .map(|s| &s.outgoing)
    }

    pub fn is_leaving(&self, starter: &PlayerId) -> bool {
        self.entries.iter().any(|s| &s.outgoing == starter)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Substitution> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn plan_substitutions(
    team_a: &[Player],
    team_b: &[Player],
    reserves: &[Player],
    presence: &Presence,
    ranking: &Ranking,
) -> SubstitutionMap {
    if reserves.is_empty() {
        return SubstitutionMap::default();
    }

    let outfield: Vec<(&Player, TeamSide)> = team_a
        .iter()
        .map(|p| (p, TeamSide::A))
        .chain(team_b.iter().map(|p| (p, TeamSide::B)))
        .filter(|(p, _)| !p.position.is_goalkeeper())
        .collect();

    let is_first_half = |p: &Player| presence.status_of(&p.id) == PresenceStatus::FirstHalf;

    let mut leaving: Vec<(&Player, TeamSide)> =
        outfield.iter().copied().filter(|(p, _)| is_first_half(*p)).collect();
    leaving.sort_by_key(|(p, _)| ranking.sort_key(&p.id));

    let additional_needed = reserves.len().saturating_sub(leaving.len());
    if additional_needed > 0 {
        let mut staying: Vec<(&Player, TeamSide)> =
            outfield.iter().copied().filter(|(p, _)| !is_first_half(*p)).collect();
        staying.sort_by_key(|(p, _)| std::cmp::Reverse(ranking.sort_key(&p.id)));
        leaving.extend(staying.into_iter().take(additional_needed));
    }

    if leaving.is_empty() {
        return SubstitutionMap::default();
    }

    let mut pending_a: Vec<&Player> = leaving
        .iter()
        .filter(|(_, side)| *side == TeamSide::A)
        .map(|(p, _)| *p)
        .collect();
    let mut pending_b: Vec<&Player> = leaving
        .iter()
        .filter(|(_, side)| *side == TeamSide::B)
        .map(|(p, _)| *p)
        .collect();
    pending_a.reverse();
    pending_b.reverse();

    let mut sum_a = skill_sum(team_a);
    let mut sum_b = skill_sum(team_b);

    let mut entering: Vec<&Player> = reserves.iter().collect();
    entering.sort_by_key(|p| ranking.sort_key(&p.id));

    let mut entries = Vec::new();
    for reserve in entering {
        let side = match (pending_a.last(), pending_b.last()) {
            (Some(_), None) => TeamSide::A,
            (None, Some(_)) => TeamSide::B,
            (Some(out_a), Some(out_b)) => {
                let reserve_skill = i64::from(reserve.skill_rating);
                let without_a = sum_a - i64::from(out_a.skill_rating);
                let without_b = sum_b - i64::from(out_b.skill_rating);
                let diff_if_a = (without_a + reserve_skill - without_b).abs();
                let diff_if_b = (without_a - (without_b + reserve_skill)).abs();
                if diff_if_a <= diff_if_b {
                    TeamSide::A
                } else {
                    TeamSide::B
                }
            }
            (None, None) => break,
        };

        let outgoing = match side {
            TeamSide::A => pending_a.pop(),
            TeamSide::B => pending_b.pop(),
        };
        let Some(outgoing) = outgoing else { break };

        let delta = i64::from(reserve.skill_rating) - i64::from(outgoing.skill_rating);
        match side {
            TeamSide::A => sum_a += delta,
            TeamSide::B => sum_b += delta,
        }
        debug!(incoming = %reserve.id, outgoing = %outgoing.id, ?side, sum_a, sum_b, "substitution planned");

        entries.push(Substitution {
            incoming: reserve.id.clone(),
            outgoing: outgoing.id.clone(),
            side,
        });
    }

    SubstitutionMap { entries }
}

/// Same plan, reading the sides from a balanced assignment.
pub fn plan_for_assignment(
    teams: &TeamAssignment,
    reserves: &[Player],
    presence: &Presence,
    ranking: &Ranking,
) -> SubstitutionMap {
    plan_substitutions(
        &teams.players(TeamSide::A),
        &teams.players(TeamSide::B),
        reserves,
        presence,
        ranking,
    )
}

fn skill_sum(team: &[Player]) -> i64 {
    team.iter().map(|p| i64::from(p.skill_rating)).sum()
}
