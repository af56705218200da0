//! Operator edits on a confirmed match day: manual swaps, late reserves, withdrawals.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{BalanceError, MatchDayError};
use crate::models::{Player, PlayerId, Presence, TeamAssignment, TeamSide, TeamSlot};
use crate::ranking::Ranking;
use crate::roster::RosterResult;
use crate::substitution::{plan_for_assignment, SubstitutionMap};

/// Where a player currently sits in the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchList {
    Team(TeamSide),
    Reserves,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MatchDay {
    pub starters: Vec<Player>,
    pub reserves: Vec<Player>,
    pub teams: Option<TeamAssignment>,
}

impl From<RosterResult> for MatchDay {
    fn from(roster: RosterResult) -> Self {
        Self {
            starters: roster.starters,
            reserves: roster.reserves,
            teams: None,
        }
    }
}

impl MatchDay {
    pub fn with_teams(&self, teams: TeamAssignment) -> Self {
        Self {
            teams: Some(teams),
            ..self.clone()
        }
    }

    /// Splits the current starters into two balanced teams.
    pub fn balanced(&self) -> Result<Self, BalanceError> {
        let teams = crate::balance::balance_teams(&self.starters)?;
        Ok(self.with_teams(teams))
    }

    pub fn locate(&self, id: &PlayerId) -> Option<MatchList> {
        if let Some(side) = self.teams.as_ref().and_then(|t| t.side_of(id)) {
            return Some(MatchList::Team(side));
        }
        self.reserves
            .iter()
            .any(|p| &p.id == id)
            .then_some(MatchList::Reserves)
    }

    fn is_involved(&self, id: &PlayerId) -> bool {
        self.locate(id).is_some() || self.starters.iter().any(|p| &p.id == id)
    }

    pub fn add_late_reserve(&self, player: Player) -> Result<Self, MatchDayError> {
        if self.is_involved(&player.id) {
            return Err(MatchDayError::AlreadyInMatch(player.id));
        }
        info!(player = %player.id, "late reserve added");
        let mut next = self.clone();
        next.reserves.push(player);
        Ok(next)
    }

    pub fn remove_player(&self, id: &PlayerId) -> Result<Self, MatchDayError> {
        if !self.is_involved(id) {
            return Err(MatchDayError::PlayerNotInMatch(id.clone()));
        }
        let mut next = self.clone();
        next.starters.retain(|p| &p.id != id);
        next.reserves.retain(|p| &p.id != id);
        if let Some(teams) = next.teams.as_mut() {
            teams.team_a.retain(|s| &s.player.id != id);
            teams.team_b.retain(|s| &s.player.id != id);
        }
        info!(player = %id, "player removed from match");
        Ok(next)
    }

    /// Same list: the two exchange places. Different lists: each moves to the other's list.
    pub fn swap(&self, first: &PlayerId, second: &PlayerId) -> Result<Self, MatchDayError> {
        let from = self
            .locate(first)
            .ok_or_else(|| MatchDayError::PlayerNotInMatch(first.clone()))?;
        let to = self
            .locate(second)
            .ok_or_else(|| MatchDayError::PlayerNotInMatch(second.clone()))?;
        if first == second {
            return Ok(self.clone());
        }

        let mut next = self.clone();
        if from == to {
            next.exchange_in_place(from, first, second);
        } else {
            let a = next.take(from, first)?;
            let b = next.take(to, second)?;
            next.put(from, b.clone());
            next.put(to, a.clone());
            next.swap_starter(&a, &b, from, to);
        }
        debug!(%first, %second, "players swapped");
        Ok(next)
    }

    pub fn substitutions(&self, presence: &Presence, ranking: &Ranking) -> SubstitutionMap {
        match &self.teams {
            Some(teams) => plan_for_assignment(teams, &self.reserves, presence, ranking),
            None => SubstitutionMap::default(),
        }
    }

    fn exchange_in_place(&mut self, list: MatchList, first: &PlayerId, second: &PlayerId) {
        match list {
            MatchList::Reserves => {
                let i = self.reserves.iter().position(|p| &p.id == first);
                let j = self.reserves.iter().position(|p| &p.id == second);
                if let (Some(i), Some(j)) = (i, j) {
                    self.reserves.swap(i, j);
                }
            }
            MatchList::Team(side) => {
                if let Some(teams) = self.teams.as_mut() {
                    let team = teams.team_mut(side);
                    let i = team.iter().position(|s| &s.player.id == first);
                    let j = team.iter().position(|s| &s.player.id == second);
                    if let (Some(i), Some(j)) = (i, j) {
                        team.swap(i, j);
                    }
                }
            }
        }
    }

    fn take(&mut self, list: MatchList, id: &PlayerId) -> Result<Player, MatchDayError> {
        let missing = || MatchDayError::PlayerNotInMatch(id.clone());
        match list {
            MatchList::Reserves => {
                let i = self.reserves.iter().position(|p| &p.id == id).ok_or_else(missing)?;
                Ok(self.reserves.remove(i))
            }
            MatchList::Team(side) => {
                let team = self.teams.as_mut().ok_or_else(missing)?.team_mut(side);
                let i = team.iter().position(|s| &s.player.id == id).ok_or_else(missing)?;
                Ok(team.remove(i).player)
            }
        }
    }

    fn put(&mut self, list: MatchList, player: Player) {
        match list {
            MatchList::Reserves => self.reserves.push(player),
            MatchList::Team(side) => {
                if let Some(teams) = self.teams.as_mut() {
                    teams.team_mut(side).push(TeamSlot::kickoff(player, side));
                }
            }
        }
    }

    /// Keeps `starters` in step with the teams when a reserve trades places with a starter.
    fn swap_starter(&mut self, a: &Player, b: &Player, from: MatchList, to: MatchList) {
        let (outgoing, incoming) = match (from, to) {
            (MatchList::Team(_), MatchList::Reserves) => (a, b),
            (MatchList::Reserves, MatchList::Team(_)) => (b, a),
            _ => return,
        };
        if let Some(slot) = self.starters.iter_mut().find(|p| p.id == outgoing.id) {
            *slot = incoming.clone();
        }
    }
}
