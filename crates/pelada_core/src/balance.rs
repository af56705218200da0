//! Greedy two-team split.
//!
//! One goalkeeper seeds each side, then the rest of the starters, strongest first, go to
//! whichever side has the lower skill sum (ties to side A). The final imbalance is bounded
//! by the larger of the goalkeeper gap and the strongest outfield rating.

use tracing::debug;

use crate::error::BalanceError;
use crate::models::{Player, TeamAssignment, TeamSide, TeamSlot};

pub fn balance_teams(starters: &[Player]) -> Result<TeamAssignment, BalanceError> {
    let mut goalkeepers = starters.iter().filter(|p| p.position.is_goalkeeper());
    let (Some(keeper_a), Some(keeper_b)) = (goalkeepers.next(), goalkeepers.next()) else {
        let found = starters.iter().filter(|p| p.position.is_goalkeeper()).count();
        return Err(BalanceError::MissingGoalkeepers { found });
    };

    // extra goalkeepers are balanced like any other starter
    let mut outfield: Vec<&Player> = starters
        .iter()
        .filter(|p| p.id != keeper_a.id && p.id != keeper_b.id)
        .collect();
    outfield.sort_by(|a, b| b.skill_rating.cmp(&a.skill_rating));

    let mut assignment = TeamAssignment {
        team_a: vec![TeamSlot::kickoff(keeper_a.clone(), TeamSide::A)],
        team_b: vec![TeamSlot::kickoff(keeper_b.clone(), TeamSide::B)],
    };
    let mut sum_a = keeper_a.skill();
    let mut sum_b = keeper_b.skill();

    for player in outfield {
        let side = if sum_a <= sum_b { TeamSide::A } else { TeamSide::B };
        match side {
            TeamSide::A => sum_a += player.skill(),
            TeamSide::B => sum_b += player.skill(),
        }
        assignment.team_mut(side).push(TeamSlot::kickoff(player.clone(), side));
    }

    debug!(sum_a, sum_b, "teams balanced");
    Ok(assignment)
}
