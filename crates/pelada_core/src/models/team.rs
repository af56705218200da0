use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum TeamSide {
    A,
    B,
}

/// Pitch coordinate in percent, x along the length, y across.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
}

impl Placement {
    /// Default kick-off spot by position; side B mirrors side A.
    pub fn kickoff(position: Position, side: TeamSide) -> Self {
        let x = match position {
            Position::Goalkeeper => 5.0,
            Position::Defender => 20.0,
            Position::FullBack => 30.0,
            Position::DefensiveMidfielder => 40.0,
            Position::Midfielder => 45.0,
            Position::Forward => 70.0,
            Position::Social => 50.0,
        };
        let x = match side {
            TeamSide::A => x,
            TeamSide::B => 100.0 - x,
        };
        Self { x, y: 50.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TeamSlot {
    pub player: Player,
    pub placement: Placement,
}

impl TeamSlot {
    pub fn kickoff(player: Player, side: TeamSide) -> Self {
        let placement = Placement::kickoff(player.position, side);
        Self { player, placement }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TeamAssignment {
    pub team_a: Vec<TeamSlot>,
    pub team_b: Vec<TeamSlot>,
}

impl TeamAssignment {
    pub fn team(&self, side: TeamSide) -> &[TeamSlot] {
        match side {
            TeamSide::A => &self.team_a,
            TeamSide::B => &self.team_b,
        }
    }

    pub fn team_mut(&mut self, side: TeamSide) -> &mut Vec<TeamSlot> {
        match side {
            TeamSide::A => &mut self.team_a,
            TeamSide::B => &mut self.team_b,
        }
    }

    pub fn players(&self, side: TeamSide) -> Vec<Player> {
        self.team(side).iter().map(|slot| slot.player.clone()).collect()
    }

    pub fn side_of(&self, id: &PlayerId) -> Option<TeamSide> {
        [TeamSide::A, TeamSide::B]
            .into_iter()
            .find(|side| self.team(*side).iter().any(|slot| &slot.player.id == id))
    }

    pub fn skill_sum(&self, side: TeamSide) -> u32 {
        self.team(side).iter().map(|slot| slot.player.skill()).sum()
    }

    /// Absolute difference between the two skill sums.
    pub fn imbalance(&self) -> u32 {
        self.skill_sum(TeamSide::A).abs_diff(self.skill_sum(TeamSide::B))
    }

    pub fn len(&self) -> usize {
        self.team_a.len() + self.team_b.len()
    }

    pub fn is_empty(&self) -> bool {
        self.team_a.is_empty() && self.team_b.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kickoff_mirrors_side_b() {
        let a = Placement::kickoff(Position::Goalkeeper, TeamSide::A);
        let b = Placement::kickoff(Position::Goalkeeper, TeamSide::B);
        assert_eq!(a.x, 5.0);
        assert_eq!(b.x, 95.0);
        assert_eq!(a.y, b.y);
    }

    #[test]
    fn test_side_of_and_sums() {
        let assignment = TeamAssignment {
            team_a: vec![TeamSlot::kickoff(Player::new("a", "Ana", Position::Forward, 7), TeamSide::A)],
            team_b: vec![
                TeamSlot::kickoff(Player::new("b", "Bia", Position::Defender, 3), TeamSide::B),
                TeamSlot::kickoff(Player::new("c", "Caio", Position::Midfielder, 2), TeamSide::B),
            ],
        };
        assert_eq!(assignment.side_of(&"c".into()), Some(TeamSide::B));
        assert_eq!(assignment.side_of(&"x".into()), None);
        assert_eq!(assignment.skill_sum(TeamSide::B), 5);
        assert_eq!(assignment.imbalance(), 2);
        assert_eq!(assignment.len(), 3);
    }
}
