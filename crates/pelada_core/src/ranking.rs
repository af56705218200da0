//! Season ranking: window points, then yearly points, then recent attendance.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::{Player, PlayerId};
use crate::stats::{PlayerStats, SeasonStats};

/// Sort key for players without a rank number; they go after every ranked player.
pub const UNRANKED: u32 = u32::MAX;

/// Descending on all three keys. Equal keys compare `Equal`, so a stable sort keeps
/// roster order between tied players.
pub fn compare_stats(a: &PlayerStats, b: &PlayerStats) -> Ordering {
    b.window_points
        .cmp(&a.window_points)
        .then_with(|| b.total_points_year.cmp(&a.total_points_year))
        .then_with(|| b.attended_most_recent.cmp(&a.attended_most_recent))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ranking {
    order: Vec<PlayerId>,
    positions: BTreeMap<PlayerId, usize>,
    ranks: BTreeMap<PlayerId, u32>,
}

impl Ranking {
    /// Every player, best first.
    pub fn order(&self) -> &[PlayerId] {
        &self.order
    }

    /// 1-based rank among field players; goalkeepers and social members have none.
    pub fn rank_of(&self, id: &PlayerId) -> Option<u32> {
        self.ranks.get(id).copied()
    }

    pub fn sort_key(&self, id: &PlayerId) -> u32 {
        self.rank_of(id).unwrap_or(UNRANKED)
    }

    /// Index in the global order, `usize::MAX` for players the ranking never saw.
    pub fn position_of(&self, id: &PlayerId) -> usize {
        self.positions.get(id).copied().unwrap_or(usize::MAX)
    }

    /// Stable sort, best rank first.
    pub fn sort_best_first(&self, players: &mut [Player]) {
        players.sort_by_key(|p| self.sort_key(&p.id));
    }

    /// Stable sort, worst rank first (unranked players lead).
    pub fn sort_worst_first(&self, players: &mut [Player]) {
        players.sort_by_key(|p| std::cmp::Reverse(self.sort_key(&p.id)));
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Orders `players` by their season stats. Missing stats count as zero.
pub fn rank_players(players: &[Player], stats: &SeasonStats) -> Ranking {
    let zero = PlayerStats::default();
    let mut ordered: Vec<&Player> = players.iter().collect();
    ordered.sort_by(|a, b| {
        let sa = stats.get(&a.id).unwrap_or(&zero);
        let sb = stats.get(&b.id).unwrap_or(&zero);
        compare_stats(sa, sb)
    });

    let ranks = ordered
        .iter()
        .filter(|p| p.position.is_field())
        .zip(1u32..)
        .map(|(p, rank)| (p.id.clone(), rank))
        .collect();

    let order: Vec<PlayerId> = ordered.into_iter().map(|p| p.id.clone()).collect();
    let positions = order
        .iter()
        .enumerate()
        .map(|(index, id)| (id.clone(), index))
        .collect();

    Ranking {
        order,
        positions,
        ranks,
    }
}
