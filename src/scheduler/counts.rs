//! Home/away/either tallies per team and peer group.
//!
//! "Either" means a game between two teams is definitely needed but its
//! home side is not yet decided. Two teams meeting three times get one home
//! and one away game each, plus one either game.

use std::collections::HashMap;

use crate::models::{PeerGroup, PerGroup, Team, TeamId};

/// Running game counts of one team within one peer group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameCounts {
    /// Home games decided.
    pub home: u32,
    /// Away games decided.
    pub away: u32,
    /// Games with an undecided home side.
    pub either: u32,
}

impl GameCounts {
    /// All games recorded, decided or not.
    #[inline]
    pub fn total(&self) -> u32 {
        self.home + self.away + self.either
    }

    /// Home games minus away games.
    #[inline]
    pub fn home_away_difference(&self) -> i64 {
        i64::from(self.home) - i64::from(self.away)
    }
}

/// Count tracker for every team of the league.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleCounts {
    counts: HashMap<TeamId, PerGroup<GameCounts>>,
}

impl ScheduleCounts {
    /// Zeroed counts for every team.
    pub fn new(teams: &[Team]) -> Self {
        Self {
            counts: teams.iter().map(|t| (t.id, PerGroup::default())).collect(),
        }
    }

    /// Counts of a team in a group. Unknown teams read as zero.
    pub fn get(&self, team: TeamId, group: PeerGroup) -> GameCounts {
        self.counts
            .get(&team)
            .map(|c| c[group])
            .unwrap_or_default()
    }

    /// Counts of a team summed over all groups.
    pub fn team_total(&self, team: TeamId) -> GameCounts {
        PeerGroup::ALL
            .iter()
            .map(|&g| self.get(team, g))
            .fold(GameCounts::default(), |acc, c| GameCounts {
                home: acc.home + c.home,
                away: acc.away + c.away,
                either: acc.either + c.either,
            })
    }

    /// Records a decided game.
    pub fn record_game(&mut self, group: PeerGroup, home: TeamId, away: TeamId) {
        self.entry(home)[group].home += 1;
        self.entry(away)[group].away += 1;
    }

    /// Records a game whose home side is open.
    pub fn record_either(&mut self, group: PeerGroup, a: TeamId, b: TeamId) {
        self.entry(a)[group].either += 1;
        self.entry(b)[group].either += 1;
    }

    /// Turns one open game of the pair into a decided one.
    pub fn resolve_either(&mut self, group: PeerGroup, home: TeamId, away: TeamId) {
        for team in [home, away] {
            let c = &mut self.entry(team)[group];
            debug_assert!(c.either > 0, "team {team} has no open {group} game to resolve");
            c.either = c.either.saturating_sub(1);
        }
        self.record_game(group, home, away);
    }

    /// Whether any game still has an open home side.
    pub fn has_either(&self) -> bool {
        self.counts
            .values()
            .any(|c| PeerGroup::ALL.iter().any(|&g| c[g].either > 0))
    }

    fn entry(&mut self, team: TeamId) -> &mut PerGroup<GameCounts> {
        self.counts.entry(team).or_default()
    }
}
