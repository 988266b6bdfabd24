//! Matchup and fixture model.
//!
//! A [`Matchup`] is a game with its home side fixed. A [`Fixture`] is a game
//! known to be played while generation is in progress, whose home side may
//! still be undecided.

use serde::{Deserialize, Serialize};

use super::{PeerGroup, TeamId};

/// A game between two teams with the home side fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Matchup {
    /// Home team.
    pub home: TeamId,
    /// Away team.
    pub away: TeamId,
}

/// A game recorded during generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fixture {
    /// Home and away already fixed.
    Decided(Matchup),
    /// The pair will play, but the home side is not yet chosen.
    Pending {
        /// Team with the lower position in the generation order.
        team_a: TeamId,
        /// The other team.
        team_b: TeamId,
        /// Relationship between the two teams.
        group: PeerGroup,
    },
}

impl Matchup {
    /// Creates a matchup.
    pub fn new(home: TeamId, away: TeamId) -> Self {
        Self { home, away }
    }

    /// Whether the team plays in this matchup.
    #[inline]
    pub fn involves(&self, team: TeamId) -> bool {
        self.home == team || self.away == team
    }

    /// Both participants, home first.
    #[inline]
    pub fn teams(&self) -> [TeamId; 2] {
        [self.home, self.away]
    }

    /// The participants as an unordered key (lower id first).
    #[inline]
    pub fn pair_key(&self) -> (TeamId, TeamId) {
        if self.home <= self.away {
            (self.home, self.away)
        } else {
            (self.away, self.home)
        }
    }
}

impl From<(TeamId, TeamId)> for Matchup {
    fn from((home, away): (TeamId, TeamId)) -> Self {
        Self::new(home, away)
    }
}

impl Fixture {
    /// Creates a pending fixture.
    pub fn pending(team_a: TeamId, team_b: TeamId, group: PeerGroup) -> Self {
        Fixture::Pending {
            team_a,
            team_b,
            group,
        }
    }

    /// Whether the home side is still open.
    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self, Fixture::Pending { .. })
    }

    /// The decided matchup, if any.
    pub fn decided(&self) -> Option<Matchup> {
        match self {
            Fixture::Decided(m) => Some(*m),
            Fixture::Pending { .. } => None,
        }
    }
}
