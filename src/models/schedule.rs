//! Season schedule (solution) model.
//!
//! A season is an ordered list of days. Each day holds matchups played
//! simultaneously, so no team may appear twice within one day.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::{Matchup, TeamId};

/// Which generator produced the match list of a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleSource {
    /// The constraint-satisfying generator succeeded.
    Generated,
    /// The generator gave up and the fallback generator was used.
    Fallback,
}

/// A set of matchups played on the same day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// Matchups, in placement order.
    pub matchups: Vec<Matchup>,
}

/// A complete season schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonSchedule {
    /// Days in playing order.
    pub days: Vec<Day>,
    /// Generator that produced the matchups.
    pub source: ScheduleSource,
}

impl Day {
    /// Whether the team already plays on this day.
    pub fn involves(&self, team: TeamId) -> bool {
        self.matchups.iter().any(|m| m.involves(team))
    }

    /// Number of matchups.
    pub fn len(&self) -> usize {
        self.matchups.len()
    }

    /// Whether the day has no matchups.
    pub fn is_empty(&self) -> bool {
        self.matchups.is_empty()
    }

    /// Returns the first team appearing more than once, if any.
    pub fn first_conflict(&self) -> Option<TeamId> {
        let mut seen = HashSet::new();
        self.matchups
            .iter()
            .flat_map(|m| m.teams())
            .find(|&t| !seen.insert(t))
    }
}

impl SeasonSchedule {
    /// Creates a schedule from days.
    pub fn new(days: Vec<Day>, source: ScheduleSource) -> Self {
        Self { days, source }
    }

    /// Number of days.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Total number of matchups.
    pub fn matchup_count(&self) -> usize {
        self.days.iter().map(Day::len).sum()
    }

    /// All matchups in playing order.
    pub fn matchups(&self) -> impl Iterator<Item = &Matchup> {
        self.days.iter().flat_map(|d| d.matchups.iter())
    }

    /// All matchups involving a team, in playing order.
    pub fn matchups_for_team(&self, team: TeamId) -> Vec<&Matchup> {
        self.matchups().filter(|m| m.involves(team)).collect()
    }

    /// Games per team.
    pub fn games_by_team(&self) -> HashMap<TeamId, usize> {
        let mut games: HashMap<TeamId, usize> = HashMap::new();
        for m in self.matchups() {
            *games.entry(m.home).or_insert(0) += 1;
            *games.entry(m.away).or_insert(0) += 1;
        }
        games
    }

    /// Games per unordered pair, keyed lower id first.
    pub fn games_by_pair(&self) -> HashMap<(TeamId, TeamId), usize> {
        let mut games: HashMap<(TeamId, TeamId), usize> = HashMap::new();
        for m in self.matchups() {
            *games.entry(m.pair_key()).or_insert(0) += 1;
        }
        games
    }
}
