//! Required matchups: the evenly divisible part of every game budget.
//!
//! # Algorithm
//! For every team T, every peer group, and every other team T2 in it:
//! 1. Record `per_team / 2` games with T at home. T2's own pass records the
//!    reverse legs, so each pair ends up split evenly.
//! 2. If `per_team` is odd, record one pending game, only from the lower
//!    id's side so it is not counted twice.
//!
//! This part is deterministic.

use std::collections::HashMap;

use log::debug;

use super::counts::ScheduleCounts;
use super::grouping::TeamGroups;
use super::targets::GameTargets;
use crate::error::{Result, ScheduleError};
use crate::models::{DivisionId, Fixture, Matchup, PeerGroup, Team};

/// Work-in-progress schedule: fixtures plus the counts they add up to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Count tracker matching `fixtures`.
    pub counts: ScheduleCounts,
    /// Fixtures recorded so far, in generation order.
    pub fixtures: Vec<Fixture>,
}

impl Draft {
    /// Empty draft for the given teams.
    pub fn new(teams: &[Team]) -> Self {
        Self {
            counts: ScheduleCounts::new(teams),
            fixtures: Vec::new(),
        }
    }

    /// Records a decided game.
    pub fn push_decided(&mut self, group: PeerGroup, home: &Team, away: &Team) {
        self.fixtures.push(Fixture::Decided(Matchup::new(home.id, away.id)));
        self.counts.record_game(group, home.id, away.id);
    }

    /// Records a game with an open home side.
    pub fn push_pending(&mut self, group: PeerGroup, a: &Team, b: &Team) {
        self.fixtures.push(Fixture::pending(a.id, b.id, group));
        self.counts.record_either(group, a.id, b.id);
    }

    /// Number of fixtures still waiting for a home side.
    pub fn pending_count(&self) -> usize {
        self.fixtures.iter().filter(|f| f.is_pending()).count()
    }

    /// Decided matchups in fixture order.
    ///
    /// Pending fixtures are skipped; balance the draft first.
    pub fn into_matchups(self) -> Vec<Matchup> {
        self.fixtures.iter().filter_map(Fixture::decided).collect()
    }
}

/// Builds the required (deterministic) part of the schedule.
///
/// # Errors
/// [`ScheduleError::UnknownDivision`] if a team's division has no grouping
/// or targets.
pub fn build_required_matchups(
    teams: &[Team],
    grouped: &HashMap<DivisionId, TeamGroups>,
    targets: &HashMap<DivisionId, GameTargets>,
) -> Result<Draft> {
    let mut draft = Draft::new(teams);

    for t in teams {
        let (groups, division_targets) = lookup(t, grouped, targets)?;

        for group in PeerGroup::ALL {
            let per_team = division_targets.per_team[group];

            for t2 in groups.get(group) {
                if t.id == t2.id {
                    continue;
                }

                // Home games only; away games are recorded from t2's side
                for _ in 0..per_team / 2 {
                    draft.push_decided(group, t, t2);
                }

                if t.id < t2.id && per_team % 2 == 1 {
                    draft.push_pending(group, t, t2);
                }
            }
        }
    }

    debug!(
        "required matchups: {} fixtures, {} pending",
        draft.fixtures.len(),
        draft.pending_count()
    );
    Ok(draft)
}

/// Grouping and targets of a team's division.
pub(crate) fn lookup<'a>(
    team: &Team,
    grouped: &'a HashMap<DivisionId, TeamGroups>,
    targets: &'a HashMap<DivisionId, GameTargets>,
) -> Result<(&'a TeamGroups, &'a GameTargets)> {
    let unknown = || ScheduleError::UnknownDivision {
        team: team.id,
        division: team.division_id,
    };
    let groups = grouped.get(&team.division_id).ok_or_else(unknown)?;
    let division_targets = targets.get(&team.division_id).ok_or_else(unknown)?;
    Ok((groups, division_targets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Division, LeagueConfig};
    use crate::scheduler::grouping::group_teams_by_division;
    use crate::scheduler::targets::game_targets_by_division;

    fn build(teams: &[Team], config: &LeagueConfig) -> Draft {
        let grouped = group_teams_by_division(teams, &config.divisions);
        let targets = game_targets_by_division(&grouped, config, teams.len()).unwrap();
        build_required_matchups(teams, &grouped, &targets).unwrap()
    }

    #[test]
    fn test_even_split() {
        // Two divisions of two, one conference, two division games
        let config = LeagueConfig::new(vec![Division::new(0, 0), Division::new(1, 0)], 2)
            .with_division_games(2)
            .with_conference_games(0);
        let teams = vec![
            Team::new(0, 0, 0),
            Team::new(1, 0, 0),
            Team::new(2, 1, 0),
            Team::new(3, 1, 0),
        ];

        let draft = build(&teams, &config);
        let decided: Vec<Matchup> = draft.fixtures.iter().filter_map(Fixture::decided).collect();
        assert_eq!(
            decided,
            vec![
                Matchup::new(0, 1),
                Matchup::new(1, 0),
                Matchup::new(2, 3),
                Matchup::new(3, 2)
            ]
        );
        assert_eq!(draft.pending_count(), 0);

        let c = draft.counts.get(0, PeerGroup::Division);
        assert_eq!((c.home, c.away, c.either), (1, 1, 0));
    }

    #[test]
    fn test_odd_per_team_records_one_pending_per_pair() {
        // Three games against the only division-mate: one home, one away, one open
        let config = LeagueConfig::new(vec![Division::new(0, 0)], 3)
            .with_division_games(3)
            .with_conference_games(0);
        let teams = vec![Team::new(5, 0, 0), Team::new(2, 0, 0)];

        let draft = build(&teams, &config);
        assert_eq!(draft.fixtures.len(), 3);
        assert_eq!(draft.pending_count(), 1);
        assert!(draft
            .fixtures
            .contains(&Fixture::pending(2, 5, PeerGroup::Division)));

        for id in [2, 5] {
            let c = draft.counts.get(id, PeerGroup::Division);
            assert_eq!((c.home, c.away, c.either), (1, 1, 1));
        }
    }

    #[test]
    fn test_unknown_division() {
        let config = LeagueConfig::new(vec![Division::new(0, 0)], 2)
            .with_division_games(2)
            .with_conference_games(0);
        let teams = vec![Team::new(0, 0, 0), Team::new(1, 0, 0)];
        let grouped = group_teams_by_division(&teams, &config.divisions);
        let targets = game_targets_by_division(&grouped, &config, teams.len()).unwrap();

        let stray = vec![Team::new(0, 0, 0), Team::new(1, 0, 0), Team::new(2, 4, 0)];
        let err = build_required_matchups(&stray, &grouped, &targets).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::UnknownDivision {
                team: 2,
                division: 4
            }
        );
    }
}
