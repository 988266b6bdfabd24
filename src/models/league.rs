//! League-wide scheduling constants.

use serde::{Deserialize, Serialize};

use super::{Division, DivisionId};

/// Default number of games each team plays inside its division.
pub const DEFAULT_DIVISION_GAMES: u32 = 16;

/// Default number of games each team plays against the rest of its conference.
pub const DEFAULT_CONFERENCE_GAMES: u32 = 36;

/// League structure and game budgets for one season.
///
/// The division and conference budgets are per-team game totals against
/// each peer group. Whatever remains of `num_games` is played against the
/// other conference(s).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueConfig {
    /// All divisions, with their conference membership.
    pub divisions: Vec<Division>,
    /// Games per team over the whole season.
    ///
    /// Exact only when all divisions have the same size. A pair's game count
    /// combines both teams' per-opponent targets, so teams in smaller
    /// divisions play more games than this and teams in larger ones fewer.
    pub num_games: u32,
    /// Games per team against its own division.
    pub num_games_div: u32,
    /// Games per team against the rest of its conference.
    pub num_games_conf: u32,
    /// Number of teams taking part. `None` = length of the team list.
    pub num_active_teams: Option<usize>,
}

impl LeagueConfig {
    /// Creates a config with the default division and conference budgets.
    pub fn new(divisions: Vec<Division>, num_games: u32) -> Self {
        Self {
            divisions,
            num_games,
            num_games_div: DEFAULT_DIVISION_GAMES,
            num_games_conf: DEFAULT_CONFERENCE_GAMES,
            num_active_teams: None,
        }
    }

    /// Sets the per-team division game budget.
    pub fn with_division_games(mut self, games: u32) -> Self {
        self.num_games_div = games;
        self
    }

    /// Sets the per-team conference game budget.
    pub fn with_conference_games(mut self, games: u32) -> Self {
        self.num_games_conf = games;
        self
    }

    /// Sets the active team count explicitly.
    pub fn with_active_teams(mut self, count: usize) -> Self {
        self.num_active_teams = Some(count);
        self
    }

    /// Games per team against other conferences.
    ///
    /// Negative when the division and conference budgets exceed the season.
    pub fn num_games_other(&self) -> i64 {
        i64::from(self.num_games) - i64::from(self.num_games_div) - i64::from(self.num_games_conf)
    }

    /// Active team count, falling back to the given team list length.
    pub fn active_teams(&self, team_count: usize) -> usize {
        self.num_active_teams.unwrap_or(team_count)
    }

    /// Looks up a division by ID.
    pub fn division(&self, id: DivisionId) -> Option<&Division> {
        self.divisions.iter().find(|d| d.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LeagueConfig::new(vec![Division::new(0, 0)], 82);
        assert_eq!(config.num_games_div, DEFAULT_DIVISION_GAMES);
        assert_eq!(config.num_games_conf, DEFAULT_CONFERENCE_GAMES);
        assert_eq!(config.num_games_other(), 30);
        assert_eq!(config.active_teams(30), 30);
    }

    #[test]
    fn test_builder() {
        let config = LeagueConfig::new(vec![Division::new(0, 0), Division::new(1, 0)], 10)
            .with_division_games(6)
            .with_conference_games(8)
            .with_active_teams(12);

        assert_eq!(config.num_games_other(), -4);
        assert_eq!(config.active_teams(30), 12);
        assert_eq!(config.division(1).map(|d| d.conference_id), Some(0));
        assert!(config.division(7).is_none());
    }
}
