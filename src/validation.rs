//! Input and output validation for season scheduling.
//!
//! [`validate_league`] checks the structural integrity of a league before
//! generation:
//! - Duplicate team and division IDs
//! - Teams referencing unknown divisions
//! - Teams whose conference disagrees with their division's
//! - Active-team count disagreeing with the team list
//!
//! [`validate_schedule`] checks a finished season against the targets it
//! was generated from:
//! - No team plays twice on one day
//! - Every matchup is between two distinct, known teams
//! - Every pair meets the required number of times, plus at most one
//!   excess game, and each side hosts at least its share of required games
//!
//! Both collect every problem found instead of stopping at the first.

use crate::models::{LeagueConfig, PeerGroup, SeasonSchedule, Team, TeamId};
use crate::scheduler::{game_targets_by_division, group_teams_by_division};
use std::collections::{HashMap, HashSet};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A team references a division that doesn't exist.
    UnknownDivision,
    /// A team's conference differs from its division's conference.
    ConferenceMismatch,
    /// The configured active-team count differs from the team list.
    TeamCountMismatch,
    /// Game budgets can't be turned into targets.
    InvalidConfig,
    /// A team plays more than once on the same day.
    DayConflict,
    /// A matchup references a team outside the league, or a team plays itself.
    InvalidMatchup,
    /// A pair meets too few or too many times.
    PairCountMismatch,
    /// A team hosts fewer required games against an opponent than it should.
    HomeAwayMismatch,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates league input before generation.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_league(teams: &[Team], config: &LeagueConfig) -> ValidationResult {
    let mut errors = Vec::new();

    let mut division_ids = HashSet::new();
    for d in &config.divisions {
        if !division_ids.insert(d.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate division ID: {}", d.id),
            ));
        }
    }

    let mut team_ids = HashSet::new();
    for t in teams {
        if !team_ids.insert(t.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate team ID: {}", t.id),
            ));
        }

        match config.division(t.division_id) {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::UnknownDivision,
                format!(
                    "Team {} references unknown division {}",
                    t.id, t.division_id
                ),
            )),
            Some(d) if d.conference_id != t.conference_id => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::ConferenceMismatch,
                    format!(
                        "Team {} is in conference {} but its division {} is in conference {}",
                        t.id, t.conference_id, d.id, d.conference_id
                    ),
                ))
            }
            Some(_) => {}
        }
    }

    if let Some(active) = config.num_active_teams {
        if active != teams.len() {
            errors.push(ValidationError::new(
                ValidationErrorKind::TeamCountMismatch,
                format!("{active} active teams configured, {} given", teams.len()),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a generated season against the league's game targets.
///
/// Only meaningful for [`ScheduleSource::Generated`](crate::models::ScheduleSource)
/// seasons; fallback schedules make no per-pair promises.
pub fn validate_schedule(
    schedule: &SeasonSchedule,
    teams: &[Team],
    config: &LeagueConfig,
) -> ValidationResult {
    let mut errors = Vec::new();

    for (i, day) in schedule.days.iter().enumerate() {
        if let Some(team) = day.first_conflict() {
            errors.push(ValidationError::new(
                ValidationErrorKind::DayConflict,
                format!("Team {team} plays more than once on day {i}"),
            ));
        }
    }

    let known: HashSet<TeamId> = teams.iter().map(|t| t.id).collect();
    let mut hosted: HashMap<(TeamId, TeamId), usize> = HashMap::new();
    for m in schedule.matchups() {
        if m.home == m.away || !known.contains(&m.home) || !known.contains(&m.away) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidMatchup,
                format!("Invalid matchup {} vs {}", m.home, m.away),
            ));
            continue;
        }
        *hosted.entry((m.home, m.away)).or_insert(0) += 1;
    }

    let grouped = group_teams_by_division(teams, &config.divisions);
    let targets = match game_targets_by_division(&grouped, config, config.active_teams(teams.len())) {
        Ok(targets) => targets,
        Err(e) => {
            errors.push(ValidationError::new(ValidationErrorKind::InvalidConfig, e.to_string()));
            return Err(errors);
        }
    };

    for (i, a) in teams.iter().enumerate() {
        for b in &teams[i + 1..] {
            let (Some(ta), Some(tb)) = (targets.get(&a.division_id), targets.get(&b.division_id)) else {
                continue;
            };
            let group = PeerGroup::between(a, b);

            // Each side hosts half its own per-team count; the lower id adds
            // the odd game, and one excess game may come on top
            let hosted_by_a = (ta.per_team[group] / 2) as usize;
            let hosted_by_b = (tb.per_team[group] / 2) as usize;
            let lower = if a.id < b.id { ta } else { tb };
            let required = hosted_by_a + hosted_by_b + (lower.per_team[group] % 2) as usize;
            let allowed = required + usize::from(ta.excess[group] > 0 && tb.excess[group] > 0);

            let home_a = hosted.get(&(a.id, b.id)).copied().unwrap_or(0);
            let home_b = hosted.get(&(b.id, a.id)).copied().unwrap_or(0);
            let played = home_a + home_b;

            if played < required || played > allowed {
                errors.push(ValidationError::new(
                    ValidationErrorKind::PairCountMismatch,
                    format!(
                        "Teams {} and {} ({group}) meet {played} times, expected {required}..={allowed}",
                        a.id, b.id
                    ),
                ));
            }
            if home_a < hosted_by_a || home_b < hosted_by_b {
                errors.push(ValidationError::new(
                    ValidationErrorKind::HomeAwayMismatch,
                    format!(
                        "Teams {} and {} host {home_a}/{home_b} games, required at least {hosted_by_a}/{hosted_by_b}",
                        a.id, b.id
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Division, Matchup, ScheduleSource};

    fn sample_config() -> LeagueConfig {
        LeagueConfig::new(vec![Division::new(0, 0), Division::new(1, 0)], 2)
            .with_division_games(2)
            .with_conference_games(0)
    }

    fn sample_teams() -> Vec<Team> {
        vec![
            Team::new(0, 0, 0),
            Team::new(1, 0, 0),
            Team::new(2, 1, 0),
            Team::new(3, 1, 0),
        ]
    }

    fn day(matchups: &[(TeamId, TeamId)]) -> Day {
        Day {
            matchups: matchups.iter().map(|&p| Matchup::from(p)).collect(),
        }
    }

    fn valid_season() -> SeasonSchedule {
        SeasonSchedule::new(
            vec![day(&[(0, 1), (3, 2)]), day(&[(2, 3), (1, 0)])],
            ScheduleSource::Generated,
        )
    }

    #[test]
    fn test_valid_league() {
        assert!(validate_league(&sample_teams(), &sample_config()).is_ok());
    }

    #[test]
    fn test_duplicate_team_id() {
        let mut teams = sample_teams();
        teams.push(Team::new(2, 1, 0));

        let errors = validate_league(&teams, &sample_config()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("team")));
    }

    #[test]
    fn test_duplicate_division_id() {
        let mut config = sample_config();
        config.divisions.push(Division::new(1, 0));

        let errors = validate_league(&sample_teams(), &config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("division")));
    }

    #[test]
    fn test_unknown_division() {
        let mut teams = sample_teams();
        teams.push(Team::new(9, 7, 0));

        let errors = validate_league(&teams, &sample_config()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownDivision));
    }

    #[test]
    fn test_conference_mismatch() {
        let mut teams = sample_teams();
        teams[3] = Team::new(3, 1, 5);

        let errors = validate_league(&teams, &sample_config()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ConferenceMismatch));
    }

    #[test]
    fn test_team_count_mismatch() {
        let config = sample_config().with_active_teams(5);
        let errors = validate_league(&sample_teams(), &config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::TeamCountMismatch));
    }

    #[test]
    fn test_multiple_errors() {
        let teams = vec![Team::new(0, 0, 3), Team::new(0, 8, 0)];
        let errors = validate_league(&teams, &sample_config()).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_valid_schedule() {
        assert!(validate_schedule(&valid_season(), &sample_teams(), &sample_config()).is_ok());
    }

    #[test]
    fn test_day_conflict() {
        let season = SeasonSchedule::new(
            vec![day(&[(0, 1), (1, 0)]), day(&[(2, 3), (3, 2)])],
            ScheduleSource::Generated,
        );

        let errors = validate_schedule(&season, &sample_teams(), &sample_config()).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::DayConflict)
                .count(),
            2
        );
    }

    #[test]
    fn test_missing_game() {
        let season = SeasonSchedule::new(
            vec![day(&[(0, 1), (3, 2)]), day(&[(2, 3)])],
            ScheduleSource::Generated,
        );

        let errors = validate_schedule(&season, &sample_teams(), &sample_config()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::PairCountMismatch && e.message.contains("0 and 1")));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::HomeAwayMismatch));
    }

    #[test]
    fn test_unexpected_cross_division_game() {
        let mut season = valid_season();
        season.days.push(day(&[(0, 2)]));

        let errors = validate_schedule(&season, &sample_teams(), &sample_config()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::PairCountMismatch && e.message.contains("conf")));
    }

    #[test]
    fn test_invalid_matchup() {
        let mut season = valid_season();
        season.days.push(day(&[(0, 0), (2, 42)]));

        let errors = validate_schedule(&season, &sample_teams(), &sample_config()).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::InvalidMatchup)
                .count(),
            2
        );
    }

    /// One conference: division 0 has teams 0-1, division 1 has teams 2-4.
    fn uneven_league() -> (Vec<Team>, LeagueConfig) {
        let teams = vec![
            Team::new(0, 0, 0),
            Team::new(1, 0, 0),
            Team::new(2, 1, 0),
            Team::new(3, 1, 0),
            Team::new(4, 1, 0),
        ];
        let config = LeagueConfig::new(vec![Division::new(0, 0), Division::new(1, 0)], 8)
            .with_division_games(2)
            .with_conference_games(6);
        (teams, config)
    }

    fn uneven_season() -> SeasonSchedule {
        // Division 0 pair: 2 each way. Division 1 pairs: one game each.
        // Cross-division pairs: per-team 2 and 3, so each side hosts 1.
        let mut matchups = vec![(0, 1), (1, 0), (2, 3), (2, 4), (3, 4)];
        for a in 0..2 {
            for b in 2..5 {
                matchups.push((a, b));
                matchups.push((b, a));
            }
        }
        let days = matchups.iter().map(|&m| day(&[m])).collect();
        SeasonSchedule::new(days, ScheduleSource::Generated)
    }

    #[test]
    fn test_uneven_divisions_valid() {
        let (teams, config) = uneven_league();
        let season = uneven_season();

        assert!(validate_schedule(&season, &teams, &config).is_ok());

        let games = season.games_by_team();
        assert_eq!(games[&0], 8);
        assert_eq!(games[&1], 8);
        assert_eq!(games[&2], 6);
        assert_eq!(games[&4], 6);
    }

    #[test]
    fn test_uneven_divisions_extra_game() {
        let (teams, config) = uneven_league();
        let mut season = uneven_season();
        season.days.push(day(&[(4, 0)]));

        let errors = validate_schedule(&season, &teams, &config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].kind == ValidationErrorKind::PairCountMismatch && errors[0].message.contains("0 and 4"));
    }

    #[test]
    fn test_invalid_config_reported() {
        let config = sample_config().with_division_games(5);
        let errors = validate_schedule(&valid_season(), &sample_teams(), &config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidConfig));
    }
}
