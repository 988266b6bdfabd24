//! Season generator: ties the pipeline together.
//!
//! # Algorithm
//! 1. Validate the league and group teams by division.
//! 2. Compute per-division game targets.
//! 3. Build the required matchups (deterministic).
//! 4. Retry the excess pairing from the required draft until one attempt
//!    succeeds or the attempt budget runs out.
//! 5. Balance home/away for every pending game.
//! 6. Compact the match list into days.
//!
//! Only step 4 is retried. The required matchups are never re-decided.

use log::{debug, info, trace, warn};
use rand::Rng;

use super::balance::balance_home_away;
use super::compactor::compact_into_days;
use super::excess::{attempt_excess_matchups, DEFAULT_MAX_ATTEMPTS};
use super::grouping::group_teams_by_division;
use super::required::build_required_matchups;
use super::targets::game_targets_by_division;
use crate::error::{Result, ScheduleError};
use crate::models::{LeagueConfig, Matchup, ScheduleSource, SeasonSchedule, Team};
use crate::validation::validate_league;

/// Result of a generation run that got past configuration checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// All targets met. Matchups are in generation order.
    Scheduled {
        /// Every game of the season, home side first.
        matchups: Vec<Matchup>,
        /// Excess-pairing attempts used, including the successful one.
        attempts: u32,
    },
    /// Every attempt failed; use a fallback generator instead.
    NoSchedule {
        /// Attempts made.
        attempts: u32,
    },
}

impl GenerationOutcome {
    /// The generated matchups, if any.
    pub fn matchups(&self) -> Option<&[Matchup]> {
        match self {
            GenerationOutcome::Scheduled { matchups, .. } => Some(matchups),
            GenerationOutcome::NoSchedule { .. } => None,
        }
    }

    /// Whether a schedule was found.
    pub fn is_scheduled(&self) -> bool {
        matches!(self, GenerationOutcome::Scheduled { .. })
    }
}

/// Produces a match list when [`ScheduleGenerator`] finds none.
///
/// The fallback gives looser guarantees than the generator; the caller
/// decides what it does. Closures taking the team list work as fallbacks.
pub trait FallbackGenerator {
    /// Returns every game of the season as (home, away) matchups.
    fn fallback_schedule(&mut self, teams: &[Team]) -> Vec<Matchup>;
}

impl<F> FallbackGenerator for F
where
    F: FnMut(&[Team]) -> Vec<Matchup>,
{
    fn fallback_schedule(&mut self, teams: &[Team]) -> Vec<Matchup> {
        self(teams)
    }
}

/// Division/conference-aware season generator.
///
/// # Example
///
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use u_season::models::{Division, LeagueConfig, Team};
/// use u_season::scheduler::ScheduleGenerator;
///
/// let config = LeagueConfig::new(vec![Division::new(0, 0), Division::new(1, 0)], 2)
///     .with_division_games(2)
///     .with_conference_games(0);
/// let teams = vec![
///     Team::new(0, 0, 0),
///     Team::new(1, 0, 0),
///     Team::new(2, 1, 0),
///     Team::new(3, 1, 0),
/// ];
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let outcome = ScheduleGenerator::new()
///     .generate(&teams, &config, &mut rng)
///     .unwrap();
/// assert_eq!(outcome.matchups().map(|m| m.len()), Some(4));
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleGenerator {
    max_attempts: u32,
}

impl ScheduleGenerator {
    /// Creates a generator with the default attempt budget.
    pub fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets the excess-pairing attempt budget (at least 1).
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Attempt budget.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Generates the season's match list.
    ///
    /// # Errors
    /// Fails without attempting anything if the league input is invalid or
    /// its game budgets contradict each other. Running out of attempts is
    /// not an error: it yields [`GenerationOutcome::NoSchedule`].
    pub fn generate<R: Rng + ?Sized>(
        &self,
        teams: &[Team],
        config: &LeagueConfig,
        rng: &mut R,
    ) -> Result<GenerationOutcome> {
        validate_league(teams, config).map_err(ScheduleError::InvalidInput)?;

        let grouped = group_teams_by_division(teams, &config.divisions);
        let targets = game_targets_by_division(&grouped, config, config.active_teams(teams.len()))?;
        let required = build_required_matchups(teams, &grouped, &targets)?;
        debug!(
            "{} teams, {} divisions, {} required fixtures",
            teams.len(),
            targets.len(),
            required.fixtures.len()
        );

        // Everything above is deterministic; randomness starts here
        for attempt in 1..=self.max_attempts {
            let Some(mut draft) = attempt_excess_matchups(teams, &grouped, &targets, &required, rng)? else {
                trace!("excess pairing attempt {attempt} failed");
                continue;
            };

            balance_home_away(&mut draft, rng);
            let matchups = draft.into_matchups();
            info!(
                "season generated: {} matchups after {} attempt(s)",
                matchups.len(),
                attempt
            );
            return Ok(GenerationOutcome::Scheduled {
                matchups,
                attempts: attempt,
            });
        }

        warn!(
            "no schedule found after {} excess pairing attempts",
            self.max_attempts
        );
        Ok(GenerationOutcome::NoSchedule {
            attempts: self.max_attempts,
        })
    }

    /// Generates a full season, falling back if no schedule is found, and
    /// packs the games into days.
    ///
    /// # Errors
    /// Same as [`generate`](Self::generate). The fallback is only called
    /// for [`GenerationOutcome::NoSchedule`], never for errors.
    pub fn new_schedule<R, F>(
        &self,
        teams: &[Team],
        config: &LeagueConfig,
        fallback: &mut F,
        rng: &mut R,
    ) -> Result<SeasonSchedule>
    where
        R: Rng + ?Sized,
        F: FallbackGenerator + ?Sized,
    {
        let (matchups, source) = match self.generate(teams, config, rng)? {
            GenerationOutcome::Scheduled { matchups, .. } => (matchups, ScheduleSource::Generated),
            GenerationOutcome::NoSchedule { attempts } => {
                warn!("using fallback schedule after {attempts} attempt(s)");
                (fallback.fallback_schedule(teams), ScheduleSource::Fallback)
            }
        };

        let days = compact_into_days(matchups, rng);
        debug!("season packed into {} days", days.len());
        Ok(SeasonSchedule::new(days, source))
    }
}

impl Default for ScheduleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates a season with the default attempt budget.
///
/// See [`ScheduleGenerator::new_schedule`].
pub fn new_schedule<R, F>(
    teams: &[Team],
    config: &LeagueConfig,
    fallback: &mut F,
    rng: &mut R,
) -> Result<SeasonSchedule>
where
    R: Rng + ?Sized,
    F: FallbackGenerator + ?Sized,
{
    ScheduleGenerator::new().new_schedule(teams, config, fallback, rng)
}
