//! Per-division game targets.
//!
//! Each peer-group budget is spread as evenly as integer division allows:
//! every opponent in the group is played `per_team` times, and the
//! remaining `excess` games are handed out one per opponent later.
//!
//! # Invariant
//! `per_team * peers + excess == budget` and `excess < peers` for every
//! group with at least one peer.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use super::grouping::TeamGroups;
use crate::error::{Result, ScheduleError};
use crate::models::{DivisionId, LeagueConfig, PeerGroup, PerGroup};

/// Game targets shared by every team in a division.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTargets {
    /// Games against every single opponent in the group.
    pub per_team: PerGroup<u32>,
    /// Games that can't be spread evenly over the group's opponents.
    pub excess: PerGroup<u32>,
}

/// Computes targets for every non-empty division.
///
/// # Errors
/// - [`ScheduleError::InsufficientSeasonLength`] if division and conference
///   budgets exceed `num_games`.
/// - [`ScheduleError::NoOpponents`] if a group with a nonzero budget has
///   no opponents.
pub fn game_targets_by_division(
    grouped: &HashMap<DivisionId, TeamGroups>,
    config: &LeagueConfig,
    num_active_teams: usize,
) -> Result<HashMap<DivisionId, GameTargets>> {
    let num_games_other = u32::try_from(config.num_games_other()).map_err(|_| {
        ScheduleError::InsufficientSeasonLength {
            total: config.num_games,
            div: config.num_games_div,
            conf: config.num_games_conf,
        }
    })?;
    let budgets = PerGroup::new(config.num_games_div, config.num_games_conf, num_games_other);

    let mut targets = HashMap::new();
    for division in &config.divisions {
        let Some(groups) = grouped.get(&division.id) else {
            continue;
        };
        let div_size = groups.division_size();
        if div_size == 0 {
            continue;
        }
        let conf_size = groups.conf.len();

        // Only the division group contains the team itself.
        let denominators = PerGroup::new(
            div_size - 1,
            conf_size,
            num_active_teams.saturating_sub(conf_size + div_size),
        );

        let mut division_targets = GameTargets::default();
        for group in PeerGroup::ALL {
            let budget = budgets[group];
            let peers = u32::try_from(denominators[group]).unwrap_or(u32::MAX);
            if peers == 0 {
                if budget > 0 {
                    return Err(ScheduleError::NoOpponents {
                        division: division.id,
                        group,
                        games: budget,
                    });
                }
                continue;
            }
            division_targets.per_team[group] = budget / peers;
            division_targets.excess[group] = budget % peers;
        }

        debug!(
            "division {}: per_team {:?}, excess {:?}",
            division.id, division_targets.per_team, division_targets.excess
        );
        targets.insert(division.id, division_targets);
    }

    Ok(targets)
}
