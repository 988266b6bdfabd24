//! Excess matchups: the remainder games of each peer-group budget.
//!
//! # Algorithm
//! Every team owes `excess` extra games in a group, at most one per
//! opponent. For each team in input order and each group:
//! 1. Shuffle the group's members.
//! 2. Pair the team with members that still owe a game in that group,
//!    recording a pending game for each pair, until the team is satisfied.
//! 3. If the members run out first, the attempt fails.
//!
//! A failed attempt is discarded entirely and the caller retries from the
//! untouched required-matchup draft. Fixing one team's shortfall would
//! mean re-deciding earlier pairings, so partial progress is never kept.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use super::grouping::TeamGroups;
use super::required::{lookup, Draft};
use super::targets::GameTargets;
use crate::error::Result;
use crate::models::{DivisionId, PeerGroup, PerGroup, Team, TeamId};

/// Default upper bound on excess-pairing attempts.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100_000;

/// Runs one excess-pairing attempt on a copy of `snapshot`.
///
/// Returns `Ok(None)` when the random order left some team short of
/// partners; the snapshot is never modified.
pub fn attempt_excess_matchups<R: Rng + ?Sized>(
    teams: &[Team],
    grouped: &HashMap<DivisionId, TeamGroups>,
    targets: &HashMap<DivisionId, GameTargets>,
    snapshot: &Draft,
    rng: &mut R,
) -> Result<Option<Draft>> {
    let mut draft = snapshot.clone();

    let mut remaining: HashMap<TeamId, PerGroup<u32>> = HashMap::with_capacity(teams.len());
    for t in teams {
        let (_, division_targets) = lookup(t, grouped, targets)?;
        remaining.insert(t.id, division_targets.excess);
    }

    for t in teams {
        let (groups, _) = lookup(t, grouped, targets)?;

        for group in PeerGroup::ALL {
            let mut needed = remaining.get(&t.id).map_or(0, |r| r[group]);
            if needed == 0 {
                continue;
            }

            let members = groups.get(group);
            let mut order: Vec<usize> = (0..members.len()).collect();
            order.shuffle(rng);

            for index in order {
                let t2 = &members[index];
                if t2.id == t.id {
                    continue;
                }

                // The partner must still owe a game in this group
                let Some(partner) = remaining.get_mut(&t2.id) else {
                    continue;
                };
                if partner[group] == 0 {
                    continue;
                }

                partner[group] -= 1;
                needed -= 1;
                draft.push_pending(group, t, t2);

                if needed == 0 {
                    break;
                }
            }

            if let Some(own) = remaining.get_mut(&t.id) {
                own[group] = needed;
            }
            if needed > 0 {
                return Ok(None);
            }
        }
    }

    Ok(Some(draft))
}
