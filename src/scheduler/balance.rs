//! Home/away assignment for pending games.
//!
//! Pending games are visited in random order. Each one is given a home side
//! by a weighted coin: the team with fewer home games (relative to away
//! games) within the peer group is favored, the more strongly the larger the
//! gap. Ties in the group fall back to the season-wide difference.
//!
//! The pass cannot fail. Every pending game ends up decided.

use rand::seq::SliceRandom;
use rand::Rng;

use super::counts::ScheduleCounts;
use super::required::Draft;
use crate::models::{Fixture, Matchup, PeerGroup, TeamId};

/// Decides the home side of every pending fixture in the draft.
pub fn balance_home_away<R: Rng + ?Sized>(draft: &mut Draft, rng: &mut R) {
    let mut pending: Vec<usize> = draft
        .fixtures
        .iter()
        .enumerate()
        .filter(|(_, f)| f.is_pending())
        .map(|(i, _)| i)
        .collect();
    pending.shuffle(rng);

    for index in pending {
        let Fixture::Pending {
            team_a,
            team_b,
            group,
        } = draft.fixtures[index]
        else {
            continue;
        };

        let p = home_probability(&draft.counts, group, team_a, team_b);
        let (home, away) = if rng.random_bool(p) {
            (team_a, team_b)
        } else {
            (team_b, team_a)
        };

        draft.counts.resolve_either(group, home, away);
        draft.fixtures[index] = Fixture::Decided(Matchup::new(home, away));
    }
}

/// Probability that `a` hosts the game against `b`.
fn home_probability(counts: &ScheduleCounts, group: PeerGroup, a: TeamId, b: TeamId) -> f64 {
    let mut gap = counts.get(b, group).home_away_difference() - counts.get(a, group).home_away_difference();
    if gap == 0 {
        gap = counts.team_total(b).home_away_difference() - counts.team_total(a).home_away_difference();
    }

    let exponent = 1 + gap.unsigned_abs().min(16) as i32;
    let favored = 1.0 - 0.5_f64.powi(exponent);
    if gap >= 0 {
        favored
    } else {
        1.0 - favored
    }
}
