//! Peer-group partitioning.
//!
//! Every team in a division has the same opponents in each peer group,
//! so the partition is computed once per division instead of per team.

use std::collections::HashMap;

use crate::models::{Division, DivisionId, PeerGroup, Team};

/// Teams of the league split relative to one division.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamGroups {
    /// Members of the division itself.
    pub div: Vec<Team>,
    /// Same conference, other divisions.
    pub conf: Vec<Team>,
    /// Other conferences.
    pub other: Vec<Team>,
}

impl TeamGroups {
    /// Teams in the given group.
    pub fn get(&self, group: PeerGroup) -> &[Team] {
        match group {
            PeerGroup::Division => &self.div,
            PeerGroup::Conference => &self.conf,
            PeerGroup::Other => &self.other,
        }
    }

    /// Number of teams in the division.
    pub fn division_size(&self) -> usize {
        self.div.len()
    }
}

/// Groups teams by division.
///
/// Lists keep the order of `teams`. A division without members maps to
/// empty lists.
pub fn group_teams_by_division(
    teams: &[Team],
    divisions: &[Division],
) -> HashMap<DivisionId, TeamGroups> {
    divisions
        .iter()
        .map(|division| {
            let groups = TeamGroups {
                div: teams
                    .iter()
                    .filter(|t| t.division_id == division.id)
                    .copied()
                    .collect(),
                conf: teams
                    .iter()
                    .filter(|t| t.division_id != division.id && t.conference_id == division.conference_id)
                    .copied()
                    .collect(),
                other: teams
                    .iter()
                    .filter(|t| t.conference_id != division.conference_id)
                    .copied()
                    .collect(),
            };
            (division.id, groups)
        })
        .collect()
}
