//! Peer-group relationship between two teams.
//!
//! Relative to any team, every other team falls into exactly one group:
//! same division, same conference but another division, or another
//! conference. Game budgets are set per group.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

use super::Team;

/// The three disjoint relationship categories between two teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PeerGroup {
    /// Same division.
    Division,
    /// Same conference, different division.
    Conference,
    /// Different conference.
    Other,
}

impl PeerGroup {
    /// All groups, in processing order.
    pub const ALL: [PeerGroup; 3] = [PeerGroup::Division, PeerGroup::Conference, PeerGroup::Other];

    /// Classifies the relationship between two teams.
    pub fn between(a: &Team, b: &Team) -> Self {
        if a.shares_division(b) {
            PeerGroup::Division
        } else if a.shares_conference(b) {
            PeerGroup::Conference
        } else {
            PeerGroup::Other
        }
    }
}

impl fmt::Display for PeerGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PeerGroup::Division => "div",
            PeerGroup::Conference => "conf",
            PeerGroup::Other => "other",
        };
        f.write_str(name)
    }
}

/// One value per peer group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerGroup<T> {
    /// Same-division value.
    pub div: T,
    /// Same-conference value.
    pub conf: T,
    /// Cross-conference value.
    pub other: T,
}

impl<T> PerGroup<T> {
    /// Creates a value set from its three parts.
    pub fn new(div: T, conf: T, other: T) -> Self {
        Self { div, conf, other }
    }

    /// Builds each entry from its group.
    pub fn from_fn(mut f: impl FnMut(PeerGroup) -> T) -> Self {
        Self {
            div: f(PeerGroup::Division),
            conf: f(PeerGroup::Conference),
            other: f(PeerGroup::Other),
        }
    }

    /// Iterates `(group, value)` pairs in processing order.
    pub fn iter(&self) -> impl Iterator<Item = (PeerGroup, &T)> {
        [
            (PeerGroup::Division, &self.div),
            (PeerGroup::Conference, &self.conf),
            (PeerGroup::Other, &self.other),
        ]
        .into_iter()
    }
}

impl<T> Index<PeerGroup> for PerGroup<T> {
    type Output = T;

    fn index(&self, group: PeerGroup) -> &T {
        match group {
            PeerGroup::Division => &self.div,
            PeerGroup::Conference => &self.conf,
            PeerGroup::Other => &self.other,
        }
    }
}

impl<T> IndexMut<PeerGroup> for PerGroup<T> {
    fn index_mut(&mut self, group: PeerGroup) -> &mut T {
        match group {
            PeerGroup::Division => &mut self.div,
            PeerGroup::Conference => &mut self.conf,
            PeerGroup::Other => &mut self.other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between() {
        let a = Team::new(1, 0, 0);
        assert_eq!(PeerGroup::between(&a, &Team::new(2, 0, 0)), PeerGroup::Division);
        assert_eq!(PeerGroup::between(&a, &Team::new(3, 1, 0)), PeerGroup::Conference);
        assert_eq!(PeerGroup::between(&a, &Team::new(4, 2, 1)), PeerGroup::Other);
    }

    #[test]
    fn test_per_group_indexing() {
        let mut values = PerGroup::new(1, 2, 3);
        values[PeerGroup::Conference] += 10;

        assert_eq!(values[PeerGroup::Division], 1);
        assert_eq!(values.conf, 12);
        assert_eq!(values[PeerGroup::Other], 3);

        let groups: Vec<_> = values.iter().map(|(g, _)| g).collect();
        assert_eq!(groups, PeerGroup::ALL.to_vec());
    }

    #[test]
    fn test_display() {
        assert_eq!(PeerGroup::Division.to_string(), "div");
        assert_eq!(PeerGroup::Other.to_string(), "other");
    }
}
