//! Team and division model.
//!
//! A league is a flat list of teams. Each team belongs to exactly one
//! division, and each division to exactly one conference. Both memberships
//! are fixed for the duration of schedule generation.

use serde::{Deserialize, Serialize};

/// Unique team identifier.
pub type TeamId = u32;

/// Unique division identifier.
pub type DivisionId = u32;

/// Unique conference identifier.
pub type ConferenceId = u32;

/// A team taking part in the season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team {
    /// Unique team identifier.
    pub id: TeamId,
    /// Division the team plays in.
    pub division_id: DivisionId,
    /// Conference the team plays in. Must match its division's conference.
    pub conference_id: ConferenceId,
}

/// A division: the smallest grouping of teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Division {
    /// Unique division identifier.
    pub id: DivisionId,
    /// Conference this division belongs to.
    pub conference_id: ConferenceId,
    /// Human-readable name.
    pub name: String,
}

impl Team {
    /// Creates a new team.
    pub fn new(id: TeamId, division_id: DivisionId, conference_id: ConferenceId) -> Self {
        Self {
            id,
            division_id,
            conference_id,
        }
    }

    /// Whether both teams play in the same division.
    #[inline]
    pub fn shares_division(&self, other: &Team) -> bool {
        self.division_id == other.division_id
    }

    /// Whether both teams play in the same conference.
    #[inline]
    pub fn shares_conference(&self, other: &Team) -> bool {
        self.conference_id == other.conference_id
    }
}

impl Division {
    /// Creates a new division in the given conference.
    pub fn new(id: DivisionId, conference_id: ConferenceId) -> Self {
        Self {
            id,
            conference_id,
            name: String::new(),
        }
    }

    /// Sets the division name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Whether a team is a member of this division.
    #[inline]
    pub fn contains(&self, team: &Team) -> bool {
        team.division_id == self.id
    }
}
