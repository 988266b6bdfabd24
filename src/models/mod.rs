//! League scheduling domain models.
//!
//! Provides the data types describing a league (teams, divisions, game
//! budgets) and the season schedule produced for it.
//!
//! # Domain Mappings
//!
//! | u-season | Basketball | Hockey | Football |
//! |----------|-----------|--------|----------|
//! | Team | Franchise | Club | Club |
//! | Division | Division | Division | Group |
//! | Matchup | Game | Game | Fixture |
//! | Day | Game night | Game night | Matchday |

mod league;
mod matchup;
mod peer_group;
mod schedule;
mod team;

pub use league::{LeagueConfig, DEFAULT_CONFERENCE_GAMES, DEFAULT_DIVISION_GAMES};
pub use matchup::{Fixture, Matchup};
pub use peer_group::{PeerGroup, PerGroup};
pub use schedule::{Day, ScheduleSource, SeasonSchedule};
pub use team::{ConferenceId, Division, DivisionId, Team, TeamId};
