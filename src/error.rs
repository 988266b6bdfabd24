//! Fatal scheduling errors.
//!
//! These describe a league whose structural constants contradict each
//! other. Retrying cannot fix them. An unlucky random search is not an
//! error; see [`GenerationOutcome::NoSchedule`](crate::scheduler::GenerationOutcome).

use thiserror::Error;

use crate::models::{DivisionId, PeerGroup, TeamId};
use crate::validation::ValidationError;

/// Errors that stop schedule generation before any attempt is made.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    #[error("invalid league input ({} problem(s))", .0.len())]
    InvalidInput(Vec<ValidationError>),
    #[error("division ({div}) and conference ({conf}) games exceed the season length ({total})")]
    InsufficientSeasonLength { total: u32, div: u32, conf: u32 },
    #[error("division {division} has no {group} opponents for {games} game(s)")]
    NoOpponents {
        division: DivisionId,
        group: PeerGroup,
        games: u32,
    },
    #[error("team {team} references unknown division {division}")]
    UnknownDivision { team: TeamId, division: DivisionId },
}

/// Result alias for fallible scheduling operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;
