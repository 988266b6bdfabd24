//! Season generation pipeline and KPI evaluation.
//!
//! # Pipeline
//!
//! | Stage | Module | Randomized |
//! |-------|--------|-----------|
//! | Peer-group partition | `grouping` | no |
//! | Per-division targets | `targets` | no |
//! | Required matchups | `required` | no |
//! | Excess pairing (retried) | `excess` | yes |
//! | Home/away balancing | `balance` | yes |
//! | Day compaction | `compactor` | yes |
//!
//! [`ScheduleGenerator`] runs the whole pipeline. Every stage is also
//! exposed on its own so callers can inspect intermediate results.
//!
//! # Randomness
//! All randomized stages take an explicit `&mut R: Rng`. Seeding the same
//! generator with the same league reproduces the same season.

mod balance;
mod compactor;
mod counts;
mod excess;
mod generator;
mod grouping;
mod kpi;
mod required;
mod targets;

pub use balance::balance_home_away;
pub use compactor::compact_into_days;
pub use counts::{GameCounts, ScheduleCounts};
pub use excess::{attempt_excess_matchups, DEFAULT_MAX_ATTEMPTS};
pub use generator::{new_schedule, FallbackGenerator, GenerationOutcome, ScheduleGenerator};
pub use grouping::{group_teams_by_division, TeamGroups};
pub use kpi::{SeasonKpi, TeamRecord};
pub use required::{build_required_matchups, Draft};
pub use targets::{game_targets_by_division, GameTargets};
