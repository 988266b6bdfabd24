//! League season scheduling for the U-Engine ecosystem.
//!
//! Generates a full season of games for a league organized into divisions
//! and conferences, then packs the games into days with
//! no team playing twice on a day.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Team`, `Division`, `LeagueConfig`,
//!   `Matchup`, `Fixture`, `Day`, `SeasonSchedule`
//! - **`scheduler`**: Generation pipeline: grouping, targets, required and
//!   excess matchups, home/away balancing, day compaction, KPIs
//! - **`validation`**: League input checks and season verification
//! - **`error`**: Fatal configuration errors
//!
//! # Game Targets
//!
//! Each team plays a fixed number of games against its division, its
//! conference, and the rest of the league. Within each peer group the games
//! are spread as evenly as integer division allows; the remainder
//! ("excess") games are paired up randomly, with full restarts when a
//! random order leaves a team without partners.
//!
//! # Example
//!
//! ```
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//! use u_season::models::{Division, LeagueConfig, Matchup, Team};
//! use u_season::scheduler::new_schedule;
//!
//! let divisions: Vec<Division> = (0..4).map(|d| Division::new(d, d / 2)).collect();
//! let teams: Vec<Team> = (0..12).map(|i| Team::new(i, i / 3, i / 6)).collect();
//! let config = LeagueConfig::new(divisions, 20)
//!     .with_division_games(4)
//!     .with_conference_games(6);
//!
//! let mut fallback = |_: &[Team]| -> Vec<Matchup> { Vec::new() };
//! let mut rng = SmallRng::seed_from_u64(7);
//! let season = new_schedule(&teams, &config, &mut fallback, &mut rng).unwrap();
//!
//! assert_eq!(season.matchup_count(), 12 * 20 / 2);
//! assert!(season.days.iter().all(|d| d.first_conflict().is_none()));
//! ```
//!
//! # References
//!
//! - Kendall et al. (2010), "Scheduling in sports: An annotated bibliography"
//! - Coffman, Garey & Johnson (1996), "Approximation Algorithms for Bin Packing"

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::ScheduleError;
