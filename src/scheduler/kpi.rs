//! Season quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Matchups | Games in the season |
//! | Days | Game days after compaction |
//! | Busiest team games | Most games played by one team; lower bound on days |
//! | Avg / max matchups per day | Day density |
//! | Max home/away imbalance | Largest \|home - away\| of any team |

use std::collections::HashMap;

use crate::models::{SeasonSchedule, TeamId};

/// Home and away games of one team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamRecord {
    /// Home games.
    pub home: usize,
    /// Away games.
    pub away: usize,
}

impl TeamRecord {
    /// All games.
    #[inline]
    pub fn games(&self) -> usize {
        self.home + self.away
    }

    /// Absolute difference between home and away games.
    #[inline]
    pub fn imbalance(&self) -> usize {
        self.home.abs_diff(self.away)
    }
}

/// Season performance indicators.
#[derive(Debug, Clone)]
pub struct SeasonKpi {
    /// Games in the season.
    pub matchup_count: usize,
    /// Game days.
    pub day_count: usize,
    /// Per-team home/away games.
    pub records: HashMap<TeamId, TeamRecord>,
    /// Most games played by a single team.
    pub busiest_team_games: usize,
    /// Average matchups per day.
    pub avg_matchups_per_day: f64,
    /// Largest day.
    pub max_matchups_per_day: usize,
    /// Largest home/away difference of any team.
    pub max_home_away_imbalance: usize,
}

impl SeasonKpi {
    /// Computes KPIs from a season.
    pub fn calculate(schedule: &SeasonSchedule) -> Self {
        let mut records: HashMap<TeamId, TeamRecord> = HashMap::new();
        for m in schedule.matchups() {
            records.entry(m.home).or_default().home += 1;
            records.entry(m.away).or_default().away += 1;
        }

        let matchup_count = schedule.matchup_count();
        let day_count = schedule.day_count();
        let avg_matchups_per_day = if day_count > 0 {
            matchup_count as f64 / day_count as f64
        } else {
            0.0
        };

        Self {
            matchup_count,
            day_count,
            busiest_team_games: records.values().map(TeamRecord::games).max().unwrap_or(0),
            avg_matchups_per_day,
            max_matchups_per_day: schedule.days.iter().map(|d| d.len()).max().unwrap_or(0),
            max_home_away_imbalance: records.values().map(TeamRecord::imbalance).max().unwrap_or(0),
            records,
        }
    }

    /// Days in excess of the busiest team's games (0 = no day wasted).
    pub fn extra_days(&self) -> usize {
        self.day_count.saturating_sub(self.busiest_team_games)
    }
}
