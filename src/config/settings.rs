//! Settings configuration types

use serde::{Deserialize, Serialize};

use crate::stats::{DEFAULT_STREAK_LOOKBACK_DAYS, ScoringRules, StatsOptions, Timeframe};

/// General settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Window used when a command does not pass one
    #[serde(default)]
    pub default_timeframe: Timeframe,

    /// Include archived flows in overall stats and heat maps
    #[serde(default)]
    pub include_archived: bool,

    /// Include soft-deleted flows in overall stats and heat maps
    #[serde(default)]
    pub include_deleted: bool,

    /// How far back the current streak is walked, in days.
    /// Streaks older than this undercount.
    #[serde(default = "default_streak_lookback_days")]
    pub streak_lookback_days: u32,

    /// Point values
    #[serde(default)]
    pub scoring: ScoringRules,
}

fn default_streak_lookback_days() -> u32 {
    DEFAULT_STREAK_LOOKBACK_DAYS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_timeframe: Timeframe::default(),
            include_archived: false,
            include_deleted: false,
            streak_lookback_days: default_streak_lookback_days(),
            scoring: ScoringRules::default(),
        }
    }
}

impl Settings {
    /// Stats options seeded from these settings
    pub fn stats_options(&self) -> StatsOptions {
        StatsOptions::new(self.default_timeframe)
            .include_archived(self.include_archived)
            .include_deleted(self.include_deleted)
    }
}
