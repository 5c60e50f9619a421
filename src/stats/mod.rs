//! Statistics engine for flows
//!
//! Computes completion rates, streaks, weekly trends, a monthly heat map
//! and achievements from the sparse per-day `status` map of each flow.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌─────────────────┐
//! │   Flow store    │────▶│  &[Flow] (JSON) │
//! └─────────────────┘     └────────┬────────┘
//!                                  ▼
//!                            StatsEngine
//!                  (pure, synchronous, no I/O)
//!                                  │
//!                                  ▼
//!                    OverallStats / FlowStats
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let engine = StatsEngine::from_settings(&config.settings);
//! let stats = engine.compute_overall_stats(&flows, &StatsOptions::new(Timeframe::Monthly))?;
//! ```

mod achievements;
mod aggregate;
mod error;
mod flow_report;
mod heatmap;
mod models;
mod performance;
mod schedule;
mod scoring;
mod streaks;
mod time_bucket;
mod trends;

pub use achievements::{
    ACHIEVEMENTS, AchievementDef, AchievementId, AchievementInputs, AchievementMetric,
    check_achievements, evaluate,
};
pub use aggregate::overall_metrics;
pub use error::{Result, StatsError};
pub use flow_report::{completion_rates, flow_metrics, flow_trends};
pub use heatmap::heat_map;
pub use models::{
    Achievement, CompletionRates, DailyDatum, FlowMetrics, FlowPerformance, FlowStats,
    FlowTrends, HeatMap, HeatMapEntry, OverallMetrics, OverallStats, StatsOptions,
    StreakSummary, Timeframe, TimeframeInfo, TrendDirection, WeekdayRate, WeeklyDatum,
};
pub use performance::flow_performance;
pub use schedule::{is_completed_on_schedule, is_scheduled, unknown_weekdays};
pub use scoring::ScoringRules;
pub use streaks::{DEFAULT_STREAK_LOOKBACK_DAYS, best_streak, current_streak};
pub use time_bucket::{DateRange, day_bucket, parse_day, parse_month, week_start};
pub use trends::{completion_series, trend_direction, weekly_trends};

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, Utc};
use tracing::{debug, warn};

use crate::Flow;
use crate::config::Settings;

/// Drop archived and deleted flows unless `options` asks for them.
pub fn filter_flows<'a>(flows: &'a [Flow], options: &StatsOptions) -> Vec<&'a Flow> {
    flows
        .iter()
        .filter(|f| options.include_archived || !f.archived)
        .filter(|f| options.include_deleted || !f.is_deleted())
        .collect()
}

/// Log data problems that silently shrink the stats: status keys that are
/// not dates and weekday entries that never match.
fn warn_on_malformed(flows: &[&Flow]) {
    for flow in flows {
        for key in flow.status.keys() {
            if parse_day(key).is_err() {
                warn!(flow_id = %flow.id, key = %key, "Ignoring status entry with malformed date");
            }
        }
        for weekday in unknown_weekdays(flow) {
            warn!(flow_id = %flow.id, weekday, "Unknown weekday in daysOfWeek");
        }
    }
}

/// Entry point for all stats computations
///
/// Holds scoring configuration and the "now" anchor used for current
/// streaks and the heat map's `isToday`. Holds no other state, so it is
/// cheap to clone and safe to share between threads.
#[derive(Debug, Clone)]
pub struct StatsEngine {
    rules: ScoringRules,
    streak_lookback_days: u32,
    today: NaiveDate,
    calculated_at: DateTime<Utc>,
}

impl Default for StatsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsEngine {
    /// Create an engine with default scoring, anchored to the local date
    pub fn new() -> Self {
        Self {
            rules: ScoringRules::default(),
            streak_lookback_days: DEFAULT_STREAK_LOOKBACK_DAYS,
            today: Local::now().date_naive(),
            calculated_at: Utc::now(),
        }
    }

    /// Create an engine from configuration
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            rules: settings.scoring,
            streak_lookback_days: settings.streak_lookback_days,
            ..Self::new()
        }
    }

    /// Pin "today"; `calculated_at` becomes midnight UTC of that day so
    /// repeated calls produce identical output.
    pub fn at(self, today: NaiveDate) -> Self {
        let calculated_at = today.and_time(chrono::NaiveTime::MIN).and_utc();
        self.with_clock(today, calculated_at)
    }

    pub fn with_clock(mut self, today: NaiveDate, calculated_at: DateTime<Utc>) -> Self {
        self.today = today;
        self.calculated_at = calculated_at;
        self
    }

    pub fn with_rules(mut self, rules: ScoringRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_streak_lookback(mut self, days: u32) -> Self {
        self.streak_lookback_days = days;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Window for a request: the explicit range, or the timeframe's
    /// lookback ending today.
    ///
    /// An explicit range is re-checked because `StatsOptions::range` can be
    /// set directly, bypassing `DateRange::new`.
    pub fn resolve_range(&self, options: &StatsOptions) -> Result<DateRange> {
        if let Some(range) = options.range {
            return DateRange::new(range.start, range.end);
        }
        let start = self
            .today
            .checked_sub_days(Days::new(options.timeframe.days() as u64))
            .unwrap_or(NaiveDate::MIN);
        DateRange::new(start, self.today)
    }

    fn timeframe_info(&self, options: &StatsOptions, range: DateRange) -> TimeframeInfo {
        TimeframeInfo {
            kind: options.timeframe,
            start_date: day_bucket(range.start),
            end_date: day_bucket(range.end),
            days: range.num_days(),
        }
    }

    /// Overview across all flows: totals, per-flow rows, weekly trends,
    /// achievements and the heat map.
    pub fn compute_overall_stats(
        &self,
        flows: &[Flow],
        options: &StatsOptions,
    ) -> Result<OverallStats> {
        let range = self.resolve_range(options)?;
        let flows = filter_flows(flows, options);
        warn_on_malformed(&flows);
        debug!(
            flows = flows.len(),
            start = %range.start,
            end = %range.end,
            "Computing overall stats"
        );

        let overall = overall_metrics(&flows, range, &self.rules);

        let flow_performance: Vec<FlowPerformance> = flows
            .iter()
            .map(|flow| flow_performance(flow, range, self.today, self.streak_lookback_days))
            .collect();

        let weekly_trends = weekly_trends(&flows, range);

        let inputs = AchievementInputs {
            total_completions: overall.total_completed,
            best_streak: flow_performance
                .iter()
                .map(|p| p.best_streak)
                .max()
                .unwrap_or(0),
            success_rate: overall.success_rate,
            flow_count: flows.len(),
        };
        let achievements = check_achievements(&inputs);

        let (year, month) = options
            .current_month
            .unwrap_or((self.today.year(), self.today.month()));
        let heat_map_data = heat_map(&flows, year, month, self.today)?;

        Ok(OverallStats {
            overall,
            flow_performance,
            weekly_trends,
            achievements,
            heat_map_data,
            timeframe: self.timeframe_info(options, range),
            calculated_at: self.calculated_at,
        })
    }

    /// Detailed report for a single flow. Archive/delete filters do not
    /// apply: the caller asked for this flow explicitly.
    pub fn compute_flow_stats(&self, flow: &Flow, options: &StatsOptions) -> Result<FlowStats> {
        let range = self.resolve_range(options)?;
        warn_on_malformed(&[flow]);
        debug!(
            flow_id = %flow.id,
            start = %range.start,
            end = %range.end,
            "Computing flow stats"
        );

        Ok(FlowStats {
            flow_id: flow.id.clone(),
            flow_title: flow.title.clone(),
            tracking_type: flow.tracking_type,
            metrics: flow_metrics(flow, range, &self.rules),
            streaks: StreakSummary {
                current: current_streak(flow, self.today, self.streak_lookback_days),
                best: best_streak(flow, range),
            },
            completion_rates: completion_rates(flow, range),
            trends: flow_trends(flow, range),
            timeframe: self.timeframe_info(options, range),
            calculated_at: self.calculated_at,
        })
    }

    /// Heat map for `options.current_month` (or today's month).
    pub fn heat_map(&self, flows: &[Flow], options: &StatsOptions) -> Result<HeatMap> {
        let flows = filter_flows(flows, options);
        let (year, month) = options
            .current_month
            .unwrap_or((self.today.year(), self.today.month()));
        debug!(flows = flows.len(), year, month, "Computing heat map");
        heat_map(&flows, year, month, self.today)
    }
}
