//! Data models for flow statistics
//!
//! Inputs (`Timeframe`, `StatsOptions`) and the derived structures handed to
//! the UI layer. Everything here is recomputed on every call.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{Result, StatsError};
use super::time_bucket::{DateRange, parse_month};
use crate::TrackingType;

/// Lookback window for a stats request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl Timeframe {
    /// Number of days to look back from today.
    pub fn days(&self) -> u32 {
        match self {
            Self::Weekly => 7,
            Self::Monthly => 30,
            Self::Yearly => 365,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Weekly => "Last 7 days",
            Self::Monthly => "Last 30 days",
            Self::Yearly => "Last 365 days",
        }
    }
}

impl FromStr for Timeframe {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            "yearly" | "year" => Ok(Self::Yearly),
            _ => Err(StatsError::UnknownTimeframe(s.to_string())),
        }
    }
}

/// Options recognized by the stats entry points
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsOptions {
    pub timeframe: Timeframe,
    /// Explicit range; overrides the timeframe lookback when set
    pub range: Option<DateRange>,
    pub include_archived: bool,
    pub include_deleted: bool,
    /// `(year, month)` anchor for the heat map; defaults to today's month
    pub current_month: Option<(i32, u32)>,
}

impl StatsOptions {
    pub fn new(timeframe: Timeframe) -> Self {
        Self {
            timeframe,
            ..Default::default()
        }
    }

    /// Use an explicit `[start, end]` range given as day bucket strings.
    pub fn with_range(mut self, start: &str, end: &str) -> Result<Self> {
        self.range = Some(DateRange::parse(start, end)?);
        Ok(self)
    }

    /// Anchor the heat map to a month given as "YYYY-MM".
    pub fn with_month(mut self, month: &str) -> Result<Self> {
        self.current_month = Some(parse_month(month)?);
        Ok(self)
    }

    pub fn include_archived(mut self, include: bool) -> Self {
        self.include_archived = include;
        self
    }

    pub fn include_deleted(mut self, include: bool) -> Self {
        self.include_deleted = include;
        self
    }
}

/// Window the stats were computed over
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeframeInfo {
    #[serde(rename = "type")]
    pub kind: Timeframe,
    pub start_date: String,
    pub end_date: String,
    pub days: usize,
}

/// Aggregated completion counts for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyDatum {
    pub date: String, // YYYY-MM-DD
    pub completed: u32,
    pub scheduled: u32,
    pub percentage: f64,
}

/// Totals across all flows in the window
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallMetrics {
    pub total_completed: u32,
    pub total_scheduled: u32,
    pub total_points: u64,
    pub total_flows: usize,
    /// Flows with at least one scheduled completion in the window
    pub active_flows: usize,
    pub success_rate: f64,
    pub avg_daily_completion: f64,
    pub daily_data: Vec<DailyDatum>,
}

/// Per-flow summary row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowPerformance {
    pub id: String,
    pub name: String,
    pub performance: f64,
    pub completed: u32,
    pub scheduled: u32,
    /// Anchored to today, independent of the window
    pub current_streak: u32,
    /// Longest run inside the window
    pub best_streak: u32,
    #[serde(rename = "type")]
    pub tracking_type: TrackingType,
    pub goal: Option<f64>,
    pub tags: Vec<String>,
}

/// Completion counts for one Monday-start week
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyDatum {
    pub week_start: String,
    pub week_end: String,
    pub completed: u32,
    pub scheduled: u32,
    pub percentage: f64,
}

/// Evaluated achievement with live progress
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub progress: f64,
    pub target: f64,
    pub completed: bool,
    pub color: String,
}

/// One day cell of the heat map
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatMapEntry {
    pub date: String,
    /// Flows scheduled and completed that day
    pub count: u32,
    /// Day of month
    pub day: u32,
    /// 0 = Sunday .. 6 = Saturday
    pub day_of_week: u32,
    pub is_today: bool,
}

/// Completion density for a calendar month
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatMap {
    pub month: String, // YYYY-MM
    pub entries: Vec<HeatMapEntry>,
    pub max_count: u32,
}

/// Everything the overview screen shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    pub overall: OverallMetrics,
    pub flow_performance: Vec<FlowPerformance>,
    pub weekly_trends: Vec<WeeklyDatum>,
    pub achievements: Vec<Achievement>,
    pub heat_map_data: HeatMap,
    pub timeframe: TimeframeInfo,
    pub calculated_at: DateTime<Utc>,
}

/// Direction of a flow's completion rate over the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    #[default]
    Stable,
}

/// Counters for a single flow
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowMetrics {
    pub scheduled: u32,
    pub completed: u32,
    /// Scheduled days explicitly marked as missed
    pub missed: u32,
    /// Scheduled days with nothing recorded
    pub unrecorded: u32,
    pub completion_rate: f64,
    pub total_points: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_count: Option<f64>,
    /// Seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_duration: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StreakSummary {
    pub current: u32,
    pub best: u32,
}

/// Completion rate for one weekday
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekdayRate {
    pub weekday: String, // Mon..Sun
    pub scheduled: u32,
    pub completed: u32,
    pub rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRates {
    pub overall: f64,
    /// Weekdays with at least one scheduled day, Monday first
    pub by_weekday: Vec<WeekdayRate>,
    #[serde(rename = "last7Days")]
    pub last_7_days: f64,
    #[serde(rename = "last30Days")]
    pub last_30_days: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowTrends {
    pub direction: TrendDirection,
    pub first_half_rate: f64,
    pub second_half_rate: f64,
    pub weekly: Vec<WeeklyDatum>,
}

/// Detailed report for one flow
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowStats {
    pub flow_id: String,
    pub flow_title: String,
    pub tracking_type: TrackingType,
    pub metrics: FlowMetrics,
    pub streaks: StreakSummary,
    pub completion_rates: CompletionRates,
    pub trends: FlowTrends,
    pub timeframe: TimeframeInfo,
    pub calculated_at: DateTime<Utc>,
}
