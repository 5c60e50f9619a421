//! Flow records as supplied by the flow store

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::status::DayStatus;

/// How progress on a flow is recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TrackingType {
    #[default]
    Binary,
    Quantitative,
    #[serde(rename = "Time-based")]
    TimeBased,
}

impl TrackingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Binary => "Binary",
            Self::Quantitative => "Quantitative",
            Self::TimeBased => "Time-based",
        }
    }
}

/// A user-defined habit with its recurrence rule and recorded history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flow {
    pub id: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub tracking_type: TrackingType,

    // Recurrence: every day, selected weekdays, or selected days of month
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub every_day: bool,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub days_of_week: Vec<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub selected_month_days: Vec<String>,

    // Targets
    #[serde(default)]
    pub goal: Option<f64>,
    #[serde(default)]
    pub hours: Option<u32>,
    #[serde(default)]
    pub minutes: Option<u32>,
    #[serde(default)]
    pub seconds: Option<u32>,

    /// ISO date (`YYYY-MM-DD`) -> recorded outcome
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub status: BTreeMap<String, DayStatus>,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub archived: bool,
    #[serde(default)]
    pub deleted_at: Option<String>,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub tags: Vec<String>,
}

impl Flow {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Recorded status for a calendar day, if any
    pub fn status_on(&self, date: NaiveDate) -> Option<&DayStatus> {
        self.status.get(&date.format("%Y-%m-%d").to_string())
    }

    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.status_on(date).is_some_and(DayStatus::is_completed)
    }

    /// Target duration for time-based flows, in seconds
    pub fn goal_seconds(&self) -> u64 {
        let hours = self.hours.unwrap_or(0) as u64;
        let minutes = self.minutes.unwrap_or(0) as u64;
        let seconds = self.seconds.unwrap_or(0) as u64;
        hours * 3600 + minutes * 60 + seconds
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
