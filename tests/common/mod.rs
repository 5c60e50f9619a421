//! Shared flow builders for stats integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use flowstats::stats::{StatsEngine, StatsOptions, Timeframe};
use flowstats::{DayStatus, Flow};

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid test date")
}

/// Flow scheduled every day
pub fn every_day_flow(id: &str) -> Flow {
    let mut flow = Flow::new(id, format!("Flow {id}"));
    flow.every_day = true;
    flow
}

/// Flow scheduled on the given weekday abbreviations
pub fn weekday_flow(id: &str, days: &[&str]) -> Flow {
    let mut flow = Flow::new(id, format!("Flow {id}"));
    flow.days_of_week = days.iter().map(|d| d.to_string()).collect();
    flow
}

pub fn mark(flow: &mut Flow, day: &str, status: DayStatus) {
    flow.status.insert(day.to_string(), status);
}

pub fn mark_completed(flow: &mut Flow, days: &[&str]) {
    for day in days {
        mark(flow, day, DayStatus::completed());
    }
}

/// Engine pinned to `today` with default scoring
pub fn engine_at(today: &str) -> StatsEngine {
    StatsEngine::new().at(date(today))
}

/// Options for an explicit inclusive range
pub fn range_options(start: &str, end: &str) -> StatsOptions {
    StatsOptions::new(Timeframe::Monthly)
        .with_range(start, end)
        .expect("valid test range")
}
