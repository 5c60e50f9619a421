//! Recurrence rules: whether a flow expects action on a given day

use chrono::{Datelike, NaiveDate};

use super::time_bucket::weekday_abbrev;
use crate::Flow;

/// Whether `flow` was expected to be acted upon on `date`.
///
/// First matching rule wins: every day, then the weekday list, then the
/// day-of-month list. A flow with none of them is never scheduled.
pub fn is_scheduled(flow: &Flow, date: NaiveDate) -> bool {
    if flow.every_day {
        return true;
    }

    if !flow.days_of_week.is_empty() {
        let abbrev = weekday_abbrev(date.weekday());
        return flow
            .days_of_week
            .iter()
            .any(|d| d.trim().eq_ignore_ascii_case(abbrev));
    }

    if !flow.selected_month_days.is_empty() {
        let day = date.day();
        return flow
            .selected_month_days
            .iter()
            .any(|d| d.trim().parse::<u32>().is_ok_and(|n| n == day));
    }

    false
}

/// Weekday entries that can never match a calendar day.
pub fn unknown_weekdays(flow: &Flow) -> Vec<&str> {
    const ABBREVS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    flow.days_of_week
        .iter()
        .map(|d| d.as_str())
        .filter(|d| !ABBREVS.iter().any(|a| d.trim().eq_ignore_ascii_case(a)))
        .collect()
}

/// Whether `flow` was scheduled and completed on `date`.
pub fn is_completed_on_schedule(flow: &Flow, date: NaiveDate) -> bool {
    is_scheduled(flow, date) && flow.is_completed_on(date)
}
