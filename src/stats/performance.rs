//! Per-flow performance rows

use chrono::NaiveDate;

use super::aggregate::percentage;
use super::models::FlowPerformance;
use super::schedule::is_scheduled;
use super::streaks::{best_streak, current_streak};
use super::time_bucket::DateRange;
use crate::Flow;

/// Summarize one flow over `range`.
///
/// The best streak is scoped to `range`; the current streak always counts
/// back from `today` regardless of the window.
pub fn flow_performance(
    flow: &Flow,
    range: DateRange,
    today: NaiveDate,
    lookback_days: u32,
) -> FlowPerformance {
    let (scheduled, completed) = range
        .days()
        .filter(|day| is_scheduled(flow, *day))
        .fold((0u32, 0u32), |(scheduled, completed), day| {
            (scheduled + 1, completed + flow.is_completed_on(day) as u32)
        });

    FlowPerformance {
        id: flow.id.clone(),
        name: flow.title.clone(),
        performance: percentage(completed, scheduled),
        completed,
        scheduled,
        current_streak: current_streak(flow, today, lookback_days),
        best_streak: best_streak(flow, range),
        tracking_type: flow.tracking_type,
        goal: flow.goal,
        tags: flow.tags.clone(),
    }
}
