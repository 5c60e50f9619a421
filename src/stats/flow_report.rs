//! Detailed single-flow report: metrics, weekday rates and trends

use chrono::{Datelike, NaiveDate, Weekday};

use super::aggregate::{percentage, round2};
use super::models::{CompletionRates, FlowMetrics, FlowTrends, WeekdayRate};
use super::schedule::is_scheduled;
use super::scoring::ScoringRules;
use super::time_bucket::{DateRange, weekday_abbrev};
use super::trends::{completion_series, half_rates, trend_direction, weekly_trends};
use crate::{Flow, TrackingType};

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Default)]
struct MetricsAcc {
    scheduled: u32,
    completed: u32,
    missed: u32,
    unrecorded: u32,
    points: u64,
    count_sum: f64,
    count_days: u32,
    duration_sum: f64,
    duration_days: u32,
}

/// Counters, points and recorded amounts for `flow` over `range`.
pub fn flow_metrics(flow: &Flow, range: DateRange, rules: &ScoringRules) -> FlowMetrics {
    let acc = range
        .days()
        .filter(|day| is_scheduled(flow, *day))
        .fold(MetricsAcc::default(), |mut acc, day| {
            acc.scheduled += 1;
            let Some(status) = flow.status_on(day) else {
                acc.unrecorded += 1;
                return acc;
            };

            if status.is_completed() {
                acc.completed += 1;
                acc.points = acc.points.saturating_add(rules.points_for(flow, status));
                if let Some(entry) = &status.quantitative {
                    acc.count_sum += entry.count;
                    acc.count_days += 1;
                }
                if let Some(entry) = &status.timebased {
                    acc.duration_sum += entry.total_duration;
                    acc.duration_days += 1;
                }
            } else if status.is_missed() {
                acc.missed += 1;
            } else if status.symbol.is_none() {
                acc.unrecorded += 1;
            }
            acc
        });

    let average = |sum: f64, days: u32| {
        if days == 0 {
            0.0
        } else {
            round2(sum / days as f64)
        }
    };

    let (total_count, average_count) = match flow.tracking_type {
        TrackingType::Quantitative => (
            Some(acc.count_sum),
            Some(average(acc.count_sum, acc.count_days)),
        ),
        _ => (None, None),
    };
    let (total_duration, average_duration) = match flow.tracking_type {
        TrackingType::TimeBased => (
            Some(acc.duration_sum),
            Some(average(acc.duration_sum, acc.duration_days)),
        ),
        _ => (None, None),
    };

    FlowMetrics {
        scheduled: acc.scheduled,
        completed: acc.completed,
        missed: acc.missed,
        unrecorded: acc.unrecorded,
        completion_rate: percentage(acc.completed, acc.scheduled),
        total_points: acc.points,
        total_count,
        average_count,
        total_duration,
        average_duration,
    }
}

fn rate_over(flow: &Flow, days: impl Iterator<Item = NaiveDate>) -> (u32, u32) {
    days.filter(|day| is_scheduled(flow, *day))
        .fold((0, 0), |(scheduled, completed), day| {
            (scheduled + 1, completed + flow.is_completed_on(day) as u32)
        })
}

/// Overall, per-weekday and trailing-window completion rates.
pub fn completion_rates(flow: &Flow, range: DateRange) -> CompletionRates {
    let (scheduled, completed) = rate_over(flow, range.days());

    let by_weekday = WEEK
        .iter()
        .filter_map(|weekday| {
            let (scheduled, completed) =
                rate_over(flow, range.days().filter(|d| d.weekday() == *weekday));
            (scheduled > 0).then(|| WeekdayRate {
                weekday: weekday_abbrev(*weekday).to_string(),
                scheduled,
                completed,
                rate: percentage(completed, scheduled),
            })
        })
        .collect();

    let window_rate = |days: u32| {
        let (scheduled, completed) = rate_over(flow, range.trailing(days).days());
        percentage(completed, scheduled)
    };

    CompletionRates {
        overall: percentage(completed, scheduled),
        by_weekday,
        last_7_days: window_rate(7),
        last_30_days: window_rate(30),
    }
}

/// Trend direction and weekly buckets for `flow` alone.
pub fn flow_trends(flow: &Flow, range: DateRange) -> FlowTrends {
    let series = completion_series(flow, range);
    let (first, second) = half_rates(&series);

    FlowTrends {
        direction: trend_direction(&series),
        first_half_rate: round2(first * 100.0),
        second_half_rate: round2(second * 100.0),
        weekly: weekly_trends(&[flow], range),
    }
}
