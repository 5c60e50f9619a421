//! Overall metrics across all flows
//!
//! Each day of the window is tallied independently into an immutable
//! `DailyDatum`; totals are a fold over those records.

use chrono::NaiveDate;

use super::models::{DailyDatum, OverallMetrics};
use super::schedule::{is_completed_on_schedule, is_scheduled};
use super::scoring::ScoringRules;
use super::time_bucket::{DateRange, day_bucket};
use crate::Flow;

/// `part / whole * 100`, rounded to two decimals; 0 when `whole` is 0.
pub(crate) fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round2(part as f64 / whole as f64 * 100.0)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scheduled/completed tally of one day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct DayTally {
    pub scheduled: u32,
    pub completed: u32,
    pub points: u64,
}

impl DayTally {
    fn add(self, other: DayTally) -> DayTally {
        DayTally {
            scheduled: self.scheduled.saturating_add(other.scheduled),
            completed: self.completed.saturating_add(other.completed),
            points: self.points.saturating_add(other.points),
        }
    }
}

/// Tally every flow for a single day.
pub(crate) fn tally_day(flows: &[&Flow], date: NaiveDate, rules: &ScoringRules) -> DayTally {
    flows
        .iter()
        .filter(|flow| is_scheduled(flow, date))
        .map(|flow| match flow.status_on(date) {
            Some(status) if status.is_completed() => DayTally {
                scheduled: 1,
                completed: 1,
                points: rules.points_for(flow, status),
            },
            _ => DayTally {
                scheduled: 1,
                ..Default::default()
            },
        })
        .fold(DayTally::default(), DayTally::add)
}

/// Scheduled and completed counts of every flow over `range`, without points.
pub(crate) fn count_range(flows: &[&Flow], range: DateRange) -> DayTally {
    range.days().fold(DayTally::default(), |acc, day| {
        flows
            .iter()
            .filter(|flow| is_scheduled(flow, day))
            .fold(acc, |acc, flow| {
                acc.add(DayTally {
                    scheduled: 1,
                    completed: u32::from(flow.is_completed_on(day)),
                    points: 0,
                })
            })
    })
}

/// Compute totals, success rate and the per-day series for `range`.
pub fn overall_metrics(flows: &[&Flow], range: DateRange, rules: &ScoringRules) -> OverallMetrics {
    let tallies: Vec<(NaiveDate, DayTally)> = range
        .days()
        .map(|day| (day, tally_day(flows, day, rules)))
        .collect();

    let totals = tallies
        .iter()
        .fold(DayTally::default(), |acc, (_, tally)| acc.add(*tally));

    let daily_data: Vec<DailyDatum> = tallies
        .iter()
        .map(|(day, tally)| DailyDatum {
            date: day_bucket(*day),
            completed: tally.completed,
            scheduled: tally.scheduled,
            percentage: percentage(tally.completed, tally.scheduled),
        })
        .collect();

    let avg_daily_completion = if daily_data.is_empty() {
        0.0
    } else {
        round2(daily_data.iter().map(|d| d.percentage).sum::<f64>() / daily_data.len() as f64)
    };

    let active_flows = flows
        .iter()
        .filter(|flow| range.days().any(|day| is_completed_on_schedule(flow, day)))
        .count();

    OverallMetrics {
        total_completed: totals.completed,
        total_scheduled: totals.scheduled,
        total_points: totals.points,
        total_flows: flows.len(),
        active_flows,
        success_rate: percentage(totals.completed, totals.scheduled),
        avg_daily_completion,
        daily_data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DayStatus;

    fn flow_with(id: &str, every_day: bool, days: &[(&str, DayStatus)]) -> Flow {
        let mut flow = Flow::new(id, id);
        flow.every_day = every_day;
        for (day, status) in days {
            flow.status.insert(day.to_string(), status.clone());
        }
        flow
    }

    #[test]
    fn test_percentage_guards_zero() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(1, 3), 33.33);
        assert_eq!(percentage(3, 4), 75.0);
    }

    #[test]
    fn test_overall_metrics_basic() {
        let flow = flow_with(
            "a",
            true,
            &[
                ("2024-01-01", DayStatus::completed()),
                ("2024-01-02", DayStatus::completed()),
                ("2024-01-03", DayStatus::completed()),
                ("2024-01-04", DayStatus::missed()),
            ],
        );
        let range = DateRange::parse("2024-01-01", "2024-01-04").unwrap();
        let metrics = overall_metrics(&[&flow], range, &ScoringRules::default());

        assert_eq!(metrics.total_scheduled, 4);
        assert_eq!(metrics.total_completed, 3);
        assert_eq!(metrics.total_points, 30);
        assert_eq!(metrics.success_rate, 75.0);
        assert_eq!(metrics.active_flows, 1);
        assert_eq!(metrics.daily_data.len(), 4);
        assert_eq!(metrics.daily_data[3].percentage, 0.0);
        assert_eq!(metrics.avg_daily_completion, 75.0);
    }

    #[test]
    fn test_unscheduled_status_is_ignored() {
        // No recurrence rule: the recorded completion must not count
        let idle = flow_with("idle", false, &[("2024-01-01", DayStatus::completed())]);
        let range = DateRange::day(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let metrics = overall_metrics(&[&idle], range, &ScoringRules::default());

        assert_eq!(metrics.total_scheduled, 0);
        assert_eq!(metrics.total_completed, 0);
        assert_eq!(metrics.success_rate, 0.0);
        assert_eq!(metrics.active_flows, 0);
        assert_eq!(metrics.total_flows, 1);
    }

    #[test]
    fn test_totals_match_daily_sum() {
        let a = flow_with("a", true, &[("2024-01-02", DayStatus::completed())]);
        let mut b = flow_with("b", false, &[("2024-01-03", DayStatus::completed())]);
        b.days_of_week = vec!["Wed".to_string()];

        let range = DateRange::parse("2024-01-01", "2024-01-07").unwrap();
        let metrics = overall_metrics(&[&a, &b], range, &ScoringRules::default());

        let daily_scheduled: u32 = metrics.daily_data.iter().map(|d| d.scheduled).sum();
        let daily_completed: u32 = metrics.daily_data.iter().map(|d| d.completed).sum();
        assert_eq!(metrics.total_scheduled, daily_scheduled);
        assert_eq!(metrics.total_completed, daily_completed);
        assert_eq!(metrics.total_scheduled, 8);
        assert_eq!(metrics.total_completed, 2);
        assert_eq!(metrics.active_flows, 2);
    }

    #[test]
    fn test_empty_flow_list() {
        let range = DateRange::parse("2024-01-01", "2024-01-03").unwrap();
        let metrics = overall_metrics(&[], range, &ScoringRules::default());

        assert_eq!(metrics.total_flows, 0);
        assert_eq!(metrics.success_rate, 0.0);
        assert_eq!(metrics.avg_daily_completion, 0.0);
        assert_eq!(metrics.daily_data.len(), 3);
    }
}
