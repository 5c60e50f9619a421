//! Weekly trend buckets and trend direction

use super::aggregate::{count_range, percentage};
use super::models::{TrendDirection, WeeklyDatum};
use super::schedule::is_scheduled;
use super::time_bucket::{DateRange, day_bucket};
use crate::Flow;

/// Minimum change in mean completion between halves to count as a trend
const TREND_THRESHOLD: f64 = 0.1;

/// Scheduled/completed totals for every Monday-start week touching `range`.
pub fn weekly_trends(flows: &[&Flow], range: DateRange) -> Vec<WeeklyDatum> {
    range
        .weeks()
        .into_iter()
        .map(|week| {
            let tally = count_range(flows, week);
            WeeklyDatum {
                week_start: day_bucket(week.start),
                week_end: day_bucket(week.end),
                completed: tally.completed,
                scheduled: tally.scheduled,
                percentage: percentage(tally.completed, tally.scheduled),
            }
        })
        .collect()
}

/// Completion outcome of each scheduled day of `range`, in date order.
pub fn completion_series(flow: &Flow, range: DateRange) -> Vec<bool> {
    range
        .days()
        .filter(|day| is_scheduled(flow, *day))
        .map(|day| flow.is_completed_on(day))
        .collect()
}

/// Mean completion of the first and second half of `series`.
///
/// The second half takes the extra point on odd lengths.
pub fn half_rates(series: &[bool]) -> (f64, f64) {
    let (first, second) = series.split_at(series.len() / 2);
    (mean(first), mean(second))
}

/// Classify a completion series as trending up, down or stable.
pub fn trend_direction(series: &[bool]) -> TrendDirection {
    if series.len() < 2 {
        return TrendDirection::Stable;
    }

    let (first, second) = half_rates(series);
    let delta = second - first;
    if delta > TREND_THRESHOLD {
        TrendDirection::Up
    } else if delta < -TREND_THRESHOLD {
        TrendDirection::Down
    } else {
        TrendDirection::Stable
    }
}

fn mean(values: &[bool]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().filter(|v| **v).count() as f64 / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DayStatus;

    #[test]
    fn test_single_point_is_stable() {
        assert_eq!(trend_direction(&[true]), TrendDirection::Stable);
        assert_eq!(trend_direction(&[]), TrendDirection::Stable);
    }

    #[test]
    fn test_direction_thresholds() {
        assert_eq!(trend_direction(&[false, false, true, true]), TrendDirection::Up);
        assert_eq!(trend_direction(&[true, true, false, false]), TrendDirection::Down);
        assert_eq!(trend_direction(&[true, false, true, false]), TrendDirection::Stable);
    }

    #[test]
    fn test_change_of_exactly_threshold_is_stable() {
        // 0/10 vs 1/10: a change of exactly 0.1
        let mut rising = vec![false; 19];
        rising.push(true);
        assert_eq!(trend_direction(&rising), TrendDirection::Stable);

        let mut falling = vec![false; 20];
        falling[0] = true;
        assert_eq!(trend_direction(&falling), TrendDirection::Stable);

        // 0/10 vs 2/10 clears it
        rising[18] = true;
        assert_eq!(trend_direction(&rising), TrendDirection::Up);
    }

    #[test]
    fn test_odd_length_second_half_gets_extra() {
        // first = [true], second = [false, true]
        let (first, second) = half_rates(&[true, false, true]);
        assert_eq!(first, 1.0);
        assert_eq!(second, 0.5);
        assert_eq!(trend_direction(&[true, false, true]), TrendDirection::Down);
    }

    #[test]
    fn test_weekly_trends_buckets() {
        let mut flow = Flow::new("f", "Walk");
        flow.every_day = true;
        flow.status.insert("2024-01-08".to_string(), DayStatus::completed());
        flow.status.insert("2024-01-09".to_string(), DayStatus::missed());

        // Mon 2024-01-01 .. Wed 2024-01-10
        let range = DateRange::parse("2024-01-01", "2024-01-10").unwrap();
        let weeks = weekly_trends(&[&flow], range);

        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].week_start, "2024-01-01");
        assert_eq!(weeks[0].week_end, "2024-01-07");
        assert_eq!(weeks[0].scheduled, 7);
        assert_eq!(weeks[0].completed, 0);
        assert_eq!(weeks[1].week_end, "2024-01-10");
        assert_eq!(weeks[1].scheduled, 3);
        assert_eq!(weeks[1].completed, 1);
        assert_eq!(weeks[1].percentage, 33.33);
    }

    #[test]
    fn test_completion_series_only_scheduled_days() {
        let mut flow = Flow::new("f", "Gym");
        flow.days_of_week = vec!["Mon".to_string(), "Wed".to_string()];
        flow.status.insert("2024-01-03".to_string(), DayStatus::completed());

        let range = DateRange::parse("2024-01-01", "2024-01-07").unwrap();
        assert_eq!(completion_series(&flow, range), vec![false, true]);
    }
}
