//! Streak tracking
//!
//! A streak is a run of consecutive *scheduled* days that were all
//! completed. Unscheduled days neither extend nor break a run.

use chrono::{Days, NaiveDate};

use super::schedule::is_scheduled;
use super::time_bucket::DateRange;
use crate::Flow;

/// Default number of days walked back when computing the current streak
pub const DEFAULT_STREAK_LOOKBACK_DAYS: u32 = 365;

/// Longest run of scheduled completions inside `range`.
pub fn best_streak(flow: &Flow, range: DateRange) -> u32 {
    let (_, best) = range
        .days()
        .filter(|d| is_scheduled(flow, *d))
        .fold((0u32, 0u32), |(run, best), day| {
            if flow.is_completed_on(day) {
                (run + 1, best.max(run + 1))
            } else {
                (0, best)
            }
        });
    best
}

/// Run of scheduled completions ending today, walking back at most
/// `lookback_days` days.
///
/// Today counts like any other day: if it is scheduled and not completed
/// yet, the streak is 0.
pub fn current_streak(flow: &Flow, today: NaiveDate, lookback_days: u32) -> u32 {
    let mut streak = 0;
    for offset in 0..lookback_days as u64 {
        let Some(day) = today.checked_sub_days(Days::new(offset)) else {
            break;
        };
        if !is_scheduled(flow, day) {
            continue;
        }
        if !flow.is_completed_on(day) {
            break;
        }
        streak += 1;
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DayStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn daily_flow(days: &[(&str, DayStatus)]) -> Flow {
        let mut flow = Flow::new("f", "Journal");
        flow.every_day = true;
        for (day, status) in days {
            flow.status.insert(day.to_string(), status.clone());
        }
        flow
    }

    #[test]
    fn test_best_streak_resets_on_miss() {
        let flow = daily_flow(&[
            ("2024-01-01", DayStatus::completed()),
            ("2024-01-02", DayStatus::completed()),
            ("2024-01-03", DayStatus::missed()),
            ("2024-01-04", DayStatus::completed()),
        ]);
        let range = DateRange::parse("2024-01-01", "2024-01-04").unwrap();
        assert_eq!(best_streak(&flow, range), 2);
    }

    #[test]
    fn test_best_streak_skips_unscheduled_days() {
        let mut flow = daily_flow(&[
            ("2024-01-01", DayStatus::completed()), // Mon
            ("2024-01-03", DayStatus::completed()), // Wed
            ("2024-01-08", DayStatus::completed()), // Mon
        ]);
        flow.every_day = false;
        flow.days_of_week = vec!["Mon".to_string(), "Wed".to_string()];

        let range = DateRange::parse("2024-01-01", "2024-01-08").unwrap();
        assert_eq!(best_streak(&flow, range), 3);
    }

    #[test]
    fn test_current_streak_counts_back_from_today() {
        let flow = daily_flow(&[
            ("2024-01-01", DayStatus::missed()),
            ("2024-01-02", DayStatus::completed()),
            ("2024-01-03", DayStatus::completed()),
            ("2024-01-04", DayStatus::completed()),
        ]);
        assert_eq!(current_streak(&flow, date(2024, 1, 4), 365), 3);
    }

    #[test]
    fn test_current_streak_zero_when_today_missed() {
        let flow = daily_flow(&[
            ("2024-01-02", DayStatus::completed()),
            ("2024-01-03", DayStatus::completed()),
        ]);
        // Today (the 4th) is scheduled with nothing recorded
        assert_eq!(current_streak(&flow, date(2024, 1, 4), 365), 0);
    }

    #[test]
    fn test_current_streak_bounded_by_lookback() {
        let mut flow = Flow::new("f", "Water");
        flow.every_day = true;
        let today = date(2024, 12, 31);
        for offset in 0..400 {
            let day = today - Days::new(offset);
            flow.status.insert(
                day.format("%Y-%m-%d").to_string(),
                DayStatus::completed(),
            );
        }

        assert_eq!(current_streak(&flow, today, DEFAULT_STREAK_LOOKBACK_DAYS), 365);
        assert_eq!(current_streak(&flow, today, 30), 30);
    }
}
