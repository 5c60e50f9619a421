//! Monthly completion heat map

use chrono::{Datelike, NaiveDate};

use super::error::Result;
use super::models::{HeatMap, HeatMapEntry};
use super::schedule::is_completed_on_schedule;
use super::time_bucket::{DateRange, day_bucket};
use crate::Flow;

/// One entry per day of `year`-`month` counting flows completed on schedule.
pub fn heat_map(flows: &[&Flow], year: i32, month: u32, today: NaiveDate) -> Result<HeatMap> {
    let range = DateRange::month(year, month)?;

    let entries: Vec<HeatMapEntry> = range
        .days()
        .map(|day| HeatMapEntry {
            date: day_bucket(day),
            count: flows
                .iter()
                .filter(|flow| is_completed_on_schedule(flow, day))
                .count() as u32,
            day: day.day(),
            day_of_week: day.weekday().num_days_from_sunday(),
            is_today: day == today,
        })
        .collect();

    let max_count = entries.iter().map(|e| e.count).max().unwrap_or(0);

    Ok(HeatMap {
        month: format!("{year:04}-{month:02}"),
        entries,
        max_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DayStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_month_has_zero_counts() {
        let mut flow = Flow::new("f", "Walk");
        flow.every_day = true;

        let map = heat_map(&[&flow], 2024, 4, date(2024, 4, 10)).unwrap();
        assert_eq!(map.entries.len(), 30);
        assert!(map.entries.iter().all(|e| e.count == 0));
        assert_eq!(map.max_count, 0);
        assert_eq!(map.month, "2024-04");
    }

    #[test]
    fn test_counts_every_completion_variant() {
        let mut a = Flow::new("a", "Walk");
        a.every_day = true;
        a.status.insert("2024-04-02".to_string(), DayStatus::completed());

        let mut b: Flow = serde_json::from_str(
            r#"{ "id": "b", "everyDay": true, "status": { "2024-04-02": { "symbol": "✅" } } }"#,
        )
        .unwrap();
        b.title = "Read".to_string();

        let map = heat_map(&[&a, &b], 2024, 4, date(2024, 4, 2)).unwrap();
        let entry = &map.entries[1];
        assert_eq!(entry.date, "2024-04-02");
        assert_eq!(entry.count, 2);
        assert_eq!(entry.day, 2);
        assert_eq!(entry.day_of_week, 2); // Tuesday
        assert!(entry.is_today);
        assert_eq!(map.max_count, 2);
        assert_eq!(map.entries.iter().filter(|e| e.is_today).count(), 1);
    }

    #[test]
    fn test_invalid_month() {
        assert!(heat_map(&[], 2024, 0, date(2024, 1, 1)).is_err());
    }
}
