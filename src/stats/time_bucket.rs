//! Calendar utilities for stats aggregation
//!
//! - Day buckets: "YYYY-MM-DD", the key format of `Flow::status`
//! - Week buckets: ISO weeks starting on Monday
//! - Month keys: "YYYY-MM"

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

use super::error::{Result, StatsError};

/// Format of day bucket strings
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Compute the day bucket string for a calendar date.
pub fn day_bucket(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

/// Parse a day bucket string ("YYYY-MM-DD").
pub fn parse_day(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DAY_FORMAT).map_err(|_| StatsError::InvalidDate {
        value: value.to_string(),
    })
}

/// Parse a month key ("YYYY-MM") into `(year, month)`.
pub fn parse_month(value: &str) -> Result<(i32, u32)> {
    let invalid = || StatsError::InvalidMonth {
        value: value.to_string(),
    };

    let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;

    // Rejects month 0 and 13+
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    Ok((year, month))
}

/// Three-letter weekday abbreviation as stored in `Flow::days_of_week`.
pub fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Monday of the ISO week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(date.weekday().num_days_from_monday() as u64)
}

/// Inclusive range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(StatsError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build a range from two day bucket strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_day(start)?, parse_day(end)?)
    }

    /// Single-day range.
    pub fn day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// All days of a calendar month.
    pub fn month(year: i32, month: u32) -> Result<Self> {
        let invalid = || StatsError::InvalidMonth {
            value: format!("{year:04}-{month:02}"),
        };
        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next = start
            .checked_add_months(chrono::Months::new(1))
            .ok_or_else(invalid)?;
        let end = next.pred_opt().ok_or_else(invalid)?;
        Ok(Self { start, end })
    }

    /// Ascending sequence of every day in the range.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }

    /// Number of days in the range (inclusive); 0 when `start > end`.
    pub fn num_days(&self) -> usize {
        usize::try_from((self.end - self.start).num_days() + 1).unwrap_or(0)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// The last `days` days of this range, clipped to its start.
    pub fn trailing(&self, days: u32) -> Self {
        let span = days.saturating_sub(1) as u64;
        let start = self
            .end
            .checked_sub_days(Days::new(span))
            .map_or(self.start, |d| d.max(self.start));
        Self {
            start,
            end: self.end,
        }
    }

    /// Monday-start week buckets touching this range.
    ///
    /// Each bucket begins on its calendar Monday (the first one may begin
    /// before `start`) and ends on Sunday or on `end`, whichever is earlier.
    pub fn weeks(&self) -> Vec<DateRange> {
        let mut weeks = Vec::new();
        let mut monday = week_start(self.start);
        while monday <= self.end {
            let sunday = monday + Days::new(6);
            weeks.push(DateRange {
                start: monday,
                end: sunday.min(self.end),
            });
            monday = monday + Days::new(7);
        }
        weeks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_bucket() {
        assert_eq!(day_bucket(date(2023, 12, 28)), "2023-12-28");
        assert_eq!(day_bucket(date(2024, 1, 5)), "2024-01-05");
    }

    #[test]
    fn test_parse_day() {
        assert_eq!(parse_day("2023-12-28").unwrap(), date(2023, 12, 28));
        assert!(matches!(
            parse_day("2023-13-01"),
            Err(StatsError::InvalidDate { .. })
        ));
        assert!(parse_day("yesterday").is_err());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2024-02").unwrap(), (2024, 2));
        assert!(parse_month("2024-00").is_err());
        assert!(parse_month("2024").is_err());
        assert!(parse_month("feb").is_err());
    }

    #[test]
    fn test_range_rejects_reversed_bounds() {
        let err = DateRange::parse("2024-01-05", "2024-01-01").unwrap_err();
        assert_eq!(
            err,
            StatsError::InvalidRange {
                start: date(2024, 1, 5),
                end: date(2024, 1, 1)
            }
        );
    }

    #[test]
    fn test_inverted_literal_range_is_empty() {
        let range = DateRange {
            start: date(2024, 1, 10),
            end: date(2024, 1, 8),
        };
        assert_eq!(range.num_days(), 0);
        assert_eq!(range.days().count(), 0);
    }

    #[test]
    fn test_range_days_inclusive() {
        let range = DateRange::parse("2024-02-27", "2024-03-02").unwrap();
        let days: Vec<_> = range.days().collect();
        assert_eq!(days.len(), 5); // leap year: 27, 28, 29, 1, 2
        assert_eq!(range.num_days(), 5);
        assert_eq!(days.first(), Some(&date(2024, 2, 27)));
        assert_eq!(days.last(), Some(&date(2024, 3, 2)));
    }

    #[test]
    fn test_month_range() {
        let feb = DateRange::month(2024, 2).unwrap();
        assert_eq!(feb.start, date(2024, 2, 1));
        assert_eq!(feb.end, date(2024, 2, 29));

        let dec = DateRange::month(2023, 12).unwrap();
        assert_eq!(dec.end, date(2023, 12, 31));

        assert!(DateRange::month(2023, 13).is_err());
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2024-01-07 is a Sunday, 2024-01-08 a Monday
        assert_eq!(week_start(date(2024, 1, 7)), date(2024, 1, 1));
        assert_eq!(week_start(date(2024, 1, 8)), date(2024, 1, 8));
        assert_eq!(weekday_abbrev(date(2024, 1, 8).weekday()), "Mon");
    }

    #[test]
    fn test_weeks_clip_to_end_only() {
        // Wed 2024-01-03 .. Wed 2024-01-17
        let range = DateRange::parse("2024-01-03", "2024-01-17").unwrap();
        let weeks = range.weeks();

        assert_eq!(weeks.len(), 3);
        assert_eq!(weeks[0].start, date(2024, 1, 1));
        assert_eq!(weeks[0].end, date(2024, 1, 7));
        assert_eq!(weeks[2].start, date(2024, 1, 15));
        assert_eq!(weeks[2].end, date(2024, 1, 17));
    }

    #[test]
    fn test_trailing_window_clipped() {
        let range = DateRange::parse("2024-01-01", "2024-01-10").unwrap();
        let last7 = range.trailing(7);
        assert_eq!(last7.start, date(2024, 1, 4));
        assert_eq!(last7.num_days(), 7);

        let last30 = range.trailing(30);
        assert_eq!(last30.start, range.start);
    }
}
