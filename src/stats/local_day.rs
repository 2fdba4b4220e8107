//! Local calendar bucketing for streak computation
//!
//! Streaks count consecutive calendar days in the user's local
//! timezone, not spans of absolute time: a log at 23:59 and another at
//! 00:05 local time are two distinct streak days. Events carry UTC
//! instants; these helpers shift them by the engine's configured
//! offset before taking the date or hour.

use chrono::{DateTime, FixedOffset, NaiveDate, Timelike, Utc};

/// The user-local calendar date of a UTC instant.
pub fn local_date(instant: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    instant.with_timezone(&offset).date_naive()
}

/// The user-local hour of day (0-23) of a UTC instant.
pub fn local_hour(instant: DateTime<Utc>, offset: FixedOffset) -> u32 {
    instant.with_timezone(&offset).hour()
}

/// Whole days from `earlier` to `later` (0 for the same date).
pub fn days_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    (later - earlier).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_local_date_crosses_midnight() {
        // 23:30 UTC on Mar 1 is already Mar 2 at UTC+2
        let instant = Utc.with_ymd_and_hms(2024, 3, 1, 23, 30, 0).unwrap();
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            local_date(instant, plus_two),
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()
        );

        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(
            local_date(instant, utc),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_local_hour_shifts_with_offset() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 1, 6, 45, 0).unwrap();
        let minus_five = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(local_hour(instant, minus_five), 1);
        let plus_one = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(local_hour(instant, plus_one), 7);
    }

    #[test]
    fn test_days_between() {
        let d1 = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let d3 = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        assert_eq!(days_between(d1, d3), 2);
        assert_eq!(days_between(d1, d1), 0);
    }
}
