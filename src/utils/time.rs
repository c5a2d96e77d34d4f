//! Time utilities

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// Get current UTC time
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Parse a date string in ISO 8601 format (YYYY-MM-DD)
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// The Monday beginning the ISO week that contains the given instant.
///
/// Works on the UTC date of the timestamp, so any two instants within
/// the same ISO week map to the same Monday.
pub fn week_start_for(dt: DateTime<Utc>) -> NaiveDate {
    let date = dt.date_naive();
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Weekday};

    use super::*;

    #[test]
    fn test_week_start_is_monday() {
        // 2024-01-17 is a Wednesday
        let wednesday = Utc.with_ymd_and_hms(2024, 1, 17, 15, 30, 0).unwrap();
        let monday = week_start_for(wednesday);
        assert_eq!(monday, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(monday.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_week_start_idempotent_within_week() {
        let monday = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let sunday = Utc.with_ymd_and_hms(2024, 1, 21, 23, 59, 59).unwrap();
        assert_eq!(week_start_for(monday), week_start_for(sunday));
    }

    #[test]
    fn test_week_start_of_monday_is_itself() {
        let monday = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(
            week_start_for(monday),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_week_start_crosses_month_boundary() {
        // 2024-03-01 is a Friday; its week starts on Monday 2024-02-26
        let friday = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        assert_eq!(
            week_start_for(friday),
            NaiveDate::from_ymd_opt(2024, 2, 26).unwrap()
        );
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-15"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert!(parse_date("not a date").is_none());
        assert!(parse_date("2024-13-01").is_none());
    }
}
