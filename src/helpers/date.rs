//! Date helper functions

use chrono::{DateTime, TimeZone};

/// Shown wherever a post has no publish date
pub const NO_DATE: &str = "No date";

/// Short display date used on post cards, like "Jan 15, 2026"
pub fn short_date<Tz: TimeZone>(date: Option<&DateTime<Tz>>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match date {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => NO_DATE.to_string(),
    }
}

/// Full display date used on the post page, like "January 15, 2026"
pub fn full_date<Tz: TimeZone>(date: Option<&DateTime<Tz>>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match date {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => NO_DATE.to_string(),
    }
}

/// Format a date in ISO 8601 / XML format
pub fn date_xml<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_short_date() {
        let date = Utc.with_ymd_and_hms(2026, 1, 5, 10, 30, 0).unwrap();
        assert_eq!(short_date(Some(&date)), "Jan 5, 2026");
        assert_eq!(short_date::<Utc>(None), "No date");
    }

    #[test]
    fn test_full_date() {
        let date = Utc.with_ymd_and_hms(2026, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(full_date(Some(&date)), "January 15, 2026");
        assert_eq!(full_date::<Utc>(None), NO_DATE);
    }

    #[test]
    fn test_date_xml() {
        let date = Utc.with_ymd_and_hms(2026, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(date_xml(&date), "2026-01-15T10:30:00.000+00:00");
    }
}
