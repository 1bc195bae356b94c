//! Date and time formatting for note cards and chat bubbles

use chrono::{DateTime, Utc};

/// Clock time for a chat bubble, e.g. `09:41`
pub fn format_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%H:%M").to_string()
}

/// Short date for a library card, e.g. `Jan 15`
pub fn format_short_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d").to_string()
}

/// Format a timestamp relative to `now`
///
/// Returns strings like "Just now", "5 minutes ago", "2 hours ago",
/// "1 day ago", "3 weeks ago". Anything older than four weeks shows the
/// date.
pub fn format_relative(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(*timestamp);

    if duration.num_seconds() < 60 {
        "Just now".to_string()
    } else if duration.num_minutes() < 60 {
        plural(duration.num_minutes(), "minute")
    } else if duration.num_hours() < 24 {
        plural(duration.num_hours(), "hour")
    } else if duration.num_days() < 7 {
        plural(duration.num_days(), "day")
    } else if duration.num_weeks() < 4 {
        plural(duration.num_weeks(), "week")
    } else {
        timestamp.format("%b %-d, %Y").to_string()
    }
}

/// [`format_relative`] against the current time
pub fn format_relative_now(timestamp: &DateTime<Utc>) -> String {
    format_relative(timestamp, &Utc::now())
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, h, m, 0).unwrap()
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(&at(9, 5)), "09:05");
        assert_eq!(format_time(&at(21, 41)), "21:41");
    }

    #[test]
    fn test_format_short_date() {
        assert_eq!(format_short_date(&at(0, 0)), "Jan 15");
        let march = Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap();
        assert_eq!(format_short_date(&march), "Mar 2");
    }

    #[test]
    fn test_format_relative_ladder() {
        let now = at(12, 0);
        assert_eq!(format_relative(&now, &now), "Just now");
        assert_eq!(format_relative(&(now - Duration::minutes(1)), &now), "1 minute ago");
        assert_eq!(format_relative(&(now - Duration::minutes(5)), &now), "5 minutes ago");
        assert_eq!(format_relative(&(now - Duration::hours(2)), &now), "2 hours ago");
        assert_eq!(format_relative(&(now - Duration::hours(5)), &now), "5 hours ago");
        assert_eq!(format_relative(&(now - Duration::days(1)), &now), "1 day ago");
        assert_eq!(format_relative(&(now - Duration::days(3)), &now), "3 days ago");
        assert_eq!(format_relative(&(now - Duration::weeks(2)), &now), "2 weeks ago");
    }

    #[test]
    fn test_format_relative_old_shows_date() {
        let now = at(12, 0);
        let old = now - Duration::weeks(5);
        assert_eq!(format_relative(&old, &now), "Dec 11, 2023");
    }
}
