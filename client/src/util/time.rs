//! Timestamp parsing and display labels.
//!
//! The backend emits RFC 3339 (`2024-05-01T09:30:00.000000Z`) for most
//! records and plain `YYYY-MM-DD HH:MM:SS` (UTC) for some log tables; both
//! are accepted.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Duration, Month, OffsetDateTime, PrimitiveDateTime};

/// Parse a backend timestamp; `None` for anything unrecognized.
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(parsed);
    }
    let plain = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    PrimitiveDateTime::parse(raw, plain).ok().map(PrimitiveDateTime::assume_utc)
}

/// Current wall-clock time.
pub fn now() -> OffsetDateTime {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let millis = js_sys::Date::now() as i128;
        OffsetDateTime::from_unix_timestamp_nanos(millis * 1_000_000).unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        OffsetDateTime::now_utc()
    }
}

fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

/// `05 Jan 2024`.
pub fn short_date(at: OffsetDateTime) -> String {
    format!("{:02} {} {}", at.day(), month_abbrev(at.month()), at.year())
}

/// `5 January 2024, 09:30`.
pub fn long_date(at: OffsetDateTime) -> String {
    format!("{} {} {}, {:02}:{:02}", at.day(), at.month(), at.year(), at.hour(), at.minute())
}

/// Short date for an optional raw timestamp, `N/A` when absent.
pub fn short_label(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp).map_or_else(|| "N/A".to_owned(), short_date)
}

/// Long date for an optional raw timestamp, `N/A` when absent.
pub fn long_label(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp).map_or_else(|| "N/A".to_owned(), long_date)
}

/// "Just now", "5m ago", "3h ago", "2d ago", then the short date.
pub fn relative_label(raw: Option<&str>, now: OffsetDateTime) -> String {
    let Some(at) = raw.and_then(parse_timestamp) else {
        return "Never".to_owned();
    };
    let elapsed = now - at;
    if elapsed < Duration::MINUTE {
        "Just now".to_owned()
    } else if elapsed < Duration::HOUR {
        format!("{}m ago", elapsed.whole_minutes())
    } else if elapsed < Duration::DAY {
        format!("{}h ago", elapsed.whole_hours())
    } else if elapsed < Duration::WEEK {
        format!("{}d ago", elapsed.whole_days())
    } else {
        short_date(at)
    }
}
