//! Timestamp formatting for canvas cards.
//!
//! Renders backend ISO 8601 timestamps as `dd/mm/yyyy, HH:MM:SS` (British
//! day-first order, 24-hour clock) in the viewer's local zone. Input that
//! cannot be parsed renders as `Invalid Date`, matching what browsers print.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Placeholder rendered for unparseable timestamps.
pub const INVALID_DATE: &str = "Invalid Date";

const DISPLAY_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Format `raw` in the local time zone.
pub fn format_date(raw: &str) -> String {
    format_date_in(raw, &Local)
}

/// Format `raw` in the time zone `tz`.
pub fn format_date_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match parse_instant(raw.trim(), tz) {
        Some(instant) => instant.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
        None => INVALID_DATE.to_owned(),
    }
}

/// Parse an ISO 8601 timestamp into an absolute instant.
///
/// Timestamps with an offset are absolute. Date-times without one are read
/// as wall-clock time in `tz`; bare dates are UTC midnight.
fn parse_instant<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return tz.from_local_datetime(&naive).earliest().map(|dt| dt.with_timezone(&Utc));
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}
