//! "HH:MM" parsing and work-hour arithmetic shared by every report.
//!
//! Parsing is best-effort by policy: a malformed time in one record should
//! drag that record's numbers to zero, not abort the whole report.

use chrono::{NaiveTime, Timelike};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Standard office start; check-ins strictly after this count as late.
const OFFICE_START: &str = "09:00";
/// Late-stay threshold; checkouts at or after this are flagged.
const LATE_STAY_START: &str = "20:00";

pub fn parse_hhmm(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

/// Elapsed minutes from check-in to check-out. A checkout earlier on the
/// clock than the check-in is taken to be the following calendar day.
/// Either side failing to parse yields 0.
pub fn minutes_between(checkin: &str, checkout: &str) -> u32 {
    let (Some(start), Some(end)) = (parse_hhmm(checkin), parse_hhmm(checkout)) else {
        return 0;
    };
    let start = start.hour() * 60 + start.minute();
    let end = end.hour() * 60 + end.minute();
    if end < start {
        MINUTES_PER_DAY - start + end
    } else {
        end - start
    }
}

pub fn hours_f64(minutes: u32) -> f64 {
    f64::from(minutes) / 60.0
}

/// "11h 15m" style label for an exact minute count.
pub fn format_hours_minutes(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Label for a fractional hour average. Truncates both components, which
/// is what the dashboard has always displayed for work-balance averages.
pub fn average_hours_label(avg_hours: f64) -> String {
    let hours = avg_hours.trunc() as i64;
    let minutes = (avg_hours.fract() * 60.0) as i64;
    format!("{}h {}m", hours, minutes)
}

/// Checkout at or after 20:00. Malformed input is never late.
pub fn is_after_8pm(checkout: &str) -> bool {
    match (parse_hhmm(checkout), parse_hhmm(LATE_STAY_START)) {
        (Some(time), Some(threshold)) => time >= threshold,
        _ => false,
    }
}

/// Check-in strictly after 09:00. Malformed input is never late.
pub fn is_late_arrival(checkin: &str) -> bool {
    match (parse_hhmm(checkin), parse_hhmm(OFFICE_START)) {
        (Some(time), Some(threshold)) => time > threshold,
        _ => false,
    }
}
