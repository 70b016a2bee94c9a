//! Nanosecond timestamp conversion layer
//!
//! The data service stores every point-in-time value as an `i64` count of
//! nanoseconds since the Unix epoch. All calendar arithmetic converts through
//! a millisecond intermediate (`ns / 1_000_000`) before using chrono, and
//! converts back the same way when persisting.
//!
//! Dates and times of day are interpreted in the local timezone, matching the
//! behaviour of the HTML date/time inputs the values round-trip through.
//!
//! All functions are pure; "now"-dependent checks take an explicit `now_ns`
//! argument so callers can evaluate them per render with an injected clock.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::constants::{EXPIRY_WARNING_DAYS, NANOS_PER_DAY, NANOS_PER_MILLISECOND};
use crate::errors::{Result, StaffHubError};

/// Convert a nanosecond timestamp to a local date-time.
///
/// # Errors
/// Returns `StaffHubError::InvalidInput` if the timestamp is outside
/// chrono's representable range.
pub fn to_local_datetime(ns: i64) -> Result<DateTime<Local>> {
    let millis = ns / NANOS_PER_MILLISECOND;
    Utc.timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.with_timezone(&Local))
        .ok_or_else(|| StaffHubError::InvalidInput(format!("timestamp out of range: {ns}")))
}

/// Convert a local date-time to a nanosecond timestamp.
fn from_local_naive(naive: NaiveDateTime) -> Result<i64> {
    // `earliest` picks the first valid instant when a DST transition makes a
    // local time ambiguous or skips it entirely.
    let local = Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| StaffHubError::InvalidInput(format!("unrepresentable local time: {naive}")))?;
    Ok(local.timestamp_millis() * NANOS_PER_MILLISECOND)
}

/// Parse a `YYYY-MM-DD` date string as local midnight.
///
/// # Errors
/// Returns `StaffHubError::InvalidInput` for malformed input. Malformed dates
/// are rejected eagerly rather than flowing through aggregation as a silent
/// sentinel.
pub fn date_to_timestamp(date: &str) -> Result<i64> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|err| StaffHubError::InvalidInput(format!("invalid date '{date}': {err}")))?;
    from_local_naive(parsed.and_time(NaiveTime::MIN))
}

/// Parse a `YYYY-MM-DD` date string and a `HH:MM` time string as a local
/// date-time.
///
/// # Errors
/// Returns `StaffHubError::InvalidInput` for malformed input.
pub fn date_time_to_timestamp(date: &str, time: &str) -> Result<i64> {
    let parsed_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|err| StaffHubError::InvalidInput(format!("invalid date '{date}': {err}")))?;
    let parsed_time = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|err| StaffHubError::InvalidInput(format!("invalid time '{time}': {err}")))?;
    from_local_naive(parsed_date.and_time(parsed_time))
}

/// Convert a nanosecond timestamp to the local calendar date it falls on.
pub fn to_local_date(ns: i64) -> Result<NaiveDate> {
    Ok(to_local_datetime(ns)?.date_naive())
}

/// Convert a local calendar date to its nanosecond timestamp at midnight.
pub fn from_local_date(date: NaiveDate) -> Result<i64> {
    from_local_naive(date.and_time(NaiveTime::MIN))
}

/// Render a timestamp for an HTML date input (`YYYY-MM-DD`, day granularity).
pub fn timestamp_to_date_input(ns: i64) -> Result<String> {
    Ok(to_local_datetime(ns)?.format("%Y-%m-%d").to_string())
}

/// Render a timestamp for an HTML time input (`HH:MM`, minute granularity).
pub fn timestamp_to_time_input(ns: i64) -> Result<String> {
    Ok(to_local_datetime(ns)?.format("%H:%M").to_string())
}

/// Display formatting: day-month-year.
pub fn format_date(ns: i64) -> Result<String> {
    Ok(to_local_datetime(ns)?.format("%d-%m-%Y").to_string())
}

/// Display formatting: 24h clock.
pub fn format_time(ns: i64) -> Result<String> {
    Ok(to_local_datetime(ns)?.format("%H:%M").to_string())
}

/// Display formatting: date and time combined.
pub fn format_date_time(ns: i64) -> Result<String> {
    Ok(to_local_datetime(ns)?.format("%d-%m-%Y %H:%M").to_string())
}

/// True iff the timestamp is strictly before `now_ns`.
///
/// Callers must guard optional fields with a presence check before calling;
/// an absent timestamp is never "expired".
pub fn is_expired(ns: i64, now_ns: i64) -> bool {
    ns < now_ns
}

/// True iff the timestamp is in the future and within the 30-day warning
/// window from `now_ns`.
pub fn is_expiring_soon(ns: i64, now_ns: i64) -> bool {
    ns >= now_ns && ns - now_ns < EXPIRY_WARNING_DAYS * NANOS_PER_DAY
}
