//! Business-week partitioning.
//!
//! Weeks run Thursday to Wednesday, a fixed business rule. Index 0 of a
//! week is always the most recent Thursday at or before the reference
//! date. Pure functions of the explicit reference date, no hidden "now".

use chrono::{Datelike, Days, NaiveDate};
use staffhub_domain::constants::{NANOS_PER_DAY, NANOS_PER_MILLISECOND};
use staffhub_domain::timestamp;
use staffhub_domain::Result;

/// Weekday offset of the anchor day, Sunday=0 convention (Thursday=4).
const ANCHOR_WEEKDAY: u32 = 4;

/// The seven calendar days of the business week containing `reference`.
///
/// Contiguous, ordered, day 0 the most recent Thursday at or before the
/// reference date.
pub fn week_dates(reference: NaiveDate) -> [NaiveDate; 7] {
    let days_from_anchor =
        (reference.weekday().num_days_from_sunday() + 7 - ANCHOR_WEEKDAY) % 7;
    let start = reference - Days::new(u64::from(days_from_anchor));

    std::array::from_fn(|i| start + Days::new(i as u64))
}

/// Nanosecond bounds of the business week containing `reference`.
///
/// Start is local midnight of day 0; end is the last represented instant
/// of day 6 (23:59:59.999, millisecond resolution), so the range is
/// end-inclusive for payroll overlap checks.
///
/// # Errors
/// Returns `StaffHubError::InvalidInput` if the dates cannot be
/// represented as local instants.
pub fn week_bounds(reference: NaiveDate) -> Result<(i64, i64)> {
    let days = week_dates(reference);
    let start = timestamp::from_local_date(days[0])?;
    let end = end_of_day(days[6])?;
    Ok((start, end))
}

/// The last represented instant of `day` as a nanosecond timestamp.
pub fn end_of_day(day: NaiveDate) -> Result<i64> {
    Ok(timestamp::from_local_date(day)? + NANOS_PER_DAY - NANOS_PER_MILLISECOND)
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_starts_on_thursday() {
        // AC: for any reference date, day 0 is a Thursday
        for offset in 0..14u64 {
            let reference = date(2024, 3, 1) + Days::new(offset);
            let week = week_dates(reference);
            assert_eq!(week[0].weekday(), Weekday::Thu, "reference {reference}");
        }
    }

    #[test]
    fn test_week_is_contiguous() {
        let week = week_dates(date(2024, 3, 12));
        for i in 0..6 {
            assert_eq!(week[i + 1], week[i] + Days::new(1));
        }
    }

    #[test]
    fn test_thursday_reference_is_day_zero() {
        // 2024-03-14 is a Thursday
        let thursday = date(2024, 3, 14);
        assert_eq!(week_dates(thursday)[0], thursday);
        assert_eq!(week_dates(thursday)[6], date(2024, 3, 20));
    }

    #[test]
    fn test_wednesday_belongs_to_previous_thursday() {
        // 2024-03-20 is a Wednesday; its week starts 6 days earlier
        let wednesday = date(2024, 3, 20);
        assert_eq!(week_dates(wednesday)[0], date(2024, 3, 14));
        assert_eq!(week_dates(wednesday)[6], wednesday);
    }

    #[test]
    fn test_week_crosses_month_boundary() {
        let week = week_dates(date(2024, 3, 31));
        assert_eq!(week[0], date(2024, 3, 28));
        assert_eq!(week[6], date(2024, 4, 3));
    }

    #[test]
    fn test_week_bounds_cover_whole_days() {
        let (start, end) = week_bounds(date(2024, 3, 14)).unwrap();
        assert_eq!(timestamp::timestamp_to_date_input(start).unwrap(), "2024-03-14");
        assert_eq!(timestamp::timestamp_to_time_input(start).unwrap(), "00:00");
        assert_eq!(timestamp::timestamp_to_date_input(end).unwrap(), "2024-03-20");
        assert_eq!(timestamp::timestamp_to_time_input(end).unwrap(), "23:59");
    }
}
