//! Payroll aggregation over shifts and holiday requests.
//!
//! Pure, single-pass summation: every roster employee gets a row, hours
//! accumulate unrounded, and records violating their invariants are
//! counted in `skipped_records` instead of silently distorting totals.

use ahash::AHashMap;
use chrono::{Days, NaiveDate};
use staffhub_domain::timestamp;
use staffhub_domain::{
    Employee, HolidayRequest, HolidayStatus, PayrollReport, PayrollTotals, Result, Shift,
    ShiftCategory, StaffHubError,
};
use uuid::Uuid;

use crate::scheduling::week::{end_of_day, week_dates};

/// An end-inclusive nanosecond range for payroll aggregation.
///
/// The end bound is normalized to the last represented instant of its day
/// by the constructors, so overlap checks can be plain comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: i64,
    pub end: i64,
}

impl DateRange {
    /// The business week containing `reference`.
    pub fn current_week(reference: NaiveDate) -> Result<Self> {
        let week = week_dates(reference);
        Ok(Self {
            start: timestamp::from_local_date(week[0])?,
            end: end_of_day(week[6])?,
        })
    }

    /// The two business weeks preceding the one containing `reference`,
    /// concatenated.
    pub fn previous_two_weeks(reference: NaiveDate) -> Result<Self> {
        let current_start = week_dates(reference)[0];
        Ok(Self {
            start: timestamp::from_local_date(current_start - Days::new(14))?,
            end: end_of_day(current_start - Days::new(1))?,
        })
    }

    /// An arbitrary custom range; both ends are required.
    ///
    /// # Errors
    /// Returns `StaffHubError::InvalidInput` when either bound is missing
    /// or the range is inverted. Missing bounds are a caller-side
    /// validation failure, reported before any aggregation is attempted.
    pub fn custom(start: Option<i64>, end: Option<i64>) -> Result<Self> {
        let (Some(start), Some(end)) = (start, end) else {
            return Err(StaffHubError::InvalidInput(
                "custom payroll range requires both a start and an end date".to_string(),
            ));
        };
        if start > end {
            return Err(StaffHubError::InvalidInput(
                "payroll range starts after it ends".to_string(),
            ));
        }
        Ok(Self { start, end })
    }

    /// ISO date of the range start, for file naming.
    pub fn start_iso(&self) -> Result<String> {
        timestamp::timestamp_to_date_input(self.start)
    }

    /// ISO date of the range end, for file naming.
    pub fn end_iso(&self) -> Result<String> {
        timestamp::timestamp_to_date_input(self.end)
    }

    fn overlaps(&self, start: i64, end: i64) -> bool {
        start <= self.end && end >= self.start
    }
}

/// Compute per-employee payroll totals over `range`.
///
/// - Shift hours are credited in full to every assigned roster employee,
///   under the bucket selected by the shift's effective category.
/// - Holiday days count inclusive days of overlap between an approved
///   request and the range, attributed to the requesting employee only.
/// - Every roster employee gets a row, zero-filled if inactive.
/// - Records with violated invariants (`start > end`) are skipped and
///   counted, never summed.
pub fn aggregate(
    range: &DateRange,
    shifts: &[Shift],
    requests: &[HolidayRequest],
    roster: &[Employee],
) -> PayrollReport {
    let mut totals: AHashMap<Uuid, PayrollTotals> = roster
        .iter()
        .map(|e| (e.id, PayrollTotals::zeroed(e.id, e.full_name.clone())))
        .collect();
    let mut skipped_records = 0usize;

    for shift in shifts {
        if shift.validate().is_err() {
            skipped_records += 1;
            continue;
        }
        if !range.overlaps(shift.start_time, shift.end_time) {
            continue;
        }
        let hours = shift.duration_hours();
        let category = shift.category();
        for employee_id in &shift.assigned_employees {
            // Assignees not on the roster contribute nothing; the export
            // has exactly one row per roster employee
            if let Some(row) = totals.get_mut(employee_id) {
                match category {
                    ShiftCategory::Worked => row.worked_hours += hours,
                    ShiftCategory::PaidLeave => row.paid_leave_hours += hours,
                    ShiftCategory::UnpaidLeave => row.unpaid_leave_hours += hours,
                    ShiftCategory::Sickness => row.sickness_hours += hours,
                }
            }
        }
    }

    for request in requests {
        if request.status != HolidayStatus::Approved {
            continue;
        }
        if request.validate().is_err() {
            skipped_records += 1;
            continue;
        }
        if !range.overlaps(request.start_date, request.end_date) {
            continue;
        }
        let overlap_start = request.start_date.max(range.start);
        let overlap_end = request.end_date.min(range.end);
        match overlap_days(overlap_start, overlap_end) {
            Ok(days) => {
                if let Some(row) = totals.get_mut(&request.employee_id) {
                    row.holiday_days += days;
                }
            }
            Err(_) => skipped_records += 1,
        }
    }

    let rows = roster
        .iter()
        .filter_map(|e| totals.remove(&e.id))
        .collect();

    PayrollReport { rows, skipped_records }
}

/// Inclusive days of overlap, counted at calendar-day granularity.
///
/// The range end carries an end-of-day time component, so counting goes
/// through local dates: a request truncated at the range boundary
/// contributes the boundary day exactly once.
fn overlap_days(start_ns: i64, end_ns: i64) -> Result<i64> {
    let start = timestamp::to_local_date(start_ns)?;
    let end = timestamp::to_local_date(end_ns)?;
    Ok((end - start).num_days() + 1)
}

#[cfg(test)]
mod tests {
    use staffhub_domain::timestamp::{date_time_to_timestamp, date_to_timestamp};
    use staffhub_domain::AccessRole;

    use super::*;

    fn employee(name: &str) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            full_name: name.to_string(),
            job_title: "Team Member".to_string(),
            department: "Bar".to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: None,
            start_date: 0,
            is_active: true,
            role: AccessRole::Staff,
            account_level: 1,
        }
    }

    fn shift(date: &str, start: &str, end: &str, dept: &str, assigned: &[Uuid]) -> Shift {
        Shift {
            id: Uuid::new_v4(),
            date: date_to_timestamp(date).unwrap(),
            start_time: date_time_to_timestamp(date, start).unwrap(),
            end_time: date_time_to_timestamp(date, end).unwrap(),
            department: dept.to_string(),
            category: None,
            assigned_employees: assigned.to_vec(),
        }
    }

    fn request(employee_id: Uuid, start: &str, end: &str, status: HolidayStatus) -> HolidayRequest {
        HolidayRequest {
            id: Uuid::new_v4(),
            employee_id,
            start_date: date_to_timestamp(start).unwrap(),
            end_date: date_to_timestamp(end).unwrap(),
            status,
            reason: None,
            created_at: 0,
        }
    }

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::custom(
            Some(date_to_timestamp(start).unwrap()),
            Some(end_of_day(NaiveDate::parse_from_str(end, "%Y-%m-%d").unwrap()).unwrap()),
        )
        .unwrap()
    }

    fn row_for<'a>(report: &'a PayrollReport, id: Uuid) -> &'a PayrollTotals {
        report.rows.iter().find(|r| r.employee_id == id).unwrap()
    }

    #[test]
    fn test_zero_fill_for_empty_inputs() {
        // AC: N roster employees yield exactly N all-zero rows
        let roster = vec![employee("Ann Field"), employee("Bo Tran"), employee("Cy Drew")];
        let report = aggregate(&range("2024-03-14", "2024-03-20"), &[], &[], &roster);

        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.skipped_records, 0);
        for row in &report.rows {
            assert_eq!(row.worked_hours, 0.0);
            assert_eq!(row.paid_leave_hours, 0.0);
            assert_eq!(row.unpaid_leave_hours, 0.0);
            assert_eq!(row.sickness_hours, 0.0);
            assert_eq!(row.holiday_days, 0);
        }
    }

    #[test]
    fn test_rows_follow_roster_order() {
        let roster = vec![employee("Zed Ames"), employee("Ann Field")];
        let report = aggregate(&range("2024-03-14", "2024-03-20"), &[], &[], &roster);

        let names: Vec<&str> = report.rows.iter().map(|r| r.employee_name.as_str()).collect();
        assert_eq!(names, vec!["Zed Ames", "Ann Field"]);
    }

    #[test]
    fn test_sickness_shift_counts_only_as_sickness() {
        // AC: 09:00-17:00 sickness shift -> 8 sickness hours, 0 worked
        let e1 = employee("Ann Field");
        let shifts = vec![shift("2024-03-15", "09:00", "17:00", "[SICKNESS] Bar", &[e1.id])];
        let report =
            aggregate(&range("2024-03-14", "2024-03-20"), &shifts, &[], &[e1.clone()]);

        let row = row_for(&report, e1.id);
        assert_eq!(row.worked_hours, 0.0);
        assert!((row.sickness_hours - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_shift_counts_once_per_assignee() {
        // AC: a 4-hour shift with 3 assignees credits 4 hours to each
        let (a, b, c) = (employee("A One"), employee("B Two"), employee("C Three"));
        let shifts =
            vec![shift("2024-03-15", "10:00", "14:00", "Kitchen", &[a.id, b.id, c.id])];
        let roster = vec![a.clone(), b.clone(), c.clone()];
        let report = aggregate(&range("2024-03-14", "2024-03-20"), &shifts, &[], &roster);

        for e in [&a, &b, &c] {
            assert!((row_for(&report, e.id).worked_hours - 4.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_non_roster_assignee_is_ignored() {
        let e1 = employee("Ann Field");
        let outsider = Uuid::new_v4();
        let shifts = vec![shift("2024-03-15", "09:00", "17:00", "Bar", &[e1.id, outsider])];
        let report =
            aggregate(&range("2024-03-14", "2024-03-20"), &shifts, &[], &[e1.clone()]);

        assert_eq!(report.rows.len(), 1);
        assert!((row_for(&report, e1.id).worked_hours - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_records_contribute_zero() {
        let e1 = employee("Ann Field");
        let shifts = vec![shift("2024-05-01", "09:00", "17:00", "Bar", &[e1.id])];
        let requests =
            vec![request(e1.id, "2024-05-01", "2024-05-03", HolidayStatus::Approved)];
        let report = aggregate(
            &range("2024-03-14", "2024-03-20"),
            &shifts,
            &requests,
            &[e1.clone()],
        );

        let row = row_for(&report, e1.id);
        assert_eq!(row.worked_hours, 0.0);
        assert_eq!(row.holiday_days, 0);
        assert_eq!(report.skipped_records, 0);
    }

    #[test]
    fn test_holiday_days_inclusive_overlap() {
        let e1 = employee("Ann Field");
        // Request 2024-03-18..2024-03-25, range ends 2024-03-20:
        // overlap 18th..20th inclusive = 3 days
        let requests =
            vec![request(e1.id, "2024-03-18", "2024-03-25", HolidayStatus::Approved)];
        let report =
            aggregate(&range("2024-03-14", "2024-03-20"), &[], &requests, &[e1.clone()]);

        assert_eq!(row_for(&report, e1.id).holiday_days, 3);
    }

    #[test]
    fn test_holiday_truncated_at_range_end_counts_boundary_day_once() {
        // AC: the end-of-day range bound does not inflate the day count
        let e1 = employee("Ann Field");
        let requests =
            vec![request(e1.id, "2024-03-20", "2024-03-22", HolidayStatus::Approved)];
        let report =
            aggregate(&range("2024-03-14", "2024-03-20"), &[], &requests, &[e1.clone()]);

        assert_eq!(row_for(&report, e1.id).holiday_days, 1);
    }

    #[test]
    fn test_holiday_truncated_at_range_start() {
        let e1 = employee("Ann Field");
        // Request 2024-03-10..2024-03-16, range starts 2024-03-14:
        // overlap 14th..16th inclusive = 3 days
        let requests =
            vec![request(e1.id, "2024-03-10", "2024-03-16", HolidayStatus::Approved)];
        let report =
            aggregate(&range("2024-03-14", "2024-03-20"), &[], &requests, &[e1.clone()]);

        assert_eq!(row_for(&report, e1.id).holiday_days, 3);
    }

    #[test]
    fn test_single_day_holiday_counts_one_day() {
        let e1 = employee("Ann Field");
        let requests =
            vec![request(e1.id, "2024-03-15", "2024-03-15", HolidayStatus::Approved)];
        let report =
            aggregate(&range("2024-03-14", "2024-03-20"), &[], &requests, &[e1.clone()]);

        assert_eq!(row_for(&report, e1.id).holiday_days, 1);
    }

    #[test]
    fn test_unapproved_requests_are_not_counted() {
        let e1 = employee("Ann Field");
        let requests = vec![
            request(e1.id, "2024-03-15", "2024-03-16", HolidayStatus::Pending),
            request(e1.id, "2024-03-18", "2024-03-19", HolidayStatus::Declined),
        ];
        let report =
            aggregate(&range("2024-03-14", "2024-03-20"), &[], &requests, &[e1.clone()]);

        assert_eq!(row_for(&report, e1.id).holiday_days, 0);
    }

    #[test]
    fn test_invalid_records_are_skipped_and_counted() {
        let e1 = employee("Ann Field");
        let mut bad_shift = shift("2024-03-15", "09:00", "17:00", "Bar", &[e1.id]);
        std::mem::swap(&mut bad_shift.start_time, &mut bad_shift.end_time);
        let mut bad_request =
            request(e1.id, "2024-03-15", "2024-03-16", HolidayStatus::Approved);
        std::mem::swap(&mut bad_request.start_date, &mut bad_request.end_date);

        let report = aggregate(
            &range("2024-03-14", "2024-03-20"),
            &[bad_shift],
            &[bad_request],
            &[e1.clone()],
        );

        // AC: skipped records surface as a diagnostic, totals stay clean
        assert_eq!(report.skipped_records, 2);
        let row = row_for(&report, e1.id);
        assert_eq!(row.worked_hours, 0.0);
        assert_eq!(row.holiday_days, 0);
    }

    #[test]
    fn test_additivity_over_adjacent_subranges() {
        // AC: aggregating two adjacent sub-ranges sums to the union range
        // (hours fields; shifts sit wholly inside one sub-range each)
        let e1 = employee("Ann Field");
        let shifts = vec![
            shift("2024-03-15", "09:00", "17:00", "Bar", &[e1.id]),
            shift("2024-03-18", "10:00", "14:00", "[PAID-LEAVE] Bar", &[e1.id]),
            shift("2024-03-22", "08:00", "16:00", "Bar", &[e1.id]),
        ];
        let roster = vec![e1.clone()];

        let first = aggregate(&range("2024-03-14", "2024-03-20"), &shifts, &[], &roster);
        let second = aggregate(&range("2024-03-21", "2024-03-27"), &shifts, &[], &roster);
        let union = aggregate(&range("2024-03-14", "2024-03-27"), &shifts, &[], &roster);

        let (f, s, u) =
            (row_for(&first, e1.id), row_for(&second, e1.id), row_for(&union, e1.id));
        assert!((f.worked_hours + s.worked_hours - u.worked_hours).abs() < 1e-9);
        assert!((f.paid_leave_hours + s.paid_leave_hours - u.paid_leave_hours).abs() < 1e-9);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let e1 = employee("Ann Field");
        let shifts = vec![shift("2024-03-15", "09:00", "17:00", "Bar", &[e1.id])];
        let requests =
            vec![request(e1.id, "2024-03-18", "2024-03-19", HolidayStatus::Approved)];
        let roster = vec![e1];
        let r = range("2024-03-14", "2024-03-20");

        let first = aggregate(&r, &shifts, &requests, &roster);
        let second = aggregate(&r, &shifts, &requests, &roster);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_range_requires_both_ends() {
        let start = date_to_timestamp("2024-03-14").unwrap();
        assert!(matches!(
            DateRange::custom(Some(start), None),
            Err(StaffHubError::InvalidInput(_))
        ));
        assert!(matches!(
            DateRange::custom(None, Some(start)),
            Err(StaffHubError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_previous_two_weeks_abut_current_week() {
        let reference = NaiveDate::from_ymd_opt(2024, 3, 19).unwrap();
        let previous = DateRange::previous_two_weeks(reference).unwrap();
        let current = DateRange::current_week(reference).unwrap();

        assert_eq!(previous.start_iso().unwrap(), "2024-02-29");
        assert_eq!(previous.end_iso().unwrap(), "2024-03-13");
        assert_eq!(current.start_iso().unwrap(), "2024-03-14");
        assert!(previous.end < current.start);
    }
}
