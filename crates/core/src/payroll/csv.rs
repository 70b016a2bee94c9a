//! CSV rendering for payroll reports.
//!
//! Hour values are rounded to two decimals here and nowhere else;
//! aggregation accumulates unrounded.

use staffhub_domain::{PayrollReport, Result};

use super::aggregator::DateRange;

/// Fixed header row of the export.
pub const CSV_HEADER: &str = "Employee Name, Worked Hours, Paid Leave Hours, Unpaid Leave Hours, Sickness Hours, Holiday Days";

/// Render a payroll report as CSV text.
///
/// One row per roster employee, cells double-quoted and comma-joined,
/// rows newline-separated.
pub fn render_csv(report: &PayrollReport) -> String {
    let mut out = String::from(CSV_HEADER);
    for row in &report.rows {
        out.push('\n');
        out.push_str(&format!(
            "\"{}\",\"{:.2}\",\"{:.2}\",\"{:.2}\",\"{:.2}\",\"{}\"",
            row.employee_name,
            row.worked_hours,
            row.paid_leave_hours,
            row.unpaid_leave_hours,
            row.sickness_hours,
            row.holiday_days,
        ));
    }
    out
}

/// Export filename for a payroll range: `payroll-{start}-to-{end}.csv`.
pub fn file_name(range: &DateRange) -> Result<String> {
    Ok(format!("payroll-{}-to-{}.csv", range.start_iso()?, range.end_iso()?))
}
