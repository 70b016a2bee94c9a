//! Payroll service - wires repositories to aggregation and CSV export

use std::sync::Arc;

use staffhub_domain::{PayrollReport, Result};
use tracing::info;

use super::aggregator::{aggregate, DateRange};
use super::csv::{file_name, render_csv};
use super::ports::EmployeeRepository;
use crate::leave::ports::HolidayRequestRepository;
use crate::scheduling::ports::ShiftRepository;

/// A rendered payroll export ready for file download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: String,
    pub content: String,
}

/// Payroll aggregation service.
pub struct PayrollService {
    shifts: Arc<dyn ShiftRepository>,
    requests: Arc<dyn HolidayRequestRepository>,
    employees: Arc<dyn EmployeeRepository>,
}

impl PayrollService {
    pub fn new(
        shifts: Arc<dyn ShiftRepository>,
        requests: Arc<dyn HolidayRequestRepository>,
        employees: Arc<dyn EmployeeRepository>,
    ) -> Self {
        Self { shifts, requests, employees }
    }

    /// Aggregate payroll totals for `range`.
    pub async fn report(&self, range: &DateRange) -> Result<PayrollReport> {
        let shifts = self.shifts.shifts_in_range(range.start, range.end).await?;
        let requests = self.requests.list_holiday_requests().await?;
        let roster = self.employees.list_employees().await?;

        let report = aggregate(range, &shifts, &requests, &roster);
        if report.skipped_records > 0 {
            info!(
                skipped = report.skipped_records,
                "payroll aggregation skipped records with violated invariants"
            );
        }
        Ok(report)
    }

    /// Aggregate and render the CSV export for `range`.
    pub async fn export_csv(&self, range: &DateRange) -> Result<CsvExport> {
        let report = self.report(range).await?;
        Ok(CsvExport { file_name: file_name(range)?, content: render_csv(&report) })
    }
}
