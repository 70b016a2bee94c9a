//! Payroll aggregation output types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-employee totals over a payroll range.
///
/// Hours are accumulated unrounded; rounding to two decimals happens only at
/// the CSV/export layer to avoid compounding error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayrollTotals {
    pub employee_id: Uuid,
    pub employee_name: String,
    pub worked_hours: f64,
    pub paid_leave_hours: f64,
    pub unpaid_leave_hours: f64,
    pub sickness_hours: f64,
    pub holiday_days: i64,
}

impl PayrollTotals {
    /// Zero-filled row for an employee with no activity in the range.
    pub fn zeroed(employee_id: Uuid, employee_name: impl Into<String>) -> Self {
        Self {
            employee_id,
            employee_name: employee_name.into(),
            worked_hours: 0.0,
            paid_leave_hours: 0.0,
            unpaid_leave_hours: 0.0,
            sickness_hours: 0.0,
            holiday_days: 0,
        }
    }
}

/// Aggregation result: one row per roster employee, plus a diagnostic count
/// of records that were skipped because they violated an invariant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PayrollReport {
    pub rows: Vec<PayrollTotals>,
    pub skipped_records: usize,
}
