//! Shift records and the shift category model
//!
//! Historically the shift category (worked vs. leave vs. sickness) was
//! encoded as a free-text prefix on the `department` field. Migrated records
//! carry a structured `category` field instead; `Shift::category()` resolves
//! either representation so aggregation treats both generations of records
//! identically.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{
    NANOS_PER_HOUR, PAID_LEAVE_PREFIX, SICKNESS_PREFIX, UNPAID_LEAVE_PREFIX,
};
use crate::errors::{Result, StaffHubError};
use crate::impl_domain_status_conversions;

/// What a shift record represents for payroll purposes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ShiftCategory {
    Worked,
    PaidLeave,
    UnpaidLeave,
    Sickness,
}

impl_domain_status_conversions!(ShiftCategory {
    Worked => "worked",
    PaidLeave => "paid_leave",
    UnpaidLeave => "unpaid_leave",
    Sickness => "sickness",
});

impl ShiftCategory {
    /// Parse the legacy department prefix convention.
    ///
    /// The match is exact and case-sensitive, including the trailing space.
    /// A department with no recognized prefix is a plain worked shift.
    pub fn from_department(department: &str) -> Self {
        if department.starts_with(PAID_LEAVE_PREFIX) {
            Self::PaidLeave
        } else if department.starts_with(UNPAID_LEAVE_PREFIX) {
            Self::UnpaidLeave
        } else if department.starts_with(SICKNESS_PREFIX) {
            Self::Sickness
        } else {
            Self::Worked
        }
    }
}

/// Scheduled shift as held by the data service.
///
/// `date` identifies the calendar day (and may carry time-of-day noise that
/// day-level grouping must ignore); `start_time` and `end_time` are full
/// timestamps on the same day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Shift {
    pub id: Uuid,
    /// Nanoseconds since epoch; identifies the calendar day.
    pub date: i64,
    pub start_time: i64,
    pub end_time: i64,
    /// Display label. Legacy records encode the category as a prefix here.
    pub department: String,
    /// Structured category for migrated records; `None` falls back to the
    /// legacy department prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ShiftCategory>,
    pub assigned_employees: Vec<Uuid>,
}

impl Shift {
    /// Validate the record's invariants.
    ///
    /// # Errors
    /// Returns `StaffHubError::InvalidInput` when `start_time > end_time`.
    pub fn validate(&self) -> Result<()> {
        if self.start_time > self.end_time {
            return Err(StaffHubError::InvalidInput(format!(
                "shift {} starts after it ends",
                self.id
            )));
        }
        Ok(())
    }

    /// Resolve the effective category, preferring the structured field.
    pub fn category(&self) -> ShiftCategory {
        self.category.unwrap_or_else(|| ShiftCategory::from_department(&self.department))
    }

    /// The department label with any legacy category prefix stripped.
    pub fn department_label(&self) -> &str {
        for prefix in [PAID_LEAVE_PREFIX, UNPAID_LEAVE_PREFIX, SICKNESS_PREFIX] {
            if let Some(rest) = self.department.strip_prefix(prefix) {
                return rest;
            }
        }
        &self.department
    }

    /// Shift duration in fractional hours.
    pub fn duration_hours(&self) -> f64 {
        (self.end_time - self.start_time) as f64 / NANOS_PER_HOUR as f64
    }
}
