//! Appraisal due-date projection.
//!
//! The next appraisal is due three calendar months after the most recent
//! completed one, with the host date library's month-rollover semantics
//! (Jan 31 + 3 months lands on Apr 30, not a fixed day count).

use chrono::Months;
use serde::{Deserialize, Serialize};
use staffhub_domain::constants::{
    APPRAISAL_CYCLE_MONTHS, APPRAISAL_DUE_SOON_DAYS, NANOS_PER_DAY, NANOS_PER_MILLISECOND,
};
use staffhub_domain::{timestamp, AppraisalRecord, Result, StaffHubError};

/// Where an employee stands in the appraisal cycle.
///
/// Mutually exclusive and exhaustive for a given observation instant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppraisalStatus {
    Overdue,
    DueSoon,
    UpToDate,
    NoHistory,
}

/// Projection of an employee's appraisal cycle at one observation instant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppraisalProjection {
    /// Scheduled date of the most recent completed appraisal, if any.
    pub last_completed: Option<i64>,
    /// When the next appraisal falls due, if there is any history.
    pub next_due: Option<i64>,
    pub status: AppraisalStatus,
}

/// Project the appraisal cycle from one employee's records.
///
/// The last appraisal is the maximum `scheduled_date` among completed
/// records; incomplete records never count. With no completed history the
/// status is `NoHistory`, distinct from `UpToDate`.
pub fn project(records: &[AppraisalRecord], now_ns: i64) -> Result<AppraisalProjection> {
    let last_completed =
        records.iter().filter(|r| r.is_complete).map(|r| r.scheduled_date).max();

    let Some(last) = last_completed else {
        return Ok(AppraisalProjection {
            last_completed: None,
            next_due: None,
            status: AppraisalStatus::NoHistory,
        });
    };

    let next_due = timestamp::to_local_datetime(last)?
        .checked_add_months(Months::new(APPRAISAL_CYCLE_MONTHS))
        .ok_or_else(|| {
            StaffHubError::InvalidInput(format!("appraisal date out of range: {last}"))
        })?
        .timestamp_millis()
        * NANOS_PER_MILLISECOND;

    let status = if next_due < now_ns {
        AppraisalStatus::Overdue
    } else if next_due - now_ns < APPRAISAL_DUE_SOON_DAYS * NANOS_PER_DAY {
        AppraisalStatus::DueSoon
    } else {
        AppraisalStatus::UpToDate
    };

    Ok(AppraisalProjection { last_completed: Some(last), next_due: Some(next_due), status })
}
