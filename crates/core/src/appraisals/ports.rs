//! Port interfaces for appraisal data access

use async_trait::async_trait;
use staffhub_domain::{AppraisalRecord, Result};
use uuid::Uuid;

/// Data access for appraisal records.
///
/// Editing goes through a genuine update-by-id operation; completing an
/// appraisal never inserts a duplicate record.
#[async_trait]
pub trait AppraisalRepository: Send + Sync {
    /// All appraisal records for one employee.
    async fn appraisals_for(&self, employee_id: Uuid) -> Result<Vec<AppraisalRecord>>;

    /// One appraisal record by id.
    ///
    /// Returns `StaffHubError::NotFound` for an unknown id.
    async fn get_appraisal(&self, id: Uuid) -> Result<AppraisalRecord>;

    /// Create a new appraisal record.
    async fn add_appraisal(&self, record: AppraisalRecord) -> Result<()>;

    /// Replace an existing appraisal record wholesale.
    async fn update_appraisal(&self, record: AppraisalRecord) -> Result<()>;
}
