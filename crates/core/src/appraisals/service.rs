//! Appraisal service - projection and lifecycle

use std::sync::Arc;

use staffhub_common::time::Clock;
use staffhub_domain::{AppraisalRecord, Result};
use uuid::Uuid;

use super::ports::AppraisalRepository;
use super::projector::{project, AppraisalProjection};

/// Appraisal cycle service.
pub struct AppraisalService {
    appraisals: Arc<dyn AppraisalRepository>,
    clock: Arc<dyn Clock>,
}

impl AppraisalService {
    pub fn new(appraisals: Arc<dyn AppraisalRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { appraisals, clock }
    }

    /// Project the appraisal cycle for one employee, evaluated at "now".
    pub async fn projection_for(&self, employee_id: Uuid) -> Result<AppraisalProjection> {
        let records = self.appraisals.appraisals_for(employee_id).await?;
        project(&records, self.clock.nanos_since_epoch())
    }

    /// Schedule a new appraisal.
    pub async fn schedule(&self, record: AppraisalRecord) -> Result<()> {
        self.appraisals.add_appraisal(record).await
    }

    /// Mark an appraisal complete, updating the record in place.
    pub async fn complete(&self, id: Uuid, notes: String) -> Result<AppraisalRecord> {
        let mut record = self.appraisals.get_appraisal(id).await?;
        record.is_complete = true;
        record.notes = notes;
        self.appraisals.update_appraisal(record.clone()).await?;
        Ok(record)
    }
}
