//! Leave service - holiday request business logic

use std::sync::Arc;

use staffhub_common::time::Clock;
use staffhub_domain::{HolidayRequest, HolidayStatus, Result};
use tracing::info;
use uuid::Uuid;

use super::ports::HolidayRequestRepository;

/// Holiday request service.
pub struct LeaveService {
    requests: Arc<dyn HolidayRequestRepository>,
    clock: Arc<dyn Clock>,
}

impl LeaveService {
    pub fn new(requests: Arc<dyn HolidayRequestRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { requests, clock }
    }

    /// Submit a new pending holiday request.
    pub async fn submit_request(
        &self,
        employee_id: Uuid,
        start_date: i64,
        end_date: i64,
        reason: Option<String>,
    ) -> Result<HolidayRequest> {
        let request = HolidayRequest {
            id: Uuid::new_v4(),
            employee_id,
            start_date,
            end_date,
            status: HolidayStatus::Pending,
            reason,
            created_at: self.clock.nanos_since_epoch(),
        };
        request.validate()?;
        self.requests.add_holiday_request(request.clone()).await?;
        Ok(request)
    }

    /// Decide a pending request.
    ///
    /// # Errors
    /// Returns `StaffHubError::InvalidTransition` when the request has
    /// already been decided; approved and declined are terminal.
    pub async fn decide_request(
        &self,
        id: Uuid,
        decision: HolidayStatus,
    ) -> Result<HolidayRequest> {
        let mut request = self.requests.get_holiday_request(id).await?;
        request.transition_to(decision)?;
        self.requests.update_holiday_request(request.clone()).await?;
        info!(request_id = %id, decision = %decision, "holiday request decided");
        Ok(request)
    }

    /// Requests awaiting a decision.
    pub async fn pending_requests(&self) -> Result<Vec<HolidayRequest>> {
        self.requests.holiday_requests_with_status(HolidayStatus::Pending).await
    }
}
