//! Port interfaces for holiday request data access

use async_trait::async_trait;
use staffhub_domain::{HolidayRequest, HolidayStatus, Result};
use uuid::Uuid;

/// Data access for holiday requests.
#[async_trait]
pub trait HolidayRequestRepository: Send + Sync {
    /// All holiday requests.
    async fn list_holiday_requests(&self) -> Result<Vec<HolidayRequest>>;

    /// One holiday request by id.
    ///
    /// Returns `StaffHubError::NotFound` for an unknown id.
    async fn get_holiday_request(&self, id: Uuid) -> Result<HolidayRequest>;

    /// Holiday requests for one employee.
    async fn holiday_requests_for(&self, employee_id: Uuid) -> Result<Vec<HolidayRequest>>;

    /// Holiday requests with the given status.
    async fn holiday_requests_with_status(
        &self,
        status: HolidayStatus,
    ) -> Result<Vec<HolidayRequest>>;

    /// Create a new holiday request.
    async fn add_holiday_request(&self, request: HolidayRequest) -> Result<()>;

    /// Replace an existing holiday request wholesale.
    async fn update_holiday_request(&self, request: HolidayRequest) -> Result<()>;
}
