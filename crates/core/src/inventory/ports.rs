//! Port interfaces for stock request data access

use async_trait::async_trait;
use staffhub_domain::{Result, StockRequest, StockStatus};
use uuid::Uuid;

/// Data access for stock requests.
///
/// Archival (7 days after delivery) is a batch transition owned by the
/// data service; this client only ever advances a request one step.
#[async_trait]
pub trait StockRequestRepository: Send + Sync {
    /// All stock requests.
    async fn list_stock_requests(&self) -> Result<Vec<StockRequest>>;

    /// Stock requests with the given status.
    async fn stock_requests_with_status(&self, status: StockStatus)
        -> Result<Vec<StockRequest>>;

    /// One stock request by id.
    ///
    /// Returns `StaffHubError::NotFound` for an unknown id.
    async fn get_stock_request(&self, id: Uuid) -> Result<StockRequest>;

    /// Create a new stock request.
    async fn add_stock_request(&self, request: StockRequest) -> Result<()>;

    /// Replace an existing stock request wholesale.
    async fn update_stock_request(&self, request: StockRequest) -> Result<()>;
}
