//! Inventory service - stock request lifecycle

use std::sync::Arc;

use staffhub_common::time::Clock;
use staffhub_domain::{Result, StockRequest, StockStatus};
use tracing::info;
use uuid::Uuid;

use super::ports::StockRequestRepository;

/// Stock request service.
pub struct InventoryService {
    requests: Arc<dyn StockRequestRepository>,
    clock: Arc<dyn Clock>,
}

impl InventoryService {
    pub fn new(requests: Arc<dyn StockRequestRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { requests, clock }
    }

    /// Submit a new stock request.
    pub async fn submit_request(
        &self,
        item_name: String,
        experience: String,
        quantity: u32,
        notes: String,
        submitter_name: String,
    ) -> Result<StockRequest> {
        let request = StockRequest {
            id: Uuid::new_v4(),
            item_name,
            experience,
            quantity,
            notes,
            submitter_name,
            status: StockStatus::Requested,
            created_at: self.clock.nanos_since_epoch(),
            delivered_at: None,
        };
        self.requests.add_stock_request(request.clone()).await?;
        Ok(request)
    }

    /// Advance a request one step along the pipeline.
    ///
    /// # Errors
    /// Returns `StaffHubError::InvalidTransition` when already archived.
    pub async fn advance_request(&self, id: Uuid) -> Result<StockRequest> {
        let mut request = self.requests.get_stock_request(id).await?;
        request.advance(self.clock.nanos_since_epoch())?;
        self.requests.update_stock_request(request.clone()).await?;
        info!(request_id = %id, status = %request.status, "stock request advanced");
        Ok(request)
    }

    /// Requests not yet delivered.
    pub async fn outstanding_requests(&self) -> Result<Vec<StockRequest>> {
        let requests = self.requests.list_stock_requests().await?;
        Ok(requests
            .into_iter()
            .filter(|r| matches!(r.status, StockStatus::Requested | StockStatus::Ordered))
            .collect())
    }
}
