//! Port interfaces for shift data access
//!
//! These traits define the boundaries between core business logic
//! and the remote data service adapters.

use async_trait::async_trait;
use staffhub_domain::{Result, Shift};
use uuid::Uuid;

/// Data access for shift records.
///
/// Updates replace the whole record; there is no partial mutation.
#[async_trait]
pub trait ShiftRepository: Send + Sync {
    /// All shifts known to the data service.
    async fn list_shifts(&self) -> Result<Vec<Shift>>;

    /// Shifts whose `date` falls within `[start_ns, end_ns]` (inclusive).
    async fn shifts_in_range(&self, start_ns: i64, end_ns: i64) -> Result<Vec<Shift>>;

    /// Create a new shift record.
    async fn add_shift(&self, shift: Shift) -> Result<()>;

    /// Replace an existing shift record wholesale.
    async fn update_shift(&self, shift: Shift) -> Result<()>;

    /// Delete a shift record.
    async fn delete_shift(&self, id: Uuid) -> Result<()>;
}
