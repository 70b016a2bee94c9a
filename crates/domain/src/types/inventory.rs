//! Stock requests and their status machine

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{NANOS_PER_DAY, STOCK_ARCHIVE_AFTER_DAYS};
use crate::errors::{Result, StaffHubError};
use crate::impl_domain_status_conversions;

/// Stock request lifecycle: strictly forward, no skips.
///
/// Archival happens at the data service seven days after delivery; the
/// client only ever advances one step at a time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Requested,
    Ordered,
    Delivered,
    Archived,
}

impl_domain_status_conversions!(StockStatus {
    Requested => "requested",
    Ordered => "ordered",
    Delivered => "delivered",
    Archived => "archived",
});

impl StockStatus {
    /// The next state in the pipeline, if any.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Requested => Some(Self::Ordered),
            Self::Ordered => Some(Self::Delivered),
            Self::Delivered => Some(Self::Archived),
            Self::Archived => None,
        }
    }

    pub fn can_transition_to(self, next: Self) -> bool {
        self.next() == Some(next)
    }
}

/// Stock request record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockRequest {
    pub id: Uuid,
    pub item_name: String,
    /// Venue area the request belongs to (bar, kitchen, soft play, ...).
    pub experience: String,
    pub quantity: u32,
    #[serde(default)]
    pub notes: String,
    pub submitter_name: String,
    pub status: StockStatus,
    pub created_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<i64>,
}

impl StockRequest {
    /// Advance the request one step, stamping `delivered_at` on delivery.
    ///
    /// # Errors
    /// Returns `StaffHubError::InvalidTransition` when already archived.
    pub fn advance(&mut self, now_ns: i64) -> Result<()> {
        let next = self.status.next().ok_or_else(|| {
            StaffHubError::InvalidTransition(format!(
                "stock request {} is already archived",
                self.id
            ))
        })?;
        if next == StockStatus::Delivered {
            self.delivered_at = Some(now_ns);
        }
        self.status = next;
        Ok(())
    }

    /// When the data service will archive this request, if it has been
    /// delivered.
    pub fn archive_due_at(&self) -> Option<i64> {
        self.delivered_at
            .map(|ns| ns + STOCK_ARCHIVE_AFTER_DAYS * NANOS_PER_DAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> StockRequest {
        StockRequest {
            id: Uuid::new_v4(),
            item_name: "Napkins".to_string(),
            experience: "Bar".to_string(),
            quantity: 12,
            notes: String::new(),
            submitter_name: "Dana".to_string(),
            status: StockStatus::Requested,
            created_at: 1_000,
            delivered_at: None,
        }
    }

    #[test]
    fn test_forward_only_pipeline() {
        // AC: requested -> ordered -> delivered -> archived, no skips
        assert!(StockStatus::Requested.can_transition_to(StockStatus::Ordered));
        assert!(!StockStatus::Requested.can_transition_to(StockStatus::Delivered));
        assert!(!StockStatus::Delivered.can_transition_to(StockStatus::Requested));
        assert_eq!(StockStatus::Archived.next(), None);
    }

    #[test]
    fn test_advance_stamps_delivery_time() {
        let mut req = request();
        req.advance(10).unwrap();
        assert_eq!(req.status, StockStatus::Ordered);
        assert!(req.delivered_at.is_none());

        req.advance(20).unwrap();
        assert_eq!(req.status, StockStatus::Delivered);
        assert_eq!(req.delivered_at, Some(20));

        req.advance(30).unwrap();
        assert_eq!(req.status, StockStatus::Archived);
        // Delivery timestamp is not overwritten by archival
        assert_eq!(req.delivered_at, Some(20));

        assert!(matches!(req.advance(40), Err(StaffHubError::InvalidTransition(_))));
    }

    #[test]
    fn test_archive_due_seven_days_after_delivery() {
        let mut req = request();
        assert_eq!(req.archive_due_at(), None);

        req.advance(10).unwrap();
        req.advance(20).unwrap();
        assert_eq!(req.archive_due_at(), Some(20 + 7 * NANOS_PER_DAY));
    }
}
