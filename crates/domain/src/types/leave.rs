//! Holiday requests and their status transitions

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Result, StaffHubError};
use crate::impl_domain_status_conversions;

/// Lifecycle of a holiday request.
///
/// `Pending` may move to `Approved` or `Declined`; both are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HolidayStatus {
    Pending,
    Approved,
    Declined,
}

impl_domain_status_conversions!(HolidayStatus {
    Pending => "pending",
    Approved => "approved",
    Declined => "declined",
});

impl HolidayStatus {
    /// Whether the one-directional status machine permits this transition.
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!((self, next), (Self::Pending, Self::Approved) | (Self::Pending, Self::Declined))
    }
}

/// Holiday request record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HolidayRequest {
    pub id: Uuid,
    pub employee_id: Uuid,
    /// Nanoseconds since epoch, inclusive range start.
    pub start_date: i64,
    /// Nanoseconds since epoch, inclusive range end.
    pub end_date: i64,
    pub status: HolidayStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub created_at: i64,
}

impl HolidayRequest {
    /// Validate the record's invariants.
    ///
    /// # Errors
    /// Returns `StaffHubError::InvalidInput` when `start_date > end_date`.
    pub fn validate(&self) -> Result<()> {
        if self.start_date > self.end_date {
            return Err(StaffHubError::InvalidInput(format!(
                "holiday request {} starts after it ends",
                self.id
            )));
        }
        Ok(())
    }

    /// Move the request to a new status, enforcing the transition guard.
    ///
    /// # Errors
    /// Returns `StaffHubError::InvalidTransition` for skipped or backward
    /// moves (including re-approving an already-decided request).
    pub fn transition_to(&mut self, next: HolidayStatus) -> Result<()> {
        if !self.status.can_transition_to(next) {
            return Err(StaffHubError::InvalidTransition(format!(
                "holiday request {}: {} -> {}",
                self.id, self.status, next
            )));
        }
        self.status = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(status: HolidayStatus) -> HolidayRequest {
        HolidayRequest {
            id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            start_date: 1_000,
            end_date: 2_000,
            status,
            reason: None,
            created_at: 500,
        }
    }

    #[test]
    fn test_pending_transitions_are_allowed() {
        let mut req = request(HolidayStatus::Pending);
        assert!(req.transition_to(HolidayStatus::Approved).is_ok());
        assert_eq!(req.status, HolidayStatus::Approved);

        let mut req = request(HolidayStatus::Pending);
        assert!(req.transition_to(HolidayStatus::Declined).is_ok());
    }

    #[test]
    fn test_decided_states_are_terminal() {
        // AC: approved/declined are terminal; the UI never re-approves
        for decided in [HolidayStatus::Approved, HolidayStatus::Declined] {
            let mut req = request(decided);
            for next in [HolidayStatus::Pending, HolidayStatus::Approved, HolidayStatus::Declined] {
                assert!(matches!(
                    req.transition_to(next),
                    Err(StaffHubError::InvalidTransition(_))
                ));
            }
        }
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let mut req = request(HolidayStatus::Pending);
        req.end_date = req.start_date - 1;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_status_serde_snake_case() {
        let json = serde_json::to_string(&HolidayStatus::Approved).unwrap();
        assert_eq!(json, "\"approved\"");
    }
}
