//! Appraisal records

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Appraisal record for one employee.
///
/// Completion is a plain flag set through a real update operation; the
/// projection logic only ever looks at the latest completed record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppraisalRecord {
    pub id: Uuid,
    pub employee_id: Uuid,
    /// Nanoseconds since epoch.
    pub scheduled_date: i64,
    pub appraisal_type: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub is_complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "id": "0d4f9a92-9f2a-4a5e-bb1c-64c331f36a11",
            "employee_id": "7b0f7f06-3a85-4bfa-9581-d4a7bd9f3b8e",
            "scheduled_date": 1705276800000000000,
            "appraisal_type": "quarterly"
        }"#;
        let record: AppraisalRecord = serde_json::from_str(json).unwrap();
        assert!(!record.is_complete);
        assert!(record.notes.is_empty());
    }
}
