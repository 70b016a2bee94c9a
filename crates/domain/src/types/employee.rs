//! Employee records

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access role controlling which views an account can reach.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AccessRole {
    Staff,
    Supervisor,
    Manager,
    Admin,
}

impl Default for AccessRole {
    fn default() -> Self {
        Self::Staff
    }
}

/// Employee record as held by the data service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: Uuid,
    pub full_name: String,
    pub job_title: String,
    pub department: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Nanoseconds since epoch.
    pub start_date: i64,
    pub is_active: bool,
    #[serde(default)]
    pub role: AccessRole,
    #[serde(default)]
    pub account_level: u8,
}
