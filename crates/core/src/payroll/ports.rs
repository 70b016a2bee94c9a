//! Port interfaces for employee data access

use async_trait::async_trait;
use staffhub_domain::{Employee, Result};
use uuid::Uuid;

/// Data access for employee records.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// The full roster.
    async fn list_employees(&self) -> Result<Vec<Employee>>;

    /// One employee by id.
    ///
    /// Returns `StaffHubError::NotFound` for an unknown id.
    async fn get_employee(&self, id: Uuid) -> Result<Employee>;

    /// Create a new employee record.
    async fn add_employee(&self, employee: Employee) -> Result<()>;

    /// Replace an existing employee record wholesale.
    async fn update_employee(&self, employee: Employee) -> Result<()>;
}
