//! Port interfaces for to-do task data access

use async_trait::async_trait;
use staffhub_domain::{Result, ToDoTask};
use uuid::Uuid;

/// Data access for to-do tasks.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// All tasks.
    async fn list_tasks(&self) -> Result<Vec<ToDoTask>>;

    /// One task by id.
    ///
    /// Returns `StaffHubError::NotFound` for an unknown id.
    async fn get_task(&self, id: Uuid) -> Result<ToDoTask>;

    /// Create a new task.
    async fn add_task(&self, task: ToDoTask) -> Result<()>;

    /// Replace an existing task wholesale.
    async fn update_task(&self, task: ToDoTask) -> Result<()>;

    /// Delete a task.
    async fn delete_task(&self, id: Uuid) -> Result<()>;
}
