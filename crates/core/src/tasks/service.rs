//! Task service - to-do task lifecycle

use std::sync::Arc;

use staffhub_common::time::Clock;
use staffhub_domain::{Result, TaskAssignee, ToDoTask};
use uuid::Uuid;

use super::ports::TaskRepository;

/// To-do task service.
pub struct TaskService {
    tasks: Arc<dyn TaskRepository>,
    clock: Arc<dyn Clock>,
}

impl TaskService {
    pub fn new(tasks: Arc<dyn TaskRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { tasks, clock }
    }

    /// Mark a task complete on behalf of `employee_id`.
    ///
    /// Completion is one-way; completing an already-complete task fails
    /// with `StaffHubError::InvalidTransition`.
    pub async fn complete_task(&self, id: Uuid, employee_id: Uuid) -> Result<ToDoTask> {
        let mut task = self.tasks.get_task(id).await?;
        task.complete(employee_id, self.clock.nanos_since_epoch())?;
        self.tasks.update_task(task.clone()).await?;
        Ok(task)
    }

    /// Open tasks visible to `employee_id`: assigned to everyone or to
    /// them specifically.
    pub async fn open_tasks_for(&self, employee_id: Uuid) -> Result<Vec<ToDoTask>> {
        let tasks = self.tasks.list_tasks().await?;
        Ok(tasks
            .into_iter()
            .filter(|t| !t.is_complete())
            .filter(|t| match t.assignee {
                TaskAssignee::Everyone => true,
                TaskAssignee::Employee(id) => id == employee_id,
            })
            .collect())
    }
}
