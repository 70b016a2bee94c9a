//! To-do tasks

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Result, StaffHubError};

/// Who a task is assigned to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum TaskAssignee {
    Everyone,
    Employee(Uuid),
}

/// Task recurrence rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "day", rename_all = "snake_case")]
pub enum TaskRecurrence {
    None,
    Weekly(Weekday),
}

/// To-do task record.
///
/// Tasks are created once; completion is one-way and modeled by populating
/// `completed_by`/`completed_at`. There is no "uncomplete".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToDoTask {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub duration_mins: u32,
    pub assignee: TaskAssignee,
    pub recurrence: TaskRecurrence,
    /// Nanoseconds since epoch; one-off tasks carry the day they are due.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
    pub creator: String,
    pub created_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
}

impl ToDoTask {
    pub fn is_complete(&self) -> bool {
        self.completed_by.is_some()
    }

    /// Mark the task complete.
    ///
    /// # Errors
    /// Returns `StaffHubError::InvalidTransition` if the task is already
    /// complete; completion is one-way.
    pub fn complete(&mut self, by: Uuid, at_ns: i64) -> Result<()> {
        if self.is_complete() {
            return Err(StaffHubError::InvalidTransition(format!(
                "task {} is already complete",
                self.id
            )));
        }
        self.completed_by = Some(by);
        self.completed_at = Some(at_ns);
        Ok(())
    }
}
