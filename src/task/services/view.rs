//! Outward-facing task representation.

use crate::task::domain::{Task, TaskId, TaskStatus};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

/// Task view returned to callers, including server-assigned fields.
///
/// `dueDateTime` serializes as an ISO-8601 local date-time and the two
/// audit timestamps as RFC 3339 UTC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    /// Store-assigned identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Optional description; `null` when absent.
    pub description: Option<String>,
    /// Current status.
    pub status: TaskStatus,
    /// Due date and time.
    pub due_date_time: NaiveDateTime,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(str::to_owned),
            status: task.status(),
            due_date_time: task.due_date_time(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

impl From<Task> for TaskView {
    fn from(task: Task) -> Self {
        Self::from(&task)
    }
}
