//! Task aggregate root and its caller-supplied content.

use super::{TaskId, TaskStatus, TaskTitle};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

/// Caller-supplied task content.
///
/// These are the four fields a create or full update provides. A value of
/// this type has no identity until a repository inserts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDetails {
    title: TaskTitle,
    description: Option<String>,
    status: TaskStatus,
    due_date_time: NaiveDateTime,
}

impl TaskDetails {
    /// Creates task content with required fields and no description.
    #[must_use]
    pub const fn new(title: TaskTitle, status: TaskStatus, due_date_time: NaiveDateTime) -> Self {
        Self {
            title,
            description: None,
            status,
            due_date_time,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets or clears the task description.
    #[must_use]
    pub fn with_optional_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date and time.
    #[must_use]
    pub const fn due_date_time(&self) -> NaiveDateTime {
        self.due_date_time
    }
}

/// Task aggregate root.
///
/// Only repositories construct tasks: they own identifier and timestamp
/// assignment. Services mutate the content fields and hand the task back
/// to the repository to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    details: TaskDetails,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted task content.
    pub details: TaskDetails,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            details: data.details,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task content.
    #[must_use]
    pub const fn details(&self) -> &TaskDetails {
        &self.details
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        self.details.title()
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.details.description()
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.details.status()
    }

    /// Returns the due date and time.
    #[must_use]
    pub const fn due_date_time(&self) -> NaiveDateTime {
        self.details.due_date_time()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces only the status, leaving the other content untouched.
    pub const fn set_status(&mut self, status: TaskStatus) {
        self.details.status = status;
    }

    /// Replaces all content fields wholesale.
    ///
    /// A description absent from `details` clears the stored one.
    pub fn replace_details(&mut self, details: TaskDetails) {
        self.details = details;
    }
}

/// Computes the modification timestamp for a save.
///
/// Never moves backwards, so `created_at <= updated_at` holds even when the
/// wall clock steps back between writes.
#[must_use]
pub fn next_updated_at(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    previous.max(now)
}
