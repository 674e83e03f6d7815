//! Repository port for task persistence and lookup.

use crate::task::domain::{Task, TaskDetails, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations own identifier and timestamp assignment. Each mutating
/// call runs as one atomic unit against the store: a `save` or
/// `delete_by_id` racing with a concurrent delete reports
/// [`TaskRepositoryError::NotFound`] rather than silently doing nothing.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Inserts new task content.
    ///
    /// Assigns the next identifier and sets both timestamps to the current
    /// clock time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store rejects
    /// the write.
    async fn insert(&self, details: &TaskDetails) -> TaskRepositoryResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every stored task in ascending identifier order.
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Reports whether a task with the identifier exists.
    async fn exists_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool>;

    /// Persists the content of an existing task.
    ///
    /// Keeps the stored `created_at` and refreshes `updated_at`; the
    /// timestamps carried by `task` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn save(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Deletes a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task was removed.
    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
