//! Service layer for task creation, lookup, update, and removal.

use crate::task::{
    domain::{TaskDetails, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::TaskView;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// No task exists with the requested identifier.
    #[error("Task not found with id: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            TaskRepositoryError::Persistence(_) => Self::Repository(err),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// The sole caller of the repository's mutating operations. Holds no state
/// besides the repository handle, so clones are cheap and share storage.
pub struct TaskService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R: TaskRepository> Clone for TaskService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TaskService<R>
where
    R: TaskRepository,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Persists a new task built from validated content.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the repository rejects
    /// the insert.
    pub async fn create_task(&self, request: TaskDetails) -> TaskServiceResult<TaskView> {
        let task = self.repository.insert(&request).await?;
        info!(task_id = %task.id(), status = %task.status(), "task created");
        Ok(TaskView::from(task))
    }

    /// Retrieves a single task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has the
    /// identifier, or [`TaskServiceError::Repository`] when lookup fails.
    pub async fn get_task_by_id(&self, id: TaskId) -> TaskServiceResult<TaskView> {
        debug!(task_id = %id, "fetching task");
        let task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        Ok(TaskView::from(task))
    }

    /// Retrieves every task in store enumeration order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when lookup fails.
    pub async fn get_all_tasks(&self) -> TaskServiceResult<Vec<TaskView>> {
        let tasks = self.repository.find_all().await?;
        debug!(count = tasks.len(), "listing tasks");
        Ok(tasks.iter().map(TaskView::from).collect())
    }

    /// Replaces only the status of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has the
    /// identifier, or [`TaskServiceError::Repository`] when persistence
    /// fails.
    pub async fn update_task_status(
        &self,
        id: TaskId,
        status: TaskStatus,
    ) -> TaskServiceResult<TaskView> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        let previous = task.status();

        task.set_status(status);
        let saved = self.repository.save(&task).await?;
        info!(task_id = %id, from = %previous, to = %status, "task status updated");
        Ok(TaskView::from(saved))
    }

    /// Replaces all content fields of an existing task.
    ///
    /// Fields are overwritten wholesale: a description absent from
    /// `request` clears the stored one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has the
    /// identifier, or [`TaskServiceError::Repository`] when persistence
    /// fails.
    pub async fn update_task(
        &self,
        id: TaskId,
        request: TaskDetails,
    ) -> TaskServiceResult<TaskView> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        task.replace_details(request);
        let saved = self.repository.save(&task).await?;
        info!(task_id = %id, "task updated");
        Ok(TaskView::from(saved))
    }

    /// Deletes an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has the
    /// identifier, or [`TaskServiceError::Repository`] when persistence
    /// fails.
    pub async fn delete_task(&self, id: TaskId) -> TaskServiceResult<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(not_found(id));
        }
        self.repository.delete_by_id(id).await?;
        info!(task_id = %id, "task deleted");
        Ok(())
    }
}

fn not_found(id: TaskId) -> TaskServiceError {
    warn!(task_id = %id, "task not found");
    TaskServiceError::NotFound(id)
}
