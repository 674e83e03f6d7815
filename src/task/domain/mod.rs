//! Domain model for caseworker tasks.
//!
//! The task domain models the task content, its closed status set, and the
//! persisted aggregate while keeping all infrastructure concerns outside of
//! the domain boundary.

mod error;
mod ids;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task, TaskDetails, next_updated_at};
