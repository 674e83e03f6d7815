//! Application services for task orchestration.

mod lifecycle;
mod view;

pub use lifecycle::{TaskService, TaskServiceError, TaskServiceResult};
pub use view::TaskView;
