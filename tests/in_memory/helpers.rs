//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use caseworker_tasks::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskDetails, TaskStatus, TaskTitle},
    services::TaskService,
};
use chrono::{NaiveDate, NaiveDateTime};
use rstest::fixture;

/// Service type backed by the in-memory repository.
pub type TestService = TaskService<InMemoryTaskRepository>;

/// Provides a service over a fresh, empty repository.
#[fixture]
pub fn service() -> TestService {
    TaskService::new(Arc::new(InMemoryTaskRepository::new()))
}

/// Returns a due date in February 2026 at the given day and hour.
///
/// # Errors
///
/// Returns an error if the day or hour is out of range.
pub fn due(day: u32, hour: u32) -> Result<NaiveDateTime, eyre::Report> {
    NaiveDate::from_ymd_opt(2026, 2, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .ok_or_else(|| eyre::eyre!("invalid due date 2026-02-{day} {hour}:00"))
}

/// Builds validated task content with the default due date.
///
/// # Errors
///
/// Returns an error if the title is blank.
pub fn task_details(title: &str, status: TaskStatus) -> Result<TaskDetails, eyre::Report> {
    Ok(TaskDetails::new(TaskTitle::new(title)?, status, due(1, 10)?))
}
