//! Request handlers mapping the five CRUD verbs onto the task service.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{
    dto::{StatusPayload, TaskPayload},
    error::ApiError,
};
use crate::task::{
    domain::TaskId,
    ports::TaskRepository,
    services::{TaskService, TaskView},
};

/// Shared handler dependencies.
pub struct AppState<R: TaskRepository> {
    /// Task service used by every handler.
    pub tasks: TaskService<R>,
}

impl<R: TaskRepository> AppState<R> {
    /// Wraps a task service for use as router state.
    #[must_use]
    pub const fn new(tasks: TaskService<R>) -> Self {
        Self { tasks }
    }
}

impl<R: TaskRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            tasks: self.tasks.clone(),
        }
    }
}

type ApiResult<T> = Result<T, ApiError>;

fn task_id(path: Result<Path<i64>, PathRejection>) -> ApiResult<TaskId> {
    let Path(raw) = path?;
    Ok(TaskId::new(raw))
}

/// `POST /tasks`
pub(super) async fn create_task<R: TaskRepository>(
    State(state): State<AppState<R>>,
    payload: Result<Json<TaskPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TaskView>)> {
    let Json(body) = payload?;
    let request = body.validate()?;
    let view = state.tasks.create_task(request).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// `GET /tasks/{id}`
pub(super) async fn get_task<R: TaskRepository>(
    State(state): State<AppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<TaskView>> {
    let id = task_id(path)?;
    Ok(Json(state.tasks.get_task_by_id(id).await?))
}

/// `GET /tasks`
pub(super) async fn list_tasks<R: TaskRepository>(
    State(state): State<AppState<R>>,
) -> ApiResult<Json<Vec<TaskView>>> {
    Ok(Json(state.tasks.get_all_tasks().await?))
}

/// `PATCH /tasks/{id}/status`
pub(super) async fn update_task_status<R: TaskRepository>(
    State(state): State<AppState<R>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<StatusPayload>, JsonRejection>,
) -> ApiResult<Json<TaskView>> {
    let id = task_id(path)?;
    let Json(body) = payload?;
    let status = body.validate()?;
    Ok(Json(state.tasks.update_task_status(id, status).await?))
}

/// `PUT /tasks/{id}`
pub(super) async fn update_task<R: TaskRepository>(
    State(state): State<AppState<R>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<TaskPayload>, JsonRejection>,
) -> ApiResult<Json<TaskView>> {
    let id = task_id(path)?;
    let Json(body) = payload?;
    let request = body.validate()?;
    Ok(Json(state.tasks.update_task(id, request).await?))
}

/// `DELETE /tasks/{id}`
pub(super) async fn delete_task<R: TaskRepository>(
    State(state): State<AppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = task_id(path)?;
    state.tasks.delete_task(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Liveness payload.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests.
    pub status: &'static str,
    /// Time the health check was answered.
    pub timestamp: DateTime<Utc>,
}

/// `GET /health`
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
    })
}
