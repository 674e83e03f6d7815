//! Route table and middleware stack.

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, patch},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{self, AppState};
use crate::task::ports::TaskRepository;

/// Builds the application router.
///
/// Task routes are served both at the root and under `/api`.
#[must_use]
pub fn build_router<R: TaskRepository + 'static>(state: AppState<R>, cors: CorsLayer) -> Router {
    Router::new()
        .merge(task_routes())
        .nest("/api", task_routes())
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn task_routes<R: TaskRepository + 'static>() -> Router<AppState<R>> {
    Router::new()
        .route(
            "/tasks",
            get(handlers::list_tasks::<R>).post(handlers::create_task::<R>),
        )
        .route(
            "/tasks/{id}",
            get(handlers::get_task::<R>)
                .put(handlers::update_task::<R>)
                .delete(handlers::delete_task::<R>),
        )
        .route(
            "/tasks/{id}/status",
            patch(handlers::update_task_status::<R>),
        )
}

/// Builds a CORS layer admitting the given origins.
#[must_use]
pub fn cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE])
}
