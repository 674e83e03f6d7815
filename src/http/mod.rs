//! HTTP boundary for the task service.
//!
//! Parses JSON payloads, validates them before the service sees them, and
//! maps service outcomes onto status codes:
//!
//! | Route | Success | Failure |
//! |---|---|---|
//! | `POST /tasks` | 201 | 400 |
//! | `GET /tasks/{id}` | 200 | 404 |
//! | `GET /tasks` | 200 | |
//! | `PATCH /tasks/{id}/status` | 200 | 400, 404 |
//! | `PUT /tasks/{id}` | 200 | 400, 404 |
//! | `DELETE /tasks/{id}` | 204 | 404 |
//!
//! The same routes are mounted under `/api` as well.

pub mod dto;
pub mod error;
mod handlers;
mod router;

pub use error::{ApiError, ErrorBody};
pub use handlers::{AppState, HealthResponse};
pub use router::{build_router, cors_layer};
