//! Caseworker task-tracking service.
//!
//! Lets clients create, read, update, and delete caseworker tasks over a
//! small JSON HTTP API. Each task carries a title, an optional description,
//! a status from a closed set, and a due date-time.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`task`]: Task domain, repository port, adapters, and service
//! - [`http`]: Request validation and the axum router
//! - [`config`]: Layered configuration
//! - [`app`]: Store selection and server startup
//! - [`telemetry`]: Tracing subscriber setup

pub mod app;
pub mod config;
pub mod http;
pub mod task;
pub mod telemetry;
