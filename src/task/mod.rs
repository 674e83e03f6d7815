//! Caseworker task lifecycle management.
//!
//! Creates, reads, updates, and deletes tasks. Every task carries a title,
//! an optional description, a status from a closed set, and a due date. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
