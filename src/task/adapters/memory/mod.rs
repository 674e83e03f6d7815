//! In-memory adapter implementations.
//!
//! These adapters provide simple, thread-safe implementations suitable for
//! unit testing and single-process deployments without a database.

mod task;

pub use task::InMemoryTaskRepository;
