//! Task store selection.

use serde::{Deserialize, Serialize};

const fn default_max_connections() -> u32 {
    10
}

/// Which repository adapter backs the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// Process-local store; contents are lost on restart.
    #[default]
    Memory,
    /// `PostgreSQL` via a pooled Diesel connection.
    Postgres,
}

/// Task store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Selected adapter.
    #[serde(default)]
    pub backend: StorageBackend,

    /// Connection URL, required for the `postgres` backend.
    #[serde(default)]
    pub database_url: Option<String>,

    /// Upper bound on pooled database connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            database_url: None,
            max_connections: default_max_connections(),
        }
    }
}
