//! Layered configuration loading using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TASKS_*` prefix, `__` as separator)
//! 2. `tasks.toml` in the working directory
//! 3. Built-in defaults
//!
//! `TASKS_SERVER__PORT=9090` maps to `server.port`,
//! `TASKS_STORAGE__DATABASE_URL` to `storage.database_url`.

mod cors;
mod error;
mod logging;
mod server;
mod storage;

pub use cors::CorsConfig;
pub use error::ConfigError;
pub use logging::LogConfig;
pub use server::ServerConfig;
pub use storage::{StorageBackend, StorageConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Name of the optional configuration file read from the working directory.
pub const CONFIG_FILE: &str = "tasks.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "TASKS_";

/// Complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Task store settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Browser cross-origin settings.
    #[serde(default)]
    pub cors: CorsConfig,
    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    /// Loads and validates configuration from all sources.
    ///
    /// Does not read `.env`; use [`AppConfig::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source cannot be parsed or a value
    /// fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `.env` from the working directory, then all other sources.
    ///
    /// A missing `.env` file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `.env` is unreadable or loading fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(err) if err.not_found() => {}
            Err(err) => return Err(ConfigError::invalid(".env", err.to_string())),
        }
        Self::load()
    }

    /// Builds the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Checks cross-field constraints serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending
    /// field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.backend == StorageBackend::Postgres
            && self
                .storage
                .database_url
                .as_deref()
                .is_none_or(|url| url.trim().is_empty())
        {
            return Err(ConfigError::invalid(
                "storage.database_url",
                "required when storage.backend is postgres",
            ));
        }
        if self.storage.max_connections == 0 {
            return Err(ConfigError::invalid(
                "storage.max_connections",
                "must be at least 1",
            ));
        }
        self.cors.header_values()?;
        Ok(())
    }
}
