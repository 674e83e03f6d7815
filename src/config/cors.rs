//! Cross-origin request configuration.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

use super::ConfigError;

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_owned()]
}

/// Origins allowed to call the API from a browser.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Exact origins, e.g. `http://localhost:3000`.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl CorsConfig {
    /// Parses the configured origins into header values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the wildcard origin or any
    /// value that is not a valid header.
    pub fn header_values(&self) -> Result<Vec<HeaderValue>, ConfigError> {
        self.allowed_origins
            .iter()
            .map(|origin| {
                if origin.trim() == "*" {
                    return Err(ConfigError::invalid(
                        "cors.allowed_origins",
                        "wildcard origin is not supported, list origins explicitly",
                    ));
                }
                HeaderValue::from_str(origin.trim()).map_err(|err| {
                    ConfigError::invalid("cors.allowed_origins", format!("{origin}: {err}"))
                })
            })
            .collect()
    }
}
