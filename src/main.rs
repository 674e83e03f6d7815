//! Caseworker task service binary.
//!
//! Loads configuration from `.env`, `tasks.toml`, and `TASKS_*` variables,
//! installs logging, and serves the HTTP API until Ctrl-C.

use caseworker_tasks::{app, config::AppConfig, telemetry};
use eyre::WrapErr;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = AppConfig::load_with_dotenv().wrap_err("load configuration")?;
    telemetry::init(&config.log.filter);
    app::serve(config).await.wrap_err("serve task API")
}
