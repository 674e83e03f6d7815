//! Service assembly: store selection, router, and listener.

use std::sync::Arc;

use axum::Router;
use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    config::{AppConfig, ConfigError, StorageBackend},
    http::{AppState, build_router, cors_layer},
    task::{
        adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
        ports::{TaskRepository, TaskRepositoryError},
        services::TaskService,
    },
};

/// Errors that stop the service from starting or serving.
#[derive(Debug, Error)]
pub enum ServeError {
    /// Configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The database pool could not be built.
    #[error("failed to build database pool: {0}")]
    Pool(#[from] PoolError),

    /// Schema bootstrap failed.
    #[error("failed to prepare task store: {0}")]
    Store(#[from] TaskRepositoryError),

    /// Binding or serving the listener failed.
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A blocking setup task panicked or was cancelled.
    #[error("setup task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Builds the router for a repository using the configured CORS origins.
///
/// # Errors
///
/// Returns [`ConfigError`] when an origin is not a valid header value.
pub fn router_for<R: TaskRepository + 'static>(
    config: &AppConfig,
    repository: R,
) -> Result<Router, ConfigError> {
    let service = TaskService::new(Arc::new(repository));
    let cors = cors_layer(config.cors.header_values()?);
    Ok(build_router(AppState::new(service), cors))
}

/// Builds the configured store and serves HTTP until Ctrl-C.
///
/// # Errors
///
/// Returns [`ServeError`] when the store cannot be prepared or the listener
/// fails.
pub async fn serve(config: AppConfig) -> Result<(), ServeError> {
    config.validate()?;
    match config.storage.backend {
        StorageBackend::Memory => {
            info!("using in-memory task store");
            run(&config, InMemoryTaskRepository::new()).await
        }
        StorageBackend::Postgres => {
            let repository = connect_postgres(&config).await?;
            repository.ensure_schema().await?;
            info!("using PostgreSQL task store");
            run(&config, repository).await
        }
    }
}

async fn connect_postgres(config: &AppConfig) -> Result<PostgresTaskRepository, ServeError> {
    let url = config
        .storage
        .database_url
        .clone()
        .ok_or_else(|| {
            ConfigError::invalid(
                "storage.database_url",
                "required when storage.backend is postgres",
            )
        })?;
    let max_size = config.storage.max_connections;

    let pool = tokio::task::spawn_blocking(move || {
        Pool::builder()
            .max_size(max_size)
            .build(ConnectionManager::<PgConnection>::new(url))
    })
    .await??;
    Ok(PostgresTaskRepository::new(pool))
}

async fn run<R: TaskRepository + 'static>(
    config: &AppConfig,
    repository: R,
) -> Result<(), ServeError> {
    let router = router_for(config, repository)?;
    let listener = TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    info!(address = %listener.local_addr()?, "task service listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("task service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
