//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{
        PersistedTaskData, Task, TaskDetails, TaskId, TaskStatus, TaskTitle, next_updated_at,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error as DieselError;
use mockable::{Clock, DefaultClock};
use std::sync::Arc;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// Idempotent DDL creating the `tasks` table.
const CREATE_TASKS_TABLE: &str = include_str!("../../../../migrations/create_tasks.sql");

/// `PostgreSQL`-backed task repository.
///
/// Identifiers come from the `BIGSERIAL` sequence, which never reissues a
/// value. Timestamps come from the injected clock rather than the database
/// so that both adapters stamp records the same way.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository<C: Clock + Send + Sync = DefaultClock> {
    pool: TaskPgPool,
    clock: Arc<C>,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub fn new(pool: TaskPgPool) -> Self {
        Self::with_clock(pool, Arc::new(DefaultClock))
    }
}

impl<C: Clock + Send + Sync> PostgresTaskRepository<C> {
    /// Creates a new repository stamped by the given clock.
    #[must_use]
    pub const fn with_clock(pool: TaskPgPool, clock: Arc<C>) -> Self {
        Self { pool, clock }
    }

    /// Creates the `tasks` table when it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the DDL fails.
    pub async fn ensure_schema(&self) -> TaskRepositoryResult<()> {
        self.run_blocking(|connection| {
            connection
                .batch_execute(CREATE_TASKS_TABLE)
                .map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

impl From<DieselError> for TaskRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

#[async_trait]
impl<C: Clock + Send + Sync> TaskRepository for PostgresTaskRepository<C> {
    async fn insert(&self, details: &TaskDetails) -> TaskRepositoryResult<Task> {
        let timestamp = self.clock.utc();
        let new_row = NewTaskRow {
            title: details.title().as_str().to_owned(),
            description: details.description().map(str::to_owned),
            status: details.status().as_str().to_owned(),
            due_date_time: details.due_date_time(),
            created_at: timestamp,
            updated_at: timestamp,
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)?;
            row_to_task(row)
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.value()))
                .select(TaskRow::as_select())
                .get_result::<TaskRow>(connection)
                .optional()?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn exists_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let exists = diesel::select(diesel::dsl::exists(
                tasks::table.filter(tasks::id.eq(id.value())),
            ))
            .get_result::<bool>(connection)?;
            Ok(exists)
        })
        .await
    }

    async fn save(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let task_id = task.id();
        let details = task.details().clone();
        let now = self.clock.utc();

        self.run_blocking(move |connection| {
            connection.transaction::<_, TaskRepositoryError, _>(|tx| {
                // The row lock serialises concurrent writers; the last one to
                // commit wins.
                let current = tasks::table
                    .filter(tasks::id.eq(task_id.value()))
                    .select(TaskRow::as_select())
                    .for_update()
                    .get_result::<TaskRow>(tx)
                    .optional()?
                    .ok_or(TaskRepositoryError::NotFound(task_id))?;

                let changes = to_changeset(&details, next_updated_at(current.updated_at, now));
                let row = diesel::update(tasks::table.filter(tasks::id.eq(task_id.value())))
                    .set(&changes)
                    .returning(TaskRow::as_returning())
                    .get_result::<TaskRow>(tx)?;
                row_to_task(row)
            })
        })
        .await
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(tasks::table.filter(tasks::id.eq(id.value())))
                .execute(connection)?;
            if removed == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_changeset(details: &TaskDetails, updated_at: DateTime<Utc>) -> TaskChangeset {
    TaskChangeset {
        title: details.title().as_str().to_owned(),
        description: details.description().map(str::to_owned),
        status: details.status().as_str().to_owned(),
        due_date_time: details.due_date_time(),
        updated_at,
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id: persisted_id,
        title: persisted_title,
        description,
        status: persisted_status,
        due_date_time,
        created_at,
        updated_at,
    } = row;

    let id = TaskId::assigned(persisted_id).map_err(TaskRepositoryError::persistence)?;
    let title = TaskTitle::new(persisted_title).map_err(TaskRepositoryError::persistence)?;
    let status = TaskStatus::try_from(persisted_status.as_str())
        .map_err(TaskRepositoryError::persistence)?;
    let details =
        TaskDetails::new(title, status, due_date_time).with_optional_description(description);

    Ok(Task::from_persisted(PersistedTaskData {
        id,
        details,
        created_at,
        updated_at,
    }))
}
