//! `PostgreSQL` integration tests for the task service.

use caseworker_tasks::task::{
    domain::{TaskId, TaskStatus},
    services::TaskServiceError,
};
use rstest::rstest;

use crate::postgres::helpers::{BoxError, PgContext, pg_context, task_details};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_lifecycle_round_trips_through_postgres(
    #[future] pg_context: Result<Option<PgContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = pg_context.await? else {
        return Ok(());
    };
    let service = &ctx.service;

    let created = service
        .create_task(task_details("Draft order", TaskStatus::Todo)?.with_description("Family court"))
        .await?;
    let started = service
        .update_task_status(created.id, TaskStatus::InProgress)
        .await?;
    let fetched = service.get_task_by_id(created.id).await?;

    assert_eq!(started.status, TaskStatus::InProgress);
    assert_eq!(started.description.as_deref(), Some("Family court"));
    assert_eq!(started.created_at, created.created_at);
    assert!(started.updated_at > created.updated_at);
    assert_eq!(fetched, started);
    assert_eq!(service.get_all_tasks().await?, vec![fetched]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_delete_reports_not_found(
    #[future] pg_context: Result<Option<PgContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = pg_context.await? else {
        return Ok(());
    };
    let created = ctx
        .service
        .create_task(task_details("Draft order", TaskStatus::Todo)?)
        .await?;

    ctx.service.delete_task(created.id).await?;
    let second = ctx.service.delete_task(created.id).await;

    assert!(matches!(second, Err(TaskServiceError::NotFound(id)) if id == created.id));
    assert!(matches!(
        ctx.service.get_task_by_id(created.id).await,
        Err(TaskServiceError::NotFound(_))
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_unknown_id_reports_not_found_message(
    #[future] pg_context: Result<Option<PgContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = pg_context.await? else {
        return Ok(());
    };

    let result = ctx
        .service
        .update_task(TaskId::new(77), task_details("Draft order", TaskStatus::Todo)?)
        .await;

    let err = result.err().ok_or("update of an unknown id should fail")?;
    assert_eq!(err.to_string(), "Task not found with id: 77");
    assert!(ctx.service.get_all_tasks().await?.is_empty());
    Ok(())
}
