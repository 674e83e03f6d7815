//! Status codes and bodies for the task routes.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use rstest::rstest;
use serde_json::{Value, json};

use super::helpers::{create, draft_order, router, send, send_request};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_returns_201_with_full_view(router: Router) -> Result<(), eyre::Report> {
    let response = send(
        &router,
        Method::POST,
        "/tasks",
        Some(json!({
            "title": "Draft order",
            "description": "Family court bundle",
            "status": "TODO",
            "dueDateTime": "2026-02-01T10:00:00"
        })),
    )
    .await?;

    eyre::ensure!(response.status == StatusCode::CREATED, "got {}", response.status);
    let body = &response.body;
    eyre::ensure!(body["id"] == json!(1), "unexpected id: {body}");
    eyre::ensure!(body["title"] == json!("Draft order"), "title: {body}");
    eyre::ensure!(body["description"] == json!("Family court bundle"), "desc: {body}");
    eyre::ensure!(body["status"] == json!("TODO"), "status: {body}");
    eyre::ensure!(body["dueDateTime"] == json!("2026-02-01T10:00:00"), "due: {body}");
    eyre::ensure!(body["createdAt"].is_string(), "createdAt missing: {body}");
    eyre::ensure!(body["createdAt"] == body["updatedAt"], "timestamps differ: {body}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn microsecond_due_date_is_echoed_unchanged(router: Router) -> Result<(), eyre::Report> {
    let due = "2026-02-01T10:00:00.123456";
    let id = create(
        &router,
        json!({"title": "Draft order", "status": "TODO", "dueDateTime": due}),
    )
    .await?;

    let response = send(&router, Method::GET, &format!("/tasks/{id}"), None).await?;
    eyre::ensure!(response.body["dueDateTime"] == json!(due), "{}", response.body);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn absent_description_serializes_as_null(router: Router) -> Result<(), eyre::Report> {
    let id = create(&router, draft_order()).await?;
    let response = send(&router, Method::GET, &format!("/tasks/{id}"), None).await?;

    eyre::ensure!(response.status == StatusCode::OK, "got {}", response.status);
    eyre::ensure!(response.body["description"].is_null(), "{}", response.body);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_is_empty_array_on_fresh_store(router: Router) -> Result<(), eyre::Report> {
    let response = send(&router, Method::GET, "/tasks", None).await?;

    eyre::ensure!(response.status == StatusCode::OK, "got {}", response.status);
    eyre::ensure!(response.body == json!([]), "expected [], got {}", response.body);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_returns_tasks_in_creation_order(router: Router) -> Result<(), eyre::Report> {
    for title in ["First", "Second"] {
        create(
            &router,
            json!({"title": title, "status": "IN_PROGRESS", "dueDateTime": "2026-03-01T09:00:00"}),
        )
        .await?;
    }

    let response = send(&router, Method::GET, "/tasks", None).await?;
    let titles: Vec<&str> = response
        .body
        .as_array()
        .ok_or_else(|| eyre::eyre!("expected array: {}", response.body))?
        .iter()
        .filter_map(|task| task["title"].as_str())
        .collect();

    eyre::ensure!(titles == ["First", "Second"], "unexpected order: {titles:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn patch_status_changes_only_status(router: Router) -> Result<(), eyre::Report> {
    let id = create(&router, draft_order()).await?;
    let before = send(&router, Method::GET, &format!("/tasks/{id}"), None).await?;

    let response = send(
        &router,
        Method::PATCH,
        &format!("/tasks/{id}/status"),
        Some(json!({"status": "COMPLETED"})),
    )
    .await?;

    eyre::ensure!(response.status == StatusCode::OK, "got {}", response.status);
    for field in ["id", "title", "description", "dueDateTime", "createdAt"] {
        eyre::ensure!(
            response.body[field] == before.body[field],
            "{field} changed: {} -> {}",
            before.body[field],
            response.body[field]
        );
    }
    eyre::ensure!(response.body["status"] == json!("COMPLETED"), "{}", response.body);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn put_replaces_every_field(router: Router) -> Result<(), eyre::Report> {
    let id = create(
        &router,
        json!({
            "title": "Draft order",
            "description": "Old notes",
            "status": "TODO",
            "dueDateTime": "2026-02-01T10:00:00"
        }),
    )
    .await?;

    let response = send(
        &router,
        Method::PUT,
        &format!("/tasks/{id}"),
        Some(json!({
            "title": "Serve order",
            "status": "IN_PROGRESS",
            "dueDateTime": "2026-02-03T16:30:00"
        })),
    )
    .await?;

    eyre::ensure!(response.status == StatusCode::OK, "got {}", response.status);
    let body = &response.body;
    eyre::ensure!(body["title"] == json!("Serve order"), "{body}");
    eyre::ensure!(body["description"].is_null(), "description inherited: {body}");
    eyre::ensure!(body["status"] == json!("IN_PROGRESS"), "{body}");
    eyre::ensure!(body["dueDateTime"] == json!("2026-02-03T16:30:00"), "{body}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_returns_204_then_404(router: Router) -> Result<(), eyre::Report> {
    let id = create(&router, draft_order()).await?;
    let uri = format!("/tasks/{id}");

    let first = send(&router, Method::DELETE, &uri, None).await?;
    eyre::ensure!(first.status == StatusCode::NO_CONTENT, "got {}", first.status);
    eyre::ensure!(first.body == Value::Null, "204 should have no body");

    let second = send(&router, Method::DELETE, &uri, None).await?;
    eyre::ensure!(second.status == StatusCode::NOT_FOUND, "got {}", second.status);
    Ok(())
}

#[rstest]
#[case(Method::GET, "/tasks/77", None)]
#[case(Method::PATCH, "/tasks/77/status", Some(json!({"status": "COMPLETED"})))]
#[case(Method::PUT, "/tasks/77", Some(draft_order()))]
#[case(Method::DELETE, "/tasks/77", None)]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_id_answers_404_with_message(
    router: Router,
    #[case] method: Method,
    #[case] uri: &str,
    #[case] body: Option<Value>,
) -> Result<(), eyre::Report> {
    let response = send(&router, method, uri, body).await?;

    eyre::ensure!(response.status == StatusCode::NOT_FOUND, "got {}", response.status);
    eyre::ensure!(
        response.body["message"] == json!("Task not found with id: 77"),
        "{}",
        response.body
    );
    eyre::ensure!(response.body["error"] == json!("Not Found"), "{}", response.body);
    eyre::ensure!(response.body.get("validationErrors").is_none(), "{}", response.body);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn routes_are_also_served_under_api_prefix(router: Router) -> Result<(), eyre::Report> {
    let created = send(&router, Method::POST, "/api/tasks", Some(draft_order())).await?;
    eyre::ensure!(created.status == StatusCode::CREATED, "got {}", created.status);

    let fetched = send(&router, Method::GET, "/tasks/1", None).await?;
    eyre::ensure!(fetched.status == StatusCode::OK, "got {}", fetched.status);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn health_reports_ok(router: Router) -> Result<(), eyre::Report> {
    let response = send(&router, Method::GET, "/health", None).await?;

    eyre::ensure!(response.status == StatusCode::OK, "got {}", response.status);
    eyre::ensure!(response.body["status"] == json!("ok"), "{}", response.body);
    eyre::ensure!(response.body["timestamp"].is_string(), "{}", response.body);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cors_preflight_admits_configured_origin(router: Router) -> Result<(), eyre::Report> {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/tasks")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())?;

    let response = send_request(&router, request).await?;

    let allowed = response
        .headers
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .and_then(|value| value.to_str().ok());
    eyre::ensure!(
        allowed == Some("http://localhost:3000"),
        "unexpected allow-origin: {allowed:?}"
    );
    Ok(())
}
