//! REST API integration tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::sync::Arc;

use axum_test::TestServer;
use http::StatusCode;
use serde_json::{Value, json};
use tasktracker_core::{NewTask, Task};
use tasktracker_web::{AppState, InMemoryTaskStore, StoreError, TaskStore, routes};

fn create_test_server(store: Arc<dyn TaskStore>) -> TestServer {
    let app = routes::create_router().with_state(AppState::new(store));
    TestServer::new(app).expect("Failed to create test server")
}

fn valid_payload(title: &str) -> Value {
    json!({
        "title": title,
        "description": "",
        "priority": "High",
        "due_date": "2030-01-15",
        "status": "Pending",
    })
}

/// Store that fails every call with a fixed message.
struct FailingStore;

#[async_trait::async_trait]
impl TaskStore for FailingStore {
    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        Err(StoreError::Request("connection refused".to_string()))
    }

    async fn insert_task(&self, _task: NewTask) -> Result<Task, StoreError> {
        Err(StoreError::Response {
            status: 409,
            message: "duplicate key value violates unique constraint \"tasks_pkey\"".to_string(),
        })
    }
}

#[tokio::test]
async fn test_health_check_returns_ok() {
    let server = create_test_server(Arc::new(InMemoryTaskStore::new()));

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_list_tasks_empty_returns_empty_array() {
    let server = create_test_server(Arc::new(InMemoryTaskStore::new()));

    let response = server.get("/tasks").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_create_task_returns_201_with_stored_row() {
    let store = Arc::new(InMemoryTaskStore::new());
    let server = create_test_server(store.clone());

    let response = server.post("/tasks").json(&valid_payload("Buy milk")).await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert!(body["id"].is_string());
    assert!(body["created_at"].is_string());
    assert_eq!(body["title"], "Buy milk");
    assert_eq!(body["priority"], "High");
    assert_eq!(body["due_date"], "2030-01-15");
    assert_eq!(body["status"], "Pending");
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_created_task_appears_in_list() {
    let server = create_test_server(Arc::new(InMemoryTaskStore::new()));

    let created: Task = server
        .post("/tasks")
        .json(&valid_payload("Write report"))
        .await
        .json();
    let listed: Vec<Task> = server.get("/tasks").await.json();

    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn test_list_tasks_newest_first() {
    let server = create_test_server(Arc::new(InMemoryTaskStore::new()));
    for title in ["first", "second", "third"] {
        server.post("/tasks").json(&valid_payload(title)).await;
    }

    let listed: Vec<Task> = server.get("/tasks").await.json();
    let titles = listed.iter().map(|t| t.title.as_str()).collect::<Vec<_>>();

    assert_eq!(titles, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn test_status_defaults_to_pending() {
    let server = create_test_server(Arc::new(InMemoryTaskStore::new()));

    let response = server
        .post("/tasks")
        .json(&json!({"title": "t", "priority": "Low", "due_date": "2030-01-15"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["status"], "Pending");
}

#[tokio::test]
async fn test_missing_required_fields_returns_400_without_insert() {
    let store = Arc::new(InMemoryTaskStore::new());
    let server = create_test_server(store.clone());

    let payloads = [
        json!({"priority": "Low", "due_date": "2030-01-15"}),
        json!({"title": "", "priority": "Low", "due_date": "2030-01-15"}),
        json!({"title": "t", "priority": null, "due_date": "2030-01-15"}),
        json!({"title": "t", "priority": "Low"}),
        json!({}),
    ];

    for payload in payloads {
        let response = server.post("/tasks").json(&payload).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>(),
            json!({"error": "Missing required fields"})
        );
    }
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_schema_violation_returns_400_naming_field() {
    let store = Arc::new(InMemoryTaskStore::new());
    let server = create_test_server(store.clone());

    let mut payload = valid_payload(&"x".repeat(101));
    let response = server.post("/tasks").json(&payload).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(
        response.json::<Value>()["error"]
            .as_str()
            .unwrap()
            .starts_with("title:")
    );

    payload = valid_payload("ok");
    payload["priority"] = json!("Urgent");
    let response = server.post("/tasks").json(&payload).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(
        response.json::<Value>()["error"]
            .as_str()
            .unwrap()
            .starts_with("priority:")
    );

    payload = valid_payload("ok");
    payload["due_date"] = json!("15/01/2030");
    let response = server.post("/tasks").json(&payload).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_title_at_limit_is_accepted() {
    let server = create_test_server(Arc::new(InMemoryTaskStore::new()));

    let response = server
        .post("/tasks")
        .json(&valid_payload(&"x".repeat(100)))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let store = Arc::new(InMemoryTaskStore::new());
    let server = create_test_server(store.clone());

    let response = server
        .post("/tasks")
        .text("{\"title\": ")
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].is_string());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_list_store_failure_returns_500_with_message() {
    let server = create_test_server(Arc::new(FailingStore));

    let response = server.get("/tasks").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({"error": "connection refused"})
    );
}

#[tokio::test]
async fn test_create_store_failure_returns_500_with_message() {
    let server = create_test_server(Arc::new(FailingStore));

    let response = server.post("/tasks").json(&valid_payload("dup")).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>()["error"],
        "duplicate key value violates unique constraint \"tasks_pkey\""
    );
}

#[tokio::test]
async fn test_validation_runs_before_failing_store() {
    let server = create_test_server(Arc::new(FailingStore));

    let response = server.post("/tasks").json(&json!({"title": "t"})).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
