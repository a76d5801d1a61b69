use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use leave_backend::{
    config::{Config, StorageBackend},
    database::memory::MemoryStore,
    models::{id::RecordId, leave_balance::LeaveBalance},
    routes, AppState,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

fn test_config() -> Config {
    Config {
        server_address: "127.0.0.1:0".into(),
        storage_backend: StorageBackend::Memory,
        database_url: None,
        database_max_connections: 1,
        jwt_secret: "test_secret_key".into(),
        access_token_ttl_minutes: 30,
        require_auth: false,
        auth_rps: 1000,
    }
}

fn setup_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(test_config(), store.clone());
    (routes::router(state), store)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<JsonValue>) -> (StatusCode, JsonValue) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
    (status, body)
}

async fn apply(app: &Router, employee_id: &str, status: &str) -> JsonValue {
    let (code, body) = send(
        app,
        "POST",
        "/leave-application",
        Some(json!({
            "employee_id": employee_id,
            "start_date": "2024-01-01",
            "end_date": "2024-01-05",
            "status": status
        })),
    )
    .await;
    assert_eq!(code, StatusCode::OK, "apply failed: {}", body);
    body
}

#[tokio::test]
async fn register_apply_approve_and_list_end_to_end() {
    let (app, _) = setup_app();

    let (code, user) = send(
        &app,
        "POST",
        "/register",
        Some(json!({"name": "A", "email": "a@x.com", "role": "employee", "password": "p1"})),
    )
    .await;
    assert_eq!(code, StatusCode::OK);
    let user_id = user["id"].as_str().unwrap().to_string();
    assert!(RecordId::parse(&user_id).is_ok());
    assert!(user.get("password").is_none());

    let leave = apply(&app, &user_id, "pending").await;
    let leave_id = leave["id"].as_str().unwrap().to_string();
    assert_eq!(leave["employee_id"], user_id.as_str());
    assert_eq!(leave["start_date"], "2024-01-01");
    assert_eq!(leave["end_date"], "2024-01-05");
    assert_eq!(leave["status"], "pending");

    let other = apply(&app, &user_id, "pending").await;

    let (code, ack) = send(
        &app,
        "PUT",
        &format!("/leave-application/{}?status=approved", leave_id),
        None,
    )
    .await;
    assert_eq!(code, StatusCode::OK);
    assert_eq!(ack["message"], "Leave status updated successfully");

    let (code, list) = send(&app, "GET", "/leave-applications", None).await;
    assert_eq!(code, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["id"], leave_id.as_str());
    assert_eq!(list[0]["status"], "approved");
    assert_eq!(list[1]["id"], other["id"]);
    assert_eq!(list[1]["status"], "pending");
}

#[tokio::test]
async fn status_can_be_sent_in_a_json_body() {
    let (app, _) = setup_app();
    let leave = apply(&app, &RecordId::new().to_string(), "pending").await;

    let (code, _) = send(
        &app,
        "PUT",
        &format!("/leave-application/{}", leave["id"].as_str().unwrap()),
        Some(json!({"status": "rejected"})),
    )
    .await;
    assert_eq!(code, StatusCode::OK);

    let (_, list) = send(&app, "GET", "/leave-applications", None).await;
    assert_eq!(list[0]["status"], "rejected");
}

#[tokio::test]
async fn update_status_errors() {
    let (app, _) = setup_app();

    let (code, body) = send(
        &app,
        "PUT",
        &format!("/leave-application/{}?status=approved", RecordId::new()),
        None,
    )
    .await;
    assert_eq!(code, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Leave application not found");

    let (code, _) = send(&app, "PUT", "/leave-application/abc123?status=approved", None).await;
    assert_eq!(code, StatusCode::BAD_REQUEST);

    let leave = apply(&app, &RecordId::new().to_string(), "pending").await;
    let uri = format!("/leave-application/{}", leave["id"].as_str().unwrap());
    let (code, _) = send(&app, "PUT", &format!("{}?status=archived", uri), None).await;
    assert_eq!(code, StatusCode::BAD_REQUEST);
    let (code, body) = send(&app, "PUT", &uri, None).await;
    assert_eq!(code, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "status is required");
}

#[tokio::test]
async fn apply_rejects_malformed_fields() {
    let (app, _) = setup_app();
    let employee_id = RecordId::new().to_string();

    for payload in [
        json!({"employee_id": "emp-1", "start_date": "2024-01-01", "end_date": "2024-01-05", "status": "pending"}),
        json!({"employee_id": employee_id, "start_date": "Jan 1st", "end_date": "2024-01-05", "status": "pending"}),
        json!({"employee_id": employee_id, "start_date": "2024-01-09", "end_date": "2024-01-05", "status": "pending"}),
        json!({"employee_id": employee_id, "start_date": "2024-01-01", "end_date": "2024-01-05", "status": "on-hold"}),
    ] {
        let (code, body) = send(&app, "POST", "/leave-application", Some(payload)).await;
        assert_eq!(code, StatusCode::BAD_REQUEST, "unexpected body: {}", body);
        assert!(body["error"].is_string());
    }

    let (_, list) = send(&app, "GET", "/leave-applications", None).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn listing_is_capped_at_one_hundred() {
    let (app, _) = setup_app();
    let employee_id = RecordId::new().to_string();
    let mut first_id = None;
    for _ in 0..105 {
        let leave = apply(&app, &employee_id, "pending").await;
        first_id.get_or_insert(leave["id"].clone());
    }

    let (code, list) = send(&app, "GET", "/leave-applications", None).await;
    assert_eq!(code, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 100);
    assert_eq!(Some(list[0]["id"].clone()), first_id);
}

#[tokio::test]
async fn leave_balance_lookup() {
    let (app, store) = setup_app();
    let employee_id = RecordId::new();
    store.seed_balance(LeaveBalance {
        employee_id,
        available_leaves: 18,
        used_leaves: 2,
    });

    let (code, body) = send(&app, "GET", &format!("/leave-balance/{}", employee_id), None).await;
    assert_eq!(code, StatusCode::OK);
    assert_eq!(
        body,
        json!({"employee_id": employee_id.to_string(), "available_leaves": 18, "used_leaves": 2})
    );

    let (code, body) = send(&app, "GET", &format!("/leave-balance/{}", RecordId::new()), None).await;
    assert_eq!(code, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Leave balance not found");
}

#[tokio::test]
async fn health_and_openapi_are_served() {
    let (app, _) = setup_app();

    let (code, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(code, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (code, doc) = send(&app, "GET", "/api-doc/openapi.json", None).await;
    assert_eq!(code, StatusCode::OK);
    assert!(doc["paths"]["/leave-application/{leave_id}"]["put"].is_object());
    assert!(doc["components"]["securitySchemes"]["bearer_auth"].is_object());
}
