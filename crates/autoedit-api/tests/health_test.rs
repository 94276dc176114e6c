//! Operational endpoint tests.

mod helpers;

use helpers::setup_test_app;
use serde_json::{json, Value};

#[tokio::test]
async fn test_liveness() {
    let app = setup_test_app().await;

    let response = app.client().get("/live").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body, json!({"status": "alive"}));
}

#[tokio::test]
async fn test_health_reports_settings_store() {
    let app = setup_test_app().await;

    let response = app.client().get("/health").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["settings_store"], json!("healthy"));
    assert_eq!(body["settings_backend"], json!("local"));
    assert_eq!(body["relay_timeout_secs"], json!(5));
}

#[tokio::test]
async fn test_openapi_document_and_headers() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .get("/api/openapi.json")
        .add_header("X-Request-ID", "trace-me")
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.header("x-request-id"), "trace-me");
    assert_eq!(response.header("x-content-type-options"), "nosniff");
    let body: Value = response.json();
    assert!(body["paths"]["/api/autoediting"]["post"].is_object());
}
