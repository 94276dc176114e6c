//! Webhook settings integration tests.
//!
//! Run with: `cargo test -p autoedit-api --test settings_test`

mod helpers;

use helpers::{setup_test_app, setup_test_app_with, TestAppOptions};
use serde_json::{json, Value};

const PATH: &str = "/api/settings/webhook";

#[tokio::test]
async fn test_settings_empty_by_default() {
    let app = setup_test_app_with(TestAppOptions {
        default_webhook_url: Some("https://automation.example.test/webhook".to_string()),
        ..TestAppOptions::default()
    })
    .await;

    let response = app.client().get(PATH).await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({
            "webhookUrl": null,
            "savedAt": null,
            "hasSavedUrl": false,
            "defaultWebhookUrl": "https://automation.example.test/webhook"
        })
    );
}

#[tokio::test]
async fn test_save_read_and_clear_webhook_url() {
    let app = setup_test_app().await;
    let client = app.client();

    let saved = client
        .put(PATH)
        .json(&json!({"webhookUrl": "  https://hooks.example.test/abc  "}))
        .await;
    assert_eq!(saved.status_code(), 200);
    let saved: Value = saved.json();
    assert_eq!(saved["webhookUrl"], json!("https://hooks.example.test/abc"));
    assert_eq!(saved["hasSavedUrl"], json!(true));
    assert!(saved["savedAt"].is_string());

    let current: Value = client.get(PATH).await.json();
    assert_eq!(current["webhookUrl"], json!("https://hooks.example.test/abc"));
    assert_eq!(current["savedAt"], saved["savedAt"]);

    let settings_file = std::fs::read_to_string(&app.state.config.settings_path).unwrap();
    assert!(settings_file.contains("autoediting-webhook-url"));
    assert!(settings_file.contains("autoediting-user-settings"));

    let cleared = client.delete(PATH).await;
    assert_eq!(cleared.status_code(), 204);

    let current: Value = client.get(PATH).await.json();
    assert_eq!(current["webhookUrl"], Value::Null);
    assert_eq!(current["hasSavedUrl"], json!(false));
}

#[tokio::test]
async fn test_save_rejects_blank_and_non_http_urls() {
    let app = setup_test_app().await;
    let client = app.client();

    let blank = client.put(PATH).json(&json!({"webhookUrl": "   "})).await;
    assert_eq!(blank.status_code(), 400);
    let body: Value = blank.json();
    assert_eq!(body["error"], json!("Webhook URL is required"));

    let ftp = client
        .put(PATH)
        .json(&json!({"webhookUrl": "ftp://files.example.test"}))
        .await;
    assert_eq!(ftp.status_code(), 400);
    let body: Value = ftp.json();
    assert_eq!(body["code"], json!("INVALID_INPUT"));

    let malformed = client.put(PATH).json(&json!({"url": 1})).await;
    assert_eq!(malformed.status_code(), 400);
}
