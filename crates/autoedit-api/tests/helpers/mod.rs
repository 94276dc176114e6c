//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p autoedit-api`.

#![allow(dead_code)]

pub mod fixtures;

use autoedit_api::setup::routes;
use autoedit_api::state::AppState;
use autoedit_core::Config;
use autoedit_infra::{HttpRelayClient, RelayClientConfig};
use autoedit_storage::{LocalSettingsStore, WebhookSettings};
use axum_test::TestServer;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// Test application: server plus the temp dir holding the settings file.
pub struct TestApp {
    pub server: TestServer,
    pub state: Arc<AppState>,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

pub struct TestAppOptions {
    pub relay_timeout: Duration,
    pub default_webhook_url: Option<String>,
}

impl Default for TestAppOptions {
    fn default() -> Self {
        Self {
            relay_timeout: Duration::from_secs(5),
            default_webhook_url: None,
        }
    }
}

pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(TestAppOptions::default()).await
}

/// Setup test app with a file-backed settings store in a temp dir.
pub async fn setup_test_app_with(options: TestAppOptions) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let config = Config {
        settings_path: temp_dir.path().join("settings.json"),
        default_webhook_url: options.default_webhook_url,
        ..Config::default()
    };

    let store = LocalSettingsStore::new(&config.settings_path)
        .await
        .expect("Failed to create settings store");
    let relay = HttpRelayClient::new(RelayClientConfig {
        timeout: options.relay_timeout,
        ..RelayClientConfig::default()
    })
    .expect("Failed to create relay client");

    let state = Arc::new(AppState::new(
        config.clone(),
        Arc::new(relay),
        WebhookSettings::new(Arc::new(store)),
    ));

    let app = routes::setup_routes(&config, state.clone())
        .await
        .expect("Failed to setup routes");
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        state,
        _temp_dir: temp_dir,
    }
}
