//! Health check handlers and response types.

use crate::constants::{SERVICE_NAME, SERVICE_VERSION};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

const CHECK_TIMEOUT: Duration = Duration::from_secs(2);

/// Run an async check with timeout; returns "healthy", "timeout", or "{prefix}: {error}".
async fn run_check<F, T, E>(timeout: Duration, f: F, error_prefix: &str) -> String
where
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    match tokio::time::timeout(timeout, f).await {
        Ok(Ok(_)) => "healthy".to_string(),
        Ok(Err(e)) => format!("{}: {}", error_prefix, e),
        Err(_) => "timeout".to_string(),
    }
}

#[derive(serde::Serialize)]
struct LivenessResponse {
    status: &'static str,
}

#[derive(serde::Serialize)]
struct HealthCheckResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    settings_store: String,
    settings_backend: &'static str,
    relay_timeout_secs: u64,
}

pub(super) fn health_routes() -> axum::Router<Arc<AppState>> {
    Router::new()
        .route("/live", get(liveness_check))
        .route("/health", get(health_check))
}

async fn liveness_check() -> impl IntoResponse {
    Json(LivenessResponse { status: "alive" })
}

async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let settings_store = run_check(
        CHECK_TIMEOUT,
        state.settings.has_saved_webhook_url(),
        "error",
    )
    .await;

    let healthy = settings_store == "healthy";
    if !healthy {
        tracing::warn!(settings_store = %settings_store, "Health check degraded");
    }

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(HealthCheckResponse {
            status: if healthy { "healthy" } else { "degraded" },
            service: SERVICE_NAME,
            version: SERVICE_VERSION,
            settings_store,
            settings_backend: state.settings.backend_name(),
            relay_timeout_secs: state.relay.timeout_secs(),
        }),
    )
}
