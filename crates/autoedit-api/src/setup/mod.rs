//! Application setup and initialization

pub mod routes;
pub mod server;

use crate::constants::{SERVICE_NAME, SERVICE_VERSION};
use crate::state::AppState;
use anyhow::{Context, Result};
use autoedit_core::Config;
use autoedit_infra::{init_telemetry, HttpRelayClient, RelayClientConfig, TelemetryConfig};
use autoedit_storage::{LocalSettingsStore, WebhookSettings};
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    config
        .validate()
        .context("Configuration validation failed")?;

    init_telemetry(&TelemetryConfig {
        service_name: SERVICE_NAME.to_string(),
        service_version: SERVICE_VERSION.to_string(),
        environment: config.environment.clone(),
        json: config.is_production(),
    })
    .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!("Configuration loaded and validated successfully");

    let state = build_state(config).await?;
    let router = routes::setup_routes(&state.config, state.clone()).await?;

    Ok((state, router))
}

/// Settings store and relay client from configuration
pub async fn build_state(config: Config) -> Result<Arc<AppState>> {
    let store = LocalSettingsStore::new(&config.settings_path)
        .await
        .with_context(|| {
            format!(
                "Failed to open settings store at {}",
                config.settings_path.display()
            )
        })?;
    tracing::info!(path = %config.settings_path.display(), "Settings store ready");

    let relay = HttpRelayClient::new(RelayClientConfig {
        user_agent: config.relay_user_agent.clone(),
        ..RelayClientConfig::default()
    })?;

    Ok(Arc::new(AppState::new(
        config,
        Arc::new(relay),
        WebhookSettings::new(Arc::new(store)),
    )))
}
