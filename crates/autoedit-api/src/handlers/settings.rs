//! Saved webhook URL endpoints.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use autoedit_core::{AppError, RequiredField};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebhookSettingsResponse {
    pub webhook_url: Option<String>,
    pub saved_at: Option<DateTime<Utc>>,
    pub has_saved_url: bool,
    /// Server-configured fallback endpoint, if any
    pub default_webhook_url: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveWebhookRequest {
    pub webhook_url: String,
}

async fn current_settings(state: &AppState) -> Result<WebhookSettingsResponse, HttpAppError> {
    let user_settings = state.settings.get_user_settings().await?;
    let webhook_url = state.settings.get_webhook_url().await?;

    Ok(WebhookSettingsResponse {
        has_saved_url: webhook_url.is_some(),
        webhook_url,
        saved_at: user_settings.saved_at,
        default_webhook_url: state.config.default_webhook_url.clone(),
    })
}

#[utoipa::path(
    get,
    path = "/api/settings/webhook",
    tag = "settings",
    responses(
        (status = 200, description = "Saved webhook settings", body = WebhookSettingsResponse),
        (status = 500, description = "Settings storage unavailable", body = ErrorResponse)
    )
)]
pub async fn get_webhook_settings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<WebhookSettingsResponse>, HttpAppError> {
    Ok(Json(current_settings(&state).await?))
}

/// Save the webhook URL for later submissions
#[utoipa::path(
    put,
    path = "/api/settings/webhook",
    tag = "settings",
    request_body = SaveWebhookRequest,
    responses(
        (status = 200, description = "Webhook URL saved", body = WebhookSettingsResponse),
        (status = 400, description = "Missing or invalid URL", body = ErrorResponse),
        (status = 500, description = "Settings storage unavailable", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request))]
pub async fn save_webhook_settings(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<SaveWebhookRequest>,
) -> Result<Json<WebhookSettingsResponse>, HttpAppError> {
    let url = request.webhook_url.trim();
    if url.is_empty() {
        return Err(AppError::MissingField(RequiredField::WebhookUrl).into());
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(AppError::InvalidInput(
            "Webhook URL must start with http:// or https://".to_string(),
        )
        .into());
    }

    let saved = state.settings.save_webhook_url(url).await?;

    Ok(Json(WebhookSettingsResponse {
        has_saved_url: true,
        webhook_url: saved.webhook_url,
        saved_at: saved.saved_at,
        default_webhook_url: state.config.default_webhook_url.clone(),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/settings/webhook",
    tag = "settings",
    responses(
        (status = 204, description = "Saved webhook URL removed"),
        (status = 500, description = "Settings storage unavailable", body = ErrorResponse)
    )
)]
pub async fn clear_webhook_settings(
    State(state): State<Arc<AppState>>,
) -> Result<StatusCode, HttpAppError> {
    state.settings.clear_webhook_url().await?;
    Ok(StatusCode::NO_CONTENT)
}
