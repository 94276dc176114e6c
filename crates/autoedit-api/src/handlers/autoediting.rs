use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use autoedit_core::payload::{DubbingSummary, FileSummary};
use autoedit_core::{build_payload, AppError, FileSlot, Payload, SubmittedColumn};
use autoedit_infra::RelayResponse;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::multipart::read_submission;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
    pub payload: SubmissionSummary,
    pub webhook_response: WebhookReply,
}

/// What was relayed, without the file contents
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionSummary {
    pub files_count: usize,
    pub submitted_columns: Vec<SubmittedColumn>,
    pub file_summary: FileSummary,
    pub files: SubmittedFileNames,
    pub text_dubbing: SubmittedDubbing,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedFileNames {
    pub background_video: String,
    pub frame: Option<String>,
    #[serde(rename = "avatarAI")]
    pub avatar_ai: Option<String>,
    pub promo_footage: Option<String>,
}

/// Trimmed scripts as relayed
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedDubbing {
    pub video: Option<String>,
    pub promo_video: Option<String>,
    pub summary: Option<DubbingSummary>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WebhookReply {
    pub status: u16,
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
}

impl SubmissionResponse {
    fn new(payload: &Payload, reply: RelayResponse) -> Self {
        let file_name = |slot: FileSlot| payload.files.get(slot).map(|entry| entry.name.clone());

        Self {
            success: true,
            message: "Files sent successfully".to_string(),
            payload: SubmissionSummary {
                files_count: payload.total_files(),
                submitted_columns: payload.submitted_columns().to_vec(),
                file_summary: payload.file_summary,
                files: SubmittedFileNames {
                    background_video: payload.files.background_video.name.clone(),
                    frame: file_name(FileSlot::Frame),
                    avatar_ai: file_name(FileSlot::AvatarAi),
                    promo_footage: file_name(FileSlot::PromoFootage),
                },
                text_dubbing: SubmittedDubbing {
                    video: payload.text_dubbing.video.as_ref().map(|s| s.text.clone()),
                    promo_video: payload
                        .text_dubbing
                        .promo_video
                        .as_ref()
                        .map(|s| s.text.clone()),
                    summary: payload.text_dubbing.summary.clone(),
                },
            },
            webhook_response: WebhookReply {
                status: reply.status,
                data: reply.body,
            },
        }
    }
}

/// Relay an AutoEditing submission
///
/// Reads the multipart form, builds the payload (base64 files, dubbing
/// estimates, metadata) and POSTs it to the submitted webhook URL. Nothing is
/// sent when a required field is missing.
#[utoipa::path(
    post,
    path = "/api/autoediting",
    tag = "autoediting",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Payload accepted by the automation endpoint", body = SubmissionResponse),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 500, description = "Webhook failed or timed out", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "submit_autoediting"))]
pub async fn submit_autoediting(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<SubmissionResponse>, HttpAppError> {
    let submission = read_submission(multipart).await?;
    let payload = build_payload(&submission)?;

    tracing::info!(
        user_id = %payload.user_info.user_id,
        platform = %payload.user_info.platform,
        total_files = payload.total_files(),
        dubbing_scripts = payload.text_dubbing.script_count(),
        "Relaying submission"
    );

    let reply = state
        .relay
        .send(&payload, payload.webhook_url())
        .await
        .map_err(|e| HttpAppError::from(AppError::from(e)).with_payload(&payload))?;

    tracing::info!(status = reply.status, "Submission relayed");

    Ok(Json(SubmissionResponse::new(&payload, reply)))
}
