//! OpenAPI documentation, served at `/api/openapi.json` and rendered by RapiDoc at `/docs`.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use autoedit_core::{models, payload};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AutoEdit API",
        version = "0.1.0",
        description = "Relays AutoEditing submissions (videos, images and dubbing scripts) to an automation webhook as a single self-describing JSON payload."
    ),
    paths(
        handlers::autoediting::submit_autoediting,
        handlers::settings::get_webhook_settings,
        handlers::settings::save_webhook_settings,
        handlers::settings::clear_webhook_settings,
    ),
    components(schemas(
        error::ErrorResponse,
        error::RejectedPayload,
        handlers::autoediting::SubmissionResponse,
        handlers::autoediting::SubmissionSummary,
        handlers::autoediting::SubmittedFileNames,
        handlers::autoediting::SubmittedDubbing,
        handlers::autoediting::WebhookReply,
        handlers::settings::WebhookSettingsResponse,
        handlers::settings::SaveWebhookRequest,
        models::Platform,
        models::FileCategory,
        models::SubmittedColumn,
        payload::Payload,
        payload::FileSummary,
        payload::DubbingSummary,
    )),
    tags(
        (name = "autoediting", description = "Submission relay"),
        (name = "settings", description = "Saved webhook URL"),
    )
)]
pub struct ApiDoc;
