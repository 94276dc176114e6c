//! Multipart form → [`Submission`]

use axum::extract::multipart::{Field, MultipartError};
use axum::extract::Multipart;
use autoedit_core::{AppError, FileSlot, FileUpload, Submission};

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

fn multipart_error(err: MultipartError) -> AppError {
    AppError::InvalidInput(format!("Failed to read multipart: {}", err.body_text()))
}

async fn read_text(field: Field<'_>) -> Result<String, AppError> {
    field.text().await.map_err(multipart_error)
}

/// Collect every known form field. Unknown fields are skipped; a repeated
/// field keeps its last value. Completeness is checked later by the payload builder.
pub async fn read_submission(mut multipart: Multipart) -> Result<Submission, AppError> {
    let mut submission = Submission::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let field_name = field.name().map(str::to_string).unwrap_or_default();

        if let Some(slot) = FileSlot::from_field_name(&field_name) {
            let file_name = field.file_name().map(str::to_string).unwrap_or_default();
            let content_type = field
                .content_type()
                .map(str::to_string)
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());
            let data = field.bytes().await.map_err(multipart_error)?;

            tracing::debug!(
                slot = %slot,
                file_name = %file_name,
                size_bytes = data.len(),
                "Received file"
            );

            *submission.slot_mut(slot) = Some(FileUpload::new(file_name, content_type, data));
            continue;
        }

        match field_name.as_str() {
            "webhookUrl" => submission.webhook_url = Some(read_text(field).await?),
            "userId" => submission.user_id = Some(read_text(field).await?),
            "platform" => submission.platform = Some(read_text(field).await?),
            "textDubbingVideo" => submission.text_dubbing_video = Some(read_text(field).await?),
            "textDubbingPromoVideo" => {
                submission.text_dubbing_promo_video = Some(read_text(field).await?)
            }
            other => {
                tracing::debug!(field = %other, "Ignoring unknown form field");
            }
        }
    }

    Ok(submission)
}
