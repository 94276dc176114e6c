//! HTTP error response conversion
//!
//! Handlers return `Result<_, HttpAppError>` and use `?` on anything that
//! converts into `AppError`. Rendering and logging happen here only.

use axum::{
    extract::rejection::JsonRejection,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use autoedit_core::{AppError, ErrorMetadata, LogLevel, Payload, SubmittedColumn};
use serde::{de::DeserializeOwned, Serialize};
use utoipa::ToSchema;

/// Error body returned by every endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Failure description for server-side errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// HTTP status returned by the automation endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Response body of the automation endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<RejectedPayload>,
    /// Machine-readable error code for programmatic handling
    pub code: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
            status: None,
            details: None,
            payload: None,
            code: code.into(),
        }
    }
}

/// What was sent when the automation endpoint refused a payload
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RejectedPayload {
    pub files_count: usize,
    pub submitted_columns: Vec<SubmittedColumn>,
}

impl From<&Payload> for RejectedPayload {
    fn from(payload: &Payload) -> Self {
        Self {
            files_count: payload.total_files(),
            submitted_columns: payload.submitted_columns().to_vec(),
        }
    }
}

/// Wrapper type for AppError to implement IntoResponse (orphan rule).
///
/// Relay failures may carry a summary of the payload that was sent.
#[derive(Debug)]
pub struct HttpAppError {
    pub error: AppError,
    pub payload: Option<RejectedPayload>,
}

impl HttpAppError {
    pub fn with_payload(mut self, payload: &Payload) -> Self {
        self.payload = Some(payload.into());
        self
    }
}

impl From<AppError> for HttpAppError {
    fn from(error: AppError) -> Self {
        HttpAppError {
            error,
            payload: None,
        }
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::from(err).into()
    }
}

impl From<autoedit_storage::StorageError> for HttpAppError {
    fn from(err: autoedit_storage::StorageError) -> Self {
        AppError::from(err).into()
    }
}

impl From<JsonRejection> for HttpAppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(format!("Invalid request body: {}", rejection.body_text())).into()
    }
}

/// JSON body extractor that answers malformed bodies with our 400 error shape
#[derive(Debug, Clone, Copy)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = HttpAppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(inner) = Json::<T>::from_request(req, state)
            .await
            .map_err(HttpAppError::from)?;
        Ok(ValidatedJson(inner))
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    let code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type, code, "Request rejected");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type, code, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(
                error = %error.detailed_message(),
                error_type,
                code,
                "Request failed"
            );
        }
    }
}

fn error_body(error: &AppError, payload: Option<RejectedPayload>) -> ErrorResponse {
    let code = error.error_code();
    match error {
        AppError::MissingField(_) | AppError::InvalidInput(_) => {
            ErrorResponse::new(error.client_message(), code)
        }
        AppError::RelayRejected { status, body } => ErrorResponse {
            status: Some(*status),
            details: Some(body.clone()),
            payload,
            ..ErrorResponse::new(error.client_message(), code)
        },
        _ => ErrorResponse {
            message: Some(error.client_message()),
            ..ErrorResponse::new("Server error", code)
        },
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(&self.error);

        (status, Json(error_body(&self.error, self.payload))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoedit_core::RequiredField;
    use serde_json::json;

    #[test]
    fn test_missing_field_body() {
        let body = error_body(&AppError::MissingField(RequiredField::UserId), None);
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"error": "User ID is required", "code": "MISSING_FIELD"})
        );
    }

    #[test]
    fn test_rejected_body_carries_remote_details() {
        let payload = RejectedPayload {
            files_count: 1,
            submitted_columns: vec![SubmittedColumn::BackgroundVideo],
        };
        let err = AppError::RelayRejected {
            status: 404,
            body: "not found".to_string(),
        };

        assert_eq!(
            serde_json::to_value(error_body(&err, Some(payload))).unwrap(),
            json!({
                "error": "Webhook failed",
                "status": 404,
                "details": "not found",
                "payload": {"filesCount": 1, "submittedColumns": ["backgroundVideo"]},
                "code": "RELAY_REJECTED"
            })
        );
    }

    #[test]
    fn test_server_error_body_hides_internal_detail() {
        let body = error_body(&AppError::Internal("db password leaked".to_string()), None);
        assert_eq!(body.error, "Server error");
        assert_eq!(body.message.as_deref(), Some("Internal server error"));
        assert_eq!(body.code, "INTERNAL_ERROR");
    }

    #[test]
    fn test_timeout_body_names_the_timeout() {
        let body = error_body(&AppError::RelayTimeout { timeout_secs: 30 }, None);
        assert_eq!(body.error, "Server error");
        assert_eq!(
            body.message.as_deref(),
            Some("Webhook request timed out after 30 seconds")
        );
    }

    #[test]
    fn test_status_codes() {
        let response =
            HttpAppError::from(AppError::MissingField(RequiredField::WebhookUrl)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = HttpAppError::from(AppError::RelayNetwork("refused".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
