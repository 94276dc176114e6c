//! Error types module
//!
//! All failures of the relay pipeline are unified under [`AppError`]. Each
//! variant describes its own HTTP presentation through [`ErrorMetadata`], so
//! the API layer only has to render what the error reports about itself.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for failures caused by the remote endpoint
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "MISSING_FIELD")
    fn error_code(&self) -> &'static str;

    /// Whether resubmitting the same request may succeed
    fn is_recoverable(&self) -> bool;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden from clients
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

/// Submission fields whose absence rejects the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    WebhookUrl,
    UserId,
    BackgroundVideo,
}

impl RequiredField {
    /// Multipart field name
    pub fn field_name(&self) -> &'static str {
        match self {
            RequiredField::WebhookUrl => "webhookUrl",
            RequiredField::UserId => "userId",
            RequiredField::BackgroundVideo => "backgroundVideo",
        }
    }

    /// Human label used in client messages
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::WebhookUrl => "Webhook URL",
            RequiredField::UserId => "User ID",
            RequiredField::BackgroundVideo => "Background video",
        }
    }
}

impl Display for RequiredField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.field_name())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{} is required", .0.label())]
    MissingField(RequiredField),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Webhook request timed out after {timeout_secs} seconds")]
    RelayTimeout { timeout_secs: u64 },

    #[error("Webhook returned non-2xx status: {status} - {body}")]
    RelayRejected { status: u16, body: String },

    #[error("Webhook returned an invalid JSON response: {0}")]
    RelayMalformedResponse(String),

    #[error("Webhook request failed: {0}")]
    RelayNetwork(String),

    #[error("Settings storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Static metadata for each variant: (http_status, error_code, recoverable, sensitive, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, bool, bool, LogLevel) {
    match err {
        AppError::MissingField(_) => (400, "MISSING_FIELD", false, false, LogLevel::Debug),
        AppError::InvalidInput(_) => (400, "INVALID_INPUT", false, false, LogLevel::Debug),
        AppError::RelayTimeout { .. } => (500, "RELAY_TIMEOUT", true, false, LogLevel::Warn),
        AppError::RelayRejected { .. } => (500, "RELAY_REJECTED", false, false, LogLevel::Warn),
        AppError::RelayMalformedResponse(_) => (
            500,
            "RELAY_MALFORMED_RESPONSE",
            false,
            false,
            LogLevel::Warn,
        ),
        AppError::RelayNetwork(_) => (500, "RELAY_NETWORK_ERROR", true, false, LogLevel::Error),
        AppError::Storage(_) => (500, "STORAGE_ERROR", true, true, LogLevel::Error),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", true, true, LogLevel::Error),
        AppError::InternalWithSource { .. } => (500, "INTERNAL_ERROR", true, true, LogLevel::Error),
    }
}

impl AppError {
    /// Get the error type name for detailed error responses
    pub fn error_type(&self) -> &str {
        match self {
            AppError::MissingField(_) => "MissingField",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::RelayTimeout { .. } => "RelayTimeout",
            AppError::RelayRejected { .. } => "RelayRejected",
            AppError::RelayMalformedResponse(_) => "RelayMalformedResponse",
            AppError::RelayNetwork(_) => "RelayNetwork",
            AppError::Storage(_) => "Storage",
            AppError::Internal(_) => "Internal",
            AppError::InternalWithSource { .. } => "Internal",
        }
    }

    /// Whether the error happened while talking to the automation endpoint
    pub fn is_relay_failure(&self) -> bool {
        matches!(
            self,
            AppError::RelayTimeout { .. }
                | AppError::RelayRejected { .. }
                | AppError::RelayMalformedResponse(_)
                | AppError::RelayNetwork(_)
        )
    }

    /// Get detailed error information including error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn is_recoverable(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn is_sensitive(&self) -> bool {
        app_error_static_metadata(self).3
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).4
    }

    fn client_message(&self) -> String {
        match self {
            AppError::MissingField(field) => format!("{} is required", field.label()),
            AppError::InvalidInput(ref msg) => msg.clone(),
            AppError::RelayRejected { .. } => "Webhook failed".to_string(),
            AppError::RelayTimeout { .. }
            | AppError::RelayMalformedResponse(_)
            | AppError::RelayNetwork(_) => self.to_string(),
            AppError::Storage(_) => "Failed to access settings storage".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
            AppError::InternalWithSource { .. } => "Internal server error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_metadata() {
        let err = AppError::MissingField(RequiredField::WebhookUrl);
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.error_code(), "MISSING_FIELD");
        assert_eq!(err.client_message(), "Webhook URL is required");
        assert!(!err.is_recoverable());
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_missing_field_labels() {
        assert_eq!(
            AppError::MissingField(RequiredField::UserId).to_string(),
            "User ID is required"
        );
        assert_eq!(
            AppError::MissingField(RequiredField::BackgroundVideo).client_message(),
            "Background video is required"
        );
        assert_eq!(RequiredField::BackgroundVideo.field_name(), "backgroundVideo");
    }

    #[test]
    fn test_relay_failures_are_server_errors() {
        let errors = [
            AppError::RelayTimeout { timeout_secs: 30 },
            AppError::RelayRejected {
                status: 502,
                body: "bad gateway".to_string(),
            },
            AppError::RelayMalformedResponse("expected value".to_string()),
            AppError::RelayNetwork("connection refused".to_string()),
        ];
        for err in errors {
            assert_eq!(err.http_status_code(), 500);
            assert!(err.is_relay_failure());
            assert!(!err.is_sensitive());
        }
    }

    #[test]
    fn test_timeout_message_mentions_timeout() {
        let err = AppError::RelayTimeout { timeout_secs: 30 };
        assert!(err.client_message().contains("timed out"));
        assert!(err.client_message().contains("30"));
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = AppError::from(anyhow::anyhow!("secret path /etc/app"));
        assert!(err.is_sensitive());
        assert_eq!(err.client_message(), "Internal server error");
        assert!(err.detailed_message().contains("Internal error"));
    }
}
