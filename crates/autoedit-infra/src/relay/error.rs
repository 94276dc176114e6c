use autoedit_core::AppError;
use thiserror::Error;

use super::RelayResponse;

/// Terminal outcomes of a failed relay call
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Webhook request timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    #[error("Webhook returned non-2xx status: {status} - {body}")]
    Rejected { status: u16, body: String },

    #[error("Webhook returned an invalid JSON response: {0}")]
    MalformedResponse(String),

    #[error("Webhook request failed: {0}")]
    Network(String),
}

pub type RelayResult = Result<RelayResponse, RelayError>;

impl From<RelayError> for AppError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::Timeout { timeout_secs } => AppError::RelayTimeout { timeout_secs },
            RelayError::Rejected { status, body } => AppError::RelayRejected { status, body },
            RelayError::MalformedResponse(msg) => AppError::RelayMalformedResponse(msg),
            RelayError::Network(msg) => AppError::RelayNetwork(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoedit_core::ErrorMetadata;

    #[test]
    fn test_relay_errors_map_to_server_errors() {
        let cases = [
            RelayError::Timeout { timeout_secs: 30 },
            RelayError::Rejected {
                status: 404,
                body: "missing".to_string(),
            },
            RelayError::MalformedResponse("eof".to_string()),
            RelayError::Network("refused".to_string()),
        ];

        for err in cases {
            let app_err: AppError = err.into();
            assert!(app_err.is_relay_failure());
            assert_eq!(app_err.http_status_code(), 500);
        }
    }

    #[test]
    fn test_timeout_message_names_the_timeout() {
        let app_err: AppError = RelayError::Timeout { timeout_secs: 30 }.into();
        assert_eq!(
            app_err.to_string(),
            "Webhook request timed out after 30 seconds"
        );
    }
}
