use anyhow::{Context, Result};
use async_trait::async_trait;
use autoedit_core::constants::{DEFAULT_USER_AGENT, RELAY_TIMEOUT_SECS};
use autoedit_core::{Payload, SubmittedColumn};
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use std::time::{Duration, Instant};

use super::{PayloadRelay, RelayError, RelayResponse, RelayResult};

/// Configuration for the relay client
#[derive(Debug, Clone)]
pub struct RelayClientConfig {
    /// Hard limit on the whole request, body upload and response included
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for RelayClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(RELAY_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// reqwest-backed [`PayloadRelay`]
#[derive(Clone)]
pub struct HttpRelayClient {
    http_client: Client,
    config: RelayClientConfig,
}

impl HttpRelayClient {
    pub fn new(config: RelayClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .context("Failed to create HTTP client for relay")?;

        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn config(&self) -> &RelayClientConfig {
        &self.config
    }

    fn transport_error(&self, err: reqwest::Error) -> RelayError {
        if err.is_timeout() {
            RelayError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else {
            RelayError::Network(err.to_string())
        }
    }
}

#[async_trait]
impl PayloadRelay for HttpRelayClient {
    #[tracing::instrument(
        skip(self, payload),
        fields(total_files = payload.total_files())
    )]
    async fn send(&self, payload: &Payload, url: &str) -> RelayResult {
        let start = Instant::now();
        let columns = SubmittedColumn::join(payload.submitted_columns());

        tracing::info!(columns = %columns, "Sending payload to webhook");

        let result = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, self.config.user_agent.as_str())
            .header("X-File-Count", payload.total_files().to_string())
            .header("X-Submitted-Columns", columns)
            .json(payload)
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                let err = self.transport_error(e);
                tracing::warn!(
                    error = %err,
                    duration_ms = start.elapsed().as_millis() as u64,
                    "Webhook request failed"
                );
                return Err(err);
            }
        };

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        tracing::info!(
            status = status.as_u16(),
            response_len = body.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Webhook responded"
        );

        if !status.is_success() {
            return Err(RelayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let body = serde_json::from_str(&body)
            .map_err(|e| RelayError::MalformedResponse(e.to_string()))?;

        Ok(RelayResponse {
            status: status.as_u16(),
            body,
        })
    }

    fn timeout_secs(&self) -> u64 {
        self.config.timeout.as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoedit_core::{build_payload, FileSlot, FileUpload, Submission};
    use mockito::Matcher;

    fn payload(url: &str) -> Payload {
        let submission = Submission::new(url, "user-1")
            .with_file(
                FileSlot::BackgroundVideo,
                FileUpload::new("bg.mp4", "video/mp4", b"video".to_vec()),
            )
            .with_file(
                FileSlot::Frame,
                FileUpload::new("frame.png", "image/png", b"png".to_vec()),
            )
            .with_text_dubbing_video("hello world");
        build_payload(&submission).unwrap()
    }

    fn client() -> HttpRelayClient {
        HttpRelayClient::new(RelayClientConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_send_success_with_headers() {
        let mut server = mockito::Server::new_async().await;
        let url = format!("{}/hook", server.url());
        let mock = server
            .mock("POST", "/hook")
            .match_header("content-type", "application/json")
            .match_header("user-agent", "AutoEditing-Web/1.0")
            .match_header("x-file-count", "2")
            .match_header("x-submitted-columns", "backgroundVideo,frame,textDubbingVideo")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "userInfo": {"userId": "user-1"},
                "metadata": {"totalFiles": 2}
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"received": true}"#)
            .create_async()
            .await;

        let response = client().send(&payload(&url), &url).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, serde_json::json!({"received": true}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_2xx_is_rejected_with_body() {
        let mut server = mockito::Server::new_async().await;
        let url = format!("{}/hook", server.url());
        let mock = server
            .mock("POST", "/hook")
            .with_status(404)
            .with_body("no such workflow")
            .expect(1)
            .create_async()
            .await;

        let err = client().send(&payload(&url), &url).await.unwrap_err();

        match err {
            RelayError::Rejected { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "no such workflow");
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_2xx_with_non_json_body_is_malformed() {
        let mut server = mockito::Server::new_async().await;
        let url = format!("{}/hook", server.url());
        let _mock = server
            .mock("POST", "/hook")
            .with_status(200)
            .with_body("Workflow was started")
            .create_async()
            .await;

        let err = client().send(&payload(&url), &url).await.unwrap_err();
        assert!(matches!(err, RelayError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_silent_endpoint_times_out() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((stream, _)) = listener.accept().await {
                held.push(stream);
            }
        });

        let client = HttpRelayClient::new(RelayClientConfig {
            timeout: Duration::from_millis(300),
            ..RelayClientConfig::default()
        })
        .unwrap();
        let url = format!("http://{}/hook", addr);

        let err = client.send(&payload(&url), &url).await.unwrap_err();
        assert!(matches!(err, RelayError::Timeout { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let url = format!("http://{}/hook", addr);

        let err = client().send(&payload(&url), &url).await.unwrap_err();
        assert!(matches!(err, RelayError::Network(_)));
    }

    #[test]
    fn test_default_config() {
        let config = RelayClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.user_agent, "AutoEditing-Web/1.0");
        assert_eq!(client().timeout_secs(), 30);
    }
}
