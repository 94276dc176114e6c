//! Delivery of built payloads to the automation endpoint.

mod client;
mod error;

pub use client::{HttpRelayClient, RelayClientConfig};
pub use error::{RelayError, RelayResult};

use async_trait::async_trait;
use autoedit_core::Payload;
use serde::Serialize;

/// Successful (2xx) reply from the automation endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelayResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

/// Sends one payload to one endpoint. Implementations never retry.
#[async_trait]
pub trait PayloadRelay: Send + Sync {
    async fn send(&self, payload: &Payload, url: &str) -> RelayResult;

    /// Upper bound on a single `send`
    fn timeout_secs(&self) -> u64;
}
