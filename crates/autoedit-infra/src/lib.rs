//! AutoEdit Infrastructure Library
//!
//! Shared infrastructure for the relay service:
//! - Middleware (request ID, security headers)
//! - Telemetry initialization
//! - Payload relay client for the automation endpoint

pub mod middleware;
pub mod relay;
pub mod telemetry;

pub use middleware::{
    request_id_middleware, security_headers_middleware, RequestId,
    SecurityHeadersConfig,
};
pub use relay::{
    HttpRelayClient, PayloadRelay, RelayClientConfig, RelayError, RelayResponse, RelayResult,
};
pub use telemetry::{init_telemetry, shutdown_telemetry, TelemetryConfig};
