//! API-level constants

pub const SERVICE_NAME: &str = "autoedit-api";

pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const API_PREFIX: &str = "/api";

/// Path of the served OpenAPI document
pub const OPENAPI_PATH: &str = "/api/openapi.json";
