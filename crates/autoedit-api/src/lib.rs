//! AutoEdit API Library
//!
//! HTTP surface of the relay: the submission endpoint, webhook settings,
//! health checks and the OpenAPI document.

mod api_doc;
pub mod constants;
mod handlers;
mod utils;

pub mod error;
pub mod setup;
pub mod state;

pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
