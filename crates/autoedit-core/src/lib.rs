//! AutoEditing Core Library
//!
//! This crate provides the domain models, error type, configuration and the
//! payload builder shared by the AutoEditing relay components. Everything here
//! is free of network I/O.

pub mod config;
pub mod constants;
pub mod dubbing;
pub mod error;
pub mod models;
pub mod payload;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel, RequiredField};
pub use models::{FileCategory, FileSlot, FileUpload, Platform, Submission, SubmittedColumn};
pub use payload::{build_payload, build_payload_at, Payload};
