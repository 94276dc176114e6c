//! Domain models: the inbound submission and the vocabulary shared with the payload.

pub mod platform;
pub mod slot;
pub mod submission;

pub use platform::Platform;
pub use slot::{FileCategory, FileSlot, SubmittedColumn};
pub use submission::{FileUpload, Submission};
