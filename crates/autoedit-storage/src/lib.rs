//! AutoEdit settings storage
//!
//! Key/value persistence for the small amount of state the relay keeps
//! between sessions: the last-used webhook URL and when it was saved.
//!
//! Two backends implement [`SettingsStore`]:
//!
//! - [`LocalSettingsStore`]: a single JSON object file on disk
//! - [`InMemorySettingsStore`]: process-local test double
//!
//! [`WebhookSettings`] layers the webhook-specific keys on top of either.

pub mod local;
pub mod memory;
pub mod traits;
pub mod webhook_settings;

pub use local::LocalSettingsStore;
pub use memory::InMemorySettingsStore;
pub use traits::{SettingsStore, StorageError, StorageResult};
pub use webhook_settings::{UserSettings, WebhookSettings};
