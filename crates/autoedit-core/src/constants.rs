//! Constants shared by the builder, the relay client and the API.

/// Source tag written into `requestInfo.source` and used as relay User-Agent prefix.
pub const PAYLOAD_SOURCE: &str = "AutoEditing-Web";

/// Schema version of the outbound payload.
pub const PAYLOAD_VERSION: &str = "1.0";

/// Default User-Agent sent with relay requests.
pub const DEFAULT_USER_AGENT: &str = "AutoEditing-Web/1.0";

/// Narration reading speed used for duration estimates.
pub const READING_SPEED_WPM: u32 = 150;

/// Relay timeout budget in seconds.
pub const RELAY_TIMEOUT_SECS: u64 = 30;

/// Settings store key holding the last-used webhook URL.
pub const WEBHOOK_URL_KEY: &str = "autoediting-webhook-url";

/// Settings store key holding the serialized user settings.
pub const USER_SETTINGS_KEY: &str = "autoediting-user-settings";

/// Bytes per megabyte when reporting `sizeMB`.
pub const BYTES_PER_MB: u64 = 1024 * 1024;
