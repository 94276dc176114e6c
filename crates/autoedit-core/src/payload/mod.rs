//! Outbound payload model.
//!
//! The payload is the self-describing JSON envelope sent to the automation
//! endpoint. Field names on the wire are the ones the endpoint's workflows
//! consume, so several Rust fields carry explicit renames.

mod builder;

pub use builder::{build_payload, build_payload_at};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

use crate::models::{FileCategory, FileSlot, Platform, SubmittedColumn};

/// ISO-8601 with millisecond precision and a `Z` suffix.
fn serialize_iso_millis<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    #[serde(serialize_with = "serialize_iso_millis")]
    pub timestamp: DateTime<Utc>,
    pub request_info: RequestInfo,
    pub user_info: UserInfo,
    pub files: PayloadFiles,
    pub text_dubbing: TextDubbing,
    pub metadata: PayloadMetadata,
    pub file_summary: FileSummary,
}

impl Payload {
    pub fn total_files(&self) -> usize {
        self.metadata.total_files
    }

    pub fn submitted_columns(&self) -> &[SubmittedColumn] {
        &self.metadata.submitted_columns
    }

    pub fn webhook_url(&self) -> &str {
        &self.request_info.webhook_url
    }
}

/// Provenance of the payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestInfo {
    pub source: String,
    pub version: String,
    pub webhook_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub platform: Platform,
    pub user_id: String,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub timestamp: DateTime<Utc>,
}

/// A base64-encoded file plus its descriptive metadata
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    #[serde(rename = "size")]
    pub size_bytes: u64,
    /// Size in megabytes with two decimals, e.g. "5.00"
    #[serde(rename = "sizeMB")]
    pub size_mb: String,
    #[serde(rename = "data")]
    pub base64_data: String,
    pub category: FileCategory,
    pub required: bool,
}

impl std::fmt::Debug for FileEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileEntry")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("size_bytes", &self.size_bytes)
            .field("category", &self.category)
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}

/// Files keyed by slot. The background video is always present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PayloadFiles {
    pub background_video: FileEntry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<FileEntry>,
    #[serde(rename = "avatarAI", default, skip_serializing_if = "Option::is_none")]
    pub avatar_ai: Option<FileEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_footage: Option<FileEntry>,
}

impl PayloadFiles {
    pub fn get(&self, slot: FileSlot) -> Option<&FileEntry> {
        match slot {
            FileSlot::BackgroundVideo => Some(&self.background_video),
            FileSlot::Frame => self.frame.as_ref(),
            FileSlot::AvatarAi => self.avatar_ai.as_ref(),
            FileSlot::PromoFootage => self.promo_footage.as_ref(),
        }
    }

    /// Populated slots in submission order
    pub fn populated(&self) -> impl Iterator<Item = (FileSlot, &FileEntry)> + '_ {
        FileSlot::ALL
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|entry| (slot, entry)))
    }

    pub fn count(&self) -> usize {
        self.populated().count()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DubbingKind {
    VideoDubbing,
    PromoVideoDubbing,
}

/// A trimmed dubbing script with its narration estimate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DubbingEntry {
    pub text: String,
    /// Length of the untrimmed input in UTF-16 code units, as browsers count it
    #[serde(rename = "length")]
    pub char_length: usize,
    #[serde(rename = "words")]
    pub word_count: usize,
    pub estimated_duration_seconds: u64,
    pub estimated_duration_formatted: String,
    #[serde(rename = "type")]
    pub kind: DubbingKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DubbingSummary {
    pub total_words: usize,
    pub total_duration_seconds: u64,
    pub total_duration_formatted: String,
    #[serde(rename = "readingSpeedWPM")]
    pub reading_speed_wpm: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TextDubbing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<DubbingEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_video: Option<DubbingEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<DubbingSummary>,
}

impl TextDubbing {
    /// Number of scripts present, not counting the summary
    pub fn script_count(&self) -> usize {
        usize::from(self.video.is_some()) + usize::from(self.promo_video.is_some())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PayloadMetadata {
    pub total_files: usize,
    pub has_frame: bool,
    #[serde(rename = "hasAvatarAI")]
    pub has_avatar_ai: bool,
    pub has_promo_footage: bool,
    pub has_text_dubbing_video: bool,
    pub has_text_dubbing_promo_video: bool,
    pub submitted_columns: Vec<SubmittedColumn>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileSummary {
    pub videos: usize,
    pub images: usize,
    pub required_files: usize,
    pub optional_files: usize,
}
