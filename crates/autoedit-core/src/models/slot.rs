use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;

/// Coarse media category of a file slot. Decided by the slot, never by MIME type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Video,
    Image,
}

/// One of the four file-carrying form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSlot {
    BackgroundVideo,
    Frame,
    AvatarAi,
    PromoFootage,
}

impl FileSlot {
    /// All slots in submission order
    pub const ALL: [FileSlot; 4] = [
        FileSlot::BackgroundVideo,
        FileSlot::Frame,
        FileSlot::AvatarAi,
        FileSlot::PromoFootage,
    ];

    /// Multipart field name, also the key under `files` in the payload
    pub fn field_name(&self) -> &'static str {
        match self {
            FileSlot::BackgroundVideo => "backgroundVideo",
            FileSlot::Frame => "frame",
            FileSlot::AvatarAi => "avatarAI",
            FileSlot::PromoFootage => "promoFootage",
        }
    }

    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.field_name() == name)
    }

    pub fn category(&self) -> FileCategory {
        match self {
            FileSlot::BackgroundVideo | FileSlot::PromoFootage => FileCategory::Video,
            FileSlot::Frame | FileSlot::AvatarAi => FileCategory::Image,
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, FileSlot::BackgroundVideo)
    }

    pub fn column(&self) -> SubmittedColumn {
        match self {
            FileSlot::BackgroundVideo => SubmittedColumn::BackgroundVideo,
            FileSlot::Frame => SubmittedColumn::Frame,
            FileSlot::AvatarAi => SubmittedColumn::AvatarAi,
            FileSlot::PromoFootage => SubmittedColumn::PromoFootage,
        }
    }
}

impl Display for FileSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.field_name())
    }
}

/// A logical form column that carried data in a submission.
///
/// Variant order is the order columns are reported in `metadata.submittedColumns`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, ToSchema)]
pub enum SubmittedColumn {
    #[serde(rename = "backgroundVideo")]
    BackgroundVideo,
    #[serde(rename = "frame")]
    Frame,
    #[serde(rename = "avatarAI")]
    AvatarAi,
    #[serde(rename = "promoFootage")]
    PromoFootage,
    #[serde(rename = "textDubbingVideo")]
    TextDubbingVideo,
    #[serde(rename = "textDubbingPromoVideo")]
    TextDubbingPromoVideo,
}

impl SubmittedColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmittedColumn::BackgroundVideo => "backgroundVideo",
            SubmittedColumn::Frame => "frame",
            SubmittedColumn::AvatarAi => "avatarAI",
            SubmittedColumn::PromoFootage => "promoFootage",
            SubmittedColumn::TextDubbingVideo => "textDubbingVideo",
            SubmittedColumn::TextDubbingPromoVideo => "textDubbingPromoVideo",
        }
    }

    /// Comma-joined column names, as carried by the `X-Submitted-Columns` header
    pub fn join(columns: &[SubmittedColumn]) -> String {
        columns
            .iter()
            .map(SubmittedColumn::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Display for SubmittedColumn {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
