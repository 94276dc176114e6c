use bytes::Bytes;

use super::FileSlot;

/// A file received in one of the submission slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub name: String,
    pub content_type: String,
    pub data: Bytes,
}

impl FileUpload {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Browsers submit an empty part for an untouched file input
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.data.is_empty()
    }
}

/// Raw form submission, exactly as received.
///
/// Required fields are still optional here; the payload builder is the single
/// place that decides whether a submission is complete.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub webhook_url: Option<String>,
    pub user_id: Option<String>,
    /// Platform name as typed; parsed by the builder
    pub platform: Option<String>,
    pub background_video: Option<FileUpload>,
    pub frame: Option<FileUpload>,
    pub avatar_ai: Option<FileUpload>,
    pub promo_footage: Option<FileUpload>,
    pub text_dubbing_video: Option<String>,
    pub text_dubbing_promo_video: Option<String>,
}

impl Submission {
    pub fn new(webhook_url: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            webhook_url: Some(webhook_url.into()),
            user_id: Some(user_id.into()),
            ..Self::default()
        }
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn with_file(mut self, slot: FileSlot, file: FileUpload) -> Self {
        *self.slot_mut(slot) = Some(file);
        self
    }

    pub fn with_text_dubbing_video(mut self, text: impl Into<String>) -> Self {
        self.text_dubbing_video = Some(text.into());
        self
    }

    pub fn with_text_dubbing_promo_video(mut self, text: impl Into<String>) -> Self {
        self.text_dubbing_promo_video = Some(text.into());
        self
    }

    pub fn file(&self, slot: FileSlot) -> Option<&FileUpload> {
        match slot {
            FileSlot::BackgroundVideo => self.background_video.as_ref(),
            FileSlot::Frame => self.frame.as_ref(),
            FileSlot::AvatarAi => self.avatar_ai.as_ref(),
            FileSlot::PromoFootage => self.promo_footage.as_ref(),
        }
    }

    pub fn slot_mut(&mut self, slot: FileSlot) -> &mut Option<FileUpload> {
        match slot {
            FileSlot::BackgroundVideo => &mut self.background_video,
            FileSlot::Frame => &mut self.frame,
            FileSlot::AvatarAi => &mut self.avatar_ai,
            FileSlot::PromoFootage => &mut self.promo_footage,
        }
    }
}
