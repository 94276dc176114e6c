//! Submission → payload transformation. Pure, no I/O.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};

use super::{
    DubbingEntry, DubbingKind, DubbingSummary, FileEntry, FileSummary, Payload, PayloadFiles,
    PayloadMetadata, RequestInfo, TextDubbing, UserInfo,
};
use crate::constants::{BYTES_PER_MB, PAYLOAD_SOURCE, PAYLOAD_VERSION, READING_SPEED_WPM};
use crate::dubbing::{estimated_duration_seconds, format_duration, word_count};
use crate::error::{AppError, RequiredField};
use crate::models::{FileCategory, FileSlot, FileUpload, Platform, Submission, SubmittedColumn};

/// Build the outbound payload, stamped with the current time.
pub fn build_payload(submission: &Submission) -> Result<Payload, AppError> {
    build_payload_at(submission, Utc::now())
}

/// Build the outbound payload with an explicit construction time.
///
/// Fails with [`AppError::MissingField`] when the webhook URL, the user ID or
/// the background video is missing, checked in that order. An unknown platform
/// fails with [`AppError::InvalidInput`] only once those three are present.
pub fn build_payload_at(submission: &Submission, now: DateTime<Utc>) -> Result<Payload, AppError> {
    let webhook_url = required_text(submission.webhook_url.as_deref())
        .ok_or(AppError::MissingField(RequiredField::WebhookUrl))?;
    let user_id = required_text(submission.user_id.as_deref())
        .ok_or(AppError::MissingField(RequiredField::UserId))?;
    let background_video = submission
        .background_video
        .as_ref()
        .filter(|file| !file.is_blank())
        .ok_or(AppError::MissingField(RequiredField::BackgroundVideo))?;
    let platform = match required_text(submission.platform.as_deref()) {
        Some(raw) => raw
            .parse::<Platform>()
            .map_err(|e| AppError::InvalidInput(e.to_string()))?,
        None => Platform::default(),
    };

    let optional_entry = |slot: FileSlot| {
        submission
            .file(slot)
            .filter(|file| !file.is_blank())
            .map(|file| file_entry(slot, file))
    };

    let files = PayloadFiles {
        background_video: file_entry(FileSlot::BackgroundVideo, background_video),
        frame: optional_entry(FileSlot::Frame),
        avatar_ai: optional_entry(FileSlot::AvatarAi),
        promo_footage: optional_entry(FileSlot::PromoFootage),
    };

    let mut text_dubbing = TextDubbing {
        video: submission
            .text_dubbing_video
            .as_deref()
            .and_then(|text| dubbing_entry(text, DubbingKind::VideoDubbing)),
        promo_video: submission
            .text_dubbing_promo_video
            .as_deref()
            .and_then(|text| dubbing_entry(text, DubbingKind::PromoVideoDubbing)),
        summary: None,
    };
    text_dubbing.summary = dubbing_summary(&text_dubbing);

    let metadata = metadata_for(&files, &text_dubbing);
    let file_summary = file_summary_for(&files);

    tracing::debug!(
        total_files = metadata.total_files,
        columns = %SubmittedColumn::join(&metadata.submitted_columns),
        "Built relay payload"
    );

    Ok(Payload {
        timestamp: now,
        request_info: RequestInfo {
            source: PAYLOAD_SOURCE.to_string(),
            version: PAYLOAD_VERSION.to_string(),
            webhook_url: webhook_url.to_string(),
        },
        user_info: UserInfo {
            platform,
            user_id: user_id.to_string(),
            timestamp: now,
        },
        files,
        text_dubbing,
        metadata,
        file_summary,
    })
}

fn required_text(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn file_entry(slot: FileSlot, file: &FileUpload) -> FileEntry {
    let size_bytes = file.size() as u64;
    let base64_data = STANDARD.encode(&file.data);

    tracing::debug!(
        slot = %slot,
        name = %file.name,
        size_bytes,
        encoded_len = base64_data.len(),
        "Encoded file for relay"
    );

    FileEntry {
        name: file.name.clone(),
        mime_type: file.content_type.clone(),
        size_bytes,
        size_mb: format_size_mb(size_bytes),
        base64_data,
        category: slot.category(),
        required: slot.is_required(),
    }
}

/// Megabytes with two decimals, ties rounded up
fn format_size_mb(size_bytes: u64) -> String {
    let hundredths = (size_bytes * 100 + BYTES_PER_MB / 2) / BYTES_PER_MB;
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

fn dubbing_entry(raw: &str, kind: DubbingKind) -> Option<DubbingEntry> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    let words = word_count(text);
    let seconds = estimated_duration_seconds(words);

    Some(DubbingEntry {
        text: text.to_string(),
        char_length: raw.encode_utf16().count(),
        word_count: words,
        estimated_duration_seconds: seconds,
        estimated_duration_formatted: format_duration(seconds),
        kind,
    })
}

/// Totals are sums of the per-script rounded durations, never a re-rounding of combined words.
fn dubbing_summary(text_dubbing: &TextDubbing) -> Option<DubbingSummary> {
    let scripts: Vec<&DubbingEntry> = text_dubbing
        .video
        .iter()
        .chain(text_dubbing.promo_video.iter())
        .collect();
    if scripts.is_empty() {
        return None;
    }

    let total_words = scripts.iter().map(|s| s.word_count).sum();
    let total_duration_seconds = scripts.iter().map(|s| s.estimated_duration_seconds).sum();

    Some(DubbingSummary {
        total_words,
        total_duration_seconds,
        total_duration_formatted: format_duration(total_duration_seconds),
        reading_speed_wpm: READING_SPEED_WPM,
    })
}

fn metadata_for(files: &PayloadFiles, text_dubbing: &TextDubbing) -> PayloadMetadata {
    let mut submitted_columns: Vec<SubmittedColumn> =
        files.populated().map(|(slot, _)| slot.column()).collect();
    if text_dubbing.video.is_some() {
        submitted_columns.push(SubmittedColumn::TextDubbingVideo);
    }
    if text_dubbing.promo_video.is_some() {
        submitted_columns.push(SubmittedColumn::TextDubbingPromoVideo);
    }

    PayloadMetadata {
        total_files: files.count(),
        has_frame: files.frame.is_some(),
        has_avatar_ai: files.avatar_ai.is_some(),
        has_promo_footage: files.promo_footage.is_some(),
        has_text_dubbing_video: text_dubbing.video.is_some(),
        has_text_dubbing_promo_video: text_dubbing.promo_video.is_some(),
        submitted_columns,
    }
}

fn file_summary_for(files: &PayloadFiles) -> FileSummary {
    let (mut videos, mut images, mut required_files, mut optional_files) = (0, 0, 0, 0);
    for (slot, _) in files.populated() {
        match slot.category() {
            FileCategory::Video => videos += 1,
            FileCategory::Image => images += 1,
        }
        if slot.is_required() {
            required_files += 1;
        } else {
            optional_files += 1;
        }
    }

    FileSummary {
        videos,
        images,
        required_files,
        optional_files,
    }
}
