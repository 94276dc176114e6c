//! Test fixtures: submission forms and a silent endpoint.

#![allow(dead_code)]

use axum_test::multipart::{MultipartForm, Part};
use std::net::SocketAddr;

pub const USER_ID: &str = "user-42";

pub fn video_part(name: &str, size: usize) -> Part {
    Part::bytes(vec![7u8; size])
        .file_name(name.to_string())
        .mime_type("video/mp4")
}

pub fn image_part(name: &str) -> Part {
    Part::bytes(b"\x89PNG\r\n\x1a\n".to_vec())
        .file_name(name.to_string())
        .mime_type("image/png")
}

/// Required fields only
pub fn minimal_form(webhook_url: &str) -> MultipartForm {
    MultipartForm::new()
        .add_text("webhookUrl", webhook_url.to_string())
        .add_text("userId", USER_ID)
        .add_part("backgroundVideo", video_part("background.mp4", 1024))
}

/// Every slot and both dubbing scripts
pub fn full_form(webhook_url: &str) -> MultipartForm {
    minimal_form(webhook_url)
        .add_text("platform", "instagram")
        .add_part("frame", image_part("frame.png"))
        .add_part("avatarAI", image_part("avatar.png"))
        .add_part("promoFootage", video_part("promo.mp4", 512))
        .add_text("textDubbingVideo", "  Halo semua, selamat datang  ")
        .add_text("textDubbingPromoVideo", "Beli sekarang")
}

/// Accepts connections and never answers
pub async fn silent_endpoint() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind silent endpoint");
    let addr = listener.local_addr().expect("No local addr");
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });
    addr
}
