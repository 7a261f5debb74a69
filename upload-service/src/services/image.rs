//! Base64 image decoding and file-type sniffing.

use crate::error::AppError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Decode a base64 image payload, stripping a `data:<mime>;base64,` prefix
/// if present.
pub fn decode_image_payload(payload: &str) -> Result<Vec<u8>, AppError> {
    let encoded = match payload.split_once(',') {
        Some((_, rest)) => rest,
        None => payload,
    };

    STANDARD
        .decode(encoded.trim())
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Invalid base64 image data: {}", e)))
}

/// Sniff a file extension from decoded magic bytes.
///
/// Recognizes PNG, JPEG, and GIF; anything else defaults to `jpg`.
pub fn detect_extension(data: &[u8]) -> &'static str {
    if data.starts_with(&[0x89, b'P', b'N', b'G']) {
        "png"
    } else if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "jpg"
    } else if data.starts_with(b"GIF8") {
        "gif"
    } else {
        "jpg"
    }
}

/// Content type for a stored filename, derived from its extension.
pub fn content_type_for(filename: &str) -> &'static str {
    if filename.ends_with(".png") {
        "image/png"
    } else if filename.ends_with(".gif") {
        "image/gif"
    } else if filename.ends_with(".jpg") || filename.ends_with(".jpeg") {
        "image/jpeg"
    } else {
        "application/octet-stream"
    }
}
