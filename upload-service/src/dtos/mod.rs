use serde::{Deserialize, Serialize};

/// Request body for uploading an image.
#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    /// Base64-encoded image bytes, optionally wrapped in a
    /// `data:<mime>;base64,` prefix.
    pub image: Option<String>,
}

/// Response after a successful upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
    pub filename: String,
}
