use crate::dtos::{UploadRequest, UploadResponse};
use crate::error::AppError;
use crate::services::{content_type_for, decode_image_payload, detect_extension};
use crate::startup::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use uuid::Uuid;

pub async fn upload_image(
    State(state): State<AppState>,
    Json(request): Json<UploadRequest>,
) -> Result<impl IntoResponse, AppError> {
    let payload = request
        .image
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("Image data required")))?;

    let data = decode_image_payload(payload)?;
    let extension = detect_extension(&data);
    let filename = format!("{}.{}", Uuid::new_v4(), extension);

    tracing::info!(
        filename = %filename,
        size = data.len(),
        "Image upload started"
    );

    state
        .storage
        .upload(&filename, data)
        .await
        .map_err(|e| {
            tracing::error!("Failed to write upload {}: {}", filename, e);
            e
        })?;

    let url = format!("{}/{}", state.config.storage.public_base_path, filename);

    tracing::info!(filename = %filename, "Image upload completed");

    Ok(Json(UploadResponse {
        success: true,
        url,
        filename,
    }))
}

pub async fn serve_upload(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    // Storage keys are flat uuid filenames; anything path-like is refused
    if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
        return Err(AppError::BadRequest(anyhow::anyhow!("Invalid filename")));
    }

    let data = state.storage.download(&filename).await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, content_type_for(&filename))],
        data,
    ))
}
