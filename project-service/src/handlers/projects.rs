use crate::dtos::{
    AttachImageRequest, CoverUpdatedResponse, ImageAttachedResponse, ImageType,
    ListProjectsParams, ProjectResponse,
};
use crate::error::AppError;
use crate::startup::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};

pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<ListProjectsParams>,
) -> Result<impl IntoResponse, AppError> {
    let search = params
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let projects = state.db.list_projects(search).await?;

    let response: Vec<ProjectResponse> = projects.into_iter().map(ProjectResponse::from).collect();

    Ok(Json(response))
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let project = state
        .db
        .get_project(project_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Project not found")))?;

    Ok(Json(ProjectResponse::from(project)))
}

pub async fn attach_image(
    State(state): State<AppState>,
    Json(request): Json<AttachImageRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (project_id, image_url) = match (request.project_id, request.image_url.as_deref()) {
        (Some(id), Some(url)) if !url.is_empty() => (id, url),
        _ => {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "project_id and image_url are required"
            )));
        }
    };

    match request.image_type {
        ImageType::Cover => {
            let (project_id, title, cover_image_url) = state
                .db
                .set_cover_image(project_id, image_url)
                .await?
                .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Project not found")))?;

            tracing::info!(project_id = %project_id, "Cover image attached");

            Ok(Json(CoverUpdatedResponse {
                success: true,
                project_id,
                title,
                cover_image_url,
            })
            .into_response())
        }
        ImageType::Gallery => {
            let image = state
                .db
                .add_gallery_image(project_id, image_url, request.position)
                .await?;

            tracing::info!(
                project_id = %project_id,
                image_id = %image.id,
                "Gallery image attached"
            );

            Ok(Json(ImageAttachedResponse {
                success: true,
                image_id: image.id,
                image_url: image.image_url,
                position: image.position,
            })
            .into_response())
        }
    }
}
