use crate::models::{ImageSummary, ProjectWithImages};
use serde::{Deserialize, Serialize};

/// Query parameters for listing projects.
#[derive(Debug, Deserialize)]
pub struct ListProjectsParams {
    /// Case-insensitive substring match on the project title.
    pub search: Option<String>,
}

/// Which slot an attached image fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    Cover,
    #[default]
    Gallery,
}

/// Request body for attaching an image to a project.
///
/// `project_id` and `image_url` are required; both are optional here so the
/// handler can answer a missing field with a 400 instead of a body-decode
/// rejection.
#[derive(Debug, Deserialize)]
pub struct AttachImageRequest {
    pub project_id: Option<i32>,
    pub image_url: Option<String>,
    #[serde(rename = "type", default)]
    pub image_type: ImageType,
    #[serde(default)]
    pub position: i32,
}

/// A project with its aggregated gallery, as served to clients.
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "coverImage")]
    pub cover_image: Option<String>,
    pub images: Vec<ImageSummary>,
}

impl From<ProjectWithImages> for ProjectResponse {
    fn from(row: ProjectWithImages) -> Self {
        ProjectResponse {
            id: row.id,
            title: row.title,
            description: row.description,
            cover_image: row.cover_image_url,
            images: row.images.0,
        }
    }
}

/// Response after a cover image update.
#[derive(Debug, Serialize)]
pub struct CoverUpdatedResponse {
    pub success: bool,
    pub project_id: i32,
    pub title: String,
    pub cover_image_url: String,
}

/// Response after a gallery image insert.
#[derive(Debug, Serialize)]
pub struct ImageAttachedResponse {
    pub success: bool,
    pub image_id: i32,
    pub image_url: String,
    pub position: i32,
}
