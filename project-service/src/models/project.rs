//! Project and project image models for project-service.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;

/// A gallery image row owned by a project.
///
/// `position` is the display sort key. It is caller-supplied and not
/// validated for uniqueness or contiguity.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectImage {
    pub id: i32,
    pub project_id: i32,
    pub image_url: String,
    pub position: i32,
}

/// One element of the SQL-aggregated image array (`json_agg` output).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSummary {
    pub id: i32,
    pub url: String,
    pub position: i32,
}

/// A project with its images aggregated into a JSON array in a single
/// `LEFT JOIN ... GROUP BY` statement.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectWithImages {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub images: Json<Vec<ImageSummary>>,
}
