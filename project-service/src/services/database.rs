//! Database service for project-service.

use crate::error::AppError;
use crate::models::{ProjectImage, ProjectWithImages};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument};

/// Database connection pool wrapper.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool.
    #[instrument(skip(database_url), fields(service = "project-service"))]
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, AppError> {
        info!(
            max_connections = max_connections,
            min_connections = min_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .connect(database_url)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to connect: {}", e)))?;

        info!("PostgreSQL connection pool established");

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check database health.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Health check failed: {}", e)))?;
        Ok(())
    }

    /// List all projects with their images aggregated per project.
    ///
    /// With `search`, filters by a case-insensitive substring match on the
    /// title. Image arrays are ordered by position; projects by id.
    #[instrument(skip(self))]
    pub async fn list_projects(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<ProjectWithImages>, AppError> {
        let projects = if let Some(term) = search {
            let pattern = format!("%{}%", term.to_lowercase());
            sqlx::query_as::<_, ProjectWithImages>(
                r#"
                SELECT p.id, p.title, p.description, p.cover_image_url,
                       COALESCE(
                           json_agg(
                               json_build_object('id', pi.id, 'url', pi.image_url, 'position', pi.position)
                               ORDER BY pi.position
                           ) FILTER (WHERE pi.id IS NOT NULL),
                           '[]'::json
                       ) AS images
                FROM projects p
                LEFT JOIN project_images pi ON p.id = pi.project_id
                WHERE LOWER(p.title) LIKE $1
                GROUP BY p.id
                ORDER BY p.id
                "#,
            )
            .bind(pattern)
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, ProjectWithImages>(
                r#"
                SELECT p.id, p.title, p.description, p.cover_image_url,
                       COALESCE(
                           json_agg(
                               json_build_object('id', pi.id, 'url', pi.image_url, 'position', pi.position)
                               ORDER BY pi.position
                           ) FILTER (WHERE pi.id IS NOT NULL),
                           '[]'::json
                       ) AS images
                FROM projects p
                LEFT JOIN project_images pi ON p.id = pi.project_id
                GROUP BY p.id
                ORDER BY p.id
                "#,
            )
            .fetch_all(&self.pool)
            .await
        }
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to list projects: {}", e)))?;

        Ok(projects)
    }

    /// Get a single project with its aggregated images.
    #[instrument(skip(self), fields(project_id = %project_id))]
    pub async fn get_project(
        &self,
        project_id: i32,
    ) -> Result<Option<ProjectWithImages>, AppError> {
        let project = sqlx::query_as::<_, ProjectWithImages>(
            r#"
            SELECT p.id, p.title, p.description, p.cover_image_url,
                   COALESCE(
                       json_agg(
                           json_build_object('id', pi.id, 'url', pi.image_url, 'position', pi.position)
                           ORDER BY pi.position
                       ) FILTER (WHERE pi.id IS NOT NULL),
                       '[]'::json
                   ) AS images
            FROM projects p
            LEFT JOIN project_images pi ON p.id = pi.project_id
            WHERE p.id = $1
            GROUP BY p.id
            "#,
        )
        .bind(project_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to get project: {}", e)))?;

        Ok(project)
    }

    /// Set a project's cover image URL.
    ///
    /// Returns `None` when the project does not exist.
    #[instrument(skip(self, image_url), fields(project_id = %project_id))]
    pub async fn set_cover_image(
        &self,
        project_id: i32,
        image_url: &str,
    ) -> Result<Option<(i32, String, String)>, AppError> {
        let row = sqlx::query_as::<_, (i32, String, String)>(
            r#"
            UPDATE projects
            SET cover_image_url = $2, updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
            RETURNING id, title, cover_image_url
            "#,
        )
        .bind(project_id)
        .bind(image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!("Failed to set cover image: {}", e))
        })?;

        if let Some((id, _, _)) = &row {
            info!(project_id = %id, "Cover image updated");
        }

        Ok(row)
    }

    /// Insert a gallery image row for a project.
    ///
    /// The position is stored as supplied; a foreign-key violation on the
    /// project reference is reported as not-found.
    #[instrument(skip(self, image_url), fields(project_id = %project_id))]
    pub async fn add_gallery_image(
        &self,
        project_id: i32,
        image_url: &str,
        position: i32,
    ) -> Result<ProjectImage, AppError> {
        let image = sqlx::query_as::<_, ProjectImage>(
            r#"
            INSERT INTO project_images (project_id, image_url, position)
            VALUES ($1, $2, $3)
            RETURNING id, project_id, image_url, position
            "#,
        )
        .bind(project_id)
        .bind(image_url)
        .bind(position)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::NotFound(anyhow::anyhow!("Project not found"))
            }
            _ => AppError::DatabaseError(anyhow::anyhow!("Failed to add gallery image: {}", e)),
        })?;

        info!(image_id = %image.id, position = image.position, "Gallery image added");

        Ok(image)
    }
}
