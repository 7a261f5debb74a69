mod health;
mod projects;

pub use health::{health_check, readiness_check};
pub use projects::{attach_image, get_project, list_projects};
