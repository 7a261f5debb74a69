mod health;
mod uploads;

pub use health::{health_check, readiness_check};
pub use uploads::{serve_upload, upload_image};
