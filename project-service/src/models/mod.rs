mod project;

pub use project::{ImageSummary, ProjectImage, ProjectWithImages};
