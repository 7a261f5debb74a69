mod image;
mod storage;

pub use image::{content_type_for, decode_image_payload, detect_extension};
pub use storage::{LocalStorage, Storage};
