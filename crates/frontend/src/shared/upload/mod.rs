//! Локальный список изображений и объектные URL для превью.

pub mod browser_file;
pub mod image_list;
pub mod preview_cache;

pub use browser_file::{files_from_list, BrowserFile, ObjectUrlBackend};
pub use image_list::{AddOutcome, FileKey, ImageList, UploadFile, ALLOWED_IMAGE_TYPES, DEFAULT_MAX_IMAGES};
pub use preview_cache::{PreviewBackend, PreviewCache};
