//! Source raster provider: decode image files from disk.

use std::path::Path;

use gbcam_core::ConvertError;
use image::{DynamicImage, ImageError};
use tracing::debug;

/// File extensions accepted by batch conversion (lowercase, without dot).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "tiff"];

/// Whether `path` has one of the supported image extensions (case-insensitive).
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Decode an image file. The format is detected from the file contents.
pub fn load_image(path: &Path) -> Result<DynamicImage, ConvertError> {
    let img = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| match e {
            ImageError::IoError(io) => ConvertError::Io(io),
            other => ConvertError::Decode(other),
        })?;
    debug!(path = %path.display(), width = img.width(), height = img.height(), "Loaded image");
    Ok(img)
}
