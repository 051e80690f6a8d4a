//! Result raster sink: encode the final image as PNG.

use std::path::Path;

use gbcam_core::ConvertError;
use image::{ImageError, ImageFormat, RgbImage};
use tracing::info;

/// Write `img` to `path` as PNG, creating missing parent directories.
pub fn save_png(img: &RgbImage, path: &Path) -> Result<(), ConvertError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
            info!(dir = %parent.display(), "Created output directory");
        }
    }
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| match e {
            ImageError::IoError(io) => ConvertError::Io(io),
            other => ConvertError::Encode(other),
        })
}
