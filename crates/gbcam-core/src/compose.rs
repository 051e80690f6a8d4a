//! Palette composition: turn an index raster into an RGB image.

use image::RgbImage;
use tracing::debug;

use crate::palette::Palette;
use crate::raster::IndexRaster;

/// Look up every index in `palette`.
///
/// # Panics
/// Panics on an index outside `0..4`; the ditherer never produces one.
pub fn compose(indices: &IndexRaster, palette: &Palette) -> RgbImage {
    let (width, height) = indices.dimensions();
    debug!(width, height, "Composing palette image");

    RgbImage::from_fn(width, height, |x, y| palette.color(indices.get(x, y)))
}
