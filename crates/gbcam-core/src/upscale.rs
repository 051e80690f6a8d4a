//! Integer nearest-neighbor magnification.
//!
//! Every source pixel becomes a `factor`×`factor` block so the hard pixel
//! edges of the sensor image survive display at larger sizes.

use image::RgbImage;
use tracing::debug;

use crate::error::ConfigError;

/// Magnification used by the default pipeline.
pub const DEFAULT_SCALE: u32 = 4;

/// Reject factors below 1.
pub fn validate_scale(factor: u32) -> Result<u32, ConfigError> {
    if factor == 0 {
        return Err(ConfigError::InvalidScale(factor));
    }
    Ok(factor)
}

/// Output dimensions of a `width`×`height` raster magnified by `factor`.
///
/// Fails when either side no longer fits in a `u32`.
pub fn scaled_dimensions(width: u32, height: u32, factor: u32) -> Result<(u32, u32), ConfigError> {
    let factor = validate_scale(factor)?;
    match (width.checked_mul(factor), height.checked_mul(factor)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(ConfigError::ScaleTooLarge {
            factor,
            width,
            height,
        }),
    }
}

/// Magnify `img` by an integer factor.
pub fn upscale(img: &RgbImage, factor: u32) -> Result<RgbImage, ConfigError> {
    let (w, h) = img.dimensions();
    let (out_w, out_h) = scaled_dimensions(w, h, factor)?;
    if factor == 1 {
        return Ok(img.clone());
    }

    debug!(w, h, factor, "Upscaling with nearest neighbor");
    Ok(RgbImage::from_fn(out_w, out_h, |x, y| {
        *img.get_pixel(x / factor, y / factor)
    }))
}
