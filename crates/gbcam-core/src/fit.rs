//! Aspect-preserving fit: center crop, then Lanczos3 resample.
//!
//! The crop box is handed to the resampler in fractional source
//! coordinates, so the sampled region has exactly the target aspect ratio
//! and the resample never stretches the picture along one axis.

use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use tracing::debug;

use crate::error::Result;
use crate::geometry::{CropBox, GeometrySpec};
use crate::raster::LumaRaster;

/// Crop `raster` to the centered target aspect ratio and resample it to
/// exactly `spec.width`×`spec.height`.
pub fn fit_to_geometry(raster: &LumaRaster, spec: GeometrySpec) -> Result<LumaRaster> {
    let (src_w, src_h) = raster.dimensions();
    let crop = CropBox::centered(src_w, src_h, spec);

    debug!(
        src_w,
        src_h,
        left = crop.left,
        top = crop.top,
        crop_w = crop.width,
        crop_h = crop.height,
        new_width = spec.width,
        new_height = spec.height,
        "Cropping and resampling to target geometry"
    );

    let mut src = Image::new(src_w, src_h, PixelType::F32);
    src.buffer_mut().copy_from_slice(&raster.to_ne_bytes());
    let mut dst = Image::new(spec.width, spec.height, PixelType::F32);

    let options = ResizeOptions::new()
        .resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3))
        .crop(crop.left, crop.top, crop.width, crop.height);
    Resizer::new().resize(&src, &mut dst, &options)?;

    Ok(LumaRaster::from_ne_bytes(spec.width, spec.height, dst.buffer()))
}
