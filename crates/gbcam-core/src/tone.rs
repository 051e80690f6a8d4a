//! Tone mapping: grayscale reduction, histogram autocontrast, manual contrast.
//!
//! Order matters: luma first, then autocontrast, then the contrast pivot.

use image::DynamicImage;
use tracing::debug;

use crate::raster::LumaRaster;

/// ITU-R 601-2 luma weights.
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Percentage of samples clipped at each end by autocontrast.
pub const AUTOCONTRAST_CUTOFF_PERCENT: usize = 1;

/// Midgray pivot for manual contrast.
const CONTRAST_PIVOT: f32 = 128.0;

/// Reduce a color image to a luminance raster. Alpha is ignored.
pub fn to_luma(img: &DynamicImage) -> LumaRaster {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    debug!(width, height, "Converting to luminance");

    let data = rgb
        .pixels()
        .map(|p| {
            let [r, g, b] = p.0;
            (LUMA_R * f32::from(r) + LUMA_G * f32::from(g) + LUMA_B * f32::from(b)).clamp(0.0, 255.0)
        })
        .collect();
    LumaRaster::from_vec(width, height, data)
}

/// Stretch the histogram so the darkest and lightest `cutoff_percent` of
/// samples clip to 0 and 255 and the rest spans the full range.
///
/// Flat images (no spread left after clipping) are returned unchanged.
pub fn autocontrast(raster: &mut LumaRaster, cutoff_percent: usize) {
    let mut histogram = [0usize; 256];
    for &v in raster.as_slice() {
        histogram[level(v)] += 1;
    }

    let total: usize = histogram.iter().sum();
    let cut = total * cutoff_percent / 100;
    trim_low(&mut histogram, cut);
    trim_high(&mut histogram, cut);

    let lo = histogram.iter().position(|&n| n > 0);
    let hi = histogram.iter().rposition(|&n| n > 0);
    let (lo, hi) = match (lo, hi) {
        (Some(lo), Some(hi)) if hi > lo => (lo as f32, hi as f32),
        _ => {
            debug!("Histogram has no spread, skipping autocontrast");
            return;
        }
    };

    let scale = 255.0 / (hi - lo);
    debug!(lo, hi, scale, "Applying autocontrast");
    for v in raster.as_mut_slice() {
        *v = ((*v - lo) * scale).clamp(0.0, 255.0);
    }
}

/// Linear contrast about midgray: `clamp((v - 128) * factor + 128)`.
///
/// A factor of 1.0 is a no-op; negative factors invert the tones.
pub fn apply_contrast(raster: &mut LumaRaster, factor: f32) {
    if factor == 1.0 {
        return;
    }
    debug!(factor, "Applying manual contrast");
    for v in raster.as_mut_slice() {
        *v = ((*v - CONTRAST_PIVOT) * factor + CONTRAST_PIVOT).clamp(0.0, 255.0);
    }
}

/// Full tone stage: luma, optional autocontrast, manual contrast.
pub fn tone_map(img: &DynamicImage, use_autocontrast: bool, contrast: f32) -> LumaRaster {
    let mut raster = to_luma(img);
    if use_autocontrast {
        autocontrast(&mut raster, AUTOCONTRAST_CUTOFF_PERCENT);
    }
    apply_contrast(&mut raster, contrast);
    raster
}

#[inline]
fn level(v: f32) -> usize {
    v.round().clamp(0.0, 255.0) as usize
}

fn trim_low(histogram: &mut [usize; 256], mut cut: usize) {
    for bin in histogram.iter_mut() {
        if cut == 0 {
            break;
        }
        let removed = cut.min(*bin);
        *bin -= removed;
        cut -= removed;
    }
}

fn trim_high(histogram: &mut [usize; 256], mut cut: usize) {
    for bin in histogram.iter_mut().rev() {
        if cut == 0 {
            break;
        }
        let removed = cut.min(*bin);
        *bin -= removed;
        cut -= removed;
    }
}
