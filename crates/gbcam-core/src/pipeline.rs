//! End-to-end conversion of one decoded image.
//!
//! Stages run strictly in order:
//! tone map → aspect fit → ordered dither → palette compose → upscale.
//! Geometry and scale are checked before any pixel work.

use image::{DynamicImage, RgbImage};
use tracing::debug;

use crate::compose::compose;
use crate::dither::ordered_dither;
use crate::error::{ConvertError, Result};
use crate::fit::fit_to_geometry;
use crate::geometry::{GeometrySpec, Orientation};
use crate::palette::Palette;
use crate::tone::tone_map;
use crate::upscale::{DEFAULT_SCALE, scaled_dimensions, upscale, validate_scale};

/// Parameters for a single conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Output colors, darkest first.
    pub palette: Palette,

    /// Orientation policy for the sensor raster.
    pub orientation: Orientation,

    /// Manual contrast factor around midgray (1.0 = unchanged).
    pub contrast: f32,

    /// Stretch the histogram before quantization.
    pub autocontrast: bool,

    /// Strength of the threshold pattern (0.0 = posterize).
    pub dither_intensity: f32,

    /// Integer magnification of the final image.
    pub scale: u32,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            orientation: Orientation::Auto,
            contrast: 1.0,
            autocontrast: false,
            dither_intensity: 1.0,
            scale: DEFAULT_SCALE,
        }
    }
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Builder: set orientation policy.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Builder: set manual contrast factor.
    pub fn with_contrast(mut self, contrast: f32) -> Self {
        self.contrast = contrast;
        self
    }

    /// Builder: set autocontrast flag.
    pub fn with_autocontrast(mut self, val: bool) -> Self {
        self.autocontrast = val;
        self
    }

    /// Builder: set dither intensity.
    pub fn with_dither_intensity(mut self, intensity: f32) -> Self {
        self.dither_intensity = intensity;
        self
    }

    /// Builder: set upscale factor.
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }
}

/// Final image together with the sensor geometry it was built at.
#[derive(Debug, Clone)]
pub struct ConvertOutput {
    pub geometry: GeometrySpec,
    pub image: RgbImage,
}

/// Convert a decoded image, returning the geometry used as well.
pub fn convert_detailed(img: &DynamicImage, options: &ConvertOptions) -> Result<ConvertOutput> {
    let scale = validate_scale(options.scale)?;
    let (src_w, src_h) = (img.width(), img.height());
    if src_w == 0 || src_h == 0 {
        return Err(ConvertError::EmptySource);
    }
    let geometry = GeometrySpec::plan(src_w, src_h, options.orientation);
    scaled_dimensions(geometry.width, geometry.height, scale)?;

    let luma = tone_map(img, options.autocontrast, options.contrast);
    let fitted = fit_to_geometry(&luma, geometry)?;
    let indices = ordered_dither(&fitted, options.dither_intensity);
    let sensor = compose(&indices, &options.palette);
    let image = upscale(&sensor, scale)?;

    debug!(
        width = image.width(),
        height = image.height(),
        "Conversion complete"
    );
    Ok(ConvertOutput { geometry, image })
}

/// Convert a decoded image into the upscaled 4-color result.
pub fn convert_image(img: &DynamicImage, options: &ConvertOptions) -> Result<RgbImage> {
    convert_detailed(img, options).map(|out| out.image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use image::{Rgb, RgbImage};
    use std::collections::HashSet;

    /// Photo-like test image: diagonal gradient with colored blocks.
    fn create_photo(width: u32, height: u32) -> DynamicImage {
        let img = RgbImage::from_fn(width, height, |x, y| {
            let base = ((x + y) * 255 / (width + height - 2)) as u8;
            if (x / 25 + y / 25) % 3 == 0 {
                Rgb([base, base / 2, 255 - base])
            } else {
                Rgb([base, base, base])
            }
        });
        DynamicImage::ImageRgb8(img)
    }

    fn grayscale_colors() -> HashSet<Rgb<u8>> {
        [
            Rgb([0x00, 0x00, 0x00]),
            Rgb([0x55, 0x55, 0x55]),
            Rgb([0xAA, 0xAA, 0xAA]),
            Rgb([0xFF, 0xFF, 0xFF]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_landscape_scenario() {
        let photo = create_photo(300, 200);
        let out = convert_detailed(&photo, &ConvertOptions::default()).unwrap();

        assert_eq!(out.geometry, GeometrySpec::LANDSCAPE);
        assert_eq!(out.image.dimensions(), (512, 448));

        let allowed = grayscale_colors();
        assert!(out.image.pixels().all(|p| allowed.contains(p)));
    }

    #[test]
    fn test_forced_landscape_on_portrait_source() {
        let photo = create_photo(200, 300);
        let options = ConvertOptions::new().with_orientation(Orientation::Landscape);
        let out = convert_detailed(&photo, &options).unwrap();

        assert_eq!(out.geometry, GeometrySpec::LANDSCAPE);
        assert_eq!(out.image.dimensions(), (512, 448));
    }

    #[test]
    fn test_auto_portrait_source() {
        let photo = create_photo(200, 300);
        let out = convert_detailed(&photo, &ConvertOptions::default()).unwrap();
        assert_eq!(out.geometry, GeometrySpec::PORTRAIT);
        assert_eq!(out.image.dimensions(), (448, 512));
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let photo = create_photo(320, 240);
        let options = ConvertOptions::new()
            .with_autocontrast(true)
            .with_contrast(1.3)
            .with_palette(Palette::preset("berry").unwrap());

        let a = convert_image(&photo, &options).unwrap();
        let b = convert_image(&photo, &options).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_dimension_invariant_for_all_orientations_and_scales() {
        let photo = create_photo(97, 61);
        for orientation in [
            Orientation::Auto,
            Orientation::Portrait,
            Orientation::Landscape,
        ] {
            for scale in [1, 2, 4] {
                let options = ConvertOptions::new()
                    .with_orientation(orientation)
                    .with_scale(scale);
                let out = convert_detailed(&photo, &options).unwrap();
                let (w, h) = (out.geometry.width, out.geometry.height);
                assert!((w, h) == (128, 112) || (w, h) == (112, 128));
                assert_eq!(out.image.dimensions(), (w * scale, h * scale));
            }
        }
    }

    #[test]
    fn test_custom_palette_fidelity() {
        let palette = Palette::resolve(&["#ff0000", "#00ff00", "#0000ff", "#ffff00"]).unwrap();
        let options = ConvertOptions::new()
            .with_palette(palette)
            .with_dither_intensity(2.5);
        let img = convert_image(&create_photo(150, 150), &options).unwrap();
        assert!(img.pixels().all(|p| palette.colors().contains(p)));
    }

    #[test]
    fn test_zero_scale_rejected_before_processing() {
        let options = ConvertOptions::new().with_scale(0);
        let err = convert_image(&create_photo(10, 10), &options).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::Config(ConfigError::InvalidScale(0))
        ));
    }

    #[test]
    fn test_overflowing_scale_rejected_before_processing() {
        let options = ConvertOptions::new().with_scale(40_000_000);
        let err = convert_image(&create_photo(300, 200), &options).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::Config(ConfigError::ScaleTooLarge {
                factor: 40_000_000,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_source_rejected() {
        let empty = DynamicImage::ImageRgb8(RgbImage::new(0, 0));
        let err = convert_image(&empty, &ConvertOptions::default()).unwrap_err();
        assert!(matches!(err, ConvertError::EmptySource));
    }

    #[test]
    fn test_posterize_has_no_tile_pattern_on_flat_input() {
        let flat = DynamicImage::ImageRgb8(RgbImage::from_pixel(256, 224, Rgb([120, 120, 120])));
        let options = ConvertOptions::new()
            .with_dither_intensity(0.0)
            .with_scale(1);
        let img = convert_image(&flat, &options).unwrap();
        let first = *img.get_pixel(0, 0);
        assert!(img.pixels().all(|p| *p == first));

        let dithered = convert_image(&flat, &options.clone().with_dither_intensity(1.0)).unwrap();
        assert!(dithered.pixels().any(|p| *p != *dithered.get_pixel(0, 0)));
    }
}
