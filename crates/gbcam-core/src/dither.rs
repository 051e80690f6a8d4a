//! Ordered dithering and 4-level quantization.
//!
//! A fixed 2×2 threshold tile is repeated across the raster, one cell per
//! pixel. Each cell becomes a centered offset that is added to the luminance
//! before it is binned into one of four palette indices.

use tracing::debug;

use crate::raster::{IndexRaster, LumaRaster};

/// Threshold tile, indexed `[y % 2][x % 2]`.
pub const THRESHOLD_MATRIX: [[u8; 2]; 2] = [[0, 2], [3, 1]];

/// Number of cells in the threshold tile.
const MATRIX_CELLS: f32 = 4.0;

/// Peak-to-peak offset span at intensity 1.0.
const OFFSET_SPAN: f32 = 64.0;

/// Width of one quantization bin (255 / 3).
const BIN_WIDTH: f32 = 85.0;

/// Highest palette index.
const MAX_INDEX: f32 = 3.0;

/// Centered threshold offset for pixel `(x, y)`.
///
/// Cells `{0, 1, 2, 3}` map to `{-32, -16, 0, +16}` at intensity 1.0.
#[inline]
pub fn threshold_offset(x: u32, y: u32, intensity: f32) -> f32 {
    let cell = THRESHOLD_MATRIX[(y % 2) as usize][(x % 2) as usize];
    (f32::from(cell) / MATRIX_CELLS - 0.5) * OFFSET_SPAN * intensity
}

/// Quantize an offset-adjusted sample into a palette index.
///
/// Rounds half to even, so the bin edges 42.5 and 212.5 fall to the lower
/// bin and 127.5 to the upper one.
#[inline]
pub fn quantize(value: f32) -> u8 {
    let value = value.clamp(0.0, 255.0);
    (value / BIN_WIDTH).round_ties_even().clamp(0.0, MAX_INDEX) as u8
}

/// Apply the tiled threshold pattern and quantize to 4 levels.
///
/// `intensity` scales the pattern; 0.0 gives plain posterization.
pub fn ordered_dither(raster: &LumaRaster, intensity: f32) -> IndexRaster {
    let (width, height) = raster.dimensions();
    debug!(width, height, intensity, "Applying ordered dithering");

    let mut indices = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            let adjusted = raster.get(x, y) + threshold_offset(x, y, intensity);
            indices.push(quantize(adjusted));
        }
    }

    IndexRaster::from_vec(width, height, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a small test raster with a gradient pattern.
    fn create_gradient_raster(width: u32, height: u32) -> LumaRaster {
        let mut data = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(((x + y) * 255 / (width + height - 2)) as f32);
            }
        }
        LumaRaster::from_vec(width, height, data)
    }

    #[test]
    fn test_threshold_offsets_at_unit_intensity() {
        assert_eq!(threshold_offset(0, 0, 1.0), -32.0);
        assert_eq!(threshold_offset(1, 0, 1.0), 0.0);
        assert_eq!(threshold_offset(0, 1, 1.0), 16.0);
        assert_eq!(threshold_offset(1, 1, 1.0), -16.0);
    }

    #[test]
    fn test_threshold_tiles_every_two_pixels() {
        for y in 0..6 {
            for x in 0..6 {
                assert_eq!(
                    threshold_offset(x, y, 1.0),
                    threshold_offset(x % 2, y % 2, 1.0)
                );
            }
        }
    }

    #[test]
    fn test_threshold_scales_with_intensity() {
        assert_eq!(threshold_offset(0, 0, 0.5), -16.0);
        assert_eq!(threshold_offset(0, 1, 2.0), 32.0);
        assert_eq!(threshold_offset(0, 0, 0.0), 0.0);
    }

    #[test]
    fn test_quantize_bin_edges() {
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(42.0), 0);
        assert_eq!(quantize(42.5), 0);
        assert_eq!(quantize(43.0), 1);
        assert_eq!(quantize(127.0), 1);
        assert_eq!(quantize(127.5), 2);
        assert_eq!(quantize(212.5), 2);
        assert_eq!(quantize(213.0), 3);
        assert_eq!(quantize(255.0), 3);
    }

    #[test]
    fn test_quantize_clamps_out_of_range() {
        assert_eq!(quantize(-50.0), 0);
        assert_eq!(quantize(400.0), 3);
        assert_eq!(quantize(f32::NAN), 0);
    }

    #[test]
    fn test_indices_always_in_range() {
        let raster = create_gradient_raster(64, 64);
        for intensity in [0.0, 0.5, 1.0, 3.0, 100.0] {
            let result = ordered_dither(&raster, intensity);
            assert!(result.as_slice().iter().all(|&i| i <= 3), "intensity {intensity}");
        }
    }

    #[test]
    fn test_preserves_dimensions() {
        let raster = create_gradient_raster(10, 6);
        let result = ordered_dither(&raster, 1.0);
        assert_eq!(result.dimensions(), (10, 6));
    }

    #[test]
    fn test_zero_intensity_is_posterization() {
        let raster = create_gradient_raster(32, 32);
        let result = ordered_dither(&raster, 0.0);
        for y in 0..32 {
            for x in 0..32 {
                assert_eq!(result.get(x, y), quantize(raster.get(x, y)));
            }
        }
    }

    #[test]
    fn test_midgray_produces_checker_pattern() {
        // 120 + {-32, 0, +16, -16} = {88, 120, 136, 104} -> {1, 1, 2, 1}
        let raster = LumaRaster::filled(4, 4, 120.0);
        let result = ordered_dither(&raster, 1.0);
        for y in 0..4 {
            for x in 0..4 {
                let expected = if x % 2 == 0 && y % 2 == 1 { 2 } else { 1 };
                assert_eq!(result.get(x, y), expected, "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_extremes_stay_solid() {
        let black = ordered_dither(&LumaRaster::filled(4, 4, 0.0), 1.0);
        assert!(black.as_slice().iter().all(|&i| i == 0));

        let white = ordered_dither(&LumaRaster::filled(4, 4, 255.0), 1.0);
        assert!(white.as_slice().iter().all(|&i| i == 3));
    }
}
