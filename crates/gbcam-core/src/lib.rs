//! Handheld-camera style image conversion.
//!
//! Turns an arbitrary photo into a 128×112 (or 112×128) picture with four
//! tones and the 2×2 ordered-dither texture of early pocket cameras, then
//! magnifies it with nearest-neighbor for display.

pub mod compose;
pub mod dither;
pub mod error;
pub mod fit;
pub mod geometry;
pub mod palette;
pub mod pipeline;
pub mod raster;
pub mod tone;
pub mod upscale;

// Re-exports for convenience
pub use error::{ConfigError, ConvertError};
pub use geometry::{CropBox, GeometrySpec, Orientation};
pub use palette::{Palette, preset_names};
pub use pipeline::{ConvertOptions, ConvertOutput, convert_detailed, convert_image};
pub use raster::{IndexRaster, LumaRaster};
