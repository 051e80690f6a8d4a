//! Single-file conversion: decode, run the pipeline, encode.

use std::path::Path;

use gbcam_core::{ConvertError, ConvertOptions, GeometrySpec, convert_detailed};
use tracing::info;

use super::{sink, source};

/// Convert `input` and write the PNG result to `output`.
///
/// Returns the sensor geometry the image was rendered at.
pub fn convert_file(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<GeometrySpec, ConvertError> {
    let img = source::load_image(input)?;
    let out = convert_detailed(&img, options)?;
    info!(
        width = out.geometry.width,
        height = out.geometry.height,
        "Cropped to sensor aspect ratio and resized"
    );

    sink::save_png(&out.image, output)?;
    info!(output = %output.display(), "Successfully converted image");
    Ok(out.geometry)
}
