//! Error types for palette/geometry configuration and image conversion.

/// Invalid conversion parameters, detected before any pixel is touched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid palette: unknown preset '{0}'")]
    UnknownPreset(String),

    #[error("Invalid palette: expected a preset name or 4 hex colors, got {count} values")]
    InvalidPalette { count: usize },

    #[error("Invalid palette: '{token}' is not a #RRGGBB color")]
    InvalidColor { token: String },

    #[error("Invalid orientation '{0}': use 'auto', 'portrait', or 'landscape'")]
    InvalidOrientation(String),

    #[error("Invalid scale factor {0}")]
    InvalidScale(u32),

    #[error("Scale factor {factor} is too large for a {width}x{height} image")]
    ScaleTooLarge { factor: u32, width: u32, height: u32 },
}

/// Errors that abort the conversion of a single image.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Resample error: {0}")]
    Resample(#[from] fast_image_resize::ResizeError),

    #[error("Image encode error: {0}")]
    Encode(image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Source image has no pixels")]
    EmptySource,
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
