//! Target raster geometry for the camera sensor.
//!
//! The sensor is 128×112 in landscape and 112×128 in portrait. The
//! orientation is either forced or picked from the source aspect ratio.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::ConfigError;

/// Long side of the sensor in pixels.
pub const SENSOR_LONG: u32 = 128;
/// Short side of the sensor in pixels.
pub const SENSOR_SHORT: u32 = 112;

/// How the output orientation is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Portrait when the source is taller than wide, landscape otherwise.
    #[default]
    Auto,
    Portrait,
    Landscape,
}

impl FromStr for Orientation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "portrait" => Ok(Self::Portrait),
            "landscape" => Ok(Self::Landscape),
            _ => Err(ConfigError::InvalidOrientation(s.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        };
        f.write_str(name)
    }
}

/// Exact pixel dimensions of the low-resolution raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometrySpec {
    pub width: u32,
    pub height: u32,
}

impl GeometrySpec {
    pub const LANDSCAPE: Self = Self {
        width: SENSOR_LONG,
        height: SENSOR_SHORT,
    };

    pub const PORTRAIT: Self = Self {
        width: SENSOR_SHORT,
        height: SENSOR_LONG,
    };

    /// Plan the target raster for a source of `src_width`×`src_height`.
    pub fn plan(src_width: u32, src_height: u32, orientation: Orientation) -> Self {
        let spec = match orientation {
            Orientation::Landscape => Self::LANDSCAPE,
            Orientation::Portrait => Self::PORTRAIT,
            Orientation::Auto if src_height > src_width => Self::PORTRAIT,
            Orientation::Auto => Self::LANDSCAPE,
        };
        debug!(
            src_width,
            src_height,
            %orientation,
            width = spec.width,
            height = spec.height,
            "Planned target geometry"
        );
        spec
    }

    /// Width divided by height.
    pub fn aspect(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

/// Centered source region with exactly the target aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CropBox {
    /// Largest centered region of the source matching `spec`'s aspect ratio.
    ///
    /// The excess along the longer axis is split evenly on both sides.
    pub fn centered(src_width: u32, src_height: u32, spec: GeometrySpec) -> Self {
        let (sw, sh) = (f64::from(src_width), f64::from(src_height));
        let target = spec.aspect();

        if sw / sh >= target {
            let width = (sh * target).min(sw);
            Self {
                left: (sw - width) / 2.0,
                top: 0.0,
                width,
                height: sh,
            }
        } else {
            let height = (sw / target).min(sh);
            Self {
                left: 0.0,
                top: (sh - height) / 2.0,
                width: sw,
                height,
            }
        }
    }

    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }
}
