//! Runtime configuration: built-in defaults overridden by `.env` / environment.

use gbcam_core::palette::DEFAULT_PRESET;
use gbcam_core::upscale::DEFAULT_SCALE;
use gbcam_core::{ConfigError, ConvertOptions, Orientation, Palette};
use tracing::warn;

use super::validation::{scale_in_range, split_tokens, validate_setting};

/// Conversion settings before palette and orientation are resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub palette: Vec<String>,
    pub orientation: String,
    pub contrast: f32,
    pub autocontrast: bool,
    pub dither_intensity: f32,
    pub scale: u32,
    pub random_palette: bool,
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            palette: vec![DEFAULT_PRESET.into()],
            orientation: "auto".into(),
            contrast: 1.0,
            autocontrast: false,
            dither_intensity: 1.0,
            scale: DEFAULT_SCALE,
            random_palette: false,
            seed: None,
        }
    }
}

impl AppConfig {
    /// Load defaults, then apply `GBCAM_*` overrides from `.env` and the environment.
    pub fn load() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (environment in production).
    ///
    /// Values that fail validation are ignored with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let g = |key: &str| -> Option<String> {
            let value = lookup(key)?;
            let value = value.trim().to_string();
            if value.is_empty() {
                return None;
            }
            match validate_setting(key, &value) {
                Ok(()) => Some(value),
                Err(e) => {
                    warn!(key, value = %value, "Ignoring invalid setting: {e}");
                    None
                }
            }
        };

        let d = Self::default();
        Self {
            palette: g("GBCAM_PALETTE")
                .map(|v| split_tokens(&v))
                .unwrap_or(d.palette),
            orientation: g("GBCAM_ORIENTATION").unwrap_or(d.orientation),
            contrast: parse_or(g("GBCAM_CONTRAST"), d.contrast),
            autocontrast: g("GBCAM_AUTOCONTRAST")
                .map(|v| v == "true")
                .unwrap_or(d.autocontrast),
            dither_intensity: parse_or(g("GBCAM_DITHER_INTENSITY"), d.dither_intensity),
            scale: parse_or(g("GBCAM_SCALE"), d.scale),
            random_palette: g("GBCAM_RANDOM_PALETTE")
                .map(|v| v == "true")
                .unwrap_or(d.random_palette),
            seed: g("GBCAM_SEED").and_then(|v| v.parse().ok()),
        }
    }

    /// Resolve palette and orientation into core conversion options.
    pub fn to_convert_options(&self) -> Result<ConvertOptions, ConfigError> {
        let orientation: Orientation = self.orientation.parse()?;
        let palette = Palette::resolve(self.palette.as_slice())?;
        if !scale_in_range(self.scale) {
            return Err(ConfigError::InvalidScale(self.scale));
        }

        Ok(ConvertOptions::new()
            .with_palette(palette)
            .with_orientation(orientation)
            .with_contrast(self.contrast)
            .with_autocontrast(self.autocontrast)
            .with_dither_intensity(self.dither_intensity)
            .with_scale(self.scale))
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}
