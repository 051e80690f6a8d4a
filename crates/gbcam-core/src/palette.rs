//! Four-color palettes: preset catalog and resolution of user palette specs.
//!
//! A palette spec is either a single preset name (`green`) or exactly four
//! `#RRGGBB` colors ordered from darkest to lightest.

use image::Rgb;
use tracing::info;

use crate::error::ConfigError;

/// Number of colors in every palette (2-bit output).
pub const PALETTE_SIZE: usize = 4;

/// Named presets, darkest to lightest.
const PRESETS: &[(&str, [Rgb<u8>; PALETTE_SIZE])] = &[
    (
        "grayscale",
        [
            Rgb([0x00, 0x00, 0x00]),
            Rgb([0x55, 0x55, 0x55]),
            Rgb([0xaa, 0xaa, 0xaa]),
            Rgb([0xff, 0xff, 0xff]),
        ],
    ),
    (
        "green",
        [
            Rgb([0x0f, 0x38, 0x0f]),
            Rgb([0x30, 0x62, 0x30]),
            Rgb([0x8b, 0xac, 0x0f]),
            Rgb([0x9b, 0xbc, 0x0f]),
        ],
    ),
    (
        "berry",
        [
            Rgb([0x2c, 0x00, 0x20]),
            Rgb([0x6b, 0x1e, 0x53]),
            Rgb([0xc3, 0x50, 0x64]),
            Rgb([0xff, 0x9a, 0x74]),
        ],
    ),
    (
        "frost",
        [
            Rgb([0x1a, 0x2a, 0x3a]),
            Rgb([0x2a, 0x5a, 0x7a]),
            Rgb([0x6a, 0x9a, 0xc4]),
            Rgb([0xe0, 0xf0, 0xff]),
        ],
    ),
    (
        "crimson",
        [
            Rgb([0x21, 0x00, 0x02]),
            Rgb([0x64, 0x00, 0x0b]),
            Rgb([0xb5, 0x1d, 0x2a]),
            Rgb([0xff, 0xd8, 0xd6]),
        ],
    ),
    (
        "vaporwave",
        [
            Rgb([0x2c, 0x0e, 0x3a]),
            Rgb([0xaa, 0x2a, 0x8d]),
            Rgb([0x2d, 0xe2, 0xe6]),
            Rgb([0xff, 0xf0, 0xf5]),
        ],
    ),
    (
        "sunset",
        [
            Rgb([0x20, 0x10, 0x33]),
            Rgb([0x7d, 0x2e, 0x38]),
            Rgb([0xeb, 0x8e, 0x44]),
            Rgb([0xfc, 0xda, 0xb5]),
        ],
    ),
    (
        "midnight",
        [
            Rgb([0x0a, 0x0f, 0x26]),
            Rgb([0x21, 0x3c, 0x54]),
            Rgb([0x5a, 0x6a, 0x8c]),
            Rgb([0xc4, 0xd1, 0xe2]),
        ],
    ),
    (
        "desert",
        [
            Rgb([0x4a, 0x2e, 0x19]),
            Rgb([0x91, 0x64, 0x2f]),
            Rgb([0xd4, 0xa9, 0x6a]),
            Rgb([0xff, 0xf4, 0xc2]),
        ],
    ),
    (
        "toxic",
        [
            Rgb([0x0f, 0x1c, 0x0d]),
            Rgb([0x2a, 0x57, 0x2a]),
            Rgb([0x98, 0xe8, 0x5a]),
            Rgb([0xfa, 0xfa, 0xae]),
        ],
    ),
];

/// Name of the preset used when no palette is given.
pub const DEFAULT_PRESET: &str = "grayscale";

/// An ordered set of exactly four colors, index 0 = darkest tone.
///
/// Repeated colors are allowed; they just reduce contrast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb<u8>; PALETTE_SIZE],
}

impl Palette {
    pub fn new(colors: [Rgb<u8>; PALETTE_SIZE]) -> Self {
        Self { colors }
    }

    /// Look up a preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        PRESETS
            .iter()
            .find(|(preset, _)| *preset == name)
            .map(|(_, colors)| Self::new(*colors))
    }

    /// Resolve a palette spec: one preset name or four hex colors.
    pub fn resolve<S: AsRef<str>>(tokens: &[S]) -> Result<Self, ConfigError> {
        match tokens {
            [name] => {
                let name = name.as_ref();
                let palette =
                    Self::preset(name).ok_or_else(|| ConfigError::UnknownPreset(name.into()))?;
                info!(preset = name, "Using preset palette");
                Ok(palette)
            }
            [_, _, _, _] => {
                let mut colors = [Rgb([0, 0, 0]); PALETTE_SIZE];
                for (slot, token) in colors.iter_mut().zip(tokens) {
                    *slot = parse_hex_color(token.as_ref())?;
                }
                let hex: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
                info!(colors = ?hex, "Using custom palette");
                Ok(Self { colors })
            }
            _ => Err(ConfigError::InvalidPalette {
                count: tokens.len(),
            }),
        }
    }

    /// Color for a palette index.
    ///
    /// # Panics
    /// Panics if `index` is not in `0..4`; callers only pass quantized indices.
    #[inline]
    pub fn color(&self, index: u8) -> Rgb<u8> {
        self.colors[index as usize]
    }

    pub fn colors(&self) -> &[Rgb<u8>; PALETTE_SIZE] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(PRESETS[0].1)
    }
}

/// All preset names, in catalog order.
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|(name, _)| *name)
}

/// Parse a `#RRGGBB` (or `RRGGBB`) color.
pub fn parse_hex_color(token: &str) -> Result<Rgb<u8>, ConfigError> {
    let invalid = || ConfigError::InvalidColor {
        token: token.to_string(),
    };
    let hex = token.strip_prefix('#').unwrap_or(token);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}
