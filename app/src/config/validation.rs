//! Setting value validation.

use gbcam_core::Orientation;

/// Largest output magnification accepted from the environment or the CLI.
pub const MAX_SCALE: u32 = 64;

/// Check one `GBCAM_*` value; the `Err` text says what the key accepts.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "GBCAM_ORIENTATION" => {
            value
                .parse::<Orientation>()
                .map_err(|_| "must be 'auto', 'portrait', or 'landscape'")?;
        }
        "GBCAM_CONTRAST" => {
            let v: f32 = value.parse().map_err(|_| "must be a float")?;
            if !v.is_finite() {
                return Err("must be a finite number".into());
            }
        }
        "GBCAM_DITHER_INTENSITY" => {
            let v: f32 = value.parse().map_err(|_| "must be a float")?;
            if !v.is_finite() || v < 0.0 {
                return Err("must be a non-negative number".into());
            }
        }
        "GBCAM_SCALE" => {
            let factor: u32 = value.parse().map_err(|_| "must be a whole number")?;
            if !scale_in_range(factor) {
                return Err(format!("must be between 1 and {MAX_SCALE}"));
            }
        }
        "GBCAM_SEED" => {
            value.parse::<u64>().map_err(|_| "must be an unsigned integer")?;
        }
        "GBCAM_PALETTE" => {
            if split_tokens(value).is_empty() {
                return Err("must name a preset or list 4 hex colors".into());
            }
        }
        // Boolean settings
        k if is_boolean_setting(k) => {
            if value != "true" && value != "false" {
                return Err("must be 'true' or 'false'".into());
            }
        }
        _ => {}
    }
    Ok(())
}

/// Split a palette setting on whitespace and commas.
pub fn split_tokens(value: &str) -> Vec<String> {
    value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether `factor` is a magnification the application accepts.
pub fn scale_in_range(factor: u32) -> bool {
    (1..=MAX_SCALE).contains(&factor)
}

fn is_boolean_setting(key: &str) -> bool {
    matches!(key, "GBCAM_AUTOCONTRAST" | "GBCAM_RANDOM_PALETTE")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_values() {
        assert!(validate_setting("GBCAM_ORIENTATION", "auto").is_ok());
        assert!(validate_setting("GBCAM_ORIENTATION", "portrait").is_ok());
        assert!(validate_setting("GBCAM_ORIENTATION", "upside-down").is_err());
    }

    #[test]
    fn test_scale_range() {
        assert!(validate_setting("GBCAM_SCALE", "4").is_ok());
        assert_eq!(
            validate_setting("GBCAM_SCALE", "0").unwrap_err(),
            "must be between 1 and 64"
        );
        assert!(validate_setting("GBCAM_SCALE", "64").is_ok());
        assert!(validate_setting("GBCAM_SCALE", "65").is_err());
        assert!(validate_setting("GBCAM_SCALE", "40000000").is_err());
        assert!(validate_setting("GBCAM_SCALE", "big").is_err());
    }

    #[test]
    fn test_float_settings() {
        assert!(validate_setting("GBCAM_CONTRAST", "-1.5").is_ok());
        assert!(validate_setting("GBCAM_CONTRAST", "NaN").is_err());
        assert!(validate_setting("GBCAM_DITHER_INTENSITY", "0").is_ok());
        assert!(validate_setting("GBCAM_DITHER_INTENSITY", "-1").is_err());
    }

    #[test]
    fn test_boolean_settings() {
        assert!(validate_setting("GBCAM_AUTOCONTRAST", "true").is_ok());
        assert!(validate_setting("GBCAM_AUTOCONTRAST", "yes").is_err());
        assert!(validate_setting("GBCAM_RANDOM_PALETTE", "false").is_ok());
    }

    #[test]
    fn test_palette_tokens() {
        assert_eq!(split_tokens("green"), vec!["green"]);
        assert_eq!(
            split_tokens("#000000, #555555 #aaaaaa,#ffffff"),
            vec!["#000000", "#555555", "#aaaaaa", "#ffffff"]
        );
        assert!(validate_setting("GBCAM_PALETTE", " , ").is_err());
    }

    #[test]
    fn test_unknown_keys_pass() {
        assert!(validate_setting("SOMETHING_ELSE", "whatever").is_ok());
    }
}
