//! Folder conversion: every supported image in a directory becomes `<stem>.png`.
//!
//! Files are visited in name order so runs are reproducible. A file that
//! fails to convert is logged and skipped; the rest of the batch continues.

use std::path::{Path, PathBuf};

use gbcam_core::{ConfigError, ConvertError, ConvertOptions, Palette, preset_names};
use rand::Rng;
use rand::seq::IteratorRandom;
use tracing::{error, info};

use super::convert::convert_file;
use super::source::is_supported_image;

/// Outcome of a folder conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Images written successfully.
    pub processed: usize,
    /// Images that failed to load, convert, or save.
    pub failed: Vec<PathBuf>,
}

/// Output path for `input` inside `output_dir`: same stem, `.png` extension.
pub fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let mut name = input.file_stem().unwrap_or(input.as_os_str()).to_os_string();
    name.push(".png");
    output_dir.join(name)
}

/// Supported image files directly inside `dir`, sorted by name.
pub fn collect_images(dir: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() || !is_supported_image(&path) {
            continue;
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

/// Pick a preset palette uniformly at random.
pub fn random_preset<R: Rng + ?Sized>(rng: &mut R) -> Result<(&'static str, Palette), ConfigError> {
    let name = preset_names()
        .choose(rng)
        .ok_or_else(|| ConfigError::UnknownPreset(String::new()))?;
    let palette = Palette::preset(name).ok_or_else(|| ConfigError::UnknownPreset(name.into()))?;
    Ok((name, palette))
}

/// Convert every supported image in `input_dir` into `output_dir`.
///
/// With `random_palette`, each file gets a preset drawn from `rng` instead of
/// `options.palette`.
pub fn convert_folder<R: Rng + ?Sized>(
    input_dir: &Path,
    output_dir: &Path,
    options: &ConvertOptions,
    random_palette: bool,
    rng: &mut R,
) -> Result<BatchReport, ConvertError> {
    if !output_dir.exists() {
        std::fs::create_dir_all(output_dir)?;
        info!(dir = %output_dir.display(), "Created output directory");
    }

    let mut report = BatchReport::default();
    for path in collect_images(input_dir)? {
        let output = output_path_for(&path, output_dir);
        let file = path.file_name().unwrap_or_default().to_string_lossy();

        let mut file_options = options.clone();
        if random_palette {
            let (name, palette) = random_preset(rng)?;
            info!(file = %file, palette = name, "Using random palette");
            file_options.palette = palette;
        }

        info!(file = %file, "Processing");
        match convert_file(&path, &output, &file_options) {
            Ok(_) => report.processed += 1,
            Err(e) => {
                error!(file = %file, "Conversion failed: {e}");
                report.failed.push(path);
            }
        }
    }

    info!(
        processed = report.processed,
        failed = report.failed.len(),
        "Batch processing complete"
    );
    Ok(report)
}
