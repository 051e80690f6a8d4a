//! gbcam command-line front end.
//!
//! Converts a single image, or every image in a folder, into a handheld
//! camera style picture.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use gbcam_core::{Palette, preset_names};
use gbcam_lib::config::AppConfig;
use gbcam_lib::config::validation::MAX_SCALE;
use gbcam_lib::services::{batch, convert};

const DEFAULT_FILE_OUTPUT: &str = "gb_output.png";
const DEFAULT_DIR_OUTPUT: &str = "gb_output";

#[derive(Parser)]
#[command(name = "gbcam")]
#[command(about = "Convert an image into a handheld camera style picture")]
struct Cli {
    /// Input image file, or a folder of images for batch conversion
    #[arg(required_unless_present = "list_palettes")]
    input: Option<PathBuf>,

    /// Output image file (or output folder in batch mode)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Manual contrast factor around midgray (default 1.0)
    #[arg(short, long, allow_negative_numbers = true)]
    contrast: Option<f32>,

    /// Apply auto-contrast before quantization. Recommended.
    #[arg(long)]
    autocontrast: bool,

    /// Dithering strength, 0 = posterize (default 1.0)
    #[arg(long)]
    dither_intensity: Option<f32>,

    /// Preset name (grayscale, green, berry, frost, ...) or 4 hex colors '#RRGGBB'
    #[arg(long, num_args = 1..)]
    palette: Option<Vec<String>>,

    /// auto, landscape (128x112) or portrait (112x128)
    #[arg(long)]
    orientation: Option<String>,

    /// Nearest-neighbor magnification of the output, 1 to 64 (default 4)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_SCALE)))]
    scale: Option<u32>,

    /// Pick a random preset palette for each image in batch mode
    #[arg(long)]
    random_palette: bool,

    /// Seed for random palette selection
    #[arg(long)]
    seed: Option<u64>,

    /// List preset palettes and exit
    #[arg(long)]
    list_palettes: bool,
}

impl Cli {
    /// Command-line flags take precedence over environment configuration.
    fn apply_to(&self, config: &mut AppConfig) {
        if let Some(ref palette) = self.palette {
            config.palette = palette.clone();
        }
        if let Some(ref orientation) = self.orientation {
            config.orientation = orientation.clone();
        }
        if let Some(contrast) = self.contrast {
            config.contrast = contrast;
        }
        if let Some(intensity) = self.dither_intensity {
            config.dither_intensity = intensity;
        }
        if let Some(scale) = self.scale {
            config.scale = scale;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        config.autocontrast |= self.autocontrast;
        config.random_palette |= self.random_palette;
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gbcam=info,gbcam_lib=info,gbcam_core=info".into()),
        )
        .without_time()
        .init();

    if cli.list_palettes {
        print_palettes();
        return Ok(());
    }

    let mut config = AppConfig::load();
    cli.apply_to(&mut config);
    let options = config
        .to_convert_options()
        .context("Invalid conversion settings")?;

    let Some(input) = cli.input.as_deref() else {
        anyhow::bail!("No input given");
    };

    if input.is_dir() {
        run_batch(input, cli.output.as_deref(), &config, &options)
    } else {
        let output = cli
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_OUTPUT));
        convert::convert_file(input, &output, &options)
            .with_context(|| format!("Failed to convert {}", input.display()))?;
        Ok(())
    }
}

fn run_batch(
    input: &Path,
    output: Option<&Path>,
    config: &AppConfig,
    options: &gbcam_core::ConvertOptions,
) -> anyhow::Result<()> {
    let output = output.unwrap_or(Path::new(DEFAULT_DIR_OUTPUT));
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let report = batch::convert_folder(input, output, options, config.random_palette, &mut rng)
        .with_context(|| format!("Failed to read folder {}", input.display()))?;

    println!("Converted {} images", report.processed);
    if !report.failed.is_empty() {
        println!("{} images failed:", report.failed.len());
        for path in &report.failed {
            println!("  {}", path.display());
        }
    }
    Ok(())
}

fn print_palettes() {
    for name in preset_names() {
        let Some(palette) = Palette::preset(name) else {
            continue;
        };
        let colors: Vec<String> = palette
            .colors()
            .iter()
            .map(|c| format!("#{:02x}{:02x}{:02x}", c[0], c[1], c[2]))
            .collect();
        println!("{name:<10} {}", colors.join(" "));
    }
}
