//! Command-line argument surface and run logic.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::debug;

use tilestitch::compositor::{ImageCompositor, MagickCompositor, NativeCompositor};
use tilestitch::config::{CompositorChoice, ConfigFile};
use tilestitch::stitcher::{StitchReport, Stitcher};

use crate::error::CliError;

/// Compositing backend selection for CLI arguments.
#[derive(Debug, Clone, ValueEnum, PartialEq)]
pub enum CompositorType {
    /// In-process compositing with the `image` crate
    Native,
    /// External ImageMagick process (`magick` / `convert`)
    Magick,
}

impl From<CompositorType> for CompositorChoice {
    fn from(t: CompositorType) -> Self {
        match t {
            CompositorType::Native => CompositorChoice::Native,
            CompositorType::Magick => CompositorChoice::Magick,
        }
    }
}

/// Stitch a grid of rendered image tiles into a single image.
///
/// Tiles are discovered in INPUT_DIR as `<KIND>_<col>_<row>.<ext>`; the
/// stitched result is written to `INPUT_DIR/<KIND>.png` alongside one
/// `<KIND>-slice-<col>.png` row-strip per column.
#[derive(Debug, Parser)]
#[command(name = "tilestitch", version, about)]
pub struct Args {
    /// Directory containing the rendered tiles
    pub input_dir: PathBuf,

    /// Kind tag of the tiles to stitch
    #[arg(default_value = "colour")]
    pub kind: String,

    /// Compositing backend (defaults to the config file, then 'native')
    #[arg(long, value_enum)]
    pub compositor: Option<CompositorType>,

    /// ImageMagick binary to use with the magick backend
    #[arg(long)]
    pub magick_command: Option<String>,

    /// Remove the row-strip files after stitching
    #[arg(long)]
    pub clean: bool,

    /// Enable debug-level logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Resolve the compositing backend from CLI args and config.
///
/// CLI takes precedence, then config, then the native default.
fn resolve_compositor(
    args: &Args,
    config: &ConfigFile,
) -> Result<Box<dyn ImageCompositor>, CliError> {
    let choice = args
        .compositor
        .clone()
        .map(CompositorChoice::from)
        .unwrap_or(config.stitch.compositor);

    match choice {
        CompositorChoice::Native => Ok(Box::new(NativeCompositor::new())),
        CompositorChoice::Magick => {
            let command = args
                .magick_command
                .clone()
                .unwrap_or_else(|| config.magick.command.clone());
            let compositor = MagickCompositor::with_command(command);
            compositor.available()?;
            Ok(Box::new(compositor))
        }
    }
}

/// Run a stitch from parsed arguments.
pub fn run(args: Args) -> Result<StitchReport, CliError> {
    // A missing config file means defaults; a broken one is an error
    let config = match ConfigFile::load() {
        Ok(config) => config,
        Err(_) if !ConfigFile::default_path().is_some_and(|p| p.exists()) => {
            ConfigFile::default()
        }
        Err(e) => return Err(CliError::Config(e.to_string())),
    };
    debug!(?config, "Loaded configuration");

    let keep_slices = if args.clean {
        false
    } else {
        config.stitch.keep_slices
    };

    let compositor = resolve_compositor(&args, &config)?;
    let stitcher = Stitcher::new(compositor).with_keep_slices(keep_slices);

    let report = stitcher.stitch(&args.input_dir, &args.kind)?;
    Ok(report)
}
