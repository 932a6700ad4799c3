use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use dcviewer_core::config::ViewerConfig;
use dcviewer_core::consts::CONFIG_FILE_NAME;
use dcviewer_core::export::save_png;
use dcviewer_core::fits::{CubeReader, FitsCubeReader};
use dcviewer_core::render::{Renderer, StretchRenderer};
use dcviewer_core::stretch::StretchTransform;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StretchArg {
    Linear,
    Log,
    Sqrt,
}

impl From<StretchArg> for StretchTransform {
    fn from(arg: StretchArg) -> Self {
        match arg {
            StretchArg::Linear => Self::Linear,
            StretchArg::Log => Self::Logarithmic,
            StretchArg::Sqrt => Self::SquareRoot,
        }
    }
}

#[derive(Args)]
pub struct RenderArgs {
    /// Input FITS file
    pub file: PathBuf,

    /// Zero-based index along the wavelength axis
    #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
    pub wavelength: i64,

    /// Stretch applied after normalisation (defaults to the config value)
    #[arg(short, long, value_enum)]
    pub stretch: Option<StretchArg>,

    /// Viewer config providing the default stretch and log exponent
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = "slice.png")]
    pub output: PathBuf,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let config = ViewerConfig::load_or_default(&args.config);
    let transform = args
        .stretch
        .map(StretchTransform::from)
        .unwrap_or(config.default_stretch);

    let slice = FitsCubeReader
        .read(&args.file, args.wavelength)
        .with_context(|| {
            format!(
                "Failed to read wavelength {} from {}",
                args.wavelength,
                args.file.display()
            )
        })?;

    let figure = StretchRenderer::new(config.log_exponent)
        .render(&slice.pixels, transform)
        .with_context(|| format!("Failed to render with {transform} stretch"))?;

    save_png(&figure, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!(
        "Saved {}x{} slice ({} stretch, range {:.4} .. {:.4}) to {}",
        figure.axes.width,
        figure.axes.height,
        transform,
        figure.data_range.0,
        figure.data_range.1,
        args.output.display()
    );
    Ok(())
}
