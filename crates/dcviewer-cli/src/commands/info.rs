use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use dcviewer_core::fits::FitsCube;

use crate::summary::print_cube_summary;

#[derive(Args)]
pub struct InfoArgs {
    /// Input FITS file
    pub file: PathBuf,

    /// Skip the header card listing
    #[arg(long)]
    pub no_header: bool,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let cube = FitsCube::open(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;

    print_cube_summary(&args.file, &cube.layout, cube.header.len());

    if !args.no_header {
        println!("{}", cube.header);
    }

    Ok(())
}
