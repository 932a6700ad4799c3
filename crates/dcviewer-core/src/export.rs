use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};

use crate::error::ExportError;
use crate::render::Figure;

/// Quantise the display intensities of a figure to 8 bits, top row first.
pub fn figure_to_luma8(figure: &Figure) -> Result<GrayImage, ExportError> {
    let (h, w) = figure.display.dim();
    let (Ok(width), Ok(height)) = (u32::try_from(w), u32::try_from(h)) else {
        return Err(ExportError::Oversized { width: w, height: h });
    };

    let mut img = GrayImage::new(width, height);
    for ((row, col), &v) in figure.display.indexed_iter() {
        let val = (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        img.put_pixel(col as u32, row as u32, Luma([val]));
    }
    Ok(img)
}

/// Save a figure as an 8-bit grayscale PNG.
pub fn save_png(figure: &Figure, path: &Path) -> Result<(), ExportError> {
    figure_to_luma8(figure)?.save_with_format(path, ImageFormat::Png)?;
    tracing::debug!(path = %path.display(), "figure saved");
    Ok(())
}
