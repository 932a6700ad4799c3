use dcviewer_core::render::Figure;

/// Convert the display intensities of a figure ([0.0, 1.0], top row first)
/// to an egui ColorImage.
pub fn figure_to_color_image(figure: &Figure) -> egui::ColorImage {
    let (h, w) = figure.display.dim();
    let pixels = figure
        .display
        .iter()
        .map(|&v| egui::Color32::from_gray((v.clamp(0.0, 1.0) * 255.0).round() as u8))
        .collect();

    egui::ColorImage {
        size: [w, h],
        pixels,
        source_size: Default::default(),
    }
}
