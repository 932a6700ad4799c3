use std::path::Path;

use console::Style;
use dcviewer_core::fits::CubeLayout;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    dim: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            dim: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_cube_summary(file: &Path, layout: &CubeLayout, card_count: usize) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("FITS Cube"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(9)));
    println!();

    println!("  {:<14}{}", s.label.apply_to("File"), s.path.apply_to(file.display()));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Dimensions"),
        s.value.apply_to(format!("{}x{}", layout.cols, layout.rows))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Wavelengths"),
        s.value.apply_to(layout.planes)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("BITPIX"),
        s.value.apply_to(layout.bitpix.value())
    );

    if layout.bscale != 1.0 || layout.bzero != 0.0 {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Scaling"),
            s.value.apply_to(format!("{} * raw + {}", layout.bscale, layout.bzero))
        );
    }
    match layout.blank {
        Some(blank) => println!("  {:<14}{}", s.label.apply_to("BLANK"), s.value.apply_to(blank)),
        None => println!("  {:<14}{}", s.label.apply_to("BLANK"), s.dim.apply_to("none")),
    }

    let plane_mb = layout.plane_byte_size() as f64 / (1024.0 * 1024.0);
    println!(
        "  {:<14}{}",
        s.label.apply_to("Plane size"),
        s.value.apply_to(format!("{plane_mb:.2} MB"))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Header"),
        s.value.apply_to(format!("{card_count} cards"))
    );
    println!();
}
