use dcviewer_core::config::ViewerConfig;
use dcviewer_core::menu::MenuCommand;
use dcviewer_core::overlay::SelectorConfig;
use dcviewer_core::stretch::StretchTransform;

// ---------------------------------------------------------------------------
// StretchTransform Display
// ---------------------------------------------------------------------------

#[test]
fn test_stretch_display() {
    assert_eq!(format!("{}", StretchTransform::Linear), "Linear");
    assert_eq!(format!("{}", StretchTransform::Logarithmic), "Logarithmic");
    assert_eq!(format!("{}", StretchTransform::SquareRoot), "Square Root");
}

#[test]
fn test_stretch_labels() {
    let labels: Vec<_> = StretchTransform::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, ["Linear", "Log", "Sqrt"]);
}

// ---------------------------------------------------------------------------
// MenuCommand Display
// ---------------------------------------------------------------------------

#[test]
fn test_menu_labels() {
    assert_eq!(format!("{}", MenuCommand::Open), "Open FITS file");
    assert_eq!(format!("{}", MenuCommand::DisplayHeader), "Display Header");
    assert_eq!(
        format!("{}", MenuCommand::Scale(StretchTransform::SquareRoot)),
        "Sqrt scale"
    );
}

#[test]
fn test_menu_groups_cover_every_stretch() {
    for t in StretchTransform::ALL {
        assert!(MenuCommand::SCALE.contains(&MenuCommand::Scale(*t)));
    }
    assert!(MenuCommand::FILE.contains(&MenuCommand::Exit));
    assert!(MenuCommand::HELP.contains(&MenuCommand::License));
}

// ---------------------------------------------------------------------------
// ViewerConfig TOML
// ---------------------------------------------------------------------------

#[test]
fn test_defaults() {
    let c = ViewerConfig::default();
    assert_eq!(c.default_stretch, StretchTransform::Logarithmic);
    assert_eq!(c.log_exponent, 1000.0);
    assert_eq!(c.selector, SelectorConfig { min_span_x: 5.0, min_span_y: 5.0 });
    assert_eq!(c.window_title, "DCViewer");
}

#[test]
fn test_default_config_survives_toml() {
    let c = ViewerConfig::default();
    let text = c.to_toml_string().unwrap();
    let back: ViewerConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, c);
}

#[test]
fn test_partial_config_fills_defaults() {
    let c: ViewerConfig = toml::from_str(
        r#"
default_stretch = "SquareRoot"

[selector]
min_span_x = 10.0
min_span_y = 2.0
"#,
    )
    .unwrap();
    assert_eq!(c.default_stretch, StretchTransform::SquareRoot);
    assert_eq!(c.selector.min_span_x, 10.0);
    assert_eq!(c.log_exponent, 1000.0);
    assert_eq!(c.window_title, "DCViewer");
}

#[test]
fn test_load_or_default_falls_back() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("none.toml");
    assert_eq!(ViewerConfig::load_or_default(&missing), ViewerConfig::default());

    let broken = dir.path().join("broken.toml");
    std::fs::write(&broken, "default_stretch = 42").unwrap();
    assert!(ViewerConfig::load(&broken).is_err());
    assert_eq!(ViewerConfig::load_or_default(&broken), ViewerConfig::default());

    let good = dir.path().join("good.toml");
    std::fs::write(&good, "default_stretch = \"Linear\"").unwrap();
    assert_eq!(
        ViewerConfig::load_or_default(&good).default_stretch,
        StretchTransform::Linear
    );
}
