mod app;
mod convert;
mod dialogs;
mod panels;
mod state;

use std::path::Path;

use dcviewer_core::config::ViewerConfig;
use dcviewer_core::consts::CONFIG_FILE_NAME;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = ViewerConfig::load_or_default(Path::new(CONFIG_FILE_NAME));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title(config.window_title.as_str()),
        ..Default::default()
    };

    eframe::run_native(
        "DCViewer",
        options,
        Box::new(move |_cc| Ok(Box::new(app::DcViewerApp::new(&config)))),
    )
}
