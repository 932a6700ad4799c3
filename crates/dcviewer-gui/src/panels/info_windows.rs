use crate::app::DcViewerApp;

/// Text windows opened through the notifier (header, license, about).
pub fn show(ctx: &egui::Context, app: &mut DcViewerApp) {
    let notifier = app.viewer.notifier_mut();

    for window in &mut notifier.windows {
        let mut close_clicked = false;
        egui::Window::new(window.title.as_str())
            .id(egui::Id::new(("info_window", window.id)))
            .open(&mut window.open)
            .collapsible(false)
            .default_size([560.0, 420.0])
            .show(ctx, |ui| {
                egui::ScrollArea::both()
                    .max_height(ui.available_height() - 32.0)
                    .show(ui, |ui| {
                        ui.add(egui::Label::new(egui::RichText::new(&window.text).monospace()));
                    });
                ui.separator();
                close_clicked = ui.button("Close").clicked();
            });
        if close_clicked {
            window.open = false;
        }
    }

    notifier.prune();
}
