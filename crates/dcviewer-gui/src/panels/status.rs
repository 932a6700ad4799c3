use crate::app::DcViewerApp;

pub fn show(ctx: &egui::Context, app: &mut DcViewerApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area: fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for msg in &app.log_messages {
                    ui.label(msg);
                }
            });

        ui.horizontal(|ui| {
            if let Some(ref size) = app.viewport.image_size {
                ui.label(format!("{}x{}", size[0], size[1]));
                ui.separator();
            }
            if let Some((path, wavelength)) = app.viewer.source() {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                ui.label(format!("{name} [{wavelength}]"));
                ui.separator();
            }
            ui.label(format!("Zoom: {:.0}%", app.viewport.zoom * 100.0));
            ui.separator();
            ui.label(format!("Scale: {}", app.viewer.stretch()));

            if let Some(overlay) = app.viewer.overlay() {
                ui.separator();
                ui.label(if overlay.is_active() {
                    "Selector: on"
                } else {
                    "Selector: off"
                });
                if let Some(selection) = overlay.last_selection() {
                    ui.separator();
                    ui.label(selection.to_string());
                }
            }
        });

        ui.add_space(2.0);
    });
}
