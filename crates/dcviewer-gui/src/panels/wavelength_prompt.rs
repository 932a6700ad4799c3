use dcviewer_core::dialog::{WAVELENGTH_MESSAGE, WAVELENGTH_TITLE};

use crate::app::DcViewerApp;

enum Answer {
    Ok(i64),
    Cancel,
}

/// Modal-style integer prompt for the open in progress.
pub fn show(ctx: &egui::Context, app: &mut DcViewerApp) {
    let Some(prompt) = app.wavelength_prompt.as_mut() else {
        return;
    };

    let mut answer = None;
    let mut open = true;

    egui::Window::new(WAVELENGTH_TITLE)
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(WAVELENGTH_MESSAGE);
            ui.small(prompt.path.display().to_string());
            ui.add_space(4.0);

            let response = ui.text_edit_singleline(&mut prompt.input);
            if !prompt.focused {
                response.request_focus();
                prompt.focused = true;
            }
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if let Some(ref error) = prompt.error {
                ui.colored_label(ui.visuals().error_fg_color, error);
            }

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() || submitted {
                    match prompt.parse() {
                        Ok(value) => answer = Some(Answer::Ok(value)),
                        Err(e) => {
                            prompt.error = Some(e);
                            response.request_focus();
                        }
                    }
                }
                if ui.button("Cancel").clicked() {
                    answer = Some(Answer::Cancel);
                }
            });
        });

    if !open || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        answer = Some(Answer::Cancel);
    }

    match answer {
        Some(Answer::Ok(wavelength)) => {
            if let Some(prompt) = app.wavelength_prompt.take() {
                app.finish_open(prompt.path, wavelength);
                ctx.request_repaint();
            }
        }
        Some(Answer::Cancel) => {
            tracing::debug!("wavelength prompt cancelled");
            app.wavelength_prompt = None;
        }
        None => {}
    }
}
