use dcviewer_core::menu::MenuCommand;

use crate::app::DcViewerApp;

const OPEN_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
const HEADER_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::H);
const EXIT_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

fn shortcut(command: MenuCommand) -> Option<egui::KeyboardShortcut> {
    match command {
        MenuCommand::Open => Some(OPEN_SHORTCUT),
        MenuCommand::DisplayHeader => Some(HEADER_SHORTCUT),
        MenuCommand::Exit => Some(EXIT_SHORTCUT),
        _ => None,
    }
}

pub fn show(ctx: &egui::Context, app: &mut DcViewerApp) {
    let mut chosen = None;

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                for &command in MenuCommand::FILE {
                    if command == MenuCommand::Exit {
                        ui.separator();
                    }
                    let mut button = egui::Button::new(command.to_string());
                    if let Some(s) = shortcut(command) {
                        button = button.shortcut_text(ctx.format_shortcut(&s));
                    }
                    if ui.add(button).clicked() {
                        ui.close();
                        chosen = Some(command);
                    }
                }
            });

            ui.menu_button("Tools", |ui| {
                ui.menu_button("Scale", |ui| {
                    for &command in MenuCommand::SCALE {
                        let MenuCommand::Scale(transform) = command else {
                            continue;
                        };
                        let current = app.viewer.stretch() == transform;
                        if ui.radio(current, command.to_string()).clicked() {
                            ui.close();
                            chosen = Some(command);
                        }
                    }
                });
            });

            ui.menu_button("Help", |ui| {
                for &command in MenuCommand::HELP {
                    if ui.button(command.to_string()).clicked() {
                        ui.close();
                        chosen = Some(command);
                    }
                }
            });
        });
    });

    // Keyboard shortcuts (consumed outside menus)
    if chosen.is_none() && app.wavelength_prompt.is_none() {
        chosen = ctx.input_mut(|i| {
            [MenuCommand::Open, MenuCommand::DisplayHeader, MenuCommand::Exit]
                .into_iter()
                .find(|&c| shortcut(c).is_some_and(|s| i.consume_shortcut(&s)))
        });
    }

    if let Some(command) = chosen {
        tracing::debug!(%command, "menu command");
        app.run_command(ctx, command);
    }
}
