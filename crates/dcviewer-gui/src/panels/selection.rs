use dcviewer_core::overlay::{PointerButton, PointerEvent};
use dcviewer_core::render::{Axes, Point};

use crate::app::DcViewerApp;

const DRAG_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 200, 255);
const SELECTION_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 255, 0);

fn map_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Middle => Some(PointerButton::Middle),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        _ => None,
    }
}

/// Screen position to fractions of the drawn image, from the top-left.
fn screen_to_figure(pos: egui::Pos2, img_rect: egui::Rect) -> (f32, f32) {
    (
        (pos.x - img_rect.left()) / img_rect.width(),
        (pos.y - img_rect.top()) / img_rect.height(),
    )
}

fn data_to_screen(p: Point, axes: &Axes, img_rect: egui::Rect) -> egui::Pos2 {
    let (u, v) = axes.to_figure(p);
    egui::pos2(
        img_rect.left() + u * img_rect.width(),
        img_rect.top() + v * img_rect.height(),
    )
}

fn pointer_event(
    pos: egui::Pos2,
    button: PointerButton,
    img_rect: egui::Rect,
    axes: &Axes,
) -> PointerEvent {
    let (u, v) = screen_to_figure(pos, img_rect);
    PointerEvent {
        screen: Point::new(pos.x, pos.y),
        data: axes.to_data(u, v),
        button,
    }
}

/// Feed raw button and key events to the viewer's selector.
///
/// Presses only count over the image; releases count anywhere so a drag
/// that leaves the image still completes.
pub fn handle_input(
    ctx: &egui::Context,
    ui: &egui::Ui,
    response: &egui::Response,
    app: &mut DcViewerApp,
    img_rect: egui::Rect,
) {
    let Some(axes) = app.viewer.overlay().map(|o| *o.axes()) else {
        return;
    };
    let typing = ctx.wants_keyboard_input() || app.wavelength_prompt.is_some();

    for event in ui.input(|i| i.events.clone()) {
        match event {
            egui::Event::PointerButton {
                pos,
                button,
                pressed,
                ..
            } => {
                let Some(button) = map_button(button) else {
                    continue;
                };
                let event = pointer_event(pos, button, img_rect, &axes);
                if pressed {
                    if response.hovered() && img_rect.contains(pos) {
                        app.viewer.pointer_pressed(event);
                    }
                } else if let Some(selection) = app.viewer.pointer_released(event) {
                    app.add_log(format!("Selection {selection}"));
                }
            }
            egui::Event::Text(text) if !typing => {
                for key in text.chars() {
                    let was_active = app.viewer.overlay().is_some_and(|o| o.is_active());
                    app.viewer.key_pressed(key);
                    let active = app.viewer.overlay().is_some_and(|o| o.is_active());
                    if active != was_active {
                        let state = if active { "activated" } else { "deactivated" };
                        app.add_log(format!("Rectangle selector {state}"));
                    }
                }
            }
            _ => {}
        }
    }
}

/// Draw the drag in progress and the last accepted selection.
pub fn draw_overlay(ui: &egui::Ui, app: &DcViewerApp, img_rect: egui::Rect) {
    let Some(overlay) = app.viewer.overlay() else {
        return;
    };
    let axes = *overlay.axes();
    let painter = ui.painter_at(ui.clip_rect());

    if let Some(selection) = overlay.last_selection() {
        let rect = egui::Rect::from_two_pos(
            data_to_screen(selection.start, &axes, img_rect),
            data_to_screen(selection.end, &axes, img_rect),
        );
        painter.rect_filled(rect, 0.0, SELECTION_COLOR.gamma_multiply(0.15));
        painter.rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(1.5, SELECTION_COLOR),
            egui::epaint::StrokeKind::Outside,
        );

        let (x0, x1, y0, y1) = selection.extents();
        painter.text(
            egui::pos2(rect.right() - 4.0, rect.bottom() + 4.0),
            egui::Align2::RIGHT_TOP,
            format!("{:.1}x{:.1}", x1 - x0, y1 - y0),
            egui::FontId::proportional(12.0),
            SELECTION_COLOR,
        );
    }

    if let Some(press) = overlay.pending_press() {
        if let Some(hover) = ui.input(|i| i.pointer.hover_pos()) {
            let rect =
                egui::Rect::from_two_pos(data_to_screen(press.data, &axes, img_rect), hover);
            painter.rect_stroke(
                rect,
                0.0,
                egui::Stroke::new(1.0, DRAG_COLOR),
                egui::epaint::StrokeKind::Middle,
            );
        }
    }

    if !overlay.is_active() {
        painter.text(
            img_rect.left_top() + egui::vec2(8.0, 8.0),
            egui::Align2::LEFT_TOP,
            "Selector off (press a)",
            egui::FontId::proportional(14.0),
            egui::Color32::from_white_alpha(200),
        );
    }
}
