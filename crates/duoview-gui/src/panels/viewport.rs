use duoview_core::config::NavigationConfig;
use duoview_core::consts::FILE_PATH_INITIAL;
use duoview_core::controller::Slot;
use duoview_core::geometry::{Point, Size};
use duoview_core::surface::{Gesture, MouseButton};

use crate::app::DuoviewApp;
use crate::convert::{to_egui_rect, to_point};

pub fn show(ctx: &egui::Context, app: &mut DuoviewApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let area = ui.available_rect_before_wrap();
        app.controller
            .relayout(Size::new(area.width() as f64, area.height() as f64));

        let response = ui.allocate_rect(area, egui::Sense::click_and_drag());
        handle_input(ui, &response, app, area.min);

        // First is painted first so the second sits on top in overlay mode.
        for slot in Slot::ALL {
            paint_slot(ui, app, slot, area.min);
        }
    });
}

fn handle_input(ui: &egui::Ui, response: &egui::Response, app: &mut DuoviewApp, origin: egui::Pos2) {
    let events = ui.input(|i| i.events.clone());
    let hovered = response.hovered();

    for event in events {
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
                if pressed {
                    if !hovered {
                        continue;
                    }
                    let at = to_point(pos, origin);
                    if let Some(slot) = app.controller.slot_at(at) {
                        let position = local_to_slot(app, slot, at);
                        dispatch(app, slot, Gesture::PressStart { button, position });
                    }
                } else if let Some(gesture) = Gesture::release(button) {
                    // Only the surface that saw the press reacts.
                    for slot in Slot::ALL {
                        dispatch(app, slot, gesture);
                    }
                }
            }
            egui::Event::PointerMoved(pos) => {
                let at = to_point(pos, origin);
                for slot in Slot::ALL {
                    let position = local_to_slot(app, slot, at);
                    dispatch(app, slot, Gesture::PointerMove { position });
                }
            }
            egui::Event::MouseWheel { unit, delta, .. } => {
                if !hovered {
                    continue;
                }
                let Some(pos) = ui.input(|i| i.pointer.hover_pos()) else {
                    continue;
                };
                if let Some(slot) = app.controller.slot_at(to_point(pos, origin)) {
                    let delta = wheel_units(unit, delta.y, &app.config.navigation);
                    if delta != 0.0 {
                        dispatch(app, slot, Gesture::WheelRotate { delta });
                    }
                }
            }
            _ => {}
        }
    }
}

fn dispatch(app: &mut DuoviewApp, slot: Slot, gesture: Gesture) {
    if let Err(e) = app.controller.dispatch(slot, gesture) {
        tracing::debug!("{slot}: gesture dropped: {e}");
    }
}

fn local_to_slot(app: &DuoviewApp, slot: Slot, at: Point) -> Point {
    let origin = app.controller.viewport_rect(slot).origin();
    Point::new(at.x - origin.x, at.y - origin.y)
}

fn map_button(button: egui::PointerButton) -> Option<MouseButton> {
    match button {
        egui::PointerButton::Primary => Some(MouseButton::Left),
        egui::PointerButton::Secondary => Some(MouseButton::Right),
        egui::PointerButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

/// Convert an egui wheel delta to wheel units (positive = toward the user).
///
/// egui reports forward rotation as positive y, so the sign flips.
fn wheel_units(unit: egui::MouseWheelUnit, delta_y: f32, nav: &NavigationConfig) -> f64 {
    let delta_y = delta_y as f64;
    match unit {
        egui::MouseWheelUnit::Point => -nav.points_to_wheel_units(delta_y),
        // Lines and pages both count as one notch each.
        _ => -delta_y * nav.wheel_notch,
    }
}

fn paint_slot(ui: &egui::Ui, app: &DuoviewApp, slot: Slot, origin: egui::Pos2) {
    let rect = to_egui_rect(app.controller.viewport_rect(slot)).translate(origin.to_vec2());
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return;
    }

    let painter = ui.painter().with_clip_rect(rect);
    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(30));

    let viewport = app.controller.viewport(slot);
    let texture = app.slot(slot).texture.as_ref();
    match (texture, viewport.image_rect_in_view()) {
        (Some(texture), Ok(image_rect)) => {
            let img_rect = to_egui_rect(image_rect).translate(rect.min.to_vec2());
            painter.image(
                texture.id(),
                img_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }
        _ => {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                FILE_PATH_INITIAL,
                egui::FontId::proportional(18.0),
                egui::Color32::from_gray(100),
            );
        }
    }

    draw_slot_label(&painter, rect, &slot.to_string());
}

fn draw_slot_label(painter: &egui::Painter, rect: egui::Rect, label: &str) {
    let label_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    painter.text(
        label_pos,
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}
