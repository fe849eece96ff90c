use duoview_core::controller::Slot;

use crate::app::DuoviewApp;

const LOAD_BUTTON_SIZE: egui::Vec2 = egui::vec2(105.0, 48.0);

pub fn show(ctx: &egui::Context, app: &mut DuoviewApp) {
    egui::TopBottomPanel::top("image_bar").show(ctx, |ui| {
        ui.add_space(4.0);
        let mut clicked = None;
        ui.columns(2, |columns| {
            for (slot, ui) in Slot::ALL.into_iter().zip(columns.iter_mut()) {
                if slot_group(ui, app, slot) {
                    clicked = Some(slot);
                }
            }
        });
        if let Some(slot) = clicked {
            app.pick_and_load(ctx, slot);
        }
        ui.add_space(4.0);
    });
}

/// Load button plus path and size labels. Returns whether the button was clicked.
fn slot_group(ui: &mut egui::Ui, app: &DuoviewApp, slot: Slot) -> bool {
    let state = app.slot(slot);
    let enabled = app.controller.can_load(slot);
    let mut clicked = false;

    ui.horizontal(|ui| {
        clicked = ui
            .add_enabled(
                enabled,
                egui::Button::new(slot.to_string()).min_size(LOAD_BUTTON_SIZE),
            )
            .clicked();
        ui.vertical(|ui| {
            ui.label(state.path_label.as_str());
            ui.small(state.size_label.as_str());
        });
    });
    clicked
}
