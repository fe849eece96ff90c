use duoview_core::controller::Slot;
use duoview_core::layout::LayoutMode;

use crate::app::DuoviewApp;

pub fn show(ctx: &egui::Context, app: &mut DuoviewApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            // Info line takes whatever the layout group and Clear leave over.
            let side_width = 360.0;
            let info_width = (ui.available_width() - side_width).max(120.0);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(info_width);
                ui.set_min_height(40.0);
                ui.add(egui::Label::new(app.ui_state.info.as_str()).wrap());
            });

            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.vertical(|ui| {
                    super::section_header(ui, app.controller.layout_label(), None);
                    let mut mode = app.controller.layout_mode();
                    ui.horizontal(|ui| {
                        for &m in LayoutMode::ALL {
                            ui.radio_value(&mut mode, m, m.to_string());
                        }
                    });
                    if mode != app.controller.layout_mode() {
                        app.controller.set_layout_mode(mode);
                    }
                });
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(
                        app.controller.can_clear(),
                        egui::Button::new("Clear").min_size(egui::vec2(105.0, 48.0)),
                    )
                    .clicked()
                {
                    app.clear_all();
                }
            });
        });

        // Status line
        ui.horizontal(|ui| {
            let vp = app.controller.viewport(Slot::First);
            if let Some(size) = vp.image_size() {
                ui.label(format!("{size}"));
                ui.separator();
                ui.label(format!("Zoom: {:.0}%", vp.current_scale() * 100.0));
                ui.separator();
            }
            ui.label(app.controller.state().to_string());
        });
        ui.add_space(2.0);
    });
}
