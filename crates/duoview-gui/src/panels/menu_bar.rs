use duoview_core::controller::Slot;

use crate::app::DuoviewApp;

pub fn show(ctx: &egui::Context, app: &mut DuoviewApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                for slot in Slot::ALL {
                    let mut button = egui::Button::new(format!("Open {slot}..."));
                    if slot == Slot::First {
                        button = button.shortcut_text(ctx.format_shortcut(&open_shortcut));
                    }
                    if ui.add_enabled(app.controller.can_load(slot), button).clicked() {
                        ui.close();
                        app.pick_and_load(ctx, slot);
                    }
                }

                ui.separator();

                if ui
                    .add_enabled(app.controller.can_clear(), egui::Button::new("Clear"))
                    .clicked()
                {
                    ui.close();
                    app.clear_all();
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            app.pick_and_load(ctx, Slot::First);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}
