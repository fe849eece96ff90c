use duoview_core::consts::{SIZE_MISMATCH_BODY, SIZE_MISMATCH_TITLE};

use crate::app::DuoviewApp;

/// Modal Yes/No question shown while a mismatched second image waits.
pub fn show(ctx: &egui::Context, app: &mut DuoviewApp) {
    let Some(ref pending) = app.ui_state.pending_mismatch else {
        return;
    };
    let detail = format!("Image 1: {}    Image 2: {}", pending.first, pending.second);
    let mut answer = None;

    egui::Window::new(SIZE_MISMATCH_TITLE)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_max_width(360.0);
            ui.label(SIZE_MISMATCH_BODY);
            ui.add_space(4.0);
            ui.small(detail);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Yes").clicked() {
                    answer = Some(true);
                }
                if ui.button("No").clicked() {
                    answer = Some(false);
                }
            });
        });

    // No is the default answer.
    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        answer.get_or_insert(false);
    }
    if let Some(accept) = answer {
        app.resolve_mismatch(accept);
    }
}
