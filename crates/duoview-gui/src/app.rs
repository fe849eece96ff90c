use std::path::{Path, PathBuf};

use duoview_core::config::ViewerConfig;
use duoview_core::consts::{INFO_BOTH_LOADED, INFO_INITIAL};
use duoview_core::controller::{ComparisonController, LoadOutcome, Selection, Slot};
use duoview_core::geometry::ImageSize;
use duoview_core::io::image_io::decode_image;

use crate::convert::decoded_to_color_image;
use crate::panels;
use crate::states::{PendingMismatch, SlotState, UIState};

const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp", "pnm", "tga", "ico",
];

pub struct DuoviewApp {
    pub controller: ComparisonController,
    pub slots: [SlotState; 2],
    pub ui_state: UIState,
    pub config: ViewerConfig,
    pub show_about: bool,
}

impl DuoviewApp {
    pub fn new(config: ViewerConfig, preload: Vec<PathBuf>) -> Self {
        Self {
            controller: ComparisonController::new(&config),
            slots: [SlotState::default(), SlotState::default()],
            ui_state: UIState::new(config.working_dir.clone(), preload),
            config,
            show_about: false,
        }
    }

    pub fn slot(&self, slot: Slot) -> &SlotState {
        &self.slots[slot.index()]
    }

    /// Ask the user for a file and load it into `slot`.
    pub fn pick_and_load(&mut self, ctx: &egui::Context, slot: Slot) {
        if !self.controller.can_load(slot) {
            return;
        }
        let mut dialog = rfd::FileDialog::new()
            .set_title(format!("Select {}", slot.to_string().to_lowercase()))
            .add_filter("Images", IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"]);
        if let Some(ref dir) = self.ui_state.working_dir {
            dialog = dialog.set_directory(dir);
        }

        // A dismissed chooser reports an empty path and no size.
        match dialog.pick_file() {
            Some(path) => self.load_path(ctx, slot, &path),
            None => {
                let selection = Selection::from_parts(PathBuf::new(), ImageSize::ZERO);
                self.apply_selection(ctx, slot, selection, None);
            }
        }
    }

    /// Decode `path` and install it into `slot`.
    pub fn load_path(&mut self, ctx: &egui::Context, slot: Slot, path: &Path) {
        let decoded = match decode_image(path) {
            Ok(decoded) => decoded,
            Err(e) => {
                tracing::warn!("Failed to open {}: {e}", path.display());
                self.ui_state.info = format!("ERROR: could not open {}: {e}", path.display());
                return;
            }
        };

        if let Some(parent) = decoded.path.parent() {
            self.ui_state.working_dir = Some(parent.to_path_buf());
        }

        let texture = ctx.load_texture(
            format!("slot-{}", slot.index()),
            decoded_to_color_image(&decoded),
            egui::TextureOptions::LINEAR,
        );
        self.apply_selection(ctx, slot, decoded.selection(), Some(texture));
    }

    fn apply_selection(
        &mut self,
        ctx: &egui::Context,
        slot: Slot,
        selection: Selection,
        texture: Option<egui::TextureHandle>,
    ) {
        let path_label = match selection {
            Selection::Image { ref path, .. } => path.display().to_string(),
            Selection::Cancelled => String::new(),
        };

        let outcome = match self.controller.load_into(slot, selection) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!("{slot}: {e}");
                self.ui_state.info = format!("ERROR: {e}");
                return;
            }
        };

        match outcome {
            LoadOutcome::Cancelled => {}
            LoadOutcome::Loaded { slot, size } => {
                let state = &mut self.slots[slot.index()];
                state.texture = texture;
                state.set_labels(&path_label, size);
            }
            LoadOutcome::BothLoaded { size } => {
                let state = &mut self.slots[Slot::Second.index()];
                state.texture = texture;
                state.set_labels(&path_label, size);
                self.ui_state.info = INFO_BOTH_LOADED.to_string();
            }
            LoadOutcome::SizeMismatch { first, second } => {
                // Shown behind the dialog; labels wait for the answer.
                self.slots[Slot::Second.index()].texture = texture;
                self.ui_state.pending_mismatch = Some(PendingMismatch {
                    path_label,
                    first,
                    second,
                });
            }
        }
        ctx.request_repaint();
    }

    /// Apply the answer to the size-mismatch dialog.
    pub fn resolve_mismatch(&mut self, accept: bool) {
        let Some(pending) = self.ui_state.pending_mismatch.take() else {
            return;
        };
        if let Err(e) = self.controller.resolve_mismatch(accept) {
            tracing::warn!("{e}");
            return;
        }

        let second = &mut self.slots[Slot::Second.index()];
        if accept {
            second.set_labels(&pending.path_label, pending.second);
            self.ui_state.info = INFO_BOTH_LOADED.to_string();
        } else {
            second.reset();
        }
    }

    pub fn clear_all(&mut self) {
        self.controller.clear_all();
        for slot in &mut self.slots {
            slot.reset();
        }
        self.ui_state.pending_mismatch = None;
        self.ui_state.last_summary = None;
        self.ui_state.info = INFO_INITIAL.to_string();
    }

    /// Load command-line images once the viewports have a size.
    fn run_preloads(&mut self, ctx: &egui::Context) {
        if self.ui_state.preload.is_empty()
            || self.controller.viewport_rect(Slot::First).size().is_empty()
            || self.controller.mismatch_pending()
        {
            return;
        }
        while let Some((slot, path)) = self.ui_state.preload.pop_front() {
            self.load_path(ctx, slot, &path);
        }
    }

    /// Mirror the latest visible-region summary into the info line.
    fn sync_info(&mut self) {
        let summary = self.controller.visible_summary();
        if summary != self.ui_state.last_summary {
            if let Some(rect) = summary {
                self.ui_state.info = format!("visible rectangle: {rect}");
            }
            self.ui_state.last_summary = summary;
        }
    }
}

impl eframe::App for DuoviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::menu_bar::show(ctx, self);
        panels::image_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);
        panels::mismatch_dialog::show(ctx, self);

        self.run_preloads(ctx);
        self.sync_info();

        if self.show_about {
            egui::Window::new("About Duoview")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Duoview");
                        ui.label("Visual comparison of two equal-sized images");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
