use duoview_core::consts::FILE_PATH_INITIAL;
use duoview_core::geometry::ImageSize;

/// Display-side state of one image slot.
pub struct SlotState {
    pub texture: Option<egui::TextureHandle>,
    pub path_label: String,
    pub size_label: String,
}

impl Default for SlotState {
    fn default() -> Self {
        Self {
            texture: None,
            path_label: FILE_PATH_INITIAL.to_string(),
            size_label: String::new(),
        }
    }
}

impl SlotState {
    pub fn set_labels(&mut self, path: &str, size: ImageSize) {
        self.path_label = path.to_string();
        self.size_label = format!("{size} pixels");
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
