use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::geometry::{Rect, Size};

/// How the two viewports share the available area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutMode {
    /// Each viewport takes half the width.
    #[default]
    SideBySide,
    /// Both viewports cover the full width, stacked; only the front one is visible.
    Overlay,
}

impl LayoutMode {
    pub const ALL: &'static [LayoutMode] = &[LayoutMode::SideBySide, LayoutMode::Overlay];
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutMode::SideBySide => write!(f, "Side-by-side"),
            LayoutMode::Overlay => write!(f, "Overlay"),
        }
    }
}

/// Compute the on-screen rectangles of the first and second viewport.
///
/// Rectangles are relative to the top-left corner of `available`. In overlay
/// mode `second_collapsed` shrinks the second viewport to zero height so the
/// first one shows through.
pub fn viewport_rects(
    mode: LayoutMode,
    available: Size,
    config: &LayoutConfig,
    second_collapsed: bool,
) -> [Rect; 2] {
    let margin = config.margin;
    let height = (available.height - 2.0 * margin).max(0.0);

    match mode {
        LayoutMode::SideBySide => {
            let width = ((available.width - (2.0 * margin + config.spacing)) / 2.0).max(0.0);
            [
                Rect::new(margin, margin, width, height),
                Rect::new(margin + width + config.spacing, margin, width, height),
            ]
        }
        LayoutMode::Overlay => {
            let width = (available.width - 2.0 * margin).max(0.0);
            let front = Rect::new(margin, margin, width, height);
            let second = if second_collapsed {
                Rect::new(margin, margin, width, 0.0)
            } else {
                front
            };
            [front, second]
        }
    }
}

/// Text for the layout indicator next to the layout selector.
pub fn layout_label(mode: LayoutMode, second_collapsed: bool) -> &'static str {
    match (mode, second_collapsed) {
        (LayoutMode::SideBySide, _) => "Layout",
        (LayoutMode::Overlay, false) => "Layout (overlay: image 2)",
        (LayoutMode::Overlay, true) => "Layout (overlay: image 1)",
    }
}
