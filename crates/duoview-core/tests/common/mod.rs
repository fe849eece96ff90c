#![allow(dead_code)]

use std::path::{Path, PathBuf};

use duoview_core::config::ViewerConfig;
use duoview_core::controller::{ComparisonController, Selection};
use duoview_core::geometry::{ImageSize, Size};

/// Available area that gives two 800x600 viewports side by side
/// with the default 5pt margin and 10pt spacing.
pub const AREA_800X600: Size = Size {
    width: 1620.0,
    height: 610.0,
};

/// Available area that gives two 400x300 viewports side by side.
pub const AREA_400X300: Size = Size {
    width: 820.0,
    height: 310.0,
};

pub fn controller(area: Size) -> ComparisonController {
    let mut ctrl = ComparisonController::new(&ViewerConfig::default());
    ctrl.relayout(area);
    ctrl
}

pub fn selection(name: &str, width: u32, height: u32) -> Selection {
    Selection::Image {
        path: PathBuf::from(format!("/images/{name}")),
        size: ImageSize::new(width, height),
    }
}

/// Write a small gradient PNG and return its path.
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let path = dir.join(name);
    img.save(&path).expect("write test png");
    path
}
