use duoview_core::geometry::{Point, Rect};
use duoview_core::io::image_io::DecodedImage;

/// Convert a decoded RGBA image to an egui ColorImage.
pub fn decoded_to_color_image(decoded: &DecodedImage) -> egui::ColorImage {
    let size = [decoded.size.width as usize, decoded.size.height as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, decoded.pixels.as_raw())
}

pub fn to_egui_rect(rect: Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(rect.x as f32, rect.y as f32),
        egui::vec2(rect.width as f32, rect.height as f32),
    )
}

/// Position relative to `origin`, in core coordinates.
pub fn to_point(pos: egui::Pos2, origin: egui::Pos2) -> Point {
    let rel = pos - origin;
    Point::new(rel.x as f64, rel.y as f64)
}
