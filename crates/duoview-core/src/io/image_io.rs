use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::controller::Selection;
use crate::error::{DuoviewError, Result};
use crate::geometry::ImageSize;

/// A decoded image ready to be uploaded for display.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub path: PathBuf,
    pub size: ImageSize,
    /// 8-bit RGBA pixels, row-major.
    pub pixels: RgbaImage,
}

impl DecodedImage {
    pub fn selection(&self) -> Selection {
        Selection::from_parts(self.path.clone(), self.size)
    }
}

/// Decode an image file of any format the `image` crate recognises.
pub fn decode_image(path: &Path) -> Result<DecodedImage> {
    let pixels = image::open(path)?.to_rgba8();
    let (width, height) = pixels.dimensions();
    if width == 0 || height == 0 {
        return Err(DuoviewError::InvalidDimensions { width, height });
    }
    tracing::debug!("Decoded {} ({width}x{height})", path.display());

    Ok(DecodedImage {
        path: absolute_path(path),
        size: ImageSize::new(width, height),
        pixels,
    })
}

/// Read only the dimensions from the file header.
pub fn probe_size(path: &Path) -> Result<ImageSize> {
    let (width, height) = image::image_dimensions(path)?;
    Ok(ImageSize::new(width, height))
}

fn absolute_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
