/// Smallest mapped-unit scale (zoom relative to the fit scale) a viewport accepts.
pub const MIN_SCALE: f64 = 0.1;

/// Largest mapped-unit scale a viewport accepts.
pub const MAX_SCALE: f64 = 150.0;

/// Wheel units that halve (or double) the scale. One notch is half of this,
/// so each notch changes the scale by a factor of sqrt(2).
pub const WHEEL_UNITS_PER_HALVING: f64 = 240.0;

/// Magnitude of a single wheel notch in wheel units.
pub const WHEEL_NOTCH: f64 = 120.0;

/// Screen points egui reports per wheel notch on most platforms.
pub const DEFAULT_POINTS_PER_NOTCH: f64 = 50.0;

/// Outer margin around the viewport area, in screen points.
pub const DEFAULT_LAYOUT_MARGIN: f64 = 5.0;

/// Gap between the two viewports in side-by-side layout.
pub const DEFAULT_LAYOUT_SPACING: f64 = 10.0;

/// Placeholder for a slot's path label before anything is loaded.
pub const FILE_PATH_INITIAL: &str = "No image selected";

/// Hint shown before both images are loaded.
pub const INFO_INITIAL: &str = "Load two images of identical size, to compare them.";

/// Title of the size-mismatch confirmation dialog.
pub const SIZE_MISMATCH_TITLE: &str = "Image size mismatch";

/// Body of the size-mismatch confirmation dialog.
pub const SIZE_MISMATCH_BODY: &str = "This program is designed to handle images of equal size. \
Image navigation may behave oddly. Do you want to continue?";

/// Hint shown once both images are loaded.
pub const INFO_BOTH_LOADED: &str = "Use mouse wheel to zoom-in/zoom-out either image. \
Click and drag to move the image around. The other image will mirror the movement \
so that you can compare fine details between the images.";
