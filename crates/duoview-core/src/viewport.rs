use std::fmt;

use crate::config::NavigationConfig;
use crate::error::{DuoviewError, Result};
use crate::geometry::{ImageSize, Point, Rect, Size, Vector};
use crate::surface::{Gesture, ImageSurface, MouseButton, SurfaceEvent};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => write!(f, "portrait"),
            Orientation::Landscape => write!(f, "landscape"),
        }
    }
}

/// Pan/zoom requests a viewport hands to whoever coordinates it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavigationIntent {
    Zoom { multiplier: f64 },
    Drag { previous: Point, current: Point },
    ToggleFront,
}

/// Pan/zoom state for one displayed image.
///
/// The image is drawn at `current_scale` screen points per source pixel,
/// centered on `center` (image coordinates). `current_scale / fit_scale` is the
/// mapped-unit scale that the zoom bounds apply to.
#[derive(Clone, Debug)]
pub struct Viewport {
    surface: ImageSurface,
    image_size: Option<ImageSize>,
    viewport_size: Size,
    orientation: Orientation,
    fit_scale: f64,
    current_scale: f64,
    center: Point,
    last_pointer: Option<Point>,
    navigation: NavigationConfig,
}

impl Viewport {
    pub fn new(navigation: NavigationConfig) -> Self {
        Self {
            surface: ImageSurface::default(),
            image_size: None,
            viewport_size: Size::ZERO,
            orientation: Orientation::Portrait,
            fit_scale: 1.0,
            current_scale: 1.0,
            center: Point::ORIGIN,
            last_pointer: None,
            navigation,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.image_size.is_some()
    }

    pub fn image_size(&self) -> Option<ImageSize> {
        self.image_size
    }

    pub fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport_size = size;
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn fit_scale(&self) -> f64 {
        self.fit_scale
    }

    pub fn current_scale(&self) -> f64 {
        self.current_scale
    }

    /// Zoom relative to the fit scale; 1.0 right after loading.
    pub fn mapped_scale(&self) -> f64 {
        self.current_scale / self.fit_scale
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    /// Install an image of the given size, replacing any previous one.
    ///
    /// The fit scale follows the dominant axis: portrait images fit their
    /// height, landscape (and square) images fit their width, and the scale
    /// never exceeds 1.
    pub fn load(&mut self, size: ImageSize) -> Result<ImageSize> {
        if size.width == 0 || size.height == 0 {
            return Err(DuoviewError::InvalidDimensions {
                width: size.width,
                height: size.height,
            });
        }

        self.clear_navigation();
        let (orientation, fit_scale) = fit_scale_for(size, self.viewport_size);
        self.orientation = orientation;
        self.fit_scale = fit_scale;
        self.current_scale = fit_scale;
        self.center = Rect::new(0.0, 0.0, size.width as f64, size.height as f64).center();
        self.image_size = Some(size);
        self.surface.set_has_image(true);

        tracing::debug!(
            "Viewport loaded {size} ({orientation}), fit scale {:.4}",
            fit_scale
        );
        Ok(size)
    }

    /// Drop the image and reset scale, center and viewport size to defaults.
    pub fn clear(&mut self) {
        self.clear_navigation();
        self.image_size = None;
        self.viewport_size = Size::ZERO;
        self.orientation = Orientation::Portrait;
        self.fit_scale = 1.0;
        self.current_scale = 1.0;
        self.center = Point::ORIGIN;
        self.surface.set_has_image(false);
    }

    fn clear_navigation(&mut self) {
        self.last_pointer = None;
    }

    fn ensure_loaded(&self) -> Result<ImageSize> {
        self.image_size.ok_or(DuoviewError::NoImageLoaded)
    }

    /// Image-space rectangle currently mapped into the viewport.
    pub fn visible_region(&self) -> Result<Rect> {
        self.ensure_loaded()?;
        let visible = Size::new(
            self.viewport_size.width / self.current_scale,
            self.viewport_size.height / self.current_scale,
        );
        Ok(Rect::from_center_size(self.center, visible))
    }

    /// Where the whole image lands, in viewport-local screen coordinates.
    pub fn image_rect_in_view(&self) -> Result<Rect> {
        let size = self.ensure_loaded()?;
        let region = self.visible_region()?;
        Ok(Rect::new(
            -region.x * self.current_scale,
            -region.y * self.current_scale,
            size.width as f64 * self.current_scale,
            size.height as f64 * self.current_scale,
        ))
    }

    /// Multiply the current scale by `multiplier`.
    ///
    /// Returns `Ok(false)` without changing anything when the resulting
    /// mapped-unit scale would leave the configured bounds.
    pub fn apply_zoom(&mut self, multiplier: f64) -> Result<bool> {
        self.ensure_loaded()?;
        let mapped = self.current_scale * multiplier / self.fit_scale;
        if mapped < self.navigation.min_scale || mapped > self.navigation.max_scale {
            tracing::debug!("Zoom x{multiplier:.4} rejected, mapped scale would be {mapped:.4}");
            return Ok(false);
        }
        self.current_scale *= multiplier;
        Ok(true)
    }

    /// Put `point` (image coordinates) at the middle of the viewport.
    /// Points outside the image are accepted as-is.
    pub fn center_on(&mut self, point: Point) -> Result<()> {
        self.ensure_loaded()?;
        self.center = point;
        Ok(())
    }

    /// Convert a screen-space pointer movement into an image-space delta.
    ///
    /// The delta is divided by `current_scale / fit_scale`. A fit scale of zero
    /// (image loaded into a zero-sized viewport) yields a non-finite result.
    pub fn compute_drag_translation(&self, previous: Point, current: Point) -> Result<Vector> {
        self.ensure_loaded()?;
        let ratio = self.current_scale / self.fit_scale;
        Ok((current - previous).scaled(1.0 / ratio))
    }

    /// Feed one gesture through the surface and pointer tracking.
    ///
    /// Gestures on an empty viewport produce nothing.
    pub fn handle(&mut self, gesture: Gesture) -> Option<NavigationIntent> {
        if !self.is_loaded() {
            return None;
        }
        match gesture {
            Gesture::PressStart { button, position } => {
                self.surface.on_press(button, position);
                if button == MouseButton::Left {
                    self.last_pointer = None;
                }
                None
            }
            Gesture::ReleaseLeft => self.on_surface_event(MouseButton::Left),
            Gesture::ReleaseRight => self.on_surface_event(MouseButton::Right),
            Gesture::WheelRotate { delta } => Some(NavigationIntent::Zoom {
                multiplier: self.navigation.wheel_multiplier(delta),
            }),
            Gesture::PointerMove { position } => {
                if !self.surface.drag_active() {
                    return None;
                }
                // The first sample of a drag only establishes the anchor.
                let previous = self.last_pointer.replace(position).unwrap_or(position);
                if previous == position {
                    return None;
                }
                Some(NavigationIntent::Drag {
                    previous,
                    current: position,
                })
            }
        }
    }

    fn on_surface_event(&mut self, button: MouseButton) -> Option<NavigationIntent> {
        match self.surface.on_release(button)? {
            SurfaceEvent::DragEnded => {
                self.last_pointer = None;
                None
            }
            SurfaceEvent::RightClickReleased => Some(NavigationIntent::ToggleFront),
        }
    }
}

/// Orientation and initial fit scale of an image shown in `viewport`.
pub fn fit_scale_for(size: ImageSize, viewport: Size) -> (Orientation, f64) {
    if size.is_portrait() {
        let image_height = size.height as f64;
        let scale = if viewport.height < image_height {
            viewport.height / image_height
        } else {
            1.0
        };
        (Orientation::Portrait, scale)
    } else {
        let image_width = size.width as f64;
        let scale = if viewport.width < image_width {
            viewport.width / image_width
        } else {
            1.0
        };
        (Orientation::Landscape, scale)
    }
}
