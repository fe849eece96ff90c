//! Gesture capture for a single displayed image.

use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Discrete input events delivered to a viewport by the windowing layer.
///
/// Positions are screen-space, relative to the viewport's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    PressStart { button: MouseButton, position: Point },
    ReleaseLeft,
    ReleaseRight,
    /// Wheel rotation in wheel units (one notch = 120). Positive values are
    /// rotation toward the user.
    WheelRotate { delta: f64 },
    PointerMove { position: Point },
}

impl Gesture {
    /// Release gesture for `button`, if the rest of the system cares about it.
    pub fn release(button: MouseButton) -> Option<Gesture> {
        match button {
            MouseButton::Left => Some(Gesture::ReleaseLeft),
            MouseButton::Right => Some(Gesture::ReleaseRight),
            MouseButton::Middle => None,
        }
    }
}

/// Notifications an [`ImageSurface`] sends to its owning viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    DragEnded,
    RightClickReleased,
}

/// Holds the press/release bookkeeping for one image.
///
/// A release is only reported for a button this surface saw pressed, the same
/// way a pointer grab routes releases back to the widget that took the press.
#[derive(Clone, Debug, Default)]
pub struct ImageSurface {
    has_image: bool,
    drag_active: bool,
    right_pressed: bool,
    press_position: Option<Point>,
}

impl ImageSurface {
    pub fn set_has_image(&mut self, has_image: bool) {
        self.has_image = has_image;
        if !has_image {
            self.reset();
        }
    }

    pub fn has_image(&self) -> bool {
        self.has_image
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn press_position(&self) -> Option<Point> {
        self.press_position
    }

    pub fn on_press(&mut self, button: MouseButton, position: Point) {
        if !self.has_image {
            return;
        }
        match button {
            MouseButton::Left => self.drag_active = true,
            MouseButton::Right => self.right_pressed = true,
            MouseButton::Middle => {}
        }
        self.press_position = Some(position);
    }

    pub fn on_release(&mut self, button: MouseButton) -> Option<SurfaceEvent> {
        if !self.has_image {
            return None;
        }
        match button {
            MouseButton::Left if self.drag_active => {
                self.drag_active = false;
                Some(SurfaceEvent::DragEnded)
            }
            MouseButton::Right if self.right_pressed => {
                self.right_pressed = false;
                Some(SurfaceEvent::RightClickReleased)
            }
            _ => None,
        }
    }

    fn reset(&mut self) {
        self.drag_active = false;
        self.right_pressed = false;
        self.press_position = None;
    }
}
