//! Keeps two viewports in lock-step and owns the load/clear session.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::{LayoutConfig, ViewerConfig};
use crate::error::{DuoviewError, Result};
use crate::geometry::{ImageSize, Point, Rect, Size};
use crate::layout::{self, LayoutMode};
use crate::surface::Gesture;
use crate::viewport::{NavigationIntent, Viewport};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::First, Slot::Second];

    pub fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::First => write!(f, "Image 1"),
            Slot::Second => write!(f, "Image 2"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Empty,
    FirstLoaded,
    /// The second image is installed but waits for the user to accept its size.
    SizeMismatchPending,
    BothLoaded,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Empty => write!(f, "No images"),
            SessionState::FirstLoaded => write!(f, "Image 1 loaded"),
            SessionState::SizeMismatchPending => write!(f, "Waiting for size confirmation"),
            SessionState::BothLoaded => write!(f, "Both images loaded"),
        }
    }
}

/// Result of the file-selection step.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Cancelled,
    Image { path: PathBuf, size: ImageSize },
}

impl Selection {
    /// An empty path with a zero-sized result means the chooser was dismissed.
    pub fn from_parts(path: impl Into<PathBuf>, size: ImageSize) -> Self {
        let path = path.into();
        if path.as_os_str().is_empty() && size.is_zero() {
            Selection::Cancelled
        } else {
            Selection::Image { path, size }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Cancelled,
    Loaded { slot: Slot, size: ImageSize },
    BothLoaded { size: ImageSize },
    /// Needs [`ComparisonController::resolve_mismatch`] before navigation resumes.
    SizeMismatch { first: ImageSize, second: ImageSize },
}

/// Owns both viewports and re-broadcasts every pan/zoom gesture to them.
pub struct ComparisonController {
    viewports: [Viewport; 2],
    paths: [Option<PathBuf>; 2],
    pending_path: Option<PathBuf>,
    state: SessionState,
    layout: LayoutConfig,
    second_collapsed: bool,
    available: Size,
    visible_summary: Option<Rect>,
}

impl ComparisonController {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            viewports: [
                Viewport::new(config.navigation.clone()),
                Viewport::new(config.navigation.clone()),
            ],
            paths: [None, None],
            pending_path: None,
            state: SessionState::Empty,
            layout: config.layout.clone(),
            second_collapsed: false,
            available: Size::ZERO,
            visible_summary: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn both_loaded(&self) -> bool {
        self.state == SessionState::BothLoaded
    }

    pub fn mismatch_pending(&self) -> bool {
        self.state == SessionState::SizeMismatchPending
    }

    pub fn viewport(&self, slot: Slot) -> &Viewport {
        &self.viewports[slot.index()]
    }

    pub fn path(&self, slot: Slot) -> Option<&Path> {
        self.paths[slot.index()].as_deref()
    }

    pub fn image_size(&self, slot: Slot) -> Option<ImageSize> {
        self.viewport(slot).image_size()
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout.mode
    }

    pub fn layout_label(&self) -> &'static str {
        layout::layout_label(self.layout.mode, self.second_collapsed)
    }

    /// The second slot unlocks once the first image is in.
    pub fn can_load(&self, slot: Slot) -> bool {
        match slot {
            Slot::First => !self.mismatch_pending(),
            Slot::Second => matches!(
                self.state,
                SessionState::FirstLoaded | SessionState::BothLoaded
            ),
        }
    }

    pub fn can_clear(&self) -> bool {
        self.state != SessionState::Empty
    }

    /// Image-space rectangle of the first viewport after the latest navigation.
    pub fn visible_summary(&self) -> Option<Rect> {
        self.visible_summary
    }

    /// Install a selected image into `slot`.
    ///
    /// A second image whose size differs from the first is kept on screen but
    /// leaves the session in [`SessionState::SizeMismatchPending`].
    pub fn load_into(&mut self, slot: Slot, selection: Selection) -> Result<LoadOutcome> {
        let (path, size) = match selection {
            Selection::Cancelled => {
                tracing::debug!("{slot}: selection cancelled");
                return Ok(LoadOutcome::Cancelled);
            }
            Selection::Image { path, size } => (path, size),
        };

        if slot == Slot::Second && self.state == SessionState::Empty {
            return Err(DuoviewError::FirstImageRequired);
        }
        if self.mismatch_pending() {
            self.abandon_second();
        }

        // The viewport reads its display size at load time.
        self.apply_layout();
        let size = self.viewports[slot.index()].load(size)?;
        tracing::info!("{slot}: loaded {} ({size})", path.display());

        match slot {
            Slot::First => {
                self.paths[0] = Some(path);
                if self.state == SessionState::Empty {
                    self.state = SessionState::FirstLoaded;
                }
                Ok(LoadOutcome::Loaded { slot, size })
            }
            Slot::Second => {
                let first = self
                    .image_size(Slot::First)
                    .ok_or(DuoviewError::FirstImageRequired)?;
                if first != size {
                    tracing::warn!("Size mismatch: {first} vs {size}");
                    self.pending_path = Some(path);
                    self.state = SessionState::SizeMismatchPending;
                    return Ok(LoadOutcome::SizeMismatch {
                        first,
                        second: size,
                    });
                }
                self.paths[1] = Some(path);
                self.state = SessionState::BothLoaded;
                Ok(LoadOutcome::BothLoaded { size })
            }
        }
    }

    /// Answer the size-mismatch question: keep the second image or drop it.
    pub fn resolve_mismatch(&mut self, accept: bool) -> Result<SessionState> {
        if !self.mismatch_pending() {
            return Err(DuoviewError::NoPendingMismatch);
        }
        if accept {
            tracing::info!("Keeping mismatched second image");
            self.paths[1] = self.pending_path.take();
            self.state = SessionState::BothLoaded;
        } else {
            tracing::info!("Abandoning mismatched second image");
            self.abandon_second();
        }
        Ok(self.state)
    }

    fn abandon_second(&mut self) {
        self.viewports[1].clear();
        self.paths[1] = None;
        self.pending_path = None;
        self.state = SessionState::FirstLoaded;
        self.apply_layout();
    }

    /// Reset both viewports and the session.
    pub fn clear_all(&mut self) {
        for viewport in &mut self.viewports {
            viewport.clear();
        }
        self.paths = [None, None];
        self.pending_path = None;
        self.state = SessionState::Empty;
        self.visible_summary = None;
        self.second_collapsed = false;
        self.apply_layout();
        tracing::info!("Cleared both images");
    }

    /// Route one gesture from `slot` and broadcast whatever it asks for.
    ///
    /// Nothing moves while a size mismatch awaits an answer.
    pub fn dispatch(&mut self, slot: Slot, gesture: Gesture) -> Result<()> {
        if self.mismatch_pending() {
            return Ok(());
        }
        let Some(intent) = self.viewports[slot.index()].handle(gesture) else {
            return Ok(());
        };
        match intent {
            NavigationIntent::Zoom { multiplier } => self.on_zoom_gesture(multiplier),
            NavigationIntent::Drag { previous, current } => {
                self.on_drag_gesture(previous, current, slot)
            }
            NavigationIntent::ToggleFront => {
                self.on_right_click_release();
                Ok(())
            }
        }
    }

    /// Apply the same zoom multiplier to every loaded viewport.
    pub fn on_zoom_gesture(&mut self, multiplier: f64) -> Result<()> {
        for viewport in self.viewports.iter_mut().filter(|v| v.is_loaded()) {
            viewport.apply_zoom(multiplier)?;
        }
        tracing::debug!("Zoom x{multiplier:.4} broadcast");
        self.refresh_summary();
        Ok(())
    }

    /// Pan both viewports by the drag measured in `origin`'s own space.
    ///
    /// The normalized translation is in fit-relative units; dividing by the
    /// source's fit scale turns it into image pixels, so the image under the
    /// pointer follows it one-to-one on screen.
    pub fn on_drag_gesture(&mut self, previous: Point, current: Point, origin: Slot) -> Result<()> {
        let source = &self.viewports[origin.index()];
        let translation = source
            .compute_drag_translation(previous, current)?
            .scaled(1.0 / source.fit_scale());
        let new_center = source.visible_region()?.center() - translation;

        for viewport in self.viewports.iter_mut().filter(|v| v.is_loaded()) {
            viewport.center_on(new_center)?;
        }
        tracing::debug!(
            "Drag from {origin}: center now ({:.1}, {:.1})",
            new_center.x,
            new_center.y
        );
        self.refresh_summary();
        Ok(())
    }

    /// Swap the visible image in overlay mode. Returns whether anything changed.
    pub fn on_right_click_release(&mut self) -> bool {
        if self.layout.mode != LayoutMode::Overlay {
            return false;
        }
        self.second_collapsed = !self.second_collapsed;
        tracing::debug!("Overlay front toggled: {}", self.layout_label());
        true
    }

    pub fn set_layout_mode(&mut self, mode: LayoutMode) {
        if self.layout.mode != mode {
            tracing::info!("Layout changed to {mode}");
        }
        self.layout.mode = mode;
        self.second_collapsed = false;
        self.apply_layout();
    }

    /// Record the area both viewports share and resize them to fit.
    pub fn relayout(&mut self, available: Size) {
        if self.available != available {
            self.available = available;
            self.apply_layout();
        }
    }

    /// Viewport rectangle relative to the shared area's top-left corner.
    pub fn viewport_rect(&self, slot: Slot) -> Rect {
        self.rects()[slot.index()]
    }

    /// The frontmost viewport under `point`, if any.
    pub fn slot_at(&self, point: Point) -> Option<Slot> {
        let rects = self.rects();
        [Slot::Second, Slot::First]
            .into_iter()
            .find(|slot| rects[slot.index()].contains(point))
    }

    fn rects(&self) -> [Rect; 2] {
        layout::viewport_rects(
            self.layout.mode,
            self.available,
            &self.layout,
            self.second_collapsed,
        )
    }

    /// Viewports always get the uncollapsed size; the overlay front toggle
    /// only affects painting and hit-testing.
    fn apply_layout(&mut self) {
        let rects = layout::viewport_rects(
            self.layout.mode,
            self.available,
            &self.layout,
            false,
        );
        for (viewport, rect) in self.viewports.iter_mut().zip(rects) {
            viewport.set_viewport_size(rect.size());
        }
    }

    fn refresh_summary(&mut self) {
        self.visible_summary = self.viewports[0].visible_region().ok();
    }
}
