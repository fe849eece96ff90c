use std::collections::VecDeque;
use std::path::PathBuf;

use duoview_core::consts::INFO_INITIAL;
use duoview_core::controller::Slot;
use duoview_core::geometry::{ImageSize, Rect};

/// Second image waiting for the size-mismatch answer.
pub struct PendingMismatch {
    pub path_label: String,
    pub first: ImageSize,
    pub second: ImageSize,
}

pub struct UIState {
    /// Text of the info line at the bottom.
    pub info: String,
    /// Directory the file chooser opens in.
    pub working_dir: Option<PathBuf>,
    /// Paths given on the command line, loaded once the layout is known.
    pub preload: VecDeque<(Slot, PathBuf)>,
    pub pending_mismatch: Option<PendingMismatch>,
    /// Last visible-region summary written to the info line.
    pub last_summary: Option<Rect>,
}

impl UIState {
    pub fn new(working_dir: Option<PathBuf>, preload: Vec<PathBuf>) -> Self {
        Self {
            info: INFO_INITIAL.to_string(),
            working_dir,
            preload: Slot::ALL.into_iter().zip(preload).collect(),
            pending_mismatch: None,
            last_summary: None,
        }
    }
}
