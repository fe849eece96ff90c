mod slot;
mod ui;

pub use slot::SlotState;
pub use ui::{PendingMismatch, UIState};
