pub mod map_sync;
pub mod selection;
pub mod ui;

pub use selection::{use_selection, SelectionState};
