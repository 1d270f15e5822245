pub mod engine;
pub mod sequence;
pub mod widget;

#[cfg(test)]
pub mod fake;

pub use engine::{EngineState, HighlightTicket, InitOutcome, InitTicket, MapSyncEngine};
pub use sequence::map_sequence;
pub use widget::{MapMarker, MapWidget, MarkerIcon, MarkerSpec};
