//! Google Maps JS API integration: script loading, raw bindings, and the
//! `MapWidget` implementation used by the map view.

mod bindings;
pub mod loader;
pub mod map;

pub use loader::{load_maps_api, script_url, MapsRuntime};
pub use map::{GoogleMap, GoogleMarker};
