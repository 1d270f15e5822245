//! Seam between the sync engine and a concrete map widget.
//!
//! Only implementations of these traits touch provider objects; views talk to
//! the engine.

use contracts::domain::a001_location::Position;
use contracts::shared::geo::LatLngBounds;
use std::rc::Rc;

use crate::shared::error::MapError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerIcon {
    Default,
    Selected,
}

impl MarkerIcon {
    pub fn for_selected(selected: bool) -> Self {
        if selected {
            MarkerIcon::Selected
        } else {
            MarkerIcon::Default
        }
    }
}

/// Everything needed to place one marker
pub struct MarkerSpec {
    pub title: String,
    pub position: Position,
    pub icon: MarkerIcon,
    pub on_click: Rc<dyn Fn()>,
}

pub trait MapMarker {
    fn title(&self) -> &str;
    fn position(&self) -> Position;
    fn set_icon(&self, icon: MarkerIcon);
    /// Start or stop the transient highlight animation
    fn set_highlighted(&self, on: bool);
    /// Remove from the map; the click handler must not fire afterwards
    fn detach(&self);
}

pub trait MapWidget {
    type Marker: MapMarker;

    /// Create a marker already attached to this widget
    fn create_marker(&mut self, spec: MarkerSpec) -> Result<Self::Marker, MapError>;
    fn fit_bounds(&mut self, bounds: &LatLngBounds);
    fn zoom(&self) -> Option<f64>;
    fn set_zoom(&mut self, zoom: f64);
    fn pan_to(&mut self, position: Position);
}
