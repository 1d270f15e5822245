use contracts::domain::a001_location::Location;
use contracts::shared::geo::LatLngBounds;
use std::rc::Rc;

use super::widget::{MapMarker, MapWidget, MarkerIcon, MarkerSpec};
use crate::shared::error::MapError;

#[derive(Clone, Debug, PartialEq)]
pub enum EngineState {
    /// No credential, or no widget constructed yet
    Uninitialized,
    /// Script load / widget construction in flight
    Initializing,
    Ready,
    /// Terminal for this widget; cleared by the next initialization
    Failed(String),
}

/// Identifies one initialization attempt; only the latest one may complete
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitTicket(u64);

/// Identifies one highlight animation so a late timer cannot stop a newer one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighlightTicket {
    epoch: u64,
    serial: u64,
}

#[derive(Debug, PartialEq)]
pub enum InitOutcome {
    Ready { highlight: Option<HighlightTicket> },
    Failed(MapError),
    /// A newer initialization or a revocation superseded this one
    Stale,
}

/// Keeps one map widget and its markers in step with the location sequence
/// and the current selection.
///
/// Markers are rebuilt from scratch whenever the location sequence changes
/// (old markers are detached first) and only re-skinned when the selection
/// changes. A rebuild is always followed by a selection pass over the new
/// markers.
pub struct MapSyncEngine<W: MapWidget> {
    max_fit_zoom: f64,
    state: EngineState,
    widget: Option<W>,
    markers: Vec<W::Marker>,
    locations: Vec<Location>,
    selected: Option<String>,
    generation: u64,
    epoch: u64,
    highlight_serial: u64,
    highlighted: Option<(HighlightTicket, usize)>,
    clamp_armed: bool,
    on_select: Rc<dyn Fn(Location)>,
}

impl<W: MapWidget> MapSyncEngine<W> {
    /// `on_select` is invoked when a marker is clicked
    pub fn new(max_fit_zoom: f64, on_select: impl Fn(Location) + 'static) -> Self {
        Self {
            max_fit_zoom,
            state: EngineState::Uninitialized,
            widget: None,
            markers: Vec::new(),
            locations: Vec::new(),
            selected: None,
            generation: 0,
            epoch: 0,
            highlight_serial: 0,
            highlighted: None,
            clamp_armed: false,
            on_select: Rc::new(on_select),
        }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == EngineState::Ready
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Tear down the current widget and start a new attempt.
    /// Any attempt still in flight becomes stale.
    pub fn begin_initialization(&mut self) -> InitTicket {
        self.teardown();
        self.generation += 1;
        self.state = EngineState::Initializing;
        log::debug!("map init #{} started", self.generation);
        InitTicket(self.generation)
    }

    pub fn complete_initialization(
        &mut self,
        ticket: InitTicket,
        result: Result<W, MapError>,
    ) -> InitOutcome {
        if ticket.0 != self.generation || self.state != EngineState::Initializing {
            log::debug!("map init #{} superseded, discarding result", ticket.0);
            return InitOutcome::Stale;
        }

        match result {
            Ok(widget) => {
                self.widget = Some(widget);
                self.state = EngineState::Ready;
                log::info!("map ready");
                self.rebuild_markers();
                InitOutcome::Ready {
                    highlight: self.restyle(),
                }
            }
            Err(e) => {
                log::error!("map init failed: {}", e);
                self.state = EngineState::Failed(e.to_string());
                InitOutcome::Failed(e)
            }
        }
    }

    /// Credential withdrawn: detach every marker, drop the widget and
    /// invalidate pending initializations
    pub fn revoke(&mut self) {
        self.teardown();
        self.generation += 1;
        self.state = EngineState::Uninitialized;
        log::debug!("map revoked");
    }

    pub fn set_locations(&mut self, locations: Vec<Location>) -> Option<HighlightTicket> {
        self.locations = locations;
        if !self.is_ready() {
            return None;
        }
        self.rebuild_markers();
        self.restyle()
    }

    /// Re-skin markers for a new selection; pans to and highlights the match
    pub fn apply_selection(&mut self, selection: Option<&Location>) -> Option<HighlightTicket> {
        self.selected = selection.map(|l| l.name.clone());
        if !self.is_ready() {
            return None;
        }
        self.restyle()
    }

    /// Stop the highlight started with `ticket`, unless something newer replaced it
    pub fn clear_highlight(&mut self, ticket: HighlightTicket) -> bool {
        match self.highlighted {
            Some((current, index)) if current == ticket => {
                if let Some(marker) = self.markers.get(index) {
                    marker.set_highlighted(false);
                }
                self.highlighted = None;
                true
            }
            _ => false,
        }
    }

    /// Called when the widget's camera comes to rest. After an automatic fit
    /// the zoom is pulled back to `max_fit_zoom` once.
    pub fn camera_settled(&mut self) {
        if !self.clamp_armed {
            return;
        }
        self.clamp_armed = false;
        if let Some(widget) = self.widget.as_mut() {
            if let Some(zoom) = widget.zoom() {
                if zoom > self.max_fit_zoom {
                    widget.set_zoom(self.max_fit_zoom);
                }
            }
        }
    }

    fn rebuild_markers(&mut self) {
        self.detach_markers();
        let Some(widget) = self.widget.as_mut() else {
            return;
        };
        self.epoch += 1;

        for location in &self.locations {
            // unmappable locations stay list-only
            let Some(position) = location.position else {
                continue;
            };
            let on_select = Rc::clone(&self.on_select);
            let target = location.clone();
            let spec = MarkerSpec {
                title: location.name.clone(),
                position,
                icon: MarkerIcon::for_selected(
                    self.selected.as_deref() == Some(location.name.as_str()),
                ),
                on_click: Rc::new(move || on_select(target.clone())),
            };
            match widget.create_marker(spec) {
                Ok(marker) => self.markers.push(marker),
                Err(e) => log::warn!("{}", e),
            }
        }

        log::debug!(
            "markers rebuilt: {} of {} locations mapped",
            self.markers.len(),
            self.locations.len()
        );

        if let Some(bounds) = LatLngBounds::from_positions(self.markers.iter().map(|m| m.position())) {
            widget.fit_bounds(&bounds);
            self.clamp_armed = true;
        }
    }

    fn restyle(&mut self) -> Option<HighlightTicket> {
        let widget = self.widget.as_mut()?;

        if let Some((_, index)) = self.highlighted.take() {
            if let Some(marker) = self.markers.get(index) {
                marker.set_highlighted(false);
            }
        }

        let mut target = None;
        for (index, marker) in self.markers.iter().enumerate() {
            let is_selected = self.selected.as_deref() == Some(marker.title());
            marker.set_icon(MarkerIcon::for_selected(is_selected));
            if is_selected && target.is_none() {
                target = Some(index);
            }
        }

        let index = target?;
        let marker = &self.markers[index];
        widget.pan_to(marker.position());
        marker.set_highlighted(true);

        self.highlight_serial += 1;
        let ticket = HighlightTicket {
            epoch: self.epoch,
            serial: self.highlight_serial,
        };
        self.highlighted = Some((ticket, index));
        Some(ticket)
    }

    fn detach_markers(&mut self) {
        self.highlighted = None;
        for marker in self.markers.drain(..) {
            marker.detach();
        }
    }

    fn teardown(&mut self) {
        self.detach_markers();
        self.widget = None;
        self.clamp_armed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_location::map_sync::fake::FakeWidget;
    use contracts::domain::a001_location::{CityCatalog, Position, Rating};
    use std::cell::RefCell;

    type Picked = Rc<RefCell<Option<Location>>>;

    fn engine() -> (MapSyncEngine<FakeWidget>, Picked) {
        let picked: Picked = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&picked);
        let engine = MapSyncEngine::new(16.0, move |loc| *sink.borrow_mut() = Some(loc));
        (engine, picked)
    }

    fn ready_engine(locations: Vec<Location>) -> (MapSyncEngine<FakeWidget>, FakeWidget, Picked) {
        let (mut engine, picked) = engine();
        engine.set_locations(locations);
        let widget = FakeWidget::new();
        let ticket = engine.begin_initialization();
        let outcome = engine.complete_initialization(ticket, Ok(widget.clone()));
        assert!(matches!(outcome, InitOutcome::Ready { .. }));
        (engine, widget, picked)
    }

    fn catalog() -> &'static CityCatalog {
        CityCatalog::embedded()
    }

    fn location(name: &str) -> Location {
        catalog().find(name).cloned().unwrap()
    }

    fn unmapped(name: &str) -> Location {
        Location {
            name: name.into(),
            category: "museum".into(),
            address: "somewhere".into(),
            rating: Rating::NotRated,
            photo: None,
            position: None,
        }
    }

    #[test]
    fn test_marker_count_matches_positioned_locations() {
        let mut locations = catalog().all_locations();
        locations.push(unmapped("Hidden Museum"));
        let (engine, widget, _) = ready_engine(locations);

        assert_eq!(engine.marker_count(), catalog().mappable_count());
        assert_eq!(widget.attached_count(), 9);
        assert!(!widget.is_attached("Hidden Museum"));
    }

    #[test]
    fn test_no_markers_before_ready() {
        let (mut engine, _) = engine();
        engine.set_locations(catalog().all_locations());
        assert_eq!(engine.marker_count(), 0);
        assert_eq!(engine.state(), &EngineState::Uninitialized);

        engine.begin_initialization();
        assert_eq!(engine.state(), &EngineState::Initializing);
        assert_eq!(engine.marker_count(), 0);
    }

    #[test]
    fn test_fit_covers_attractions_and_zoom_is_clamped() {
        let attractions = catalog()
            .locations_for_category("tourist attraction")
            .to_vec();
        assert_eq!(attractions.len(), 5);

        let (mut engine, widget, _) = ready_engine(attractions.clone());
        let bounds = widget.fitted_bounds().unwrap();
        for loc in &attractions {
            assert!(bounds.contains(loc.position.unwrap()), "{} outside fit", loc.name);
        }

        // fake settles a tight cluster at zoom 18
        assert_eq!(widget.zoom_level(), 18.0);
        engine.camera_settled();
        assert!(widget.zoom_level() <= 16.0);

        // the clamp is one-shot: a later manual zoom-in is left alone
        widget.set_zoom_level(19.0);
        engine.camera_settled();
        assert_eq!(widget.zoom_level(), 19.0);
    }

    #[test]
    fn test_zoom_below_ceiling_is_untouched() {
        let (mut engine, widget, _) = engine_with_fit_zoom(12.0);
        engine.camera_settled();
        assert_eq!(widget.zoom_level(), 12.0);
    }

    fn engine_with_fit_zoom(zoom: f64) -> (MapSyncEngine<FakeWidget>, FakeWidget, Picked) {
        let (mut engine, picked) = engine();
        engine.set_locations(catalog().all_locations());
        let widget = FakeWidget::new().with_fit_zoom(zoom);
        let ticket = engine.begin_initialization();
        engine.complete_initialization(ticket, Ok(widget.clone()));
        (engine, widget, picked)
    }

    #[test]
    fn test_rebuild_detaches_previous_markers() {
        let (mut engine, widget, _) = ready_engine(catalog().all_locations());
        let first_ids = widget.attached_ids();
        assert_eq!(first_ids.len(), 9);

        engine.set_locations(catalog().locations_for_category("hotel").to_vec());

        assert_eq!(engine.marker_count(), 2);
        assert_eq!(widget.attached_count(), 2);
        for id in first_ids {
            assert!(!widget.attached_ids().contains(&id));
        }
        assert!(widget.detached_before_attached());
    }

    #[test]
    fn test_selection_switch_leaves_one_selected_marker() {
        let (mut engine, widget, _) = ready_engine(catalog().all_locations());

        engine.apply_selection(Some(&location("Kadapa Clock Tower")));
        assert_eq!(widget.selected_titles(), vec!["Kadapa Clock Tower"]);

        engine.apply_selection(Some(&location("Comfort Inn")));
        assert_eq!(widget.selected_titles(), vec!["Comfort Inn"]);
        assert_eq!(widget.icon_of("Kadapa Clock Tower"), Some(MarkerIcon::Default));
        assert_eq!(widget.last_pan(), Some(Position::new(14.465, 78.832)));
    }

    #[test]
    fn test_selecting_twice_is_idempotent() {
        let (mut once, once_widget, _) = ready_engine(catalog().all_locations());
        let t = once.apply_selection(Some(&location("Spice Palace"))).unwrap();
        once.clear_highlight(t);

        let (mut twice, twice_widget, _) = ready_engine(catalog().all_locations());
        let t1 = twice.apply_selection(Some(&location("Spice Palace"))).unwrap();
        let t2 = twice.apply_selection(Some(&location("Spice Palace"))).unwrap();
        twice.clear_highlight(t1);
        twice.clear_highlight(t2);

        assert_eq!(once_widget.selected_titles(), twice_widget.selected_titles());
        assert_eq!(once_widget.last_pan(), twice_widget.last_pan());
        assert_eq!(once_widget.zoom_level(), twice_widget.zoom_level());
        assert!(once_widget.highlighted_titles().is_empty());
        assert!(twice_widget.highlighted_titles().is_empty());
    }

    #[test]
    fn test_highlight_is_cleared_only_by_current_ticket() {
        let (mut engine, widget, _) = ready_engine(catalog().all_locations());

        let first = engine.apply_selection(Some(&location("NeeM TrEe"))).unwrap();
        let second = engine.apply_selection(Some(&location("Comfort Inn"))).unwrap();
        assert_eq!(widget.highlighted_titles(), vec!["Comfort Inn"]);

        // the first timer firing late must not stop the newer animation
        assert!(!engine.clear_highlight(first));
        assert_eq!(widget.highlighted_titles(), vec!["Comfort Inn"]);

        assert!(engine.clear_highlight(second));
        assert!(widget.highlighted_titles().is_empty());
    }

    #[test]
    fn test_clearing_selection_restores_default_icons() {
        let (mut engine, widget, _) = ready_engine(catalog().all_locations());
        engine.apply_selection(Some(&location("Comfort Inn")));
        assert!(engine.apply_selection(None).is_none());
        assert!(widget.selected_titles().is_empty());
        assert!(widget.highlighted_titles().is_empty());
    }

    #[test]
    fn test_marker_click_converges_with_list_selection() {
        let (mut engine, widget, picked) = ready_engine(catalog().all_locations());

        widget.click("Kadapa Grand Hotel");
        let clicked = picked.borrow_mut().take().unwrap();
        assert_eq!(clicked.name, "Kadapa Grand Hotel");

        engine.apply_selection(Some(&clicked));
        let via_marker = (widget.selected_titles(), widget.last_pan());

        let (mut other, other_widget, _) = ready_engine(catalog().all_locations());
        other.apply_selection(Some(&location("Kadapa Grand Hotel")));
        assert_eq!(via_marker, (other_widget.selected_titles(), other_widget.last_pan()));
    }

    #[test]
    fn test_selection_made_before_ready_is_applied_on_ready() {
        let (mut engine, _) = engine();
        engine.set_locations(catalog().all_locations());
        assert!(engine.apply_selection(Some(&location("Spice Palace"))).is_none());

        let widget = FakeWidget::new();
        let ticket = engine.begin_initialization();
        let outcome = engine.complete_initialization(ticket, Ok(widget.clone()));

        assert!(matches!(outcome, InitOutcome::Ready { highlight: Some(_) }));
        assert_eq!(widget.selected_titles(), vec!["Spice Palace"]);
    }

    #[test]
    fn test_rebuild_reapplies_selection_to_new_markers() {
        let (mut engine, widget, _) = ready_engine(catalog().all_locations());
        engine.apply_selection(Some(&location("Comfort Inn")));

        let ticket = engine.set_locations(catalog().locations_for_category("hotel").to_vec());
        assert!(ticket.is_some());
        assert_eq!(widget.selected_titles(), vec!["Comfort Inn"]);
        assert_eq!(widget.highlighted_titles(), vec!["Comfort Inn"]);
    }

    #[test]
    fn test_revoke_clears_markers_immediately() {
        let (mut engine, widget, _) = ready_engine(catalog().all_locations());
        engine.revoke();

        assert_eq!(engine.marker_count(), 0);
        assert_eq!(widget.attached_count(), 0);
        assert_eq!(engine.state(), &EngineState::Uninitialized);

        // clicks on old markers go nowhere
        assert!(!widget.click("Comfort Inn"));
    }

    #[test]
    fn test_revoke_invalidates_inflight_initialization() {
        let (mut engine, _) = engine();
        let ticket = engine.begin_initialization();
        engine.revoke();

        let outcome = engine.complete_initialization(ticket, Ok(FakeWidget::new()));
        assert_eq!(outcome, InitOutcome::Stale);
        assert_eq!(engine.state(), &EngineState::Uninitialized);
    }

    #[test]
    fn test_latest_initialization_wins() {
        let (mut engine, _) = engine();
        engine.set_locations(catalog().all_locations());
        let first = engine.begin_initialization();
        let second = engine.begin_initialization();

        let late = FakeWidget::new();
        let current = FakeWidget::new();
        assert_eq!(
            engine.complete_initialization(second, Ok(current.clone())),
            InitOutcome::Ready { highlight: None }
        );
        assert_eq!(
            engine.complete_initialization(first, Ok(late.clone())),
            InitOutcome::Stale
        );

        assert_eq!(current.attached_count(), 9);
        assert_eq!(late.attached_count(), 0);
    }

    #[test]
    fn test_new_initialization_tears_down_old_widget_first() {
        let (mut engine, old_widget, _) = ready_engine(catalog().all_locations());
        engine.begin_initialization();
        assert_eq!(old_widget.attached_count(), 0);
        assert_eq!(engine.marker_count(), 0);
    }

    #[test]
    fn test_failure_is_reported_and_recoverable() {
        let (mut engine, _) = engine();
        engine.set_locations(catalog().all_locations());
        let ticket = engine.begin_initialization();
        let outcome = engine.complete_initialization(
            ticket,
            Err(MapError::ScriptLoad("network".into())),
        );

        assert!(matches!(outcome, InitOutcome::Failed(MapError::ScriptLoad(_))));
        assert!(matches!(engine.state(), EngineState::Failed(_)));
        assert_eq!(engine.marker_count(), 0);

        let widget = FakeWidget::new();
        let retry = engine.begin_initialization();
        engine.complete_initialization(retry, Ok(widget.clone()));
        assert!(engine.is_ready());
        assert_eq!(widget.attached_count(), 9);
    }

    #[test]
    fn test_marker_creation_failure_skips_one_location() {
        let (mut engine, _) = engine();
        engine.set_locations(catalog().all_locations());
        let widget = FakeWidget::new().failing_on("Spice Palace");
        let ticket = engine.begin_initialization();
        engine.complete_initialization(ticket, Ok(widget.clone()));

        assert_eq!(engine.marker_count(), 8);
        assert!(!widget.is_attached("Spice Palace"));
    }

    #[test]
    fn test_empty_sequence_does_not_fit() {
        let (mut engine, _) = engine();
        let widget = FakeWidget::new();
        let ticket = engine.begin_initialization();
        engine.complete_initialization(ticket, Ok(widget.clone()));

        assert_eq!(engine.marker_count(), 0);
        assert!(widget.fitted_bounds().is_none());
    }
}
