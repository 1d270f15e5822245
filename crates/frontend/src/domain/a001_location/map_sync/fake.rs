//! In-memory widget used by the engine tests

use contracts::domain::a001_location::Position;
use contracts::shared::geo::LatLngBounds;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use super::widget::{MapMarker, MapWidget, MarkerIcon, MarkerSpec};
use crate::shared::error::MapError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Event {
    Attach(usize),
    Detach(usize),
}

struct Record {
    title: String,
    attached: bool,
    icon: MarkerIcon,
    highlighted: bool,
    on_click: Option<Rc<dyn Fn()>>,
}

struct State {
    records: Vec<Record>,
    events: Vec<Event>,
    zoom: f64,
    fit_zoom: f64,
    fitted: Option<LatLngBounds>,
    pans: Vec<Position>,
    fail_on: Option<String>,
}

/// Cloneable handle; clones observe the same map
#[derive(Clone)]
pub struct FakeWidget {
    state: Rc<RefCell<State>>,
}

pub struct FakeMarker {
    id: usize,
    title: String,
    position: Position,
    state: Rc<RefCell<State>>,
}

impl FakeWidget {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                records: Vec::new(),
                events: Vec::new(),
                zoom: 14.0,
                fit_zoom: 18.0,
                fitted: None,
                pans: Vec::new(),
                fail_on: None,
            })),
        }
    }

    /// Zoom the camera lands on after a fit
    pub fn with_fit_zoom(self, zoom: f64) -> Self {
        self.state.borrow_mut().fit_zoom = zoom;
        self
    }

    pub fn failing_on(self, title: &str) -> Self {
        self.state.borrow_mut().fail_on = Some(title.to_string());
        self
    }

    pub fn attached_ids(&self) -> Vec<usize> {
        let state = self.state.borrow();
        (0..state.records.len())
            .filter(|&i| state.records[i].attached)
            .collect()
    }

    pub fn attached_count(&self) -> usize {
        self.attached_ids().len()
    }

    pub fn is_attached(&self, title: &str) -> bool {
        self.state
            .borrow()
            .records
            .iter()
            .any(|r| r.attached && r.title == title)
    }

    pub fn icon_of(&self, title: &str) -> Option<MarkerIcon> {
        self.state
            .borrow()
            .records
            .iter()
            .find(|r| r.attached && r.title == title)
            .map(|r| r.icon)
    }

    pub fn selected_titles(&self) -> Vec<String> {
        self.attached_titles(|r| r.icon == MarkerIcon::Selected)
    }

    pub fn highlighted_titles(&self) -> Vec<String> {
        self.attached_titles(|r| r.highlighted)
    }

    fn attached_titles(&self, pred: impl Fn(&Record) -> bool) -> Vec<String> {
        self.state
            .borrow()
            .records
            .iter()
            .filter(|r| r.attached && pred(r))
            .map(|r| r.title.clone())
            .collect()
    }

    pub fn fitted_bounds(&self) -> Option<LatLngBounds> {
        self.state.borrow().fitted
    }

    pub fn zoom_level(&self) -> f64 {
        self.state.borrow().zoom
    }

    /// Simulate the user zooming by hand
    pub fn set_zoom_level(&self, zoom: f64) {
        self.state.borrow_mut().zoom = zoom;
    }

    pub fn last_pan(&self) -> Option<Position> {
        self.state.borrow().pans.last().copied()
    }

    /// Click the attached marker with this title; false if there is none
    pub fn click(&self, title: &str) -> bool {
        let handler = self
            .state
            .borrow()
            .records
            .iter()
            .find(|r| r.attached && r.title == title)
            .and_then(|r| r.on_click.clone());
        match handler {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    /// True if markers from two different rebuilds were never attached at once
    pub fn detached_before_attached(&self) -> bool {
        let state = self.state.borrow();
        let mut batch = 0;
        let mut batch_of = vec![0; state.records.len()];
        let mut live: HashSet<usize> = HashSet::new();
        let mut previous_was_attach = false;

        for event in &state.events {
            match *event {
                Event::Attach(id) => {
                    if !previous_was_attach {
                        batch += 1;
                    }
                    batch_of[id] = batch;
                    live.insert(id);
                    if live.iter().any(|other| batch_of[*other] != batch) {
                        return false;
                    }
                    previous_was_attach = true;
                }
                Event::Detach(id) => {
                    live.remove(&id);
                    previous_was_attach = false;
                }
            }
        }
        true
    }
}

impl MapWidget for FakeWidget {
    type Marker = FakeMarker;

    fn create_marker(&mut self, spec: MarkerSpec) -> Result<FakeMarker, MapError> {
        let mut state = self.state.borrow_mut();
        if state.fail_on.as_deref() == Some(spec.title.as_str()) {
            return Err(MapError::Marker {
                title: spec.title,
                reason: "refused by fake".into(),
            });
        }
        let id = state.records.len();
        state.records.push(Record {
            title: spec.title.clone(),
            attached: true,
            icon: spec.icon,
            highlighted: false,
            on_click: Some(spec.on_click),
        });
        state.events.push(Event::Attach(id));
        Ok(FakeMarker {
            id,
            title: spec.title,
            position: spec.position,
            state: Rc::clone(&self.state),
        })
    }

    fn fit_bounds(&mut self, bounds: &LatLngBounds) {
        let mut state = self.state.borrow_mut();
        state.fitted = Some(*bounds);
        state.zoom = state.fit_zoom;
    }

    fn zoom(&self) -> Option<f64> {
        Some(self.state.borrow().zoom)
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.state.borrow_mut().zoom = zoom;
    }

    fn pan_to(&mut self, position: Position) {
        self.state.borrow_mut().pans.push(position);
    }
}

impl MapMarker for FakeMarker {
    fn title(&self) -> &str {
        &self.title
    }

    fn position(&self) -> Position {
        self.position
    }

    fn set_icon(&self, icon: MarkerIcon) {
        self.state.borrow_mut().records[self.id].icon = icon;
    }

    fn set_highlighted(&self, on: bool) {
        self.state.borrow_mut().records[self.id].highlighted = on;
    }

    fn detach(&self) {
        let mut state = self.state.borrow_mut();
        let record = &mut state.records[self.id];
        record.attached = false;
        record.highlighted = false;
        record.on_click = None;
        state.events.push(Event::Detach(self.id));
    }
}
