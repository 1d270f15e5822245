use contracts::domain::a001_location::Location;
use leptos::prelude::*;

/// The single highlighted location, shared by the list and the map.
///
/// Written only from click handlers (card or marker). Comparisons go by
/// name, so two catalog entries with equal names select together.
#[derive(Clone, Copy)]
pub struct SelectionState {
    current: RwSignal<Option<Location>>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    pub fn select(&self, location: Option<Location>) {
        if let Some(loc) = &location {
            log::debug!("selected '{}'", loc.name);
        }
        self.current.set(location);
    }

    /// Tracked read
    pub fn current(&self) -> Option<Location> {
        self.current.get()
    }

    /// Tracked, name-based
    pub fn is_selected(&self, location: &Location) -> bool {
        self.current
            .with(|c| is_same_selection(c.as_ref(), location))
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn is_same_selection(current: Option<&Location>, candidate: &Location) -> bool {
    current.is_some_and(|c| c.same_place(candidate))
}

pub fn use_selection() -> SelectionState {
    use_context::<SelectionState>().expect("SelectionState not provided in context")
}
