use contracts::domain::a001_location::Location;
use gloo_timers::future::TimeoutFuture;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_location::map_sync::{
    EngineState, HighlightTicket, InitOutcome, MapSyncEngine,
};
use crate::domain::a001_location::selection::use_selection;
use crate::shared::config::app_config;
use crate::shared::google_maps::{load_maps_api, GoogleMap};
use crate::shared::icons::icon;
use crate::shared::notify::use_notifications;
use crate::system::credential::use_credential;

/// Interactive map of `locations`, kept in sync with the active credential
/// and the current selection.
#[component]
pub fn MapView(#[prop(into)] locations: Signal<Vec<Location>>) -> impl IntoView {
    let config = app_config();
    let credential = use_credential();
    let selection = use_selection();
    let notify = use_notifications();

    let container = NodeRef::<Div>::new();
    let status = RwSignal::new(EngineState::Uninitialized);

    // The widget holds JS handles, so the engine stays on this thread
    let engine = StoredValue::new_local(MapSyncEngine::<GoogleMap>::new(
        config.map.max_fit_zoom,
        move |location| selection.select(Some(location)),
    ));

    let sync_status = move || {
        if let Some(state) = engine.try_with_value(|e| e.state().clone()) {
            status.try_set(state);
        }
    };

    let schedule_clear = move |ticket: Option<HighlightTicket>| {
        let Some(ticket) = ticket else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(config.map.highlight_ms).await;
            engine.try_update_value(|e| e.clear_highlight(ticket));
        });
    };

    // Credential: (re)build the widget for a new key, tear it down on revoke
    Effect::new(move |_| {
        let key = credential.api_key();
        let Some(element) = container.get() else {
            return;
        };

        let Some(key) = key else {
            engine.try_update_value(|e| e.revoke());
            sync_status();
            return;
        };

        let Some(ticket) = engine.try_update_value(|e| e.begin_initialization()) else {
            return;
        };
        sync_status();

        spawn_local(async move {
            let result = match load_maps_api(&config.provider, &key).await {
                Ok(runtime) => GoogleMap::new(&runtime, &element, &config.map, move || {
                    engine.try_update_value(|e| e.camera_settled());
                }),
                Err(e) => Err(e),
            };

            match engine.try_update_value(|e| e.complete_initialization(ticket, result)) {
                Some(InitOutcome::Ready { highlight }) => schedule_clear(highlight),
                Some(InitOutcome::Failed(e)) => {
                    log::error!("Error loading Google Maps: {}", e);
                    notify.error(
                        "Error",
                        "Failed to load Google Maps. Please check your API key and try again.",
                    );
                }
                Some(InitOutcome::Stale) | None => {}
            }
            sync_status();
        });
    });

    Effect::new(move |_| {
        let locations = locations.get();
        let highlight = engine
            .try_update_value(|e| e.set_locations(locations))
            .flatten();
        schedule_clear(highlight);
    });

    Effect::new(move |_| {
        let current = selection.current();
        let highlight = engine
            .try_update_value(|e| e.apply_selection(current.as_ref()))
            .flatten();
        schedule_clear(highlight);
    });

    on_cleanup(move || {
        engine.try_update_value(|e| e.revoke());
    });

    let failure = move || match status.get() {
        EngineState::Failed(message) => Some(view! {
            <div class="map-view__error">
                {icon("alert")}
                <span>{message}</span>
            </div>
        }),
        _ => None,
    };

    view! {
        <div class="map-view glass">
            <div class="map-view__canvas" node_ref=container></div>
            <Show when=move || status.with(|s| *s == EngineState::Initializing)>
                <div class="map-view__overlay">
                    <div class="spinner"></div>
                    <p class="muted">"Loading map..."</p>
                </div>
            </Show>
            {failure}
        </div>
    }
}
