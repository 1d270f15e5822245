use contracts::domain::a001_location::CityCatalog;
use leptos::prelude::*;

use crate::domain::a001_location::map_sync::map_sequence;
use crate::domain::a001_location::ui::{LocationList, MapView};
use crate::layout::top_header::TopHeader;
use crate::shared::icons::icon;
use crate::system::credential::{use_credential, ApiKeyPanel};

/// Single-page layout: header, key panel, list column and map column
#[component]
pub fn ExplorerPage() -> impl IntoView {
    let catalog = CityCatalog::embedded();
    let credential = use_credential();

    let first_category = catalog
        .categories()
        .first()
        .map(|c| c.to_string())
        .unwrap_or_default();
    let active_category = RwSignal::new(first_category);

    let map_locations = Signal::stored(map_sequence(catalog));

    let show_panel = move || !credential.has_key() || credential.is_panel_open();

    view! {
        <div class="explorer">
            <TopHeader city=catalog.display_city() />

            <Show when=show_panel>
                <ApiKeyPanel />
            </Show>

            <div class="explorer__grid">
                <section class="explorer__list">
                    <h2 class="explorer__section-title">"Places to Explore"</h2>
                    <LocationList active_category=active_category />
                </section>

                <section class="explorer__map">
                    <Show when=move || credential.has_key() fallback=|| view! { <MapPlaceholder /> }>
                        <MapView locations=map_locations />
                    </Show>
                </section>
            </div>

            <button
                class="key-fab"
                title="Change API Key"
                on:click=move |_| credential.toggle_panel()
            >
                {icon("key")}
            </button>
        </div>
    }
}

#[component]
fn MapPlaceholder() -> impl IntoView {
    view! {
        <div class="map-placeholder glass">
            <div class="map-placeholder__icon">{icon("map")}</div>
            <h3>"Google Maps API Key Required"</h3>
            <p class="muted">
                "Please enter your Google Maps API key above to view the interactive map."
            </p>
        </div>
    }
}
