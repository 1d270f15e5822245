use contracts::domain::a001_location::{CityCatalog, Location};
use leptos::prelude::*;

use crate::domain::a001_location::selection::use_selection;
use crate::domain::a001_location::ui::card::LocationCard;
use crate::shared::components::ui::CountPill;
use crate::shared::config::app_config;
use crate::shared::format::title_case;

/// Category tabs plus the cards of the active category
#[component]
pub fn LocationList(active_category: RwSignal<String>) -> impl IntoView {
    let catalog = CityCatalog::embedded();
    let selection = use_selection();
    let stagger_ms = app_config().ui.card_stagger_ms;

    let on_select = Callback::new(move |location: Location| selection.select(Some(location)));

    let tabs = catalog
        .categories()
        .into_iter()
        .map(|category| {
            let name = category.to_string();
            let count = catalog.locations_for_category(category).len();
            let active = {
                let name = name.clone();
                Signal::derive(move || active_category.with(|current| *current == name))
            };
            let on_click = {
                let name = name.clone();
                Callback::new(move |_: ()| active_category.set(name.clone()))
            };

            view! {
                <CountPill label=title_case(&name) count=count active=active on_click=on_click />
            }
        })
        .collect_view();

    // Re-rendered per category so the entrance animation replays
    let cards = move || {
        let category = active_category.get();
        let locations = catalog.locations_for_category(&category);
        if locations.is_empty() {
            return view! { <p class="muted">"No places in this category yet."</p> }.into_any();
        }

        locations
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, location)| {
                let is_selected = {
                    let location = location.clone();
                    Signal::derive(move || selection.is_selected(&location))
                };
                view! {
                    <LocationCard
                        location=location
                        is_selected=is_selected
                        on_select=on_select
                        delay_ms=index as u32 * stagger_ms
                    />
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="location-list">
            <div class="location-list__tabs">{tabs}</div>
            <div class="location-list__cards">{cards}</div>
        </div>
    }
}
