use contracts::domain::a001_location::{placeholder_image_for, Location};
use leptos::prelude::*;

use crate::shared::components::ui::Badge;
use crate::shared::components::CardAnimated;
use crate::shared::icons::icon;

/// One point of interest. Clicking selects it.
#[component]
pub fn LocationCard(
    location: Location,
    #[prop(into)] is_selected: Signal<bool>,
    on_select: Callback<Location>,
    /// Entrance animation delay for staggered lists
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    let (image_loaded, set_image_loaded) = signal(false);
    let (image_failed, set_image_failed) = signal(false);

    let image_url = location.image_url().to_string();
    let fallback_url = placeholder_image_for(&location.category);
    let src = move || {
        if image_failed.get() {
            fallback_url.to_string()
        } else {
            image_url.clone()
        }
    };

    let rating = location.rating;
    let name = location.name.clone();
    let alt = location.name.clone();
    let category = location.category.clone();
    let address = location.address.clone();

    view! {
        <CardAnimated
            delay_ms=delay_ms
            class=Signal::derive(move || {
                if is_selected.get() { "location-card location-card--selected".to_string() } else { "location-card".to_string() }
            })
        >
            <div class="location-card__body" on:click=move |_| on_select.run(location.clone())>
                <div class="location-card__media">
                    <Show when=move || !image_loaded.get() && !image_failed.get()>
                        <div class="image-skeleton"></div>
                    </Show>
                    <img
                        src=src
                        alt=alt
                        loading="lazy"
                        class=move || if image_loaded.get() { "location-card__image is-loaded" } else { "location-card__image" }
                        on:load=move |_| set_image_loaded.set(true)
                        on:error=move |_| {
                            if !image_failed.get_untracked() {
                                set_image_failed.set(true);
                            }
                        }
                    />
                    <div class="location-card__badge">
                        <Badge variant="primary">{category}</Badge>
                    </div>
                </div>

                <h3 class="location-card__name">{name}</h3>
                <div class="location-card__rating">
                    <span class="muted">{rating.to_string()}</span>
                    {rating.is_rated().then(|| icon("star"))}
                </div>
                <p class="location-card__address muted small">{address}</p>
            </div>
        </CardAnimated>
    }
}
