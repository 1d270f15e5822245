//! TopHeader component - page title for the explorer.

use leptos::prelude::*;

/// "<City> Explorer" heading with its tagline
#[component]
pub fn TopHeader(#[prop(into)] city: String) -> impl IntoView {
    let tagline = format!("Discover the best places to visit in {}", city);

    view! {
        <header class="top-header">
            <h1 class="top-header__title">{format!("{} Explorer", city)}</h1>
            <p class="top-header__tagline muted">{tagline}</p>
        </header>
    }
}
