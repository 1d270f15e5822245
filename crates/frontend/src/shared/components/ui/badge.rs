use leptos::prelude::*;

/// Pill-shaped label, e.g. the category tag on a location card
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Tab-style toggle with a trailing count, used for category tabs
#[component]
pub fn CountPill(
    #[prop(into)] label: String,
    count: usize,
    #[prop(into)] active: Signal<bool>,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || if active.get() { "pill pill--active" } else { "pill" }
            on:click=move |_| on_click.run(())
        >
            {label}
            <span class="pill__count">{format!("({})", count)}</span>
        </button>
    }
}
