use leptos::prelude::*;

/// Action button. `variant` is "primary" (default), "outline" or "ghost";
/// `small` renders the compact size used inside strips.
#[component]
pub fn Button(
    #[prop(optional, into)] variant: MaybeProp<String>,
    #[prop(optional)] small: bool,
    #[prop(optional, into)] class: MaybeProp<String>,
    /// "button" unless overridden, e.g. "submit" inside a form
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let classes = move || {
        let variant = match variant.get().as_deref() {
            Some("outline") => "button--outline",
            Some("ghost") => "button--ghost",
            _ => "button--primary",
        };
        let size = if small { " button--small" } else { "" };
        format!("button {}{} {}", variant, size, class.get().unwrap_or_default())
    };

    view! {
        <button
            type=move || button_type.get().unwrap_or_else(|| "button".into())
            class=classes
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
