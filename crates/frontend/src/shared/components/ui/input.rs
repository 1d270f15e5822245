use leptos::prelude::*;

/// Masked text field for secrets, with a show/hide toggle and a hint line.
/// The browser is asked not to autocomplete or spellcheck the value.
#[component]
pub fn Input(
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] hint: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let (revealed, set_revealed) = signal(false);

    view! {
        <div class="form__group">
            <div class="form__secret">
                <input
                    class="form__input"
                    type=move || if revealed.get() { "text" } else { "password" }
                    autocomplete="off"
                    spellcheck="false"
                    prop:value=move || value.get()
                    placeholder=move || placeholder.get().unwrap_or_default()
                    disabled=move || disabled.get().unwrap_or(false)
                    on:input=move |ev| {
                        if let Some(handler) = on_input {
                            handler.run(event_target_value(&ev));
                        }
                    }
                />
                <button
                    type="button"
                    class="form__reveal"
                    on:click=move |_| set_revealed.update(|r| *r = !*r)
                >
                    {move || if revealed.get() { "Hide" } else { "Show" }}
                </button>
            </div>
            {move || hint.get().map(|h| view! { <p class="form__hint">{h}</p> })}
        </div>
    }
}
