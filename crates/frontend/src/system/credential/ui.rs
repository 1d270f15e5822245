use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::validate_api_key;
use super::context::use_credential;
use super::storage::CredentialStore;
use super::submit::{prepare_key, submit_outcome, SubmitOutcome};
use crate::shared::components::ui::{Button, Input};
use crate::shared::config::app_config;
use crate::shared::notify::use_notifications;

/// Key entry form, or the "using saved key" strip once a key is active
#[component]
pub fn ApiKeyPanel() -> impl IntoView {
    let credential = use_credential();

    view! {
        <div class="key-panel">
            <Show
                when=move || credential.has_key()
                fallback=|| view! { <ApiKeyForm /> }
            >
                <SavedKeyStrip />
            </Show>
        </div>
    }
}

#[component]
fn ApiKeyForm() -> impl IntoView {
    let credential = use_credential();
    let notify = use_notifications();
    let (input, set_input) = signal(String::new());
    let (is_validating, set_is_validating) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // one validation at a time
        if is_validating.get_untracked() {
            return;
        }

        let Some(key) = prepare_key(&input.get_untracked()) else {
            let (title, description) = SubmitOutcome::EmptyKey.message();
            notify.error(title, description);
            return;
        };

        set_is_validating.set(true);

        spawn_local(async move {
            let config = app_config();
            let result = validate_api_key(&config.provider, &key).await;
            let store = CredentialStore::browser(&config.storage.api_key);
            let outcome = submit_outcome(result, &key, &store);

            let (title, description) = outcome.message();
            if outcome.is_success() {
                notify.success(title, description);
            } else {
                notify.error(title, description);
            }

            if let SubmitOutcome::Saved(key) = outcome {
                set_input.set(String::new());
                credential.publish(key);
            }
            set_is_validating.set(false);
        });
    };

    view! {
        <div class="glass key-panel__form">
            <h2 class="key-panel__title">"Enter Google Maps API Key"</h2>
            <p class="muted">
                "To use this application, you need to provide a valid Google Maps API key with Maps JavaScript API enabled."
            </p>

            <form on:submit=on_submit>
                <Input
                    value=input
                    on_input=Callback::new(move |v: String| set_input.set(v))
                    placeholder="Your Google Maps API Key"
                    hint="Your API key is stored only in your browser's local storage and is not sent to our servers."
                    disabled=Signal::derive(move || is_validating.get())
                />

                <Button
                    button_type="submit"
                    class="button--block"
                    disabled=Signal::derive(move || {
                        is_validating.get() || input.with(|v| v.trim().is_empty())
                    })
                >
                    {move || if is_validating.get() { "Validating..." } else { "Save API Key" }}
                </Button>
            </form>
        </div>
    }
}

#[component]
fn SavedKeyStrip() -> impl IntoView {
    let credential = use_credential();
    let notify = use_notifications();

    let on_reset = Callback::new(move |_: leptos::ev::MouseEvent| {
        credential.revoke();
        notify.info("API Key Removed", "You can now enter a new API key.");
    });

    view! {
        <div class="glass key-panel__saved">
            <div>
                <p class="key-panel__label">"Using saved API key"</p>
                <p class="muted small">
                    "Key ending with: " {move || credential.masked().unwrap_or_default()}
                </p>
            </div>
            <Button variant="outline" small=true on_click=on_reset>
                "Change Key"
            </Button>
        </div>
    }
}
