use leptos::prelude::*;

use super::storage::CredentialStore;
use crate::shared::config::app_config;
use crate::shared::format::mask_secret;

/// The active Maps API key and whether the key panel is showing
#[derive(Clone, Copy)]
pub struct CredentialContext {
    api_key: RwSignal<Option<String>>,
    panel_open: RwSignal<bool>,
}

impl CredentialContext {
    pub fn new(initial: Option<String>) -> Self {
        let panel_open = initial.is_none();
        Self {
            api_key: RwSignal::new(initial),
            panel_open: RwSignal::new(panel_open),
        }
    }

    /// Tracked read
    pub fn api_key(&self) -> Option<String> {
        self.api_key.get()
    }

    pub fn has_key(&self) -> bool {
        self.api_key.with(|k| k.is_some())
    }

    /// "...abc123" for display; never log the full key
    pub fn masked(&self) -> Option<String> {
        self.api_key.with(|k| k.as_deref().map(|k| mask_secret(k, 6)))
    }

    /// Make a validated key the active one
    pub fn publish(&self, key: String) {
        log::info!("API key set ({})", mask_secret(&key, 6));
        self.api_key.set(Some(key));
        self.panel_open.set(false);
    }

    /// Erase the stored key and drop the active one
    pub fn revoke(&self) {
        CredentialStore::browser(&app_config().storage.api_key).clear();
        self.api_key.set(None);
        self.panel_open.set(true);
        log::info!("API key removed");
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open.get()
    }

    pub fn toggle_panel(&self) {
        self.panel_open.update(|open| *open = !*open);
    }
}

/// Restores a saved key from localStorage and provides [`CredentialContext`]
#[component]
pub fn CredentialProvider(children: Children) -> impl IntoView {
    let stored = CredentialStore::browser(&app_config().storage.api_key).load();
    if stored.is_some() {
        log::debug!("restored saved API key");
    }
    provide_context(CredentialContext::new(stored));

    children()
}

/// Hook to access the credential context
pub fn use_credential() -> CredentialContext {
    use_context::<CredentialContext>().expect("CredentialProvider not found in component tree")
}
