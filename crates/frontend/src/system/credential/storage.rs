use crate::shared::storage::{BrowserStorage, KeyValueStore};

/// Persists the Maps API key under one fixed key
#[derive(Clone, Debug)]
pub struct CredentialStore<S: KeyValueStore = BrowserStorage> {
    backend: S,
    key: String,
}

impl CredentialStore<BrowserStorage> {
    /// localStorage-backed store
    pub fn browser(key: &str) -> Self {
        Self::new(BrowserStorage, key)
    }
}

impl<S: KeyValueStore> CredentialStore<S> {
    pub fn new(backend: S, key: &str) -> Self {
        Self {
            backend,
            key: key.to_string(),
        }
    }

    /// Save API key
    pub fn save(&self, credential: &str) {
        self.backend.set(&self.key, credential);
    }

    /// Get API key; blank values count as absent
    pub fn load(&self) -> Option<String> {
        self.backend
            .get(&self.key)
            .filter(|value| !value.trim().is_empty())
    }

    /// Erase API key
    pub fn clear(&self) {
        self.backend.remove(&self.key);
    }
}
