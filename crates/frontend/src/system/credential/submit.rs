//! What happens after the user presses "Save API Key"

use super::api::Verdict;
use super::storage::CredentialStore;
use crate::shared::error::ValidationError;
use crate::shared::storage::KeyValueStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    EmptyKey,
    /// Persisted; carries the trimmed key to publish
    Saved(String),
    Rejected,
    Inconclusive,
    Failed(String),
}

impl SubmitOutcome {
    /// Notice title and description
    pub fn message(&self) -> (&'static str, &'static str) {
        match self {
            SubmitOutcome::EmptyKey => ("Error", "Please enter an API key"),
            SubmitOutcome::Saved(_) => ("Success", "Google Maps API key saved successfully"),
            SubmitOutcome::Rejected => (
                "Invalid API Key",
                "The API key you entered is invalid. Please check and try again.",
            ),
            SubmitOutcome::Inconclusive => (
                "Could Not Confirm API Key",
                "Google Maps did not confirm this key. Please check it and try again.",
            ),
            SubmitOutcome::Failed(_) => ("Error", "Failed to validate API key. Please try again."),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Saved(_))
    }
}

/// Normalised key, or `None` if there is nothing to validate
pub fn prepare_key(input: &str) -> Option<String> {
    let key = input.trim();
    (!key.is_empty()).then(|| key.to_string())
}

/// Turn a validation result into an outcome; saves only on acceptance
pub fn submit_outcome<S: KeyValueStore>(
    result: Result<Verdict, ValidationError>,
    key: &str,
    store: &CredentialStore<S>,
) -> SubmitOutcome {
    match result {
        Ok(Verdict::Accepted) => {
            store.save(key);
            SubmitOutcome::Saved(key.to_string())
        }
        Ok(Verdict::Rejected) => SubmitOutcome::Rejected,
        Ok(Verdict::Inconclusive) => SubmitOutcome::Inconclusive,
        Err(e) => {
            log::error!("Error validating API key: {}", e);
            SubmitOutcome::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;

    fn store() -> (CredentialStore<MemoryStore>, MemoryStore) {
        let backend = MemoryStore::new();
        (CredentialStore::new(backend.clone(), "google_maps_api_key"), backend)
    }

    #[test]
    fn test_accepted_key_is_saved() {
        let (store, _) = store();
        let outcome = submit_outcome(Ok(Verdict::Accepted), "key-123", &store);
        assert_eq!(outcome, SubmitOutcome::Saved("key-123".into()));
        assert_eq!(store.load().as_deref(), Some("key-123"));
    }

    #[test]
    fn test_rejected_key_is_not_saved() {
        let (store, backend) = store();
        let outcome = submit_outcome(Ok(Verdict::Rejected), "bad", &store);
        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(outcome.message().0, "Invalid API Key");
        assert!(backend.is_empty());
    }

    #[test]
    fn test_transport_failure_is_distinct_and_not_saved() {
        let (store, backend) = store();
        let outcome = submit_outcome(
            Err(ValidationError::Transport("connection refused".into())),
            "key",
            &store,
        );
        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_ne!(outcome, SubmitOutcome::Rejected);
        assert_eq!(
            outcome.message(),
            ("Error", "Failed to validate API key. Please try again.")
        );
        assert!(backend.is_empty());
    }

    #[test]
    fn test_inconclusive_is_not_saved() {
        let (store, backend) = store();
        let outcome = submit_outcome(Ok(Verdict::Inconclusive), "key", &store);
        assert_eq!(outcome, SubmitOutcome::Inconclusive);
        assert!(!outcome.is_success());
        assert!(backend.is_empty());
    }

    #[test]
    fn test_prepare_key() {
        assert_eq!(prepare_key("  abc  ").as_deref(), Some("abc"));
        assert!(prepare_key("   ").is_none());
        assert!(prepare_key("").is_none());
    }
}
