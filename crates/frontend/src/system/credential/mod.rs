//! Google Maps API key: storage, validation, and the key-entry panel

pub mod api;
pub mod context;
pub mod storage;
pub mod submit;
pub mod ui;

pub use context::{use_credential, CredentialContext, CredentialProvider};
pub use ui::ApiKeyPanel;
