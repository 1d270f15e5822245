use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Failure to obtain a verdict from the provider's diagnostic endpoint.
/// Never treated as acceptance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("failed to reach the map provider: {0}")]
    Transport(String),
    #[error("unexpected response from the map provider: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("failed to load the Google Maps script: {0}")]
    ScriptLoad(String),
    #[error("Google Maps runtime is not available")]
    RuntimeMissing,
    #[error("failed to construct the map: {0}")]
    Construction(String),
    #[error("failed to create marker '{title}': {reason}")]
    Marker { title: String, reason: String },
    #[error("failed to encode map options: {0}")]
    Options(String),
}

/// Readable message from a JS exception value
pub fn js_error_message(value: &wasm_bindgen::JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    js_sys::Reflect::get(value, &wasm_bindgen::JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
