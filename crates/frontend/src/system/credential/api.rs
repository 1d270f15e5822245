use gloo_net::http::Request;
use serde::Deserialize;

use crate::shared::config::{ProviderConfig, ValidationPolicy};
use crate::shared::error::ValidationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
    /// Strict policy only: the provider neither confirmed nor denied
    Inconclusive,
}

/// The part of a geocode response we look at
#[derive(Debug, Deserialize)]
struct GeocodeProbe {
    #[serde(default)]
    status: Option<String>,
}

const REQUEST_DENIED: &str = "REQUEST_DENIED";

/// Map a geocode `status` to a verdict.
///
/// The lenient policy only rejects an explicit denial; everything else,
/// including a missing status, is accepted.
pub fn classify_status(policy: ValidationPolicy, status: Option<&str>) -> Verdict {
    match (policy, status) {
        (_, Some(REQUEST_DENIED)) => Verdict::Rejected,
        (ValidationPolicy::Lenient, _) => Verdict::Accepted,
        (ValidationPolicy::Strict, Some("OK" | "ZERO_RESULTS")) => Verdict::Accepted,
        (ValidationPolicy::Strict, _) => Verdict::Inconclusive,
    }
}

/// Diagnostic geocode URL carrying the candidate key
pub fn probe_url(provider: &ProviderConfig, api_key: &str) -> String {
    format!(
        "{}?address=test&key={}",
        provider.geocode_url,
        urlencoding::encode(api_key)
    )
}

/// Parse a probe body and classify it
pub fn classify_body(policy: ValidationPolicy, body: &str) -> Result<Verdict, ValidationError> {
    let probe: GeocodeProbe =
        serde_json::from_str(body).map_err(|e| ValidationError::Malformed(e.to_string()))?;
    Ok(classify_status(policy, probe.status.as_deref()))
}

/// One round trip to the geocoding endpoint.
///
/// Transport and parse failures come back as errors, never as acceptance.
pub async fn validate_api_key(
    provider: &ProviderConfig,
    api_key: &str,
) -> Result<Verdict, ValidationError> {
    let response = Request::get(&probe_url(provider, api_key))
        .send()
        .await
        .map_err(|e| ValidationError::Transport(e.to_string()))?;

    let body = response
        .text()
        .await
        .map_err(|e| ValidationError::Transport(e.to_string()))?;

    let verdict = classify_body(provider.validation_policy, &body)?;
    log::info!("API key validation: {:?} (HTTP {})", verdict, response.status());
    Ok(verdict)
}
