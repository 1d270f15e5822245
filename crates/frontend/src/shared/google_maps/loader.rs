use js_sys::{Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, HtmlScriptElement};

use crate::shared::config::ProviderConfig;
use crate::shared::error::{js_error_message, MapError};

/// Proof that `google.maps` is loaded.
///
/// Map construction requires one, so nothing reaches for the global runtime
/// before the loader has succeeded.
#[derive(Clone)]
pub struct MapsRuntime {
    namespace: JsValue,
}

impl MapsRuntime {
    /// Look for an already-loaded `window.google.maps`
    pub fn detect() -> Option<Self> {
        let window = window()?;
        let google = Reflect::get(&window, &JsValue::from_str("google")).ok()?;
        if google.is_undefined() || google.is_null() {
            return None;
        }
        let maps = Reflect::get(&google, &JsValue::from_str("maps")).ok()?;
        if maps.is_undefined() || maps.is_null() {
            return None;
        }
        Some(Self { namespace: maps })
    }

    /// `google.maps.Animation[name]`, or `null` if the constant is missing
    pub fn animation(&self, name: &str) -> JsValue {
        Reflect::get(&self.namespace, &JsValue::from_str("Animation"))
            .and_then(|animations| Reflect::get(&animations, &JsValue::from_str(name)))
            .unwrap_or(JsValue::NULL)
    }
}

/// Script URL for the Maps JS bundle
pub fn script_url(provider: &ProviderConfig, api_key: &str) -> String {
    format!(
        "{}?key={}&libraries={}",
        provider.script_url,
        urlencoding::encode(api_key),
        provider.libraries
    )
}

/// Load the Maps JS bundle for `api_key`.
///
/// Resolves immediately if the runtime is already present. Otherwise any
/// previous loader script is removed, a fresh async `<script>` is appended
/// and the future settles on its `load` / `error` event.
pub async fn load_maps_api(provider: &ProviderConfig, api_key: &str) -> Result<MapsRuntime, MapError> {
    if let Some(runtime) = MapsRuntime::detect() {
        log::debug!("google.maps already loaded");
        return Ok(runtime);
    }

    let document = window()
        .and_then(|w| w.document())
        .ok_or(MapError::RuntimeMissing)?;

    if let Some(existing) = document.get_element_by_id(&provider.script_id) {
        existing.remove();
    }

    let script: HtmlScriptElement = document
        .create_element("script")
        .map_err(|e| MapError::ScriptLoad(js_error_message(&e)))?
        .dyn_into()
        .map_err(|_| MapError::ScriptLoad("created element is not a <script>".into()))?;
    script.set_src(&script_url(provider, api_key));
    script.set_async(true);
    script.set_defer(true);
    script.set_id(&provider.script_id);

    let loaded = Promise::new(&mut |resolve, reject| {
        script.set_onload(Some(&resolve));
        script.set_onerror(Some(&reject));
    });

    let head = document
        .head()
        .ok_or_else(|| MapError::ScriptLoad("document has no <head>".into()))?;
    head.append_child(&script)
        .map_err(|e| MapError::ScriptLoad(js_error_message(&e)))?;

    log::info!("loading Google Maps script");
    JsFuture::from(loaded)
        .await
        .map_err(|_| MapError::ScriptLoad("network error while loading the script".into()))?;

    script.set_onload(None);
    script.set_onerror(None);

    MapsRuntime::detect().ok_or(MapError::RuntimeMissing)
}
