// ============================================================================
// Google Maps JS API - raw bindings
// ============================================================================
// Only the handful of calls the map view needs. No state, no logic.
// ============================================================================

use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Map)]
    pub type JsMap;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "maps"], js_class = "Map")]
    pub fn new(element: &HtmlElement, options: &JsValue) -> Result<JsMap, JsValue>;

    #[wasm_bindgen(method, js_name = fitBounds)]
    pub fn fit_bounds(this: &JsMap, bounds: &JsLatLngBounds);

    #[wasm_bindgen(method, js_name = getZoom)]
    pub fn get_zoom(this: &JsMap) -> Option<f64>;

    #[wasm_bindgen(method, js_name = setZoom)]
    pub fn set_zoom(this: &JsMap, zoom: f64);

    #[wasm_bindgen(method, js_name = panTo)]
    pub fn pan_to(this: &JsMap, lat_lng: &JsValue);

    #[wasm_bindgen(method, js_name = addListener)]
    pub fn add_listener(this: &JsMap, event: &str, handler: &Function) -> JsMapsEventListener;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Marker)]
    pub type JsMarker;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "maps"], js_class = "Marker")]
    pub fn new(options: &JsValue) -> Result<JsMarker, JsValue>;

    /// `null` detaches the marker
    #[wasm_bindgen(method, js_name = setMap)]
    pub fn set_map(this: &JsMarker, map: &JsValue);

    #[wasm_bindgen(method, js_name = setIcon)]
    pub fn set_icon(this: &JsMarker, icon: &JsValue);

    /// `null` stops the current animation
    #[wasm_bindgen(method, js_name = setAnimation)]
    pub fn set_animation(this: &JsMarker, animation: &JsValue);

    #[wasm_bindgen(method, js_name = addListener)]
    pub fn add_listener(this: &JsMarker, event: &str, handler: &Function)
        -> JsMapsEventListener;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = LatLngBounds)]
    pub type JsLatLngBounds;

    /// Accepts `{lat, lng}` literals for both corners
    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"], js_class = "LatLngBounds")]
    pub fn new(south_west: &JsValue, north_east: &JsValue) -> JsLatLngBounds;

    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Size)]
    pub type JsSize;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"], js_class = "Size")]
    pub fn new(width: f64, height: f64) -> JsSize;

    pub type JsMapsEventListener;

    #[wasm_bindgen(method)]
    pub fn remove(this: &JsMapsEventListener);
}
