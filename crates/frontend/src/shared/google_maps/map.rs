use contracts::domain::a001_location::Position;
use contracts::shared::geo::LatLngBounds;
use js_sys::{Object, Reflect};
use serde::Serialize;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::bindings::{JsLatLngBounds, JsMap, JsMapsEventListener, JsMarker, JsSize};
use super::loader::MapsRuntime;
use crate::domain::a001_location::map_sync::{MapMarker, MapWidget, MarkerIcon, MarkerSpec};
use crate::shared::config::{MapConfig, MapStyleRule, Styler};
use crate::shared::error::{js_error_message, MapError};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions<'a> {
    center: Position,
    zoom: f64,
    map_type_control: bool,
    fullscreen_control: bool,
    street_view_control: bool,
    zoom_control: bool,
    map_id: &'a str,
    styles: Vec<StyleRule<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StyleRule<'a> {
    feature_type: &'a str,
    element_type: &'a str,
    stylers: &'a [Styler],
}

impl<'a> MapOptions<'a> {
    fn from_config(config: &'a MapConfig) -> Self {
        Self {
            center: config.center,
            zoom: config.zoom,
            map_type_control: config.controls.map_type,
            fullscreen_control: config.controls.fullscreen,
            street_view_control: config.controls.street_view,
            zoom_control: config.controls.zoom,
            map_id: &config.map_id,
            styles: config.styles.iter().map(StyleRule::from).collect(),
        }
    }
}

impl<'a> From<&'a MapStyleRule> for StyleRule<'a> {
    fn from(rule: &'a MapStyleRule) -> Self {
        Self {
            feature_type: &rule.feature_type,
            element_type: &rule.element_type,
            stylers: &rule.stylers,
        }
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, MapError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| MapError::Options(e.to_string()))
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), MapError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| MapError::Options(js_error_message(&e)))
}

struct MarkerIcons {
    default: JsValue,
    selected: JsValue,
}

impl MarkerIcons {
    fn new(config: &MapConfig) -> Result<Self, MapError> {
        let icon = |url: &str| -> Result<JsValue, MapError> {
            let size = f64::from(config.icon_size);
            let obj = Object::new();
            set(&obj, "url", &JsValue::from_str(url))?;
            set(&obj, "scaledSize", &JsValue::from(JsSize::new(size, size)))?;
            Ok(obj.into())
        };
        Ok(Self {
            default: icon(&config.icon_default)?,
            selected: icon(&config.icon_selected)?,
        })
    }

    fn get(&self, icon: MarkerIcon) -> &JsValue {
        match icon {
            MarkerIcon::Default => &self.default,
            MarkerIcon::Selected => &self.selected,
        }
    }
}

/// `google.maps.Map` bound to one container element
pub struct GoogleMap {
    inner: JsMap,
    icons: Rc<MarkerIcons>,
    drop_animation: JsValue,
    bounce_animation: JsValue,
    idle_listener: JsMapsEventListener,
    _on_idle: Closure<dyn FnMut()>,
}

impl GoogleMap {
    /// Construct the map. `on_idle` runs every time the camera comes to rest.
    pub fn new(
        runtime: &MapsRuntime,
        element: &HtmlElement,
        config: &MapConfig,
        on_idle: impl Fn() + 'static,
    ) -> Result<Self, MapError> {
        let options = to_js(&MapOptions::from_config(config))?;
        let icons = Rc::new(MarkerIcons::new(config)?);
        let inner = JsMap::new(element, &options)
            .map_err(|e| MapError::Construction(js_error_message(&e)))?;

        let on_idle = Closure::wrap(Box::new(on_idle) as Box<dyn FnMut()>);
        let idle_listener = inner.add_listener("idle", on_idle.as_ref().unchecked_ref());

        Ok(Self {
            inner,
            icons,
            drop_animation: runtime.animation("DROP"),
            bounce_animation: runtime.animation("BOUNCE"),
            idle_listener,
            _on_idle: on_idle,
        })
    }
}

impl Drop for GoogleMap {
    fn drop(&mut self) {
        self.idle_listener.remove();
    }
}

impl MapWidget for GoogleMap {
    type Marker = GoogleMarker;

    fn create_marker(&mut self, spec: MarkerSpec) -> Result<GoogleMarker, MapError> {
        let marker_error = |reason: String| MapError::Marker {
            title: spec.title.clone(),
            reason,
        };

        let options = Object::new();
        set(&options, "position", &to_js(&spec.position)?)?;
        set(&options, "map", self.inner.as_ref())?;
        set(&options, "title", &JsValue::from_str(&spec.title))?;
        set(&options, "animation", &self.drop_animation)?;
        set(&options, "icon", self.icons.get(spec.icon))?;

        let inner = JsMarker::new(&options).map_err(|e| marker_error(js_error_message(&e)))?;

        let on_click = spec.on_click;
        let on_click = Closure::wrap(Box::new(move || on_click()) as Box<dyn FnMut()>);
        let click_listener = inner.add_listener("click", on_click.as_ref().unchecked_ref());

        Ok(GoogleMarker {
            title: spec.title,
            position: spec.position,
            inner,
            icons: Rc::clone(&self.icons),
            bounce_animation: self.bounce_animation.clone(),
            click_listener,
            _on_click: on_click,
            detached: Cell::new(false),
        })
    }

    fn fit_bounds(&mut self, bounds: &LatLngBounds) {
        let (Ok(sw), Ok(ne)) = (to_js(&bounds.south_west()), to_js(&bounds.north_east())) else {
            log::warn!("could not encode bounds, camera left as is");
            return;
        };
        self.inner.fit_bounds(&JsLatLngBounds::new(&sw, &ne));
    }

    fn zoom(&self) -> Option<f64> {
        self.inner.get_zoom()
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.inner.set_zoom(zoom);
    }

    fn pan_to(&mut self, position: Position) {
        match to_js(&position) {
            Ok(lat_lng) => self.inner.pan_to(&lat_lng),
            Err(e) => log::warn!("{}", e),
        }
    }
}

/// `google.maps.Marker` plus the Rust closure behind its click listener
pub struct GoogleMarker {
    title: String,
    position: Position,
    inner: JsMarker,
    icons: Rc<MarkerIcons>,
    bounce_animation: JsValue,
    click_listener: JsMapsEventListener,
    _on_click: Closure<dyn FnMut()>,
    detached: Cell<bool>,
}

impl MapMarker for GoogleMarker {
    fn title(&self) -> &str {
        &self.title
    }

    fn position(&self) -> Position {
        self.position
    }

    fn set_icon(&self, icon: MarkerIcon) {
        self.inner.set_icon(self.icons.get(icon));
    }

    fn set_highlighted(&self, on: bool) {
        if on {
            self.inner.set_animation(&self.bounce_animation);
        } else {
            self.inner.set_animation(&JsValue::NULL);
        }
    }

    fn detach(&self) {
        if self.detached.replace(true) {
            return;
        }
        self.click_listener.remove();
        self.inner.set_map(&JsValue::NULL);
    }
}

impl Drop for GoogleMarker {
    fn drop(&mut self) {
        // the click closure is freed with us, so the listener must go too
        self.detach();
    }
}
