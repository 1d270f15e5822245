//! Application configuration
//!
//! The configuration is compiled into the bundle as TOML and parsed once on
//! first access. Invalid embedded TOML is logged and replaced by
//! [`AppConfig::default`], which mirrors [`DEFAULT_CONFIG`].

use contracts::domain::a001_location::Position;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::shared::error::ConfigError;

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r##"
[storage]
api_key = "google_maps_api_key"

[provider]
script_url = "https://maps.googleapis.com/maps/api/js"
script_id = "google-maps-script"
libraries = "places"
geocode_url = "https://maps.googleapis.com/maps/api/geocode/json"
validation_policy = "lenient"

[map]
center = { lat = 14.4673, lng = 78.8242 }
zoom = 14.0
max_fit_zoom = 16.0
map_id = "8e0a97af9386fef"
highlight_ms = 1500
icon_default = "https://maps.google.com/mapfiles/ms/icons/red-dot.png"
icon_selected = "https://maps.google.com/mapfiles/ms/icons/blue-dot.png"
icon_size = 40

[map.controls]
map_type = false
fullscreen = false
street_view = false
zoom = true

[[map.styles]]
feature_type = "water"
element_type = "geometry"
stylers = [{ color = "#e9e9e9" }, { lightness = 17 }]

[[map.styles]]
feature_type = "landscape"
element_type = "geometry"
stylers = [{ color = "#f5f5f5" }, { lightness = 20 }]

[[map.styles]]
feature_type = "road.highway"
element_type = "geometry.fill"
stylers = [{ color = "#ffffff" }, { lightness = 17 }]

[[map.styles]]
feature_type = "poi"
element_type = "geometry"
stylers = [{ color = "#f5f5f5" }, { lightness = 21 }]

[ui]
notice_ms = 5000
card_stagger_ms = 50
"##;

static CONFIG: Lazy<AppConfig> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        log::error!("Embedded configuration is invalid, using defaults: {}", e);
        AppConfig::default()
    }
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub provider: ProviderConfig,
    pub map: MapConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// localStorage key holding the raw credential
    pub api_key: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Anything but an explicit denial is accepted
    #[default]
    Lenient,
    /// Only a confirming status is accepted; unknown statuses are inconclusive
    Strict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub script_url: String,
    pub script_id: String,
    pub libraries: String,
    pub geocode_url: String,
    #[serde(default)]
    pub validation_policy: ValidationPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub center: Position,
    pub zoom: f64,
    /// Ceiling applied once an automatic fit settles
    pub max_fit_zoom: f64,
    pub map_id: String,
    pub highlight_ms: u32,
    pub icon_default: String,
    pub icon_selected: String,
    pub icon_size: u32,
    pub controls: MapControls,
    #[serde(default)]
    pub styles: Vec<MapStyleRule>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapControls {
    pub map_type: bool,
    pub fullscreen: bool,
    pub street_view: bool,
    pub zoom: bool,
}

/// One entry of the map's display-style rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapStyleRule {
    pub feature_type: String,
    pub element_type: String,
    pub stylers: Vec<Styler>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Styler {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lightness: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    pub notice_ms: u32,
    pub card_stagger_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        let style = |feature: &str, element: &str, color: &str, lightness: i32| MapStyleRule {
            feature_type: feature.into(),
            element_type: element.into(),
            stylers: vec![
                Styler {
                    color: Some(color.into()),
                    lightness: None,
                },
                Styler {
                    color: None,
                    lightness: Some(lightness),
                },
            ],
        };

        Self {
            storage: StorageConfig {
                api_key: "google_maps_api_key".into(),
            },
            provider: ProviderConfig {
                script_url: "https://maps.googleapis.com/maps/api/js".into(),
                script_id: "google-maps-script".into(),
                libraries: "places".into(),
                geocode_url: "https://maps.googleapis.com/maps/api/geocode/json".into(),
                validation_policy: ValidationPolicy::Lenient,
            },
            map: MapConfig {
                center: Position::new(14.4673, 78.8242),
                zoom: 14.0,
                max_fit_zoom: 16.0,
                map_id: "8e0a97af9386fef".into(),
                highlight_ms: 1500,
                icon_default: "https://maps.google.com/mapfiles/ms/icons/red-dot.png".into(),
                icon_selected: "https://maps.google.com/mapfiles/ms/icons/blue-dot.png".into(),
                icon_size: 40,
                controls: MapControls {
                    map_type: false,
                    fullscreen: false,
                    street_view: false,
                    zoom: true,
                },
                styles: vec![
                    style("water", "geometry", "#e9e9e9", 17),
                    style("landscape", "geometry", "#f5f5f5", 20),
                    style("road.highway", "geometry.fill", "#ffffff", 17),
                    style("poi", "geometry", "#f5f5f5", 21),
                ],
            },
            ui: UiConfig {
                notice_ms: 5000,
                card_stagger_ms: 50,
            },
        }
    }
}

/// Parse a configuration document
pub fn parse_config(contents: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(contents)?;
    if config.map.max_fit_zoom < 0.0 || config.map.zoom < 0.0 {
        return Err(ConfigError::Invalid("zoom levels must be non-negative".into()));
    }
    if config.storage.api_key.trim().is_empty() {
        return Err(ConfigError::Invalid("storage.api_key must not be empty".into()));
    }
    Ok(config)
}

/// Load the embedded configuration
pub fn load_config() -> Result<AppConfig, ConfigError> {
    parse_config(DEFAULT_CONFIG)
}

/// Process-wide configuration
pub fn app_config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.storage.api_key, "google_maps_api_key");
        assert_eq!(config.map.max_fit_zoom, 16.0);
        assert_eq!(config.map.highlight_ms, 1500);
        assert_eq!(config.map.styles.len(), 4);
        assert_eq!(config.provider.validation_policy, ValidationPolicy::Lenient);
    }

    #[test]
    fn test_embedded_config_matches_default_impl() {
        assert_eq!(load_config().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_strict_policy_parses() {
        let doc = DEFAULT_CONFIG.replace(
            r#"validation_policy = "lenient""#,
            r#"validation_policy = "strict""#,
        );
        let config = parse_config(&doc).unwrap();
        assert_eq!(config.provider.validation_policy, ValidationPolicy::Strict);
    }

    #[test]
    fn test_rejects_empty_storage_key() {
        let doc = DEFAULT_CONFIG.replace(
            r#"api_key = "google_maps_api_key""#,
            r#"api_key = " ""#,
        );
        assert!(matches!(parse_config(&doc), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        assert!(matches!(parse_config("[map"), Err(ConfigError::Parse(_))));
    }
}
