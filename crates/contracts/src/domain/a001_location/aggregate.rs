use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::catalog::placeholder_image_for;

// ============================================================================
// Position
// ============================================================================

/// Geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

// ============================================================================
// Rating
// ============================================================================

/// Rating on a 0–5 scale, or the "not rated" sentinel
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Rating {
    Stars(f64),
    #[default]
    NotRated,
}

impl Rating {
    pub fn stars(&self) -> Option<f64> {
        match self {
            Rating::Stars(value) => Some(*value),
            Rating::NotRated => None,
        }
    }

    pub fn is_rated(&self) -> bool {
        matches!(self, Rating::Stars(_))
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Stars(value) => write!(f, "{:.1}", value),
            Rating::NotRated => f.write_str("Not Rated"),
        }
    }
}

/// Fixture ratings come either as a JSON number or as a string ("N/A")
#[derive(Deserialize)]
#[serde(untagged)]
enum RatingRepr {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rating = match RatingRepr::deserialize(deserializer)? {
            RatingRepr::Number(value) => Rating::Stars(value),
            RatingRepr::Text(text) => match text.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => Rating::Stars(value),
                _ => Rating::NotRated,
            },
        };
        Ok(rating)
    }
}

impl Serialize for Rating {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Rating::Stars(value) => serializer.serialize_f64(*value),
            Rating::NotRated => serializer.serialize_str("N/A"),
        }
    }
}

// ============================================================================
// Location
// ============================================================================

/// Point of interest shown in the list and, when it has a position, on the map.
///
/// `name` is the identity key: two locations with the same name are the same
/// place as far as selection is concerned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub category: String,
    pub address: String,
    #[serde(default)]
    pub rating: Rating,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub position: Option<Position>,
}

impl Location {
    /// Name-based identity comparison
    pub fn same_place(&self, other: &Location) -> bool {
        self.name == other.name
    }

    pub fn is_mappable(&self) -> bool {
        self.position.is_some()
    }

    /// Photo if present, otherwise the stock image for the category
    pub fn image_url(&self) -> &str {
        match self.photo.as_deref() {
            Some(photo) if !photo.trim().is_empty() => photo,
            _ => placeholder_image_for(&self.category),
        }
    }
}
