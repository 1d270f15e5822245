use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::aggregate::Location;

/// Kadapa points of interest, grouped by category in display order
const KADAPA_JSON: &str = include_str!("kadapa.json");

static KADAPA: Lazy<CityCatalog> = Lazy::new(|| {
    CityCatalog::from_json(KADAPA_JSON).expect("embedded kadapa.json must be a valid catalog")
});

const DEFAULT_PLACEHOLDER: &str =
    "https://images.unsplash.com/photo-1585409677983-0f6c41ca9c3b?q=80&w=400";

/// Stock image for a category, used when a location has no photo
pub fn placeholder_image_for(category: &str) -> &'static str {
    match category {
        "tourist attraction" => {
            "https://images.unsplash.com/photo-1546412414-8035e1776c9a?q=80&w=400"
        }
        "restaurant" => "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?q=80&w=400",
        "hotel" => "https://images.unsplash.com/photo-1566073771259-6a8506099945?q=80&w=400",
        _ => DEFAULT_PLACEHOLDER,
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON is invalid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog has no categories")]
    Empty,
    #[error("category '{0}' appears more than once")]
    DuplicateCategory(String),
}

/// Ordered group of locations sharing a category tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub name: String,
    pub places: Vec<Location>,
}

/// Immutable catalog for one city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityCatalog {
    pub city: String,
    pub categories: Vec<CategoryGroup>,
}

impl CityCatalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: CityCatalog = serde_json::from_str(json)?;
        if catalog.categories.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, group) in catalog.categories.iter().enumerate() {
            if catalog.categories[..i].iter().any(|g| g.name == group.name) {
                return Err(CatalogError::DuplicateCategory(group.name.clone()));
            }
        }
        Ok(catalog)
    }

    /// The catalog shipped with the application
    pub fn embedded() -> &'static CityCatalog {
        &KADAPA
    }

    /// Category names in display order
    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().map(|g| g.name.as_str()).collect()
    }

    pub fn locations_for_category(&self, category: &str) -> &[Location] {
        self.categories
            .iter()
            .find(|g| g.name == category)
            .map(|g| g.places.as_slice())
            .unwrap_or(&[])
    }

    /// Every location, flattened in category order
    pub fn all_locations(&self) -> Vec<Location> {
        self.categories
            .iter()
            .flat_map(|g| g.places.iter().cloned())
            .collect()
    }

    pub fn find(&self, name: &str) -> Option<&Location> {
        self.categories
            .iter()
            .flat_map(|g| g.places.iter())
            .find(|l| l.name == name)
    }

    pub fn mappable_count(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|g| g.places.iter())
            .filter(|l| l.is_mappable())
            .count()
    }

    /// City label with the first letter upper-cased ("kadapa" -> "Kadapa")
    pub fn display_city(&self) -> String {
        let mut chars = self.city.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
