pub mod aggregate;
pub mod catalog;

pub use aggregate::{Location, Position, Rating};
pub use catalog::{placeholder_image_for, CatalogError, CategoryGroup, CityCatalog};
