use contracts::domain::a001_location::{CityCatalog, Location};

/// Every place in the catalog, flattened in category order.
///
/// The map always shows the whole city; category tabs only filter the list.
pub fn map_sequence(catalog: &CityCatalog) -> Vec<Location> {
    catalog.all_locations()
}
