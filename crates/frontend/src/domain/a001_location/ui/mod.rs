pub mod card;
pub mod list;
pub mod map;

pub use card::LocationCard;
pub use list::LocationList;
pub use map::MapView;
