pub mod badge;
pub mod button;
pub mod input;

pub use badge::{Badge, CountPill};
pub use button::Button;
pub use input::Input;
