pub mod components;
pub mod config;
pub mod error;
pub mod format;
pub mod google_maps;
pub mod icons;
pub mod notify;
pub mod storage;
