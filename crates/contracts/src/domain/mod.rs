pub mod a001_location;
