//! Value objects

mod address;
mod geo_location;
mod wind_speed;

pub use address::{Address, MAX_ADDRESS_CHARS, normalize_address};
pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use wind_speed::{KMH_TO_MPH, WindSpeed};
