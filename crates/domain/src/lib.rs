//! Domain layer for the Wind Lantern address service
//!
//! Pure types with no I/O: the monitored address, geographic coordinates,
//! wind measurements and the persisted settings record.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::SettingsRecord;
pub use errors::DomainError;
pub use value_objects::{Address, GeoLocation, WindSpeed};
