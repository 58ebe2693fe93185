//! Application layer for the Wind Lantern address service
//!
//! Ports (trait seams toward persistence and the outbound lookup services)
//! and the services that orchestrate them: reading/updating the monitored
//! address and running the geocode-then-wind lookup pipeline.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{AddressService, LookupService, MapView, WindReport};
