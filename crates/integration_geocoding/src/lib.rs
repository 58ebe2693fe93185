//! Nominatim geocoding integration
//!
//! Client for the OpenStreetMap Nominatim search API
//! (<https://nominatim.org/release-docs/latest/api/Search/>).
//! Converts free-text addresses into coordinates; no API key required,
//! but the usage policy requires an identifying User-Agent.

pub mod client;
mod models;

pub use client::{GeocodeClient, GeocodingConfig, GeocodingError, NominatimClient};
pub use models::SearchResult;
