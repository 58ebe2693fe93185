//! Wind data models
//!
//! Types for the slice of the Open-Meteo API this service uses:
//! `current=wind_speed_10m,wind_gusts_10m`.

use serde::{Deserialize, Serialize};

/// Current wind conditions, in the API's native km/h
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentWind {
    /// Sustained wind speed at 10m in km/h
    pub speed_kmh: f64,
    /// Wind gusts at 10m in km/h
    pub gusts_kmh: f64,
}

/// Raw `current` block from the API.
///
/// Both wind fields are optional: a missing field signals incomplete data
/// rather than a malformed response.
#[derive(Debug, Clone, Deserialize)]
pub struct WindData {
    #[serde(default)]
    pub wind_speed_10m: Option<f64>,
    #[serde(default)]
    pub wind_gusts_10m: Option<f64>,
}

/// Raw API response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub current: Option<WindData>,
}
