//! Nominatim response models

use serde::Deserialize;

/// A single search result from the Nominatim API.
///
/// Coordinates arrive as decimal strings, exactly as Nominatim sends them.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    /// Latitude as a decimal string
    pub lat: String,
    /// Longitude as a decimal string
    pub lon: String,
    /// Human-readable display name of the match
    #[serde(default)]
    pub display_name: Option<String>,
}

impl SearchResult {
    /// Parse the coordinate strings into numbers.
    ///
    /// Returns `None` if either coordinate is not a valid decimal.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let lat = self.lat.parse().ok()?;
        let lon = self.lon.parse().ok()?;
        Some((lat, lon))
    }
}
