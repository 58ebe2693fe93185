//! Embeddable map view
//!
//! Builds the OpenStreetMap embed URL (a small bounding box around the
//! point with a marker) and a shareable link at a fixed zoom level.

use domain::GeoLocation;
use serde::Serialize;

/// Half-width of the embedded bounding box, in degrees
const BBOX_MARGIN_DEGREES: f64 = 0.004;

/// Zoom level for the shareable link
const SHARE_ZOOM: u8 = 16;

/// URLs for displaying a location on OpenStreetMap
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapView {
    /// Iframe-embeddable bounding-box view with a marker
    pub embed_url: String,
    /// Standalone link at a fixed zoom level
    pub share_url: String,
}

impl MapView {
    /// Build the map URLs for a location
    #[must_use]
    pub fn for_location(location: &GeoLocation) -> Self {
        let lat = location.latitude();
        let lon = location.longitude();
        let embed_url = format!(
            "https://www.openstreetmap.org/export/embed.html?bbox={:.6},{:.6},{:.6},{:.6}&layer=mapnik&marker={lat},{lon}",
            lon - BBOX_MARGIN_DEGREES,
            lat - BBOX_MARGIN_DEGREES,
            lon + BBOX_MARGIN_DEGREES,
            lat + BBOX_MARGIN_DEGREES,
        );
        let share_url =
            format!("https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map={SHARE_ZOOM}/{lat}/{lon}");
        Self {
            embed_url,
            share_url,
        }
    }
}
