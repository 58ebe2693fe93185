//! Geocoding port adapter over the Nominatim client

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use domain::{Address, GeoLocation};
use integration_geocoding::GeocodeClient;

/// Adapts the Nominatim client to the application's geocoding port
pub struct GeocodingAdapter {
    client: Arc<dyn GeocodeClient>,
}

impl GeocodingAdapter {
    /// Create an adapter over any geocoding client
    pub fn new(client: Arc<dyn GeocodeClient>) -> Self {
        Self { client }
    }
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter").finish_non_exhaustive()
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self, address))]
    async fn geocode(&self, address: &Address) -> Result<Option<GeoLocation>, ApplicationError> {
        let result = self
            .client
            .search(address.as_str())
            .await
            .map_err(|e| ApplicationError::Geocoding(e.to_string()))?;

        let Some(result) = result else {
            debug!("No geocoding match");
            return Ok(None);
        };

        let (lat, lon) = result.coordinates().ok_or_else(|| {
            ApplicationError::Geocoding("geocoder returned malformed coordinates".to_string())
        })?;

        let location = GeoLocation::new(lat, lon).map_err(|e| {
            ApplicationError::Geocoding(format!("geocoder returned out-of-range coordinates: {e}"))
        })?;

        debug!(%location, "Geocoding match");
        Ok(Some(location))
    }
}
