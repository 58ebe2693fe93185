//! Wind lookup pipeline
//!
//! Two sequential outbound calls: geocode the stored address, then fetch
//! current wind conditions at the resulting coordinates. Each stage has a
//! distinct error so the page can tell the user exactly which step failed,
//! and a failed stage short-circuits the rest.

use std::sync::Arc;

use domain::{Address, GeoLocation};
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::{GeocodingPort, WeatherPort, WindObservation};
use crate::services::map_view::MapView;

/// Result of a successful lookup, ready for rendering
#[derive(Debug, Clone)]
pub struct WindReport {
    /// Resolved coordinates of the address
    pub location: GeoLocation,
    /// Current wind conditions
    pub wind: WindObservation,
    /// Map URLs for the location
    pub map: MapView,
}

/// Service running the geocode-then-wind pipeline
pub struct LookupService {
    geocoding: Arc<dyn GeocodingPort>,
    weather: Arc<dyn WeatherPort>,
}

impl std::fmt::Debug for LookupService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupService").finish_non_exhaustive()
    }
}

impl LookupService {
    /// Create a new lookup service
    #[must_use]
    pub fn new(geocoding: Arc<dyn GeocodingPort>, weather: Arc<dyn WeatherPort>) -> Self {
        Self { geocoding, weather }
    }

    /// Geocode the address and fetch current wind conditions.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::Geocoding` / `AddressNotFound` from the first stage
    /// - `ApplicationError::Weather` / `IncompleteData` from the second stage
    #[instrument(skip(self), fields(address = %address))]
    pub async fn lookup(&self, address: &Address) -> Result<WindReport, ApplicationError> {
        let location = self
            .geocoding
            .geocode(address)
            .await?
            .ok_or(ApplicationError::AddressNotFound)?;

        debug!(%location, "Address resolved, fetching wind");

        let wind = self.weather.current_wind(&location).await?;

        Ok(WindReport {
            location,
            wind,
            map: MapView::for_location(&location),
        })
    }
}
